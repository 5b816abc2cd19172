use super::modify_state;
use crate::{state::LoadState, Fetch, SimulatedFetch};
use iocraft::prelude::*;
use std::sync::Arc;

/// The props which can be passed to the [`AsyncLoader`] component.
#[derive(Default, Props)]
pub struct AsyncLoaderProps {
    /// The data source. Defaults to a [`SimulatedFetch`] with its default delay and payload.
    pub fetch: Option<Arc<dyn Fetch>>,
}

/// Fetches its content once, when it mounts, and shows a loading indicator until the fetch
/// completes.
///
/// The fetch is bound to the component's lifetime: if the component is dropped first, so is the
/// fetch.
#[component]
pub fn AsyncLoader(mut hooks: Hooks, props: &AsyncLoaderProps) -> impl Into<AnyElement<'static>> {
    let mut state = hooks.use_state(LoadState::default);

    let load = hooks.use_async_handler(move |fetch: Arc<dyn Fetch>| {
        let mut state = state;
        async move {
            let outcome = fetch.fetch().await;
            modify_state(&mut state, |state| {
                state.resolve(outcome);
            });
        }
    });

    // Mount: the only time the state is idle. Switching to loading here means the very first
    // frame already shows the indicator.
    let is_idle = state.read().is_idle();
    if is_idle {
        let fetch = props
            .fetch
            .clone()
            .unwrap_or_else(|| Arc::new(SimulatedFetch::default()));
        modify_state(&mut state, |state| {
            state.begin();
        });
        load(fetch);
    }

    let (content, color) = {
        let state = state.read();
        let color = match &*state {
            LoadState::Failed(_) => Color::Red,
            LoadState::Loaded(_) => Color::Green,
            _ => Color::Yellow,
        };
        (state.display().into_owned(), color)
    };

    element! {
        View(margin_top: 1) {
            Text(content: content, color: color)
        }
    }
}
