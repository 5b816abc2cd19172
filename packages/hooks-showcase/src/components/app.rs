use super::{AsyncLoader, AutoFocus, Counter, FilteredSearch, ListBuilder, RenderCounter, Section};
use crate::{Fetch, FocusRing, FocusSlot};
use iocraft::prelude::*;
use std::sync::Arc;

const STATE_NOTE: &str = "State survives between renders, and changing it renders the widget \
                          again.";

const EFFECT_NOTE: &str = "Side effects run after a render: once when the widget mounts, or \
                           again whenever the values they depend on change. The fake API call \
                           below is started on mount and takes a few seconds.";

const REF_NOTE: &str = "Refs hold values across renders without causing renders when they \
                        change.";

const HELP: &str = "Tab/Shift+Tab: move focus · Enter/Space: press button · Esc: quit";

/// The props which can be passed to the [`App`] component.
#[derive(Default, Props)]
pub struct AppProps {
    /// The data source for the async loader widget.
    pub fetch: Option<Arc<dyn Fetch>>,
}

/// The showcase page: every widget, grouped by the hook it demonstrates.
///
/// The page owns keyboard focus and nothing else. Each widget is told whether its controls are
/// focused, and keeps the rest of its state to itself.
#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let mut focus = hooks.use_state(FocusRing::default);
    let mut should_exit = hooks.use_state(|| false);

    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) if kind != KeyEventKind::Release => match code {
            KeyCode::Tab | KeyCode::Down => focus.set(focus.get().next()),
            KeyCode::BackTab | KeyCode::Up => focus.set(focus.get().prev()),
            KeyCode::Esc => should_exit.set(true),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                should_exit.set(true)
            }
            _ => {}
        },
        _ => {}
    });

    if should_exit.get() {
        tracing::info!("exiting");
        system.exit();
    }

    let ring = focus.get();

    element! {
        View(flex_direction: FlexDirection::Column, padding: 1) {
            Text(content: "The 3 Most Important Hooks", weight: Weight::Bold, color: Color::White)
            Text(content: HELP, color: Color::DarkGrey)
            Section(title: "1. use_state", note: STATE_NOTE.to_string()) {
                Counter(has_focus: ring.is_focused(FocusSlot::ScreamButton))
                ListBuilder(
                    input_has_focus: ring.is_focused(FocusSlot::FruitInput),
                    button_has_focus: ring.is_focused(FocusSlot::AddFruitButton),
                )
            }
            Section(title: "2. use_effect", note: EFFECT_NOTE.to_string()) {
                AsyncLoader(fetch: props.fetch.clone())
                FilteredSearch(has_focus: ring.is_focused(FocusSlot::SearchInput))
            }
            Section(title: "3. use_ref", note: REF_NOTE.to_string()) {
                RenderCounter(has_focus: ring.is_focused(FocusSlot::RenderCounterInput))
                AutoFocus(focus: focus)
            }
        }
    }
}
