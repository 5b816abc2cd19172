use super::{modify_state, FocusFrame};
use crate::state::Scream;
use iocraft::prelude::*;

/// The props which can be passed to the [`Counter`] component.
#[derive(Default, Props)]
pub struct CounterProps {
    /// True if the "Scream!" button has focus.
    pub has_focus: bool,
}

/// A button that makes the scream below it one character longer each time it is pressed.
#[component]
pub fn Counter(mut hooks: Hooks, props: &CounterProps) -> impl Into<AnyElement<'static>> {
    let mut scream = hooks.use_state(Scream::default);

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Button(
                handler: move |_| modify_state(&mut scream, Scream::scream_more),
                has_focus: props.has_focus,
            ) {
                FocusFrame(has_focus: props.has_focus) {
                    Text(content: "Scream!", weight: Weight::Bold)
                }
            }
            Text(content: scream.to_string())
        }
    }
}
