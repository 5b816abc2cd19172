use super::{FocusFrame, INPUT_WIDTH};
use crate::{FocusRing, FocusSlot};
use iocraft::prelude::*;

/// The props which can be passed to the [`AutoFocus`] component.
#[derive(Default, Props)]
pub struct AutoFocusProps {
    /// The page's focus ring. Without one the input never has focus.
    pub focus: Option<State<FocusRing>>,
}

/// A text input that takes keyboard focus once, when it mounts.
#[component]
pub fn AutoFocus(mut hooks: Hooks, props: &AutoFocusProps) -> impl Into<AnyElement<'static>> {
    let mut text = hooks.use_state(String::new);
    let focus = props.focus;

    hooks.use_effect(
        move || {
            if let Some(mut focus) = focus {
                let ring = focus.get();
                focus.set(ring.focus(FocusSlot::AutoFocusInput));
                tracing::debug!("auto-focus input claimed focus on mount");
            }
        },
        (),
    );

    let has_focus = focus
        .map(|focus| focus.get().is_focused(FocusSlot::AutoFocusInput))
        .unwrap_or(false);

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: "This input focuses itself when it first appears:", color: Color::Grey)
            FocusFrame(has_focus: has_focus) {
                View(background_color: Color::DarkGrey, width: INPUT_WIDTH) {
                    TextInput(
                        has_focus: has_focus,
                        value: text.to_string(),
                        on_change: move |value| text.set(value),
                    )
                }
            }
        }
    }
}
