use super::{FocusFrame, INPUT_WIDTH};
use iocraft::prelude::*;

/// The props which can be passed to the [`RenderCounter`] component.
#[derive(Default, Props)]
pub struct RenderCounterProps {
    /// True if the input has focus.
    pub has_focus: bool,
}

/// A text input that reports how many times the widget has rendered.
///
/// Typing changes the input's state, which causes a render. The number of renders is kept in a
/// [`Ref`], which is written on every render without ever scheduling another one.
#[component]
pub fn RenderCounter(
    mut hooks: Hooks,
    props: &RenderCounterProps,
) -> impl Into<AnyElement<'static>> {
    let mut text = hooks.use_state(String::new);
    let mut renders = hooks.use_ref(|| 0usize);
    *renders.write() += 1;
    let renders = renders.get();

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            FocusFrame(has_focus: props.has_focus) {
                View(background_color: Color::DarkGrey, width: INPUT_WIDTH) {
                    TextInput(
                        has_focus: props.has_focus,
                        value: text.to_string(),
                        on_change: move |value| text.set(value),
                    )
                }
            }
            Text(content: format!("This widget has rendered {} times", renders))
        }
    }
}
