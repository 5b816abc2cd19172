use super::{modify_state, FocusFrame, INPUT_WIDTH};
use crate::state::FruitBasket;
use iocraft::prelude::*;

const NOTE: &str = "State can hold composite values too. Updating it means building the new \
                    value and storing it in place of the old one.";

/// The props which can be passed to the [`ListBuilder`] component.
#[derive(Default, Props)]
pub struct ListBuilderProps {
    /// True if the fruit input has focus.
    pub input_has_focus: bool,

    /// True if the "Add Fruit" button has focus.
    pub button_has_focus: bool,
}

/// A text input and a button that appends whatever is typed to a list shown underneath.
#[component]
pub fn ListBuilder(mut hooks: Hooks, props: &ListBuilderProps) -> impl Into<AnyElement<'static>> {
    let mut basket = hooks.use_state(FruitBasket::default);
    let (pending, fruits) = {
        let basket = basket.read();
        (basket.pending().to_string(), basket.fruits().to_vec())
    };

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: NOTE, color: Color::Grey)
            View {
                FocusFrame(has_focus: props.input_has_focus) {
                    View(background_color: Color::DarkGrey, width: INPUT_WIDTH) {
                        TextInput(
                            has_focus: props.input_has_focus,
                            value: pending,
                            on_change: move |text: String| {
                                modify_state(&mut basket, |basket| basket.set_pending(text))
                            },
                        )
                    }
                }
                Button(
                    handler: move |_| modify_state(&mut basket, FruitBasket::add),
                    has_focus: props.button_has_focus,
                ) {
                    FocusFrame(has_focus: props.button_has_focus) {
                        Text(content: "Add Fruit", weight: Weight::Bold)
                    }
                }
            }
            #(fruits.into_iter().map(|fruit| element! {
                Text(content: format!("• {}", fruit))
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{paced, press, type_text, ExitOnEsc};
    use futures::stream::StreamExt;
    use macro_rules_attribute::apply;
    use smol_macros::test;

    #[test]
    fn test_list_builder_initial() {
        let actual = element!(ListBuilder).to_string();
        assert!(actual.contains("Add Fruit"));
        assert!(!actual.contains('•'));
    }

    // Tab toggles focus between the input and the button.
    #[component]
    fn Harness(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
        let mut on_button = hooks.use_state(|| false);

        hooks.use_terminal_events(move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code: KeyCode::Tab,
                kind,
                ..
            }) if kind != KeyEventKind::Release => on_button.set(!on_button.get()),
            _ => {}
        });

        element! {
            ExitOnEsc {
                ListBuilder(
                    input_has_focus: !on_button.get(),
                    button_has_focus: on_button.get(),
                )
            }
        }
    }

    #[apply(test!)]
    async fn test_fruits_append_in_order() {
        let mut events = type_text("apple");
        events.extend([press(KeyCode::Tab), press(KeyCode::Enter), press(KeyCode::Tab)]);
        events.extend((0..5).map(|_| press(KeyCode::Backspace)));
        events.extend(type_text("banana"));
        events.extend([
            press(KeyCode::Tab),
            press(KeyCode::Enter),
            press(KeyCode::Esc),
        ]);

        let canvases: Vec<_> = element!(Harness)
            .mock_terminal_render_loop(MockTerminalConfig::with_events(paced(events)))
            .map(|c| c.to_string())
            .collect()
            .await;
        let last = canvases.last().expect("at least one frame");
        let fruits: Vec<_> = last
            .lines()
            .filter_map(|line| line.trim().strip_prefix("• "))
            .collect();
        assert_eq!(fruits, ["apple", "banana"]);

        // The input keeps its text after the add.
        assert!(last.lines().any(|line| line.contains("│ banana")));
    }
}
