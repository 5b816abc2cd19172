use super::{modify_state, FocusFrame, INPUT_WIDTH};
use crate::state::NameSearch;
use iocraft::prelude::*;

const NOTE: &str = "Derived state is recomputed whenever the state it depends on changes. Here \
                    every keystroke in the search box refilters the list of names.";

/// The props which can be passed to the [`FilteredSearch`] component.
#[derive(Default, Props)]
pub struct FilteredSearchProps {
    /// True if the search input has focus.
    pub has_focus: bool,
}

/// A search box that lists the names matching its text.
#[component]
pub fn FilteredSearch(
    mut hooks: Hooks,
    props: &FilteredSearchProps,
) -> impl Into<AnyElement<'static>> {
    let mut search = hooks.use_state(NameSearch::default);
    let (search_text, recommendations) = {
        let search = search.read();
        (
            search.search_text().to_string(),
            search.recommendations().to_vec(),
        )
    };

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: NOTE, color: Color::Grey)
            View(align_items: AlignItems::Center) {
                FocusFrame(has_focus: props.has_focus) {
                    View(background_color: Color::DarkGrey, width: INPUT_WIDTH) {
                        TextInput(
                            has_focus: props.has_focus,
                            value: search_text,
                            on_change: move |text: String| {
                                modify_state(&mut search, |search| search.set_search_text(text))
                            },
                        )
                    }
                }
                View(margin_left: 1) {
                    Text(content: "Recommendations:")
                }
            }
            #(recommendations.into_iter().map(|name| element! {
                Text(content: format!("• {}", name))
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

    fn listed(canvas: &str) -> Vec<&str> {
        canvas
            .lines()
            .filter_map(|line| line.trim().strip_prefix("• "))
            .collect()
    }

    async fn run(events: Vec<TerminalEvent>) -> Vec<String> {
        element! {
            ExitOnEsc {
                FilteredSearch(has_focus: true)
            }
        }
        .mock_terminal_render_loop(MockTerminalConfig::with_events(paced(events)))
        .map(|c| c.to_string())
        .collect()
        .await
    }

    #[test]
    fn test_filtered_search_initial() {
        let actual = element!(FilteredSearch).to_string();
        assert!(actual
            .lines()
            .any(|line| line.contains("│ Recommendations:")));
        assert!(listed(&actual).is_empty());
    }

    #[apply(test!)]
    async fn test_search_is_case_insensitive() {
        let mut events = type_text("AL");
        events.push(press(KeyCode::Esc));
        let canvases = run(events).await;
        let last = canvases.last().expect("at least one frame");
        assert_eq!(listed(last), ["Alice"]);
    }

    #[apply(test!)]
    async fn test_search_keeps_list_order() {
        let mut events = type_text("e");
        events.push(press(KeyCode::Esc));
        let canvases = run(events).await;
        let last = canvases.last().expect("at least one frame");
        assert_eq!(listed(last), ["Alice", "Charlie", "Emily"]);
    }

    #[apply(test!)]
    async fn test_cleared_search_lists_nothing() {
        let mut events = type_text("a");
        events.push(press(KeyCode::Backspace));
        events.push(press(KeyCode::Esc));
        let canvases = run(events).await;
        assert!(canvases.iter().any(|c| listed(c) == ["Alice", "Charlie", "David"]));
        let last = canvases.last().expect("at least one frame");
        assert!(listed(last).is_empty());
    }
}
