use iocraft::prelude::*;

/// Width of the text inputs on the page, in columns.
pub const INPUT_WIDTH: u32 = 30;

/// The props which can be passed to the [`FocusFrame`] component.
#[derive(Default, Props)]
pub struct FocusFrameProps<'a> {
    /// The framed control.
    pub children: Vec<AnyElement<'a>>,

    /// True if the framed control has keyboard focus.
    pub has_focus: bool,
}

/// Draws a border around a focusable control, highlighted while it has focus.
#[component]
pub fn FocusFrame<'a>(props: &mut FocusFrameProps<'a>) -> impl Into<AnyElement<'a>> {
    element! {
        View(
            border_style: BorderStyle::Round,
            border_color: if props.has_focus { Color::Blue } else { Color::DarkGrey },
            padding_left: 1,
            padding_right: 1,
        ) {
            #(&mut props.children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_frame() {
        let actual = element! {
            FocusFrame(has_focus: true) {
                Text(content: "hi")
            }
        }
        .to_string();
        let lines: Vec<_> = actual.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[1].contains("│ hi"));
        assert!(lines[2].starts_with('╰'));
    }
}
