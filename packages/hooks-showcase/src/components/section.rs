use iocraft::prelude::*;

/// The props which can be passed to the [`Section`] component.
#[derive(Default, Props)]
pub struct SectionProps<'a> {
    /// The widgets in the section.
    pub children: Vec<AnyElement<'a>>,

    /// The heading.
    pub title: String,

    /// An optional explanation shown under the heading.
    pub note: Option<String>,
}

/// A heading, an optional note, and an indented column of widgets.
#[component]
pub fn Section<'a>(props: &mut SectionProps<'a>) -> impl Into<AnyElement<'a>> {
    let note = props.note.clone();
    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: props.title.clone(), weight: Weight::Bold, color: Color::Cyan)
            #(note.map(|note| element! {
                Text(content: note, color: Color::Grey)
            }))
            View(flex_direction: FlexDirection::Column, padding_left: 2) {
                #(&mut props.children)
            }
        }
    }
}
