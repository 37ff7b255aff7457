//! Colleague search input
//!
//! A borderless inline input for finding a colleague's seat by name or
//! identifier.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the InlineSearchBox component
#[derive(Default, Props)]
pub struct InlineSearchBoxProps {
    /// State for the search query value
    pub value: Option<State<String>>,
    /// Whether the search box has focus
    pub has_focus: bool,
}

/// Inline search input without borders
#[component]
pub fn InlineSearchBox(props: &InlineSearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;

    let Some(mut value) = props.value else {
        return element! {
            View(flex_direction: FlexDirection::Row, height: 1) {
                Text(content: "search unavailable", color: theme.text_dimmed)
            }
        };
    };

    let hint = if !has_focus && value.read().is_empty() {
        Some("find a colleague".to_string())
    } else {
        None
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(
                    content: "/",
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }

            View(flex_grow: 1.0) {
                #(Some(match hint {
                    Some(hint) => element! {
                        Text(content: hint, color: theme.text_dimmed)
                    }
                    .into_any(),
                    None => element! {
                        TextInput(
                            value: value.to_string(),
                            has_focus: has_focus,
                            on_change: move |new_value| value.set(new_value),
                            color: theme.text,
                        )
                    }
                    .into_any(),
                }))
            }
        }
    }
}
