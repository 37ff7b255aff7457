//! Booking summary side panel
//!
//! Shows the selected seat's details and the context-sensitive primary
//! action (book when available, release when occupied).

use iocraft::prelude::*;

use crate::tui::board::model::{PrimaryAction, SummaryViewModel};
use crate::tui::theme::theme;

/// Props for the SummaryPanel component
#[derive(Default, Props)]
pub struct SummaryPanelProps {
    /// Summary of the selected seat, if any
    pub summary: Option<SummaryViewModel>,
}

/// Booking summary panel on the right side of the board
#[component]
pub fn SummaryPanel(props: &SummaryPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 34,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding: 1,
            row_gap: 1,
        ) {
            Text(content: "Booking Summary", color: theme.text, weight: Weight::Bold)

            #(Some(match &props.summary {
                Some(summary) => render_summary(summary),
                None => element! {
                    Text(
                        content: "Select a seat to see details",
                        color: theme.text_dimmed,
                    )
                }
                .into_any(),
            }))
        }
    }
}

fn render_summary(summary: &SummaryViewModel) -> AnyElement<'static> {
    let theme = theme();

    let action_color = match summary.action {
        PrimaryAction::Book => theme.highlight,
        PrimaryAction::Release => theme.countdown,
    };

    element! {
        View(flex_direction: FlexDirection::Column, row_gap: 1) {
            View(flex_direction: FlexDirection::Column) {
                Text(
                    content: format!("Seat #{}", summary.seat_id),
                    color: theme.highlight,
                    weight: Weight::Bold,
                )
                Text(
                    content: format!("Status: {}", summary.status),
                    color: theme.text,
                )
                Text(
                    content: format!("Price: ${}", summary.price),
                    color: theme.text,
                )
            }

            View(flex_direction: FlexDirection::Column) {
                Text(
                    content: format!("Date: {}", summary.date_label),
                    color: theme.text,
                )
                Text(
                    content: format!("Time: {}", summary.time_label),
                    color: theme.text,
                )
            }

            #(summary.occupant.as_ref().map(|occupant| {
                element! {
                    Text(
                        content: format!("Booked by: {occupant}"),
                        color: theme.text_dimmed,
                    )
                }
            }))

            #(summary.countdown.as_ref().map(|countdown| {
                element! {
                    Text(
                        content: format!("Hold: {countdown}"),
                        color: theme.countdown,
                    )
                }
            }))

            Text(
                content: format!("[c] {}", summary.action.label()),
                color: action_color,
                weight: Weight::Bold,
            )
        }
    }
    .into_any()
}
