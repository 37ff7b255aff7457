//! One-shot seat listing (`roost seats`)
//!
//! Prints the current seat snapshot as a table, or as JSON for scripting.

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::{Seat, Zone, get_or_init_client};
use crate::error::Result;

#[derive(Tabled)]
struct SeatRow {
    #[tabled(rename = "Seat")]
    id: u32,
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Booked By")]
    booked_by: String,
}

impl SeatRow {
    fn from_seat(seat: &Seat) -> Self {
        let occupant = seat
            .user_details
            .as_ref()
            .and_then(|d| d.full_name.clone())
            .or_else(|| seat.booked_by.clone())
            .unwrap_or_else(|| "-".to_string());

        Self {
            id: seat.id,
            zone: Zone::for_seat(seat.id).to_string(),
            status: seat.status.to_string(),
            booked_by: occupant,
        }
    }
}

/// List all seats and their occupancy
pub async fn cmd_seats(json_output: bool) -> Result<()> {
    let client = get_or_init_client()?;
    let seats = client.list_seats().await?;

    if json_output {
        let rows: Vec<_> = seats
            .iter()
            .map(|seat| {
                json!({
                    "id": seat.id,
                    "zone": Zone::for_seat(seat.id).to_string(),
                    "status": seat.status.to_string(),
                    "booked_by": seat.booked_by,
                    "booking_time": seat.booking_time,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let available = seats.iter().filter(|s| s.is_available()).count();

    let rows: Vec<SeatRow> = seats.iter().map(SeatRow::from_seat).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    println!("{table}");
    println!(
        "\n{} of {} seats available",
        available.to_string().green().bold(),
        seats.len()
    );

    Ok(())
}
