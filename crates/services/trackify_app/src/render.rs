use owo_colors::OwoColorize;

use trackify_bookings::presenter::{Presentation, StatusStyle, TrackCell};

const HEADERS: [&str; 10] = [
    "#",
    "Name",
    "Phone",
    "Pickup Location",
    "Drop-off Location",
    "Vehicle Type",
    "Cost",
    "Created At",
    "Status",
    "Track",
];

/// Print one activation's presentation as a table.
///
/// The error line (if any) goes above the list area; an empty list renders
/// the "no bookings" notice. Widths are computed from the data so the columns
/// stay aligned; coloring is applied after padding so ANSI codes do not skew
/// the layout.
pub fn print_presentation(presentation: &Presentation) {
    println!("{}", "Your Bookings".bold());
    println!();

    if let Some(message) = &presentation.error {
        println!("{}", message.red());
        println!();
    }

    if presentation.is_empty() {
        println!("No bookings found.");
        return;
    }

    let cells: Vec<[String; 10]> = presentation
        .rows
        .iter()
        .map(|row| {
            [
                row.index.to_string(),
                row.name.clone(),
                row.phone.clone(),
                row.pickup_location.clone(),
                row.dropoff_location.clone(),
                row.vehicle_type.clone(),
                row.cost.clone(),
                row.booked_at.clone(),
                row.status.clone(),
                track_label(&row.track),
            ]
        })
        .collect();

    let widths = column_widths(&cells);

    let header_line: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter().copied())
        .map(|(header, width)| format!("{:<width$}", header))
        .collect();
    println!("{}", header_line.join("  ").bold());

    for (row, line) in presentation.rows.iter().zip(cells.iter()) {
        let padded: Vec<String> = line
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{:<width$}", cell))
            .collect();

        let mut out = padded[..8].join("  ");
        out.push_str("  ");
        match row.status_style {
            StatusStyle::Alert => out.push_str(&padded[8].red().to_string()),
            StatusStyle::Normal => out.push_str(&padded[8].green().to_string()),
        }
        out.push_str("  ");
        match row.track {
            TrackCell::Unavailable => out.push_str(&padded[9].yellow().to_string()),
            TrackCell::Track { .. } => out.push_str(&padded[9]),
        }
        println!("{}", out);
    }
}

fn track_label(track: &TrackCell) -> String {
    match track {
        TrackCell::Unavailable => "Pending".to_string(),
        TrackCell::Track { .. } => "trackify track <#>".to_string(),
    }
}

/// Widths in characters, matching how the formatter pads. Byte lengths would
/// skew columns holding non-ASCII names or locations.
fn column_widths(cells: &[[String; 10]]) -> [usize; 10] {
    let mut widths: [usize; 10] = HEADERS.map(|header| header.chars().count());
    for row in cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}
