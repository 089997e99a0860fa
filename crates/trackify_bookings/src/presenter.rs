// --- File: crates/trackify_bookings/src/presenter.rs ---
//! Booking presentation.
//!
//! Maps the latest fetch outcome into render-ready rows and carries the one
//! action the view exposes: the tracking hand-off. Rendering itself (terminal
//! table, colors) lives in the application binary; everything here is a pure
//! function of the outcome.

use serde_json::Value;
use tracing::info;

use trackify_common::{Booking, BookingTimestamp, BookingViewError, UserMessage};
use trackify_store::{keys, KeyValueStore, StoreError};

/// How a status value should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    /// The literal `"pending"` status.
    Alert,
    /// Every other status value.
    Normal,
}

/// The track column of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackCell {
    /// Pending bookings offer no action, only a disabled-looking indicator.
    Unavailable,
    /// Actionable control carrying the id to hand off on invocation.
    Track { booking_id: String },
}

/// One render-ready table row.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    /// 1-based position in the list, first column of the table.
    pub index: usize,
    pub name: String,
    pub phone: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub vehicle_type: String,
    /// Cost formatted to two decimals with the fixed currency label.
    pub cost: String,
    /// Booking date in locale-style display form.
    pub booked_at: String,
    pub status: String,
    pub status_style: StatusStyle,
    pub track: TrackCell,
}

/// The rendered state of the view after one activation.
///
/// An error message and the (then empty) rows area are not mutually
/// exclusive; the renderer shows the message above the list area.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub error: Option<String>,
    pub rows: Vec<BookingRow>,
}

impl Presentation {
    /// Whether the renderer should show the "no bookings" notice.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the presentation for the latest fetch outcome.
pub fn present(outcome: &Result<Vec<Booking>, BookingViewError>) -> Presentation {
    match outcome {
        Ok(bookings) => Presentation {
            error: None,
            rows: bookings
                .iter()
                .enumerate()
                .map(|(position, booking)| present_row(position + 1, booking))
                .collect(),
        },
        Err(err) => Presentation {
            error: Some(err.user_message().to_string()),
            rows: Vec::new(),
        },
    }
}

fn present_row(index: usize, booking: &Booking) -> BookingRow {
    let (status_style, track) = if booking.is_pending() {
        (StatusStyle::Alert, TrackCell::Unavailable)
    } else {
        (
            StatusStyle::Normal,
            TrackCell::Track {
                booking_id: booking.id.clone(),
            },
        )
    };

    BookingRow {
        index,
        name: booking.name.clone(),
        phone: booking.phone.clone(),
        pickup_location: booking.pickup_location.clone(),
        dropoff_location: booking.dropoff_location.clone(),
        vehicle_type: booking.vehicle_type.clone(),
        cost: format_cost(booking.estimated_cost),
        booked_at: format_booking_date(&booking.booking_date),
        status: booking.status.clone(),
        status_style,
        track,
    }
}

/// Format a cost to exactly two decimal places with the fixed currency label.
pub fn format_cost(cost: f64) -> String {
    format!("{:.2} INR", cost)
}

/// Format a booking date for display. Unparseable text passes through
/// unchanged; an absent value renders as a dash.
pub fn format_booking_date(timestamp: &BookingTimestamp) -> String {
    if let Some(instant) = timestamp.to_datetime() {
        return instant.format("%d/%m/%Y, %H:%M:%S").to_string();
    }
    match timestamp {
        BookingTimestamp::Text(raw) if !raw.is_empty() => raw.clone(),
        _ => "-".to_string(),
    }
}

/// Navigation target of the tracking hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The external driver-tracking view. It reads `bookingId` on entry.
    Tracking,
}

/// A trait for requesting navigation to another view.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// The tracking hand-off: persist the selected booking id, then request
/// navigation. Fire-and-forget from the view's perspective; the tracking view
/// picks up `bookingId` on its own.
pub fn track_driver(
    store: &dyn KeyValueStore,
    navigator: &dyn Navigator,
    booking_id: &str,
) -> Result<(), StoreError> {
    store.set(keys::BOOKING_ID, Value::String(booking_id.to_string()))?;
    info!("tracking hand-off for booking {booking_id}");
    navigator.navigate(Route::Tracking);
    Ok(())
}
