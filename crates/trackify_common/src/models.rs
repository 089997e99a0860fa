// --- File: crates/trackify_common/src/models.rs ---

// This file contains data structures that are shared across the application:
// the booking record as returned by the remote API and the flexible timestamp
// it carries.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Literal status value that marks a booking as not yet assigned to a driver.
pub const PENDING_STATUS: &str = "pending";

/// One transportation booking as returned by the remote service.
///
/// Elements of the response array are trusted to match this shape; there is
/// no per-field validation. Every field defaults so that a sparse object
/// still deserializes instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Opaque unique identifier, used as render key and tracking payload.
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(rename = "pickupLocation", default)]
    pub pickup_location: String,

    #[serde(rename = "dropoffLocation", default)]
    pub dropoff_location: String,

    #[serde(rename = "vehicleType", default)]
    pub vehicle_type: String,

    /// Estimated cost, displayed rounded to 2 decimal places in INR.
    #[serde(rename = "estimatedCost", default)]
    pub estimated_cost: f64,

    /// When the booking was created. String timestamp or epoch milliseconds.
    #[serde(rename = "bookingDate", default)]
    pub booking_date: BookingTimestamp,

    #[serde(default)]
    pub status: String,
}

impl Booking {
    /// Lenient decode of one element of the response array.
    ///
    /// Elements are trusted, never validated: a field that is absent or of
    /// the wrong type falls back to its default instead of rejecting the
    /// response. Numeric costs arriving as strings are coerced.
    pub fn from_value(value: &Value) -> Booking {
        Booking {
            id: string_field(value, "_id"),
            name: string_field(value, "name"),
            phone: string_field(value, "phone"),
            pickup_location: string_field(value, "pickupLocation"),
            dropoff_location: string_field(value, "dropoffLocation"),
            vehicle_type: string_field(value, "vehicleType"),
            estimated_cost: cost_field(value),
            booking_date: date_field(value),
            status: string_field(value, "status"),
        }
    }

    /// Whether this booking is still pending. Pending bookings are styled as
    /// alerts and offer no tracking action.
    pub fn is_pending(&self) -> bool {
        self.status == PENDING_STATUS
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn cost_field(value: &Value) -> f64 {
    match value.get("estimatedCost") {
        Some(Value::Number(number)) => number.as_f64().unwrap_or_default(),
        Some(Value::String(raw)) => raw.trim().parse().unwrap_or_default(),
        _ => 0.0,
    }
}

fn date_field(value: &Value) -> BookingTimestamp {
    match value.get("bookingDate") {
        Some(Value::String(raw)) => BookingTimestamp::Text(raw.clone()),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(millis) => BookingTimestamp::Millis(millis),
            // Fractional epoch values still point at an instant; keep the
            // whole milliseconds.
            None => BookingTimestamp::Millis(number.as_f64().unwrap_or_default() as i64),
        },
        _ => BookingTimestamp::default(),
    }
}

/// Timestamp of a booking as it appears on the wire.
///
/// The API is not consistent here: some records carry an RFC 3339 string,
/// others a numeric epoch-milliseconds value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingTimestamp {
    Text(String),
    Millis(i64),
}

impl Default for BookingTimestamp {
    fn default() -> Self {
        BookingTimestamp::Text(String::new())
    }
}

impl BookingTimestamp {
    /// Parse into a concrete instant, if possible. Unparseable values yield
    /// `None`; the presenter then falls back to the raw text.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            BookingTimestamp::Text(raw) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            BookingTimestamp::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
        }
    }
}
