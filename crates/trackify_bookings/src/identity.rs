// --- File: crates/trackify_bookings/src/identity.rs ---
//! Identity resolution.
//!
//! Reads the persisted identity record and extracts the phone number that
//! keys the booking fetch. The classification is deliberately coarse: a
//! missing record, a record that is not an object, a missing `phone`, a
//! non-string `phone`, and a whitespace-only `phone` all produce the same
//! failure. The login flow owns the record; this view only reads it.

use serde_json::Value;
use tracing::warn;

use trackify_common::BookingViewError;
use trackify_store::{keys, KeyValueStore};

/// Resolve the phone number from the persisted identity record.
///
/// Returns the phone string exactly as stored (no trimming); trimming is only
/// applied to decide validity. Failure is terminal for the current view
/// activation, so no fetch is attempted afterwards.
pub fn resolve_phone(store: &dyn KeyValueStore) -> Result<String, BookingViewError> {
    let record = match store.get(keys::IDENTITY) {
        Ok(Some(record)) => record,
        Ok(None) => return Err(BookingViewError::MissingOrInvalidPhone),
        Err(err) => {
            warn!("failed to read identity record: {err}");
            return Err(BookingViewError::MissingOrInvalidPhone);
        }
    };

    let phone = record
        .get("phone")
        .and_then(Value::as_str)
        .ok_or(BookingViewError::MissingOrInvalidPhone)?;

    if phone.trim().is_empty() {
        return Err(BookingViewError::MissingOrInvalidPhone);
    }

    Ok(phone.to_string())
}
