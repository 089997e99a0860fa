//! Well-known storage keys shared between views.

/// Identity record written by the login flow. Holds at least `phone`.
pub const IDENTITY: &str = "user";

/// Booking id hand-off written by the booking list, read by the tracking view.
pub const BOOKING_ID: &str = "bookingId";
