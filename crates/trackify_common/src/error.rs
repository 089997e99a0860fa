// --- File: crates/trackify_common/src/error.rs ---
use thiserror::Error;

/// The error taxonomy for one booking-view activation.
///
/// Every failure the view can surface collapses into one of these variants.
/// The `Display` impl carries diagnostic detail for operators; what the user
/// sees comes exclusively from [`UserMessage`], which maps each variant to a
/// fixed, user-safe string. A 404 from the booking API is deliberately NOT
/// represented here: "no bookings yet" is a valid empty success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingViewError {
    /// The locally persisted identity record is absent, not an object, or
    /// its `phone` field is missing, not a string, or empty after trimming.
    /// All of those cases classify identically; the fetch is never attempted.
    #[error("identity record missing or phone invalid")]
    MissingOrInvalidPhone,

    /// The booking API answered with a non-success, non-404 status.
    #[error("booking service returned HTTP status {0}")]
    FetchFailed(u16),

    /// The booking API answered 2xx but the body was not a JSON array.
    #[error("booking payload was not an array")]
    InvalidFormat,

    /// Transport-level or body-parsing failure during the call.
    #[error("unexpected failure while fetching bookings: {0}")]
    Unexpected(String),
}

/// A trait for converting errors to fixed user-facing messages.
///
/// Raw status codes, transport errors, and parse detail never reach the user;
/// they are logged for operators only.
pub trait UserMessage {
    /// Returns the user-safe message for this error.
    fn user_message(&self) -> &'static str;
}

impl UserMessage for BookingViewError {
    fn user_message(&self) -> &'static str {
        match self {
            BookingViewError::MissingOrInvalidPhone => {
                "Phone number not found or invalid in local storage"
            }
            BookingViewError::FetchFailed(_) => {
                "Failed to fetch bookings. Please try again later."
            }
            BookingViewError::InvalidFormat => "Invalid booking data format received.",
            BookingViewError::Unexpected(_) => "Something went wrong while fetching bookings.",
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for BookingViewError {
    fn from(err: reqwest::Error) -> Self {
        BookingViewError::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for BookingViewError {
    fn from(err: serde_json::Error) -> Self {
        BookingViewError::Unexpected(err.to_string())
    }
}
