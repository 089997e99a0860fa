// --- File: crates/trackify_bookings/src/fetch.rs ---
//! Booking fetcher.
//!
//! Issues the single `GET {base_url}/api/bookings/{phone}` call a view
//! activation makes and classifies the outcome:
//!
//! 1. 404 is success with an empty list ("no bookings yet" is not a failure),
//! 2. any other non-success status is a generic fetch failure,
//! 3. a 2xx body that is not a JSON array is a format failure,
//! 4. a 2xx array is the booking list, taken in the order received.
//!
//! Transport trouble and unparseable bodies classify as unexpected errors;
//! the detail goes to the log, never to the user. No retries, no caching.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use trackify_common::{Booking, BookingService, BookingViewError, BoxFuture, HTTP_CLIENT};
use trackify_config::ApiConfig;

/// Booking service backed by the remote HTTP API.
pub struct HttpBookingService {
    base_url: String,
    client: Client,
}

impl HttpBookingService {
    /// Create a service against the configured base address, reusing the
    /// shared HTTP client (which carries the default timeout).
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(&config.base_url, HTTP_CLIENT.clone())
    }

    /// Create a service with a caller-supplied client.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub(crate) fn bookings_url(&self, phone: &str) -> String {
        format!("{}/api/bookings/{}", self.base_url, phone)
    }

    /// Fetch and classify the bookings for `phone`.
    pub async fn fetch(&self, phone: &str) -> Result<Vec<Booking>, BookingViewError> {
        let url = self.bookings_url(phone);
        debug!("fetching bookings from {url}");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("booking request to {url} failed: {err}");
                return Err(err.into());
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("booking service returned 404 for {url}; treating as empty list");
            return Ok(Vec::new());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                error!("failed to read booking response body from {url}: {err}");
                return Err(err.into());
            }
        };

        classify_response(status, &body)
    }
}

impl BookingService for HttpBookingService {
    type Error = BookingViewError;

    fn fetch_bookings(&self, phone: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        let phone = phone.to_string();
        Box::pin(async move { self.fetch(&phone).await })
    }
}

/// Classify a raw response into the booking list or a view error.
///
/// Pure function so the classification rules are testable without a network.
/// Priority order matches the contract: 404, then non-success, then body
/// shape. Array elements are trusted and decoded leniently: absent or
/// wrong-typed fields default, so a 2xx array always yields one row per
/// element.
pub fn classify_response(status: StatusCode, body: &str) -> Result<Vec<Booking>, BookingViewError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(Vec::new());
    }
    if !status.is_success() {
        error!("booking service returned status {status}");
        return Err(BookingViewError::FetchFailed(status.as_u16()));
    }

    let payload: Value = serde_json::from_str(body).map_err(|err| {
        error!("booking response body is not valid JSON: {err}");
        BookingViewError::Unexpected(err.to_string())
    })?;

    match payload {
        Value::Array(items) => Ok(items.iter().map(Booking::from_value).collect()),
        other => {
            error!(
                "booking response was not an array (got {})",
                json_kind(&other)
            );
            Err(BookingViewError::InvalidFormat)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
