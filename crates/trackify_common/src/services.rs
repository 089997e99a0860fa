// --- File: crates/trackify_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for external services used by the
//! application. These traits allow for dependency injection and easier testing
//! by decoupling the view logic from specific implementations.

use std::future::Future;
use std::pin::Pin;

use crate::models::Booking;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for the remote booking service.
///
/// One call fetches all bookings for a phone number. A 404 from the remote
/// side is not an error; implementations normalize it to an empty list.
pub trait BookingService: Send + Sync {
    /// Error type returned by booking service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the bookings recorded for `phone`, in the order the service
    /// returns them.
    fn fetch_bookings(&self, phone: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error>;
}
