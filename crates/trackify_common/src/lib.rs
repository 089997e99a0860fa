// --- File: crates/trackify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error taxonomy shared by the booking view
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod models;   // Data structures shared across crates
pub mod services; // Service abstractions

// Re-export error types for easier access
pub use error::{BookingViewError, UserMessage};

// Re-export HTTP utilities for easier access
pub use http::client::HTTP_CLIENT;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export shared models and service traits
pub use models::{Booking, BookingTimestamp};
pub use services::{BookingService, BoxFuture};
