// --- File: crates/trackify_bookings/src/lib.rs ---
// Declare modules within this crate
pub mod fetch;
pub mod identity;
pub mod presenter;
#[cfg(test)]
mod presenter_test;
pub mod view;
#[cfg(test)]
mod view_test;

pub use fetch::HttpBookingService;
pub use presenter::{present, track_driver, BookingRow, Navigator, Presentation, Route};
pub use view::{BookingListView, ViewState};
