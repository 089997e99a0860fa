use tracing::info;

use trackify_bookings::{Navigator, Route};

/// Navigation for the terminal app.
///
/// The driver-tracking view is an external collaborator that reads the
/// persisted `bookingId` on entry; all navigation does here is announce the
/// hand-off to the user.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        match route {
            Route::Tracking => {
                info!("navigating to the driver-tracking view");
                println!("Booking saved. Open the driver-tracking view to follow your driver.");
            }
        }
    }
}
