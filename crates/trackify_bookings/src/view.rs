// --- File: crates/trackify_bookings/src/view.rs ---
//! The booking list view's activation state machine.
//!
//! Per activation: `Init -> Resolving -> Fetching(phone) -> {Ready(list) |
//! Failed(error)}`. Identity resolution runs once; on failure the fetch is
//! never attempted. Terminal states do not transition without a fresh
//! activation.
//!
//! Each activation takes a generation token. A completion whose token is no
//! longer current is discarded, so a re-activation that overtakes a slow
//! fetch can never have its state overwritten by the stale result.

use std::sync::{Arc, Mutex};

use tracing::debug;

use trackify_common::{Booking, BookingService, BookingViewError};
use trackify_store::KeyValueStore;

use crate::identity::resolve_phone;
use crate::presenter::{present, Presentation};

/// Where the view currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Init,
    Resolving,
    Fetching { phone: String },
    Ready(Vec<Booking>),
    Failed(BookingViewError),
}

struct Inner {
    state: ViewState,
    generation: u64,
}

/// The booking list view. Owns the latest visible state; `activate` drives
/// one full pass of the state machine.
pub struct BookingListView<S>
where
    S: BookingService<Error = BookingViewError>,
{
    service: S,
    store: Arc<dyn KeyValueStore>,
    inner: Mutex<Inner>,
}

impl<S> BookingListView<S>
where
    S: BookingService<Error = BookingViewError>,
{
    pub fn new(service: S, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            service,
            store,
            inner: Mutex::new(Inner {
                state: ViewState::Init,
                generation: 0,
            }),
        }
    }

    /// The latest visible state.
    pub fn state(&self) -> ViewState {
        self.inner.lock().expect("view mutex poisoned").state.clone()
    }

    /// Run one activation: resolve identity, fetch, present.
    ///
    /// Returns the presentation for THIS activation's outcome. The shared
    /// visible state only takes the outcome if no newer activation has
    /// started in the meantime.
    pub async fn activate(&self) -> Presentation {
        let generation = {
            let mut inner = self.inner.lock().expect("view mutex poisoned");
            inner.generation += 1;
            inner.state = ViewState::Resolving;
            inner.generation
        };

        let phone = match resolve_phone(self.store.as_ref()) {
            Ok(phone) => phone,
            Err(err) => {
                let presentation = present(&Err(err.clone()));
                self.apply(generation, ViewState::Failed(err));
                return presentation;
            }
        };

        self.apply(
            generation,
            ViewState::Fetching {
                phone: phone.clone(),
            },
        );

        let outcome = self.service.fetch_bookings(&phone).await;
        let presentation = present(&outcome);
        let state = match outcome {
            Ok(bookings) => ViewState::Ready(bookings),
            Err(err) => ViewState::Failed(err),
        };
        self.apply(generation, state);
        presentation
    }

    /// Apply a transition if `generation` is still the current activation.
    fn apply(&self, generation: u64, state: ViewState) {
        let mut inner = self.inner.lock().expect("view mutex poisoned");
        if inner.generation == generation {
            inner.state = state;
        } else {
            debug!(
                "discarding result of superseded activation {generation} (current: {})",
                inner.generation
            );
        }
    }
}
