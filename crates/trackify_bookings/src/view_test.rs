#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use tokio::sync::oneshot;

    use crate::view::{BookingListView, ViewState};
    use trackify_common::{Booking, BookingService, BookingViewError, BoxFuture};
    use trackify_store::{keys, InMemoryStore};

    type Scripted = (
        Option<oneshot::Receiver<()>>,
        Result<Vec<Booking>, BookingViewError>,
    );

    /// Booking service returning pre-scripted outcomes, optionally gated on a
    /// oneshot so a test can hold a fetch open.
    struct ScriptedService {
        responses: Mutex<VecDeque<Scripted>>,
        calls: AtomicUsize,
    }

    impl ScriptedService {
        fn new(responses: Vec<Scripted>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    /// Local handle to a shared [`ScriptedService`]. The view takes the
    /// service by value, so tests keep the `Arc` for assertions and hand the
    /// view this wrapper.
    struct SharedService(Arc<ScriptedService>);

    impl BookingService for SharedService {
        type Error = BookingViewError;

        fn fetch_bookings(&self, _phone: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
            self.0.calls.fetch_add(1, Ordering::SeqCst);
            let (gate, outcome) = self
                .0
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted response left");
            Box::pin(async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                outcome
            })
        }
    }

    fn booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            status: "accepted".to_string(),
            ..Booking::default()
        }
    }

    fn store_with_phone() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new().seed(keys::IDENTITY, json!({"phone": "9876543210"})))
    }

    #[tokio::test]
    async fn successful_activation_reaches_ready() {
        let service = Arc::new(ScriptedService::new(vec![(
            None,
            Ok(vec![booking("a"), booking("b")]),
        )]));
        let view = BookingListView::new(SharedService(service.clone()), store_with_phone());

        let presentation = view.activate().await;

        assert!(presentation.error.is_none());
        assert_eq!(presentation.rows.len(), 2);
        assert!(matches!(view.state(), ViewState::Ready(list) if list.len() == 2));
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn empty_list_is_a_terminal_success() {
        let service = Arc::new(ScriptedService::new(vec![(None, Ok(Vec::new()))]));
        let view = BookingListView::new(SharedService(service), store_with_phone());

        let presentation = view.activate().await;

        assert!(presentation.error.is_none());
        assert!(presentation.is_empty());
        assert_eq!(view.state(), ViewState::Ready(Vec::new()));
    }

    #[tokio::test]
    async fn identity_failure_never_fetches() {
        let service = Arc::new(ScriptedService::new(vec![]));
        let view =
            BookingListView::new(SharedService(service.clone()), Arc::new(InMemoryStore::new()));

        let presentation = view.activate().await;

        assert_eq!(
            presentation.error.as_deref(),
            Some("Phone number not found or invalid in local storage")
        );
        assert_eq!(service.calls(), 0);
        assert_eq!(
            view.state(),
            ViewState::Failed(BookingViewError::MissingOrInvalidPhone)
        );
    }

    #[tokio::test]
    async fn fetch_failure_presents_the_generic_message() {
        let service = Arc::new(ScriptedService::new(vec![(
            None,
            Err(BookingViewError::FetchFailed(503)),
        )]));
        let view = BookingListView::new(SharedService(service), store_with_phone());

        let presentation = view.activate().await;

        assert_eq!(
            presentation.error.as_deref(),
            Some("Failed to fetch bookings. Please try again later.")
        );
        assert!(presentation.rows.is_empty());
        assert_eq!(
            view.state(),
            ViewState::Failed(BookingViewError::FetchFailed(503))
        );
    }

    #[tokio::test]
    async fn superseded_activation_never_overwrites_newer_state() {
        let (release_old, gate) = oneshot::channel();
        let service = Arc::new(ScriptedService::new(vec![
            (Some(gate), Ok(vec![booking("stale")])),
            (None, Ok(vec![booking("fresh")])),
        ]));
        let view = Arc::new(BookingListView::new(SharedService(service), store_with_phone()));

        // First activation parks inside its fetch.
        let first = tokio::spawn({
            let view = view.clone();
            async move { view.activate().await }
        });
        tokio::task::yield_now().await;
        assert!(matches!(view.state(), ViewState::Fetching { .. }));

        // Second activation completes while the first is still in flight.
        let second = view.activate().await;
        assert_eq!(
            second.rows[0].track,
            crate::presenter::TrackCell::Track {
                booking_id: "fresh".to_string()
            }
        );
        assert!(matches!(view.state(), ViewState::Ready(list) if list[0].id == "fresh"));

        // Let the stale fetch finish: its presentation is its own, but the
        // visible state stays with the newer activation.
        release_old.send(()).unwrap();
        let stale = first.await.unwrap();
        assert!(stale.error.is_none());
        assert!(matches!(view.state(), ViewState::Ready(list) if list[0].id == "fresh"));
    }
}
