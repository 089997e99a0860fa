#[cfg(test)]
mod tests {
    use crate::presenter::{
        format_booking_date, format_cost, present, track_driver, MockNavigator, Route,
        StatusStyle, TrackCell,
    };
    use mockall::predicate::eq;
    use serde_json::json;
    use trackify_common::{Booking, BookingTimestamp, BookingViewError};
    use trackify_store::{keys, InMemoryStore, KeyValueStore};

    fn booking(id: &str, status: &str) -> Booking {
        Booking {
            id: id.to_string(),
            name: "Asha".to_string(),
            status: status.to_string(),
            ..Booking::default()
        }
    }

    #[test]
    fn rows_keep_input_order_with_one_based_indices() {
        let outcome = Ok(vec![
            booking("a", "accepted"),
            booking("b", "pending"),
            booking("c", "completed"),
        ]);
        let presentation = present(&outcome);

        assert!(presentation.error.is_none());
        let indices: Vec<usize> = presentation.rows.iter().map(|row| row.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        let ids: Vec<&TrackCell> = presentation.rows.iter().map(|row| &row.track).collect();
        assert_eq!(
            ids[0],
            &TrackCell::Track {
                booking_id: "a".to_string()
            }
        );
        assert_eq!(ids[1], &TrackCell::Unavailable);
    }

    #[test]
    fn pending_status_styles_as_alert_and_offers_no_action() {
        let presentation = present(&Ok(vec![booking("x", "pending")]));
        let row = &presentation.rows[0];
        assert_eq!(row.status_style, StatusStyle::Alert);
        assert_eq!(row.track, TrackCell::Unavailable);
    }

    #[test]
    fn any_other_status_styles_as_normal_and_is_trackable() {
        for status in ["accepted", "completed", "en-route", "PENDING", ""] {
            let presentation = present(&Ok(vec![booking("x", status)]));
            let row = &presentation.rows[0];
            assert_eq!(row.status_style, StatusStyle::Normal, "status: {status:?}");
            assert_eq!(
                row.track,
                TrackCell::Track {
                    booking_id: "x".to_string()
                }
            );
        }
    }

    #[test]
    fn failure_presents_its_message_and_an_empty_list_area() {
        let presentation = present(&Err(BookingViewError::FetchFailed(500)));
        assert_eq!(
            presentation.error.as_deref(),
            Some("Failed to fetch bookings. Please try again later.")
        );
        assert!(presentation.rows.is_empty());
        assert!(presentation.is_empty());
    }

    #[test]
    fn empty_success_presents_no_error_and_no_rows() {
        let presentation = present(&Ok(Vec::new()));
        assert!(presentation.error.is_none());
        assert!(presentation.is_empty());
    }

    #[test]
    fn cost_formats_to_two_decimals_with_currency() {
        assert_eq!(format_cost(1234.5), "1234.50 INR");
        assert_eq!(format_cost(0.0), "0.00 INR");
        assert_eq!(format_cost(99.999), "100.00 INR");
    }

    #[test]
    fn booking_date_formats_from_text_and_millis() {
        let text = BookingTimestamp::Text("2025-05-05T10:30:00Z".to_string());
        assert_eq!(format_booking_date(&text), "05/05/2025, 10:30:00");

        let millis = BookingTimestamp::Millis(1714900000000);
        assert_eq!(format_booking_date(&millis), "05/05/2024, 09:06:40");
    }

    #[test]
    fn unparseable_booking_date_passes_through_raw() {
        let odd = BookingTimestamp::Text("next tuesday".to_string());
        assert_eq!(format_booking_date(&odd), "next tuesday");
        assert_eq!(format_booking_date(&BookingTimestamp::default()), "-");
    }

    #[test]
    fn track_driver_persists_the_id_and_navigates() {
        let store = InMemoryStore::new().seed(keys::IDENTITY, json!({"phone": "111"}));
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .with(eq(Route::Tracking))
            .times(1)
            .return_const(());

        track_driver(&store, &navigator, "abc123").unwrap();

        assert_eq!(store.get(keys::BOOKING_ID).unwrap(), Some(json!("abc123")));
        // Nothing beyond the hand-off value was touched.
        assert_eq!(
            store.keys(),
            vec![keys::BOOKING_ID.to_string(), keys::IDENTITY.to_string()]
        );
    }

    #[test]
    fn track_driver_overwrites_a_previous_hand_off() {
        let store = InMemoryStore::new().seed(keys::BOOKING_ID, json!("old"));
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().times(1).return_const(());

        track_driver(&store, &navigator, "new").unwrap();

        assert_eq!(store.get(keys::BOOKING_ID).unwrap(), Some(json!("new")));
    }
}
