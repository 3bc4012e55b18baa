use crate::tests::fakes::{fixture, three_users, transport_error, user};
use crate::{Paginator, SortState};

use googletest::assert_that;
use googletest::prelude::{eq, len};
use um_core::TaskResult;

// =========================================================================
// load_all
// =========================================================================

#[tokio::test]
async fn given_users_when_load_all_then_lookup_has_one_entry_per_user() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(three_users())));

    // When
    let result = fx.handler.load_all().await;

    // Then
    assert!(result.is_some_and(|r| r.success));
    assert_that!(fx.handler.email_lookup(), len(eq(3)));
    assert_that!(fx.handler.users(), len(eq(3)));
    assert!(!fx.handler.is_empty());
    assert!(!fx.handler.is_list_loading());
    assert!(fx.notifier.messages().is_empty());
}

#[tokio::test]
async fn given_no_users_when_load_all_then_empty_flag_set() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(vec![])));

    // When
    fx.handler.load_all().await;

    // Then
    assert!(fx.handler.is_empty());
    assert!(fx.handler.email_lookup().is_empty());
    assert!(!fx.handler.is_list_loading());
}

#[tokio::test]
async fn given_empty_then_populated_when_reloaded_then_empty_flag_cleared() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(vec![])));
    fx.service.list.push(Ok(TaskResult::ok(three_users())));
    fx.handler.load_all().await;
    assert!(fx.handler.is_empty());

    // When
    fx.handler.load_all().await;

    // Then
    assert!(!fx.handler.is_empty());
}

#[tokio::test]
async fn given_success_without_payload_when_load_all_then_treated_as_empty() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult {
        success: true,
        message: None,
        model: None,
    }));

    // When
    fx.handler.load_all().await;

    // Then
    assert!(fx.handler.is_empty());
    assert!(fx.handler.users().is_empty());
}

#[tokio::test]
async fn given_reload_with_fewer_users_when_load_all_then_lookup_rebuilt_from_scratch() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(three_users())));
    fx.service
        .list
        .push(Ok(TaskResult::ok(vec![user("u-2", "jan@example.com", "Jan", "Kowalski")])));
    fx.handler.load_all().await;

    // When
    fx.handler.load_all().await;

    // Then
    assert_that!(fx.handler.email_lookup(), len(eq(1)));
    assert_eq!(fx.handler.lookup_email_by_id_cached("u-1"), "");
    assert_eq!(fx.handler.lookup_email_by_id_cached("u-2"), "jan@example.com");
}

#[tokio::test]
async fn given_loaded_users_when_failure_envelope_then_previous_records_kept() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(three_users())));
    fx.service.list.push(Ok(TaskResult::failed("Database unavailable")));
    fx.handler.load_all().await;

    // When
    let result = fx.handler.load_all().await;

    // Then
    assert!(result.is_none());
    assert_that!(fx.handler.users(), len(eq(3)));
    assert_that!(fx.handler.email_lookup(), len(eq(3)));
    assert_eq!(
        fx.notifier.last().as_deref(),
        Some("Data was not loaded. Database unavailable")
    );
}

#[tokio::test]
async fn given_transport_error_when_load_all_then_diagnostic_notified() {
    // Given
    let fx = fixture();
    fx.service.list.push(Err(transport_error()));

    // When
    let result = fx.handler.load_all().await;

    // Then
    assert!(result.is_none());
    assert!(fx.handler.users().is_empty());
    assert!(fx.handler.is_list_loading());
    let message = fx.notifier.last().unwrap();
    assert!(message.contains("Component: UsersHandler, method: load_all"));
    assert!(message.contains("Name: HttpError"));
    assert!(message.contains("Message: connection refused"));
}

#[tokio::test]
async fn given_two_loads_in_flight_when_first_completes_last_then_first_wins() {
    // Given
    let fx = fixture();
    let release_first = fx.service.list.push_gated(Ok(TaskResult::ok(three_users())));
    fx.service
        .list
        .push(Ok(TaskResult::ok(vec![user("u-9", "late@example.com", "Late", "Comer")])));

    // When
    let first = fx.handler.load_all();
    let second = async {
        fx.handler.load_all().await;
        assert_that!(fx.handler.users(), len(eq(1)));
        release_first.send(()).unwrap();
    };
    tokio::join!(first, second);

    // Then
    assert_that!(fx.handler.users(), len(eq(3)));
    assert_eq!(fx.handler.lookup_email_by_id_cached("u-9"), "");
}

// =========================================================================
// lookup_email_by_id_cached
// =========================================================================

#[tokio::test]
async fn given_loaded_users_when_cached_lookup_then_returns_email_or_empty() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(three_users())));
    fx.handler.load_all().await;

    // Then
    assert_eq!(fx.handler.lookup_email_by_id_cached(""), "");
    assert_eq!(fx.handler.lookup_email_by_id_cached("missing"), "");
    assert_eq!(fx.handler.lookup_email_by_id_cached("u-3"), "ewa@example.com");
    assert_that!(fx.service.list_calls(), eq(1));
}

// =========================================================================
// lookup_by_email
// =========================================================================

#[tokio::test]
async fn given_found_user_when_lookup_by_email_then_slot_updated() {
    // Given
    let fx = fixture();
    let anna = user("u-1", "anna@example.com", "Anna", "Nowak");
    fx.service.lookup.push(Ok(TaskResult::ok(anna.clone())));

    // When
    let returned = fx.handler.lookup_by_email("anna@example.com").await;

    // Then
    assert_eq!(returned, Some(anna.clone()));
    assert_eq!(fx.handler.selected_user(), Some(anna));
}

#[tokio::test]
async fn given_failed_lookup_when_lookup_by_email_then_previous_slot_returned() {
    // Given
    let fx = fixture();
    let anna = user("u-1", "anna@example.com", "Anna", "Nowak");
    fx.service.lookup.push(Ok(TaskResult::ok(anna.clone())));
    fx.service.lookup.push(Ok(TaskResult::failed("User not found")));
    fx.service.lookup.push(Err(transport_error()));
    fx.handler.lookup_by_email("anna@example.com").await;

    // When
    let after_failure = fx.handler.lookup_by_email("ghost@example.com").await;
    let after_error = fx.handler.lookup_by_email("ghost@example.com").await;

    // Then
    assert_eq!(after_failure, Some(anna.clone()));
    assert_eq!(after_error, Some(anna));
    let messages = fx.notifier.messages();
    assert_eq!(messages[0], "User was not loaded. User not found");
    assert!(messages[1].contains("method: lookup_by_email"));
}

// =========================================================================
// initialize / reset
// =========================================================================

#[tokio::test]
async fn given_fresh_handler_when_initialize_then_binds_controls_and_loads_once() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(three_users())));

    // When
    fx.handler
        .initialize(Paginator::new(2), SortState::default())
        .await;

    // Then
    let view = fx.handler.snapshot();
    assert_that!(fx.service.list_calls(), eq(1));
    assert_eq!(view.page_size, Some(2));
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.total_count, 3);
    assert!(!view.filtered_empty);
}

#[tokio::test]
async fn given_stale_search_when_initialize_then_filter_and_search_cleared() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(three_users())));
    fx.service.list.push(Ok(TaskResult::ok(three_users())));
    fx.handler.load_all().await;
    fx.handler.apply_filter("zzzznomatch");
    assert!(fx.handler.is_filtered_empty());

    // When
    fx.handler
        .initialize(Paginator::new(10), SortState::default())
        .await;

    // Then
    let view = fx.handler.snapshot();
    assert_eq!(view.search_text, "");
    assert_eq!(view.filter, "");
    assert_eq!(view.filtered_count, 3);
    assert!(!view.filtered_empty);
}

#[tokio::test]
async fn given_populated_handler_when_reset_then_back_to_initial_state() {
    // Given
    let fx = fixture();
    fx.service.list.push(Ok(TaskResult::ok(three_users())));
    fx.handler.load_all().await;
    fx.handler.apply_filter("anna");

    // When
    fx.handler.reset();

    // Then
    let view = fx.handler.snapshot();
    assert_eq!(view.total_count, 0);
    assert_eq!(view.filter, "");
    assert!(view.list_loading);
    assert!(view.page_size.is_none());
    assert!(fx.handler.email_lookup().is_empty());
}
