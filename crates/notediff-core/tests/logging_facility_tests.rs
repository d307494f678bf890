#![allow(clippy::unwrap_used, clippy::expect_used)]

use notediff_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_BLOCK_COUNT, FIELD_DIFF_LEN, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_NEW_LINES, FIELD_ORIGINAL_LINES, FIELD_REQUEST_ID,
    FIELD_SELECTED_COUNT,
};
use notediff_core::errors::{ExError, ExErrorKind, NoteDiffError};
use notediff_core::logging_facility::test_capture::init_test_capture;
use notediff_core::{compute_diff, log_op_end, log_op_error, log_op_start, BlockId, Diff, EditReview};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = NoteDiffError::UnknownBlock {
        block_id: BlockId::new(4),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    let event = &events[0];
    assert_eq!(event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(event.field(FIELD_ERR_CODE), Some("ERR_UNKNOWN_BLOCK"));
    assert_eq!(event.field(FIELD_ERR_KIND), Some("UnknownBlock"));
}

#[test]
fn test_log_macros_with_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, block_count = 3, selected_count = 1);

    let events = capture.events_for(op_name);
    let start = events.first().expect("Should have start event");
    assert_eq!(start.field(FIELD_BLOCK_COUNT), Some("3"));
    assert_eq!(start.field(FIELD_SELECTED_COUNT), Some("1"));
    assert!(start.component.is_some());
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();

    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_apply_emits_single_start_and_end() {
    let capture = init_test_capture();

    let mut review = EditReview::new("a\nb\nc\nd", "a\nx\nc\ny");
    review.toggle_block(BlockId::new(1)).unwrap();
    review.apply().unwrap();

    let events = capture.events_for_request(review.request_id());
    let starts: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();
    let ends = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .count();

    assert_eq!(starts.len(), 1, "Should have exactly one start event");
    assert_eq!(ends, 1, "Should have exactly one end event");
    assert_eq!(starts[0].op.as_deref(), Some("apply"));
    assert_eq!(starts[0].field(FIELD_BLOCK_COUNT), Some("2"));
    assert_eq!(starts[0].field(FIELD_SELECTED_COUNT), Some("1"));
    assert_eq!(
        starts[0].field(FIELD_REQUEST_ID),
        Some(review.request_id().to_string().as_str())
    );
}

#[test]
fn test_apply_failure_emits_end_error() {
    let capture = init_test_capture();

    let mut lines = compute_diff("a\nb", "a\nc").into_lines();
    lines[1].content = "tampered".to_string();
    let review = EditReview::from_parts("a\nb", "a\nc", Diff::from_lines(lines));
    let err: ExError = review.apply().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConsistencyViolation);

    let events = capture.events_for_request(review.request_id());
    let errors: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_CONSISTENCY_VIOLATION"));
    assert!(!events.iter().any(|e| e.event.as_deref() == Some(EVENT_END)));
}

#[test]
fn test_compute_diff_emits_dimensions() {
    let capture = init_test_capture();

    let original = "1\n2\n3\n4\n5\n6\n7";
    let new = "1\n2\n3\n4\n5\n6\n7\n8\n9";
    compute_diff(original, new);

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("compute_diff")
            && e.field(FIELD_ORIGINAL_LINES) == Some("7")
            && e.field(FIELD_NEW_LINES) == Some("9")
            && e.field(FIELD_DIFF_LEN) == Some("9")
            && e.field(FIELD_BLOCK_COUNT) == Some("1")
    });
    assert!(found >= 1, "Should log diff dimensions for compute_diff");
}
