//! End-to-end diff scenarios
//!
//! Each scenario diffs a small note edit and checks the row shape, block
//! grouping, reconstruction under full acceptance/rejection and round-trip
//! validation.

mod common;

use common::{block_column, shape};
use notediff_core::errors::ReconstructionSide;
use notediff_core::{
    compute_diff, reconstruct, validate_diff, BlockId, ConsistencyError, Diff, DiffLineKind,
    Selection,
};

fn assert_round_trips(original: &str, new: &str, diff: &Diff) {
    assert_eq!(validate_diff(original, new, diff), Ok(()));
    assert_eq!(reconstruct(diff, &Selection::all(diff)), new);
    assert_eq!(reconstruct(diff, &Selection::empty()), original);
}

#[test]
fn test_scenario_substitution() {
    // GIVEN a note whose middle line is rewritten
    let (original, new) = ("a\nb\nc", "a\nx\nc");

    // WHEN diffing
    let diff = compute_diff(original, new);

    // THEN the deletion precedes the insertion within one block
    assert_eq!(shape(&diff), vec![" a", "-b", "+x", " c"]);
    assert_eq!(block_column(&diff), vec![0, 1, 1, 0]);

    // AND line numbers refer to each side
    let lines = diff.lines();
    assert_eq!(lines[1].original_line_number, Some(2));
    assert_eq!(lines[1].new_line_number, None);
    assert_eq!(lines[2].original_line_number, None);
    assert_eq!(lines[2].new_line_number, Some(2));
    assert_eq!(lines[3].original_line_number, Some(3));
    assert_eq!(lines[3].new_line_number, Some(3));

    assert_round_trips(original, new, &diff);
}

#[test]
fn test_scenario_pure_insertion() {
    let (original, new) = ("a\nc", "a\nb\nc");

    let diff = compute_diff(original, new);

    assert_eq!(shape(&diff), vec![" a", "+b", " c"]);
    assert_eq!(diff.lines()[1].change_block_id, Some(BlockId::new(1)));
    assert_eq!(diff.lines()[1].new_line_number, Some(2));
    assert_round_trips(original, new, &diff);
}

#[test]
fn test_scenario_pure_deletion() {
    let (original, new) = ("a\nb\nc", "a\nc");

    let diff = compute_diff(original, new);

    assert_eq!(shape(&diff), vec![" a", "-b", " c"]);
    assert_eq!(diff.lines()[1].kind, DiffLineKind::Deleted);
    assert_eq!(diff.lines()[1].original_line_number, Some(2));
    assert_round_trips(original, new, &diff);
}

#[test]
fn test_scenario_separate_edits_get_ascending_blocks() {
    let (original, new) = ("title\nbody\nmore\nend", "title\nBODY\nmore\nend\nps");

    let diff = compute_diff(original, new);

    assert_eq!(
        shape(&diff),
        vec![" title", "-body", "+BODY", " more", " end", "+ps"]
    );
    assert_eq!(block_column(&diff), vec![0, 1, 1, 0, 0, 2]);
    assert_eq!(diff.block_ids(), vec![BlockId::new(1), BlockId::new(2)]);

    // Accepting only the trailing addition keeps the original body
    let only_ps = Selection::from_ids([BlockId::new(2)]);
    assert_eq!(reconstruct(&diff, &only_ps), "title\nbody\nmore\nend\nps");
}

#[test]
fn test_scenario_swapped_lines_shape_is_pinned() {
    let diff = compute_diff("a\nb", "b\na");

    assert_eq!(shape(&diff), vec!["-a", " b", "+a"]);
    assert_eq!(block_column(&diff), vec![1, 0, 2]);
    assert_round_trips("a\nb", "b\na", &diff);
}

#[test]
fn test_scenario_identical_texts_produce_empty_diff() {
    let diff = compute_diff("same\nnote\n", "same\r\nnote\r\n");

    assert!(diff.is_empty());
    assert_eq!(validate_diff("same\nnote\n", "same\r\nnote\r\n", &diff), Ok(()));
}

#[test]
fn test_scenario_trailing_newline_added() {
    let (original, new) = ("a", "a\n");

    let diff = compute_diff(original, new);

    // "a" splits to ["a"], "a\n" to ["a", ""]
    assert_eq!(shape(&diff), vec![" a", "+"]);
    assert_round_trips(original, new, &diff);
}

#[test]
fn test_scenario_empty_original() {
    let diff = compute_diff("", "first line");

    assert_eq!(shape(&diff), vec!["-", "+first line"]);
    assert_round_trips("", "first line", &diff);
}

#[test]
fn test_validator_names_original_side_on_deleted_corruption() {
    let (original, new) = ("a\nb\nc", "a\nx\nc");
    let mut lines = compute_diff(original, new).into_lines();
    lines[1].content = "corrupted".to_string();

    let err = validate_diff(original, new, &Diff::from_lines(lines)).unwrap_err();

    assert_eq!(err.side(), ReconstructionSide::Original);
}

#[test]
fn test_validator_names_new_side_on_added_corruption() {
    let (original, new) = ("a\nb\nc", "a\nx\nc");
    let mut lines = compute_diff(original, new).into_lines();
    lines[2].content = "corrupted".to_string();

    let err = validate_diff(original, new, &Diff::from_lines(lines)).unwrap_err();

    assert_eq!(err.side(), ReconstructionSide::New);
}

#[test]
fn test_validator_checks_original_first_when_both_sides_break() {
    let (original, new) = ("a\nb\nc", "a\nx\nc");
    let mut lines = compute_diff(original, new).into_lines();
    lines.remove(0);

    let err = validate_diff(original, new, &Diff::from_lines(lines)).unwrap_err();

    assert_eq!(
        err,
        ConsistencyError::OriginalMismatch {
            expected_lines: 3,
            actual_lines: 2
        }
    );
}

#[test]
fn test_validator_rejects_empty_diff_for_different_texts() {
    let err = validate_diff("a", "b", &Diff::default()).unwrap_err();
    assert_eq!(err.side(), ReconstructionSide::Original);
}

#[test]
fn test_toggle_all_twice_returns_to_default() {
    let diff = compute_diff("a\nb\nc\nd", "a\nx\nc\ny");
    let default = Selection::all(&diff);
    let mut selection = default.clone();

    selection.toggle_all(&diff);
    assert_eq!(reconstruct(&diff, &selection), "a\nb\nc\nd");

    selection.toggle_all(&diff);
    assert_eq!(selection, default);
    assert_eq!(reconstruct(&diff, &selection), "a\nx\nc\ny");
}
