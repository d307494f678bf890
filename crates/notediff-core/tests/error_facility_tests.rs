use notediff_core::errors::{
    ConsistencyError, ExError, ExErrorKind, NoteDiffError, ReconstructionSide,
};
use notediff_core::{BlockId, DiffIdentity, NoteDiffConfig};

#[test]
fn test_unknown_block_carries_block_id() {
    let err = NoteDiffError::UnknownBlock {
        block_id: BlockId::new(3),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::UnknownBlock);
    assert_eq!(ex_err.code(), "ERR_UNKNOWN_BLOCK");
    assert_eq!(ex_err.block_id(), Some(BlockId::new(3)));
    assert!(ex_err.message().contains("Block 3"));
}

#[test]
fn test_size_errors_share_input_too_large() {
    let lines: ExError = NoteDiffError::TooManyLines {
        side: "new",
        lines: 30,
        limit: 10,
    }
    .into();
    let cells: ExError = NoteDiffError::TableTooLarge {
        cells: 100,
        limit: 10,
    }
    .into();

    assert_eq!(lines.kind(), ExErrorKind::InputTooLarge);
    assert_eq!(cells.kind(), ExErrorKind::InputTooLarge);
    assert!(lines.message().contains("new text has 30 lines"));
}

#[test]
fn test_consistency_error_maps_side() {
    let err = ConsistencyError::MergeMismatch {
        expected_lines: 4,
        actual_lines: 5,
    };

    let ex_err: ExError = NoteDiffError::from(err).into();

    assert_eq!(ex_err.kind(), ExErrorKind::ConsistencyViolation);
    assert_eq!(ex_err.side(), Some(ReconstructionSide::Merged));
    assert!(ex_err.message().starts_with("merged reconstruction mismatch"));
}

#[test]
fn test_stale_diff_names_side() {
    let identity = DiffIdentity::of("a", "b");

    let ex_err: ExError = identity.verify("a", "changed").unwrap_err().into();

    assert_eq!(ex_err.kind(), ExErrorKind::StaleDiff);
    assert_eq!(ex_err.code(), "ERR_STALE_DIFF");
    assert!(ex_err.message().contains("new"));
}

#[test]
fn test_config_error_conversion() {
    let err = NoteDiffConfig::from_toml_str("[limits]\nmax_lines = \"lots\"\n").unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Config);
    assert_eq!(ex_err.code(), "ERR_CONFIG");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InputTooLarge, "ERR_INPUT_TOO_LARGE"),
        (ExErrorKind::UnknownBlock, "ERR_UNKNOWN_BLOCK"),
        (ExErrorKind::ConsistencyViolation, "ERR_CONSISTENCY_VIOLATION"),
        (ExErrorKind::StaleDiff, "ERR_STALE_DIFF"),
        (ExErrorKind::Config, "ERR_CONFIG"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_display_with_block_context() {
    let err = ExError::new(ExErrorKind::UnknownBlock)
        .with_op("toggle_block")
        .with_block_id(BlockId::new(9))
        .with_message("Block 9 does not exist in this diff");

    assert_eq!(
        err.to_string(),
        "[ERR_UNKNOWN_BLOCK] in operation 'toggle_block': Block 9 does not exist in this diff (block: 9)"
    );
}
