//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::IfMissingRightBrace,
        Position(42, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_names_match_taxonomy() {
    let cases: Vec<(ErrorImpl, &str)> = vec![
        (ErrorImpl::IfMissingLeftBrace, "IfMissingLeftBrace"),
        (ErrorImpl::IfMissingRightBrace, "IfMissingRightBrace"),
        (ErrorImpl::ElseMissingRightBrace, "ElseMissingRightBrace"),
        (
            ErrorImpl::MalformedCondition { nodes: 2 },
            "MalformedCondition",
        ),
        (
            ErrorImpl::MalformedLet {
                token: "=".to_string(),
            },
            "MalformedLet",
        ),
        (
            ErrorImpl::FunctionMissingRightParen,
            "FunctionMissingRightParen",
        ),
        (
            ErrorImpl::FunctionMissingRightBrace,
            "FunctionMissingRightBrace",
        ),
        (
            ErrorImpl::FunctionMissingSemicolon,
            "FunctionMissingSemicolon",
        ),
        (
            ErrorImpl::NumberFormat {
                token: "9e99".to_string(),
            },
            "NumberFormat",
        ),
        (
            ErrorImpl::UnexpectedToken {
                token: "}".to_string(),
            },
            "UnexpectedToken",
        ),
    ];

    for (kind, name) in cases {
        let error = Error::new(kind, Position::null());
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none_for_unrecognised() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::FunctionMissingSemicolon, Position::null());

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_impl_display() {
    let kind = ErrorImpl::MalformedCondition { nodes: 3 };
    assert_eq!(
        kind.to_string(),
        "if condition parsed to 3 nodes, expected exactly one"
    );
}
