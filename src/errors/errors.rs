use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberFormat { .. } => "NumberFormat",
            ErrorImpl::IfMissingLeftBrace => "IfMissingLeftBrace",
            ErrorImpl::IfMissingRightBrace => "IfMissingRightBrace",
            ErrorImpl::ElseMissingRightBrace => "ElseMissingRightBrace",
            ErrorImpl::MalformedCondition { .. } => "MalformedCondition",
            ErrorImpl::MalformedLet { .. } => "MalformedLet",
            ErrorImpl::FunctionMissingRightParen => "FunctionMissingRightParen",
            ErrorImpl::FunctionMissingRightBrace => "FunctionMissingRightBrace",
            ErrorImpl::FunctionMissingSemicolon => "FunctionMissingSemicolon",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, no construct starts with it",
                token
            )),
            ErrorImpl::NumberFormat { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::IfMissingLeftBrace => {
                ErrorTip::Suggestion(String::from("Expected `{` after the if condition"))
            }
            ErrorImpl::IfMissingRightBrace => {
                ErrorTip::Suggestion(String::from("The if body is never closed with `}`"))
            }
            ErrorImpl::ElseMissingRightBrace => {
                ErrorTip::Suggestion(String::from("The else body is never closed with `}`"))
            }
            ErrorImpl::MalformedCondition { nodes } => ErrorTip::Suggestion(format!(
                "An if condition must be exactly one expression, found {}",
                nodes
            )),
            ErrorImpl::MalformedLet { token } => ErrorTip::Suggestion(format!(
                "Expected `let <name> = <value>;`, found `{}`",
                token
            )),
            ErrorImpl::FunctionMissingRightParen => {
                ErrorTip::Suggestion(String::from("The parameter list is never closed with `)`"))
            }
            ErrorImpl::FunctionMissingRightBrace => {
                ErrorTip::Suggestion(String::from("The function body is never closed with `}`"))
            }
            ErrorImpl::FunctionMissingSemicolon => {
                ErrorTip::Suggestion(String::from("A function call must be terminated with `;`"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberFormat { token: String },
    #[error("no `{{` found after if condition")]
    IfMissingLeftBrace,
    #[error("if body has no matching `}}`")]
    IfMissingRightBrace,
    #[error("else body has no matching `}}`")]
    ElseMissingRightBrace,
    #[error("if condition parsed to {nodes:?} nodes, expected exactly one")]
    MalformedCondition { nodes: usize },
    #[error("malformed let declaration at {token:?}")]
    MalformedLet { token: String },
    #[error("parameter list has no matching `)`")]
    FunctionMissingRightParen,
    #[error("function body has no matching `}}`")]
    FunctionMissingRightBrace,
    #[error("function call is not terminated by `;`")]
    FunctionMissingSemicolon,
}
