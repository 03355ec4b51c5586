//! Helper macros for the lexer.
//!
//! `MK_TOKEN!` builds a `Token` and `MK_DEFAULT_HANDLER!` builds a lexer
//! handler for fixed single-lexeme patterns like `{` or `;`. Both exist to
//! keep the pattern table in `lexer.rs` readable.

/// Creates a Token instance.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a fixed lexeme.
///
/// The generated handler emits one token of the given kind and advances the
/// lexer by the lexeme's length.
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\{").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
                    end: Position(
                        (lexer.pos + $value.len()) as u32,
                        Rc::clone(&lexer.file)
                    )
                }
            ));
            lexer.advance_n($value.len());
        }
    };
}
