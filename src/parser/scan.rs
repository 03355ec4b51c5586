use crate::lexer::tokens::{Token, TokenKind};

/// Finds the index of the closing delimiter matching an already-consumed
/// opening delimiter, skipping nested pairs of the same kind.
///
/// `offset` is the index of the first token inside the open pair, i.e. the
/// token right after the opening delimiter the caller consumed. The nesting
/// counter therefore starts at 1; `None` means the input ended before the
/// pair balanced.
pub fn find_matching_delimiter(
    tokens: &[Token],
    open: TokenKind,
    close: TokenKind,
    offset: usize,
) -> Option<usize> {
    let mut depth = 1;

    for (index, token) in tokens.iter().enumerate().skip(offset) {
        if token.kind == open {
            depth += 1;
        } else if token.kind == close {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }

    None
}

/// Finds the first token of `kind` at or after `offset`.
pub fn find_token_kind(tokens: &[Token], kind: TokenKind, offset: usize) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(offset)
        .find(|(_, token)| token.kind == kind)
        .map(|(index, _)| index)
}
