//! Lexical analysis.
//!
//! Converts source text into the flat token sequence the parser consumes.
//! Tokenization is regex-pattern driven: each pattern pairs a regex with a
//! handler that emits a token (or skips the match, for whitespace, comments
//! and commas). Keywords are separated from identifiers through a reserved
//! word lookup.
//!
//! The token sequence has no end-of-input sentinel; the parser derives
//! exhaustion from the sequence's length.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
