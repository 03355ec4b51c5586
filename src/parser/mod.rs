//! Parser for building an Abstract Syntax Tree (AST).
//!
//! The parser is a recursive-descent cursor over a borrowed token slice.
//! Each step classifies the current token, produces zero or one node, and
//! advances the cursor past everything the construct consumed. There is no
//! backtracking: once the leading token picks a production, it commits.
//!
//! Bracketed constructs (if/else bodies, parameter and argument lists,
//! function bodies) are handled by locating the matching closing delimiter
//! with a nesting counter and recursively parsing the sub-range between the
//! delimiters as its own token stream. All recursion descends into strictly
//! smaller sub-slices of the same flat token buffer; nothing is copied.
//!
//! Known grammar restriction: a `let` value is a single token. The grammar
//! hard-codes the token positions of a declaration (`let <name> = <value>;`)
//! instead of running a general expression parser, so nested expressions on
//! the right-hand side are rejected as `MalformedLet`.

pub mod parser;
pub mod scan;
