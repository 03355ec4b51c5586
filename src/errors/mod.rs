//! Error types for tokenization and parsing.
//!
//! Every malformed construct surfaces as a typed error carrying the source
//! position of the first offending token. Parsing aborts on the first error;
//! there is no recovery and no multi-error accumulation.

pub mod errors;

#[cfg(test)]
mod tests;
