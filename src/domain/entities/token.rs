//! Custom tracking tokens and their persisted JSON form.
//!
//! Tokens are caller-supplied opaque key/value pairs attached to a click.
//! They are stored on the record as a single JSON blob (an array of
//! `{"name": ..., "value": ...}` objects) and surfaced to callers as a typed,
//! order-preserving sequence.

use serde::{Deserialize, Serialize};

/// A single caller-supplied tracking token.
///
/// Opaque to the tracker: duplicate names are allowed and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub value: String,
}

impl Token {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Outcome of decoding a persisted token blob.
///
/// Decoding is deliberately lossy: a blob that fails to parse yields
/// [`TokenDecode::Recovered`] with an empty sequence instead of an error, so
/// malformed legacy data never blocks reading or rewriting a click. The
/// tagged outcome lets tests assert on the degraded path distinctly from a
/// genuine empty array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenDecode {
    /// The blob parsed as a well-formed token array.
    Parsed(Vec<Token>),
    /// The blob was malformed; the tokens were degraded to an empty sequence.
    Recovered,
}

impl TokenDecode {
    /// Unwraps the decoded sequence, empty on the recovered path.
    pub fn into_tokens(self) -> Vec<Token> {
        match self {
            TokenDecode::Parsed(tokens) => tokens,
            TokenDecode::Recovered => Vec::new(),
        }
    }
}

/// Serializes a token sequence to its persisted JSON form.
///
/// Never fails: on a serialization fault the canonical empty-array
/// representation `"[]"` is returned so record writes are never blocked by
/// token issues.
pub fn encode_tokens(tokens: &[Token]) -> String {
    match serde_json::to_string(tokens) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode click tokens: {e}");
            "[]".to_string()
        }
    }
}

/// Deserializes a persisted token blob.
///
/// Malformed input is tolerated: the result is [`TokenDecode::Recovered`]
/// rather than an error.
pub fn decode_tokens(blob: &str) -> TokenDecode {
    match serde_json::from_str::<Vec<Token>>(blob) {
        Ok(tokens) => TokenDecode::Parsed(tokens),
        Err(_) => TokenDecode::Recovered,
    }
}
