//! Error Types
//!
//! Failure taxonomy for vector stores and encoders.

use thiserror::Error;

/// Errors surfaced by vector store lookups.
///
/// The store performs no retry or fallback: every variant reaches the
/// caller exactly as it occurred, and a failed lookup never populates
/// the cache.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The key has no usable string projection (empty `Display` output).
    #[error("invalid key {0:?}: empty or unusable string projection")]
    InvalidKey(String),

    /// The encoder returned a zero-dimension vector, violating its contract.
    #[error("encoder produced an empty vector for {0:?}")]
    EmptyVector(String),

    /// The encoder could not represent the projected string.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Errors raised by an [`Encoder`](crate::Encoder) implementation.
///
/// The policy for characters outside the representable alphabet is
/// configuration-defined by the encoder; the store propagates whatever
/// the encoder decides, unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    /// A character in the input falls outside the encoder's alphabet.
    #[error("character {character:?} in {input:?} is outside the encoder alphabet")]
    OutOfAlphabet {
        /// The offending character.
        character: char,
        /// The full input string being encoded.
        input: String,
    },
}
