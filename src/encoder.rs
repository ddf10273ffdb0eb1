//! Encoder Contract
//!
//! Pluggable string-to-vector encoding behind a single trait.

use crate::error::EncodingError;
use crate::vector::Vector;

/// A string-to-vector encoder built on a deterministic letter-vector source.
///
/// Implementations derive a whole-string vector from the spelling of the
/// input (its character sequence), typically by edit-distance-style
/// composition of per-letter base vectors.
///
/// # Contract
///
/// `encode` must be pure and deterministic given the encoder's fixed
/// construction-time configuration (letter-vector source and any
/// number-representation parameters): the same input always yields an
/// equal vector. It must fail only for inputs the configured alphabet
/// cannot represent; the out-of-alphabet policy (reject, substitute,
/// skip) is the implementation's to define and document. Callers such
/// as [`OrthographicStore`](crate::OrthographicStore) never retry or
/// rewrite the input on failure.
pub trait Encoder {
    /// Encode a string into its orthographic vector.
    fn encode(&self, text: &str) -> Result<Vector, EncodingError>;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(&self, text: &str) -> Result<Vector, EncodingError> {
        (**self).encode(text)
    }
}

impl<E: Encoder + ?Sized> Encoder for std::sync::Arc<E> {
    fn encode(&self, text: &str) -> Result<Vector, EncodingError> {
        (**self).encode(text)
    }
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn encode(&self, text: &str) -> Result<Vector, EncodingError> {
        (**self).encode(text)
    }
}
