//! ORTHOVEC - Caching Orthographic Vector Store
//!
//! A lookup layer that maps keyed objects to fixed-dimensional numeric
//! vectors derived from their spelling, computed by a pluggable
//! [`Encoder`] and memoized by default. One store variant is provided,
//! [`OrthographicStore`]; the [`VectorStore`] trait lets callers swap
//! in other variants without code changes.

pub mod encoder;
pub mod error;
pub mod store;
pub mod vector;

pub use encoder::Encoder;
pub use error::{EncodingError, StoreError};
pub use store::{CacheEntry, OrthographicStore, VectorStore};
pub use vector::Vector;
