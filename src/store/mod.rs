//! Store Module
//!
//! The vector-store capability trait and its caching implementation.

mod orthographic;

pub use orthographic::OrthographicStore;

use crate::error::StoreError;
use crate::vector::Vector;

/// A cached (key, vector) pair.
///
/// The key is retained verbatim so enumeration hands back original key
/// objects, not their string projections.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<K> {
    /// The original lookup key.
    pub key: K,
    /// The vector computed for that key.
    pub vector: Vector,
}

/// Capability set shared by all vector-store variants.
///
/// Callers hold a `&dyn VectorStore<K>` and swap implementations
/// (caching orthographic stores, deterministic stores, random-indexing
/// stores) without code changes. No thread-safety is promised by the
/// trait itself; see each implementation for what it guarantees.
pub trait VectorStore<K> {
    /// Get the vector for `key`, computing it on demand if necessary.
    fn get_vector(&self, key: &K) -> Result<Vector, StoreError>;

    /// Whether `key` currently has a cached entry. Never triggers
    /// computation: an encodable key that was never looked up (or was
    /// looked up while caching was disabled) reports `false`.
    fn contains_vector(&self, key: &K) -> bool;

    /// Number of currently cached entries, not the number of encodable
    /// keys (which is unbounded).
    fn num_vectors(&self) -> usize;

    /// Iterate over currently cached entries, in unspecified order.
    fn all_vectors(&self) -> Box<dyn Iterator<Item = CacheEntry<K>> + '_>;

    /// Empty the cache. Leaves the caching flag and encoder untouched.
    fn clear(&self);

    /// Enable or disable memoization of future misses. Entries already
    /// cached are unaffected.
    fn enable_vector_cache(&self, enabled: bool);

    /// Release the store. No real resources are held, so this always
    /// succeeds and is idempotent; it exists so callers can dispose of
    /// heterogeneous stores uniformly.
    fn close(&self);
}
