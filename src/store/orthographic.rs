//! Orthographic Store
//!
//! Caching lookup layer over a string-to-vector encoder.
//!
//! Vectors are computed from the spelling of a key's string projection
//! and cached by default. Caching can be disabled per store and the
//! cache cleared wholesale at any time.

use std::fmt::Display;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;
use tracing::debug;

use crate::encoder::Encoder;
use crate::error::StoreError;
use crate::store::{CacheEntry, VectorStore};
use crate::vector::Vector;

/// A vector store that computes vectors from key spelling, memoizing
/// results.
///
/// Keys are compared by their own `Eq`/`Hash`, never by their string
/// projection: two distinct keys whose `Display` output is identical
/// occupy two separate cache entries unless the key type itself deems
/// them equal. The `Display` output is what drives the encoder, so the
/// store is only meaningful for key types with a sensible textual form.
///
/// Clones share the same cache, caching flag, and encoder. Methods take
/// `&self`; the map stays consistent under concurrent use, though
/// concurrent misses for one key may invoke the encoder more than once
/// (harmless, as the encoder is deterministic and the last insert wins).
pub struct OrthographicStore<K, E> {
    /// Key -> vector cache, keyed by native key equality
    cache: Arc<RwLock<HashMap<K, Vector>>>,
    /// Whether future misses are memoized
    caching: Arc<AtomicBool>,
    /// The encoder collaborator, immutable after construction
    encoder: Arc<E>,
}

impl<K, E> Clone for OrthographicStore<K, E> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            caching: Arc::clone(&self.caching),
            encoder: Arc::clone(&self.encoder),
        }
    }
}

impl<K, E> OrthographicStore<K, E>
where
    K: Eq + Hash + Clone + Display,
    E: Encoder,
{
    /// Create a store with an empty cache and caching enabled.
    pub fn new(encoder: E) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            caching: Arc::new(AtomicBool::new(true)),
            encoder: Arc::new(encoder),
        }
    }

    /// Whether future cache misses will be memoized.
    pub fn caching_enabled(&self) -> bool {
        self.caching.load(Ordering::Relaxed)
    }

    /// Get the vector for `key`, computing it on a cache miss.
    ///
    /// On a hit the cached vector is returned as-is (shared storage, no
    /// encoder call, no side effect). On a miss the key's `Display`
    /// output is encoded; the result is cached only while caching is
    /// enabled, and returned either way. A failed lookup leaves the
    /// cache untouched.
    pub fn get_vector(&self, key: &K) -> Result<Vector, StoreError> {
        let form = key.to_string();
        if form.is_empty() {
            return Err(StoreError::InvalidKey(form));
        }

        if let Some(vector) = self.cache.read().get(key) {
            return Ok(vector.clone());
        }

        let vector = self.encoder.encode(&form)?;
        if vector.is_empty() {
            return Err(StoreError::EmptyVector(form));
        }

        if self.caching.load(Ordering::Relaxed) {
            self.cache.write().insert(key.clone(), vector.clone());
            debug!(key = %form, dim = vector.dim(), "cached vector on miss");
        }
        Ok(vector)
    }

    /// Whether `key` currently has a cached entry. Never computes.
    pub fn contains_vector(&self, key: &K) -> bool {
        self.cache.read().contains_key(key)
    }

    /// Number of currently cached entries.
    pub fn num_vectors(&self) -> usize {
        self.cache.read().len()
    }

    /// Snapshot of the currently cached entries, in unspecified order.
    pub fn all_vectors(&self) -> impl Iterator<Item = CacheEntry<K>> {
        let snapshot: Vec<CacheEntry<K>> = self
            .cache
            .read()
            .iter()
            .map(|(key, vector)| CacheEntry {
                key: key.clone(),
                vector: vector.clone(),
            })
            .collect();
        snapshot.into_iter()
    }

    /// Empty the cache. The caching flag and encoder are untouched.
    pub fn clear(&self) {
        let mut cache = self.cache.write();
        let removed = cache.len();
        cache.clear();
        if removed > 0 {
            debug!(removed = removed, "cleared vector cache");
        }
    }

    /// Enable or disable memoization of future misses. An enabled cache
    /// speeds up repeated lookups at the cost of memory; disabling does
    /// not evict entries already cached.
    pub fn enable_vector_cache(&self, enabled: bool) {
        self.caching.store(enabled, Ordering::Relaxed);
    }
}

impl<K, E> VectorStore<K> for OrthographicStore<K, E>
where
    K: Eq + Hash + Clone + Display,
    E: Encoder,
{
    fn get_vector(&self, key: &K) -> Result<Vector, StoreError> {
        OrthographicStore::get_vector(self, key)
    }

    fn contains_vector(&self, key: &K) -> bool {
        OrthographicStore::contains_vector(self, key)
    }

    fn num_vectors(&self) -> usize {
        OrthographicStore::num_vectors(self)
    }

    fn all_vectors(&self) -> Box<dyn Iterator<Item = CacheEntry<K>> + '_> {
        Box::new(OrthographicStore::all_vectors(self))
    }

    fn clear(&self) {
        OrthographicStore::clear(self)
    }

    fn enable_vector_cache(&self, enabled: bool) {
        OrthographicStore::enable_vector_cache(self, enabled)
    }

    fn close(&self) {
        // nothing to release; present for uniform disposal of stores
    }
}
