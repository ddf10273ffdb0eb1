//! Vector Type
//!
//! Fixed-dimensional f32 vectors with cheap clone semantics.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// An immutable fixed-dimensional vector of `f32` components.
///
/// Backed by `Arc<[f32]>`, so `Clone` shares the underlying storage:
/// a cache hit hands back the same allocation that was stored, not a
/// copy of the components. Equality compares components.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector(Arc<[f32]>);

impl Vector {
    /// Create a vector from its components.
    pub fn from_values(values: Vec<f32>) -> Self {
        Self(values.into())
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Components as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// True if both vectors share the same underlying allocation.
    pub fn shares_storage(&self, other: &Vector) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<f32>> for Vector {
    fn from(values: Vec<f32>) -> Self {
        Self::from_values(values)
    }
}

impl From<&[f32]> for Vector {
    fn from(values: &[f32]) -> Self {
        Self(values.into())
    }
}

impl Index<usize> for Vector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
