//! Error types for store operations.
//!
//! This module defines the error variants any [`ItemStore`](super::ItemStore)
//! implementation can surface. Implementation-specific failures are carried
//! in the `Unavailable` variant so callers can treat them uniformly as I/O
//! trouble.

use thiserror::Error;

use crate::item::ItemId;

/// Errors that can occur during store operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item carries the given primary key.
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// The key that matched no item
        id: ItemId,
    },

    /// The store could not be reached or refused the operation.
    #[error("Store unavailable during {operation}: {reason}")]
    Unavailable {
        /// The store operation that failed
        operation: String,
        /// Description of the failure
        reason: String,
    },
}

impl StoreError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ItemNotFound { .. })
    }

    /// Check if this error indicates the store itself failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable { .. })
    }

    /// Get the key if this is a key-related error.
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            StoreError::ItemNotFound { id } => Some(id),
            _ => None,
        }
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
