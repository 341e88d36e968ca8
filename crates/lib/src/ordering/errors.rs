//! Error types for ordering operations.

use thiserror::Error;

use crate::item::{ItemId, OwnerId};

/// Errors that can occur while computing or persisting an ordering key.
///
/// Store failures are not translated here; they pass through unchanged as
/// [`StoreError`](crate::store::StoreError).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OrderingError {
    /// Neither neighbor order was supplied, so there is no insertion point
    /// to compute. Dropping into an empty collection is a caller error; a
    /// caller holding zero items has nothing to reorder.
    #[error("Invalid reorder context for owner {owner}: no neighbor orders supplied")]
    InvalidReorderContext {
        /// The owner whose collection was being reordered
        owner: OwnerId,
    },

    /// The item being moved no longer exists at write time, typically
    /// because it was deleted concurrently.
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// The key of the missing item
        id: ItemId,
    },
}

impl OrderingError {
    /// Check if this error indicates a malformed reorder request.
    pub fn is_invalid_context(&self) -> bool {
        matches!(self, OrderingError::InvalidReorderContext { .. })
    }

    /// Check if this error indicates the moved item was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderingError::ItemNotFound { .. })
    }
}

// Conversion from OrderingError to the main Error type
impl From<OrderingError> for crate::Error {
    fn from(err: OrderingError) -> Self {
        crate::Error::Ordering(err)
    }
}
