//!
//! Galleria: the ordering core of an image gallery backend.
//! This library provides the components needed to keep a user's image
//! collection in a caller-defined order using sparse numeric keys.
//!
//! ## Core Concepts
//!
//! Galleria is built around a few key pieces:
//!
//! * **Items (`item::ImageItem`)**: The persisted record for one image. Each item carries an
//!   `order` value; relative comparison of `order` within one owner's collection defines the
//!   display order. Absolute magnitude is meaningless.
//! * **Item Stores (`store::ItemStore`)**: A pluggable persistence layer. The engine only needs
//!   point lookups, partial order updates, and a small set of neighbor/range queries.
//! * **The Order Engine (`ordering::OrderEngine`)**: Computes a fresh `order` value for an item
//!   dropped between two neighbors, bisecting the gap so that no other record changes in the
//!   common case. When the gap between the neighbors has no representable midpoint left, the
//!   engine re-spaces the surrounding run of items with a fixed stride and retries.
//! * **Backends (`backend::InMemory`)**: A ready-made in-memory store with JSON file
//!   persistence, suitable for tests, development, and small single-process deployments.

pub mod backend;
pub mod constants;
pub mod item;
pub mod ordering;
pub mod store;

/// Re-export the item record and identifier types for easier access.
pub use item::{ImageItem, ItemId, OwnerId};
/// Re-export the engine for easier access.
pub use ordering::OrderEngine;
/// Re-export the store contract for easier access.
pub use store::{Direction, ItemStore};

/// Result type used throughout the Galleria library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Galleria library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured ordering errors from the ordering module
    #[error(transparent)]
    Ordering(ordering::OrderingError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Ordering(_) => "ordering",
            Error::Store(_) => "store",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Ordering(ordering_err) => ordering_err.is_not_found(),
            Error::Store(store_err) => store_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a malformed request from the caller.
    pub fn is_invalid_request(&self) -> bool {
        match self {
            Error::Ordering(ordering_err) => ordering_err.is_invalid_context(),
            _ => false,
        }
    }

    /// Check if this error originated in the store layer.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
