//! The persistence contract required by the ordering engine.
//!
//! This module defines the [`ItemStore`] trait. The engine is independent of
//! the storage mechanism; anything that can answer the neighbor and range
//! queries below can back it, whether an embedded map or a remote database.
//! The crate ships one implementation,
//! [`backend::InMemory`](crate::backend::InMemory).

pub mod errors;

pub use errors::StoreError;

use async_trait::async_trait;

use crate::Result;
use crate::item::{ImageItem, ItemId, OwnerId};

/// Search direction for [`ItemStore::find_nearest_order_by_direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// The nearest order strictly less than the boundary.
    Previous,
    /// The nearest order strictly greater than the boundary.
    Next,
}

/// Storage abstraction for image records and their ordering keys.
///
/// Implementations handle the specifics of how items are persisted. All
/// operations are point or range queries over a single owner's collection,
/// except the point lookups keyed by item ID.
///
/// Writes are independent and immediately committed: the engine's rebalance
/// pass issues one `update_order` per item and expects no transaction
/// wrapping. A write that fails mid-pass leaves earlier writes in place;
/// the resulting collection still carries a valid total order, just with
/// irregular gaps.
///
/// All store implementations must be `Send` and `Sync` to allow sharing
/// across tasks.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Inserts a batch of fully-populated items.
    ///
    /// The caller is responsible for assigning `order` values first; see
    /// [`OrderEngine::append`](crate::ordering::OrderEngine::append).
    ///
    /// # Returns
    /// The inserted items, in input order.
    async fn insert_many(&self, items: Vec<ImageItem>) -> Result<Vec<ImageItem>>;

    /// Retrieves an item by its primary key.
    ///
    /// # Returns
    /// The item, or [`StoreError::ItemNotFound`] if no item carries the key.
    async fn get(&self, id: &ItemId) -> Result<ImageItem>;

    /// Deletes an item by its primary key.
    ///
    /// No renumbering happens on delete; the removed order value simply
    /// leaves a wider gap behind.
    ///
    /// # Returns
    /// [`StoreError::ItemNotFound`] if no item carries the key.
    async fn delete(&self, id: &ItemId) -> Result<()>;

    /// Lists an owner's items in ascending order of their ordering key.
    async fn list(&self, owner: &OwnerId) -> Result<Vec<ImageItem>>;

    /// Returns the highest order value in an owner's collection, or `0.0`
    /// when the owner has no items.
    ///
    /// Used by the append path to seed order values for new items.
    async fn find_max_order(&self, owner: &OwnerId) -> Result<f64>;

    /// Returns the order value nearest to `boundary` in the given direction,
    /// or `None` when no item lies strictly beyond the boundary.
    ///
    /// The boundary itself is excluded: `Direction::Previous` means strictly
    /// less than `boundary`, `Direction::Next` strictly greater.
    async fn find_nearest_order_by_direction(
        &self,
        owner: &OwnerId,
        boundary: f64,
        direction: Direction,
    ) -> Result<Option<f64>>;

    /// Returns the run of items surrounding an insertion point, ascending by
    /// order.
    ///
    /// The window contains every item whose order lies within the supplied
    /// bounds, inclusive, extending to the end of the collection where a
    /// bound is absent. It therefore always contains the items immediately
    /// flanking the insertion point.
    async fn find_surrounding(
        &self,
        owner: &OwnerId,
        previous_order: Option<f64>,
        next_order: Option<f64>,
    ) -> Result<Vec<ImageItem>>;

    /// Updates the ordering key of a single item.
    ///
    /// # Returns
    /// The updated item, or `None` when no item carries the key. A missing
    /// item is not an error at this layer; the engine decides whether that
    /// matters for the operation in flight.
    async fn update_order(&self, id: &ItemId, order: f64) -> Result<Option<ImageItem>>;
}
