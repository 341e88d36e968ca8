//! Fractional ordering engine for item collections.
//!
//! Items carry a sparse numeric `order` key; moving an item between two
//! neighbors assigns it the midpoint of their keys, so the common case
//! rewrites exactly one record. Floating-point gaps are finite, though:
//! once two neighbors are so close that their midpoint rounds onto one of
//! them, the run of items around the insertion point is re-spaced with a
//! fixed stride and the computation retried against the re-spaced keys.
//!
//! The engine holds no state of its own. The current order of every item
//! lives behind the injected [`ItemStore`]; each operation is a plain
//! sequence of store calls.

pub mod errors;

pub use errors::OrderingError;

use crate::Result;
use crate::constants::{APPEND_SPACING, END_GAP, REBALANCE_BASE_ORDER, REBALANCE_SPACING};
use crate::item::{ImageItem, ItemId, OwnerId};
use crate::store::{Direction, ItemStore};


/// Computes and persists ordering keys on top of an [`ItemStore`].
///
/// A reorder request names the owner, the item being moved, and the order
/// values of the items that will flank it after the move; either value
/// may be absent when the item is dropped at an end of the list. The engine
/// turns that into a single fresh `order` value, re-spacing neighbors first
/// when the gap is exhausted.
pub struct OrderEngine<S> {
    store: S,
}

impl<S: ItemStore> OrderEngine<S> {
    /// Creates an engine over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the engine and returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Moves an item: computes its new ordering key and persists it.
    ///
    /// # Arguments
    /// * `item_id` - The item being moved
    /// * `owner` - The collection the item belongs to
    /// * `previous_order` - Order of the item that will precede it, if any
    /// * `next_order` - Order of the item that will follow it, if any
    ///
    /// # Returns
    /// The updated item.
    ///
    /// # Errors
    /// * [`OrderingError::InvalidReorderContext`] if both neighbor orders are absent
    /// * [`OrderingError::ItemNotFound`] if the item vanished before the final write
    /// * Store errors pass through unchanged
    pub async fn reorder(
        &self,
        item_id: &ItemId,
        owner: &OwnerId,
        previous_order: Option<f64>,
        next_order: Option<f64>,
    ) -> Result<ImageItem> {
        let order = self
            .compute_order(owner, previous_order, next_order)
            .await?;

        tracing::debug!("moving item {item_id} of owner {owner} to order {order}");

        match self.store.update_order(item_id, order).await? {
            Some(item) => Ok(item),
            None => Err(OrderingError::ItemNotFound {
                id: item_id.clone(),
            }
            .into()),
        }
    }

    /// Computes a fresh ordering key for an item dropped between the given
    /// neighbor orders, without persisting anything for the moved item.
    ///
    /// Pure with respect to the store in the common case: only the
    /// re-spacing pass writes, and only when the gap between the neighbors
    /// has no representable midpoint left.
    ///
    /// # Errors
    /// * [`OrderingError::InvalidReorderContext`] if both bounds are absent;
    ///   raised before any store access
    pub async fn compute_order(
        &self,
        owner: &OwnerId,
        previous_order: Option<f64>,
        next_order: Option<f64>,
    ) -> Result<f64> {
        let candidate = self.candidate(owner, previous_order, next_order).await?;

        if same_order(previous_order, candidate) || same_order(next_order, candidate) {
            tracing::warn!(
                "order gap exhausted between {previous_order:?} and {next_order:?} for owner {owner}; re-spacing"
            );
            let (fresh_previous, fresh_next) = self
                .rebalance(owner, previous_order, next_order)
                .await?;
            // One pass is enough: the stride leaves ample room, so the retry
            // skips the collision check.
            return self.candidate(owner, fresh_previous, fresh_next).await;
        }

        Ok(candidate)
    }

    /// Seeds ordering keys for a batch of new items and inserts them at the
    /// tail of the owner's collection.
    ///
    /// Each item lands at `max_order + (i + 1) * 1000`, leaving headroom
    /// between every pair for future moves.
    ///
    /// # Returns
    /// The inserted items, in input order, with their assigned keys.
    pub async fn append(
        &self,
        owner: &OwnerId,
        mut items: Vec<ImageItem>,
    ) -> Result<Vec<ImageItem>> {
        let max_order = self.store.find_max_order(owner).await?;

        for (i, item) in items.iter_mut().enumerate() {
            item.order = max_order + (i as f64 + 1.0) * APPEND_SPACING;
        }

        self.store.insert_many(items).await
    }

    /// One round of the candidate computation: the case split over which
    /// bounds are present, with no collision handling.
    async fn candidate(
        &self,
        owner: &OwnerId,
        previous_order: Option<f64>,
        next_order: Option<f64>,
    ) -> Result<f64> {
        match (previous_order, next_order) {
            (Some(previous), Some(next)) => Ok(midpoint(previous, next)),
            (None, Some(next)) => {
                // Dropped at the start. Anything still in front of the
                // insertion point (usually the moved item's own old slot)
                // bounds the bisection; otherwise step past the minimum.
                match self
                    .store
                    .find_nearest_order_by_direction(owner, next, Direction::Previous)
                    .await?
                {
                    Some(nearest) => Ok(midpoint(nearest, next)),
                    None => Ok(next - END_GAP),
                }
            }
            (Some(previous), None) => {
                // Dropped at the end; mirror of the case above.
                match self
                    .store
                    .find_nearest_order_by_direction(owner, previous, Direction::Next)
                    .await?
                {
                    Some(nearest) => Ok(midpoint(previous, nearest)),
                    None => Ok(previous + END_GAP),
                }
            }
            (None, None) => Err(OrderingError::InvalidReorderContext {
                owner: owner.clone(),
            }
            .into()),
        }
    }

    /// Re-spaces the run of items around the insertion point with a fixed
    /// stride, restoring headroom for bisection.
    ///
    /// Returns the bounds mapped onto their re-spaced values: for each
    /// supplied bound whose item was part of the rewritten run, the order
    /// value that item now carries. The retry computation must use these
    /// rather than the caller-supplied values, since the flanking items are
    /// in the rewritten run by construction and the old bounds no longer
    /// describe the collection.
    ///
    /// Writes are independent and immediately committed; a failure partway
    /// through aborts the operation and leaves the earlier rewrites in
    /// place (still a valid total order, with smaller gaps).
    async fn rebalance(
        &self,
        owner: &OwnerId,
        previous_order: Option<f64>,
        next_order: Option<f64>,
    ) -> Result<(Option<f64>, Option<f64>)> {
        let surrounding = self
            .store
            .find_surrounding(owner, previous_order, next_order)
            .await?;

        tracing::debug!(
            "re-spacing {} items around ({previous_order:?}, {next_order:?}) for owner {owner}",
            surrounding.len()
        );

        let mut fresh_previous = previous_order;
        let mut fresh_next = next_order;
        let mut base_order = REBALANCE_BASE_ORDER;

        for item in &surrounding {
            if self.store.update_order(&item.id, base_order).await?.is_none() {
                // Deleted concurrently; nothing left to renumber.
                tracing::warn!("item {} vanished during re-spacing; skipping", item.id);
                continue;
            }
            if same_order(previous_order, item.order) {
                fresh_previous = Some(base_order);
            }
            if same_order(next_order, item.order) {
                fresh_next = Some(base_order);
            }
            base_order += REBALANCE_SPACING;
        }

        Ok((fresh_previous, fresh_next))
    }
}

/// Midpoint of two ordering keys.
fn midpoint(previous: f64, next: f64) -> f64 {
    (previous + next) / 2.0
}

/// Whether `candidate` lands exactly on a supplied bound.
///
/// Exact comparison is the point: the gap is exhausted precisely when the
/// midpoint rounds onto one of the boundary values.
#[allow(clippy::float_cmp)]
fn same_order(bound: Option<f64>, candidate: f64) -> bool {
    bound.is_some_and(|b| b == candidate)
}
