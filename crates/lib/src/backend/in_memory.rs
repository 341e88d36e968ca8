//! In-memory item store implementation.
//!
//! This module provides an in-memory implementation of the [`ItemStore`]
//! trait, suitable for testing, development, or scenarios where data
//! persistence is not strictly required or is handled externally.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::Result;
use crate::item::{ImageItem, ItemId, OwnerId};
use crate::store::{Direction, ItemStore, StoreError};

/// A simple in-memory item store using a `HashMap` keyed by item ID.
///
/// It provides basic persistence capabilities via `save_to_file` and
/// `load_from_file`, serializing all items to JSON.
///
/// Reads and writes take the lock per call; there is no cross-call
/// coordination, matching the independent-write semantics the engine
/// expects from any store.
#[derive(Debug, Default)]
pub struct InMemory {
    /// Item storage with read-write lock for concurrent access
    items: RwLock<HashMap<ItemId, ImageItem>>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of items currently stored, across all owners.
    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    /// Returns true if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }

    /// Saves all items to a specified file as JSON.
    ///
    /// # Arguments
    /// * `path` - The path to the file where the state should be saved.
    ///
    /// # Returns
    /// A `Result` indicating success or an I/O or serialization error.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let items = self.items.read().unwrap();
        let all: Vec<&ImageItem> = items.values().collect();
        let json = serde_json::to_string_pretty(&all)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads store state from a specified JSON file.
    ///
    /// If the file does not exist, a new, empty `InMemory` store is returned.
    ///
    /// # Arguments
    /// * `path` - The path to the file from which to load the state.
    ///
    /// # Returns
    /// A `Result` containing the loaded `InMemory` store or an I/O or
    /// deserialization error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let json = std::fs::read_to_string(path)?;
        let all: Vec<ImageItem> = serde_json::from_str(&json)?;
        let items = all.into_iter().map(|item| (item.id.clone(), item)).collect();

        Ok(Self {
            items: RwLock::new(items),
        })
    }
}

#[async_trait]
impl ItemStore for InMemory {
    async fn insert_many(&self, new_items: Vec<ImageItem>) -> Result<Vec<ImageItem>> {
        let mut items = self.items.write().unwrap();
        for item in &new_items {
            items.insert(item.id.clone(), item.clone());
        }
        Ok(new_items)
    }

    async fn get(&self, id: &ItemId) -> Result<ImageItem> {
        let items = self.items.read().unwrap();
        items
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::ItemNotFound { id: id.clone() }.into())
    }

    async fn delete(&self, id: &ItemId) -> Result<()> {
        let mut items = self.items.write().unwrap();
        match items.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::ItemNotFound { id: id.clone() }.into()),
        }
    }

    async fn list(&self, owner: &OwnerId) -> Result<Vec<ImageItem>> {
        let items = self.items.read().unwrap();
        let mut owned: Vec<ImageItem> = items
            .values()
            .filter(|item| &item.owner == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.order.total_cmp(&b.order));
        Ok(owned)
    }

    async fn find_max_order(&self, owner: &OwnerId) -> Result<f64> {
        let items = self.items.read().unwrap();
        let max = items
            .values()
            .filter(|item| &item.owner == owner)
            .map(|item| item.order)
            .fold(None, |acc: Option<f64>, order| match acc {
                Some(current) if current.total_cmp(&order).is_ge() => Some(current),
                _ => Some(order),
            });
        Ok(max.unwrap_or(0.0))
    }

    async fn find_nearest_order_by_direction(
        &self,
        owner: &OwnerId,
        boundary: f64,
        direction: Direction,
    ) -> Result<Option<f64>> {
        let items = self.items.read().unwrap();
        let orders = items
            .values()
            .filter(|item| &item.owner == owner)
            .map(|item| item.order);

        let nearest = match direction {
            Direction::Previous => orders
                .filter(|order| *order < boundary)
                .fold(None, |acc: Option<f64>, order| match acc {
                    Some(current) if current.total_cmp(&order).is_ge() => Some(current),
                    _ => Some(order),
                }),
            Direction::Next => orders
                .filter(|order| *order > boundary)
                .fold(None, |acc: Option<f64>, order| match acc {
                    Some(current) if current.total_cmp(&order).is_le() => Some(current),
                    _ => Some(order),
                }),
        };

        Ok(nearest)
    }

    async fn find_surrounding(
        &self,
        owner: &OwnerId,
        previous_order: Option<f64>,
        next_order: Option<f64>,
    ) -> Result<Vec<ImageItem>> {
        let items = self.items.read().unwrap();
        let mut window: Vec<ImageItem> = items
            .values()
            .filter(|item| &item.owner == owner)
            .filter(|item| previous_order.is_none_or(|previous| item.order >= previous))
            .filter(|item| next_order.is_none_or(|next| item.order <= next))
            .cloned()
            .collect();
        window.sort_by(|a, b| a.order.total_cmp(&b.order));
        Ok(window)
    }

    async fn update_order(&self, id: &ItemId, order: f64) -> Result<Option<ImageItem>> {
        let mut items = self.items.write().unwrap();
        match items.get_mut(id) {
            Some(item) => {
                item.order = order;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }
}
