//! The persisted image record and its identifier types.

mod id;

pub use id::{ItemId, OwnerId};

use serde::{Deserialize, Serialize};

/// A single image record as persisted by an [`ItemStore`](crate::store::ItemStore).
///
/// The `order` field is a sparse numeric key: numeric comparison of `order`
/// between items of the same owner defines the display order, and nothing
/// else about its value is meaningful. New items are seeded at the tail with
/// a wide stride so that later drag-and-drop moves can bisect the gaps; see
/// [`OrderEngine`](crate::ordering::OrderEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    /// Primary key.
    pub id: ItemId,
    /// Partition key; order values are only compared within one owner.
    pub owner: OwnerId,
    /// Display title.
    pub title: String,
    /// File name as originally uploaded.
    pub original_file_name: String,
    /// MIME type of the stored blob.
    pub mime_type: String,
    /// Size of the stored blob in bytes.
    pub file_size: u64,
    /// Location of the stored blob.
    pub url: String,
    /// Sparse ordering key. Managed by the ordering engine after creation.
    pub order: f64,
}

impl ImageItem {
    /// Creates a new item with a generated ID and empty file metadata.
    ///
    /// The order is left at `0.0`; the append path assigns the real value
    /// before the item is inserted.
    pub fn new(owner: impl Into<OwnerId>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            owner: owner.into(),
            title: title.into(),
            original_file_name: String::new(),
            mime_type: String::new(),
            file_size: 0,
            url: url.into(),
            order: 0.0,
        }
    }

    /// Attaches upload metadata to the item.
    pub fn with_file_metadata(
        mut self,
        original_file_name: impl Into<String>,
        mime_type: impl Into<String>,
        file_size: u64,
    ) -> Self {
        self.original_file_name = original_file_name.into();
        self.mime_type = mime_type.into();
        self.file_size = file_size;
        self
    }

    /// Sets the ordering key.
    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }
}
