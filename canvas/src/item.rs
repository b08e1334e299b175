//! Board items: files, notes, their ids, and the z-ordered store.
//!
//! Items flow into this layer from the network (the initial load of the
//! `files` and `notes` collections) and from the engine (optimistic creates
//! and drags). An item's id is a tagged union: a locally synthesized
//! [`ItemId::Pending`] until persistence completes, then the backend's
//! [`ItemId::Committed`] document id. The swap is a single store operation so
//! no intermediate state shows both or neither.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{FILE_TILE_SIZE, NOTE_HEIGHT, NOTE_WIDTH};

/// Identifier for a board item.
///
/// `Pending` ids are minted locally for optimistic placeholders and are
/// replaced by the backend-assigned `Committed` id once the create resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemId {
    /// Locally generated placeholder id; never sent to the backend.
    Pending(Uuid),
    /// Backend-assigned document id.
    Committed(String),
}

impl ItemId {
    /// Mint a fresh placeholder id.
    #[must_use]
    pub fn pending() -> Self {
        Self::Pending(Uuid::new_v4())
    }

    /// Whether this id is a not-yet-persisted placeholder.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The backend document id, if this item has been persisted.
    #[must_use]
    pub fn committed(&self) -> Option<&str> {
        match self {
            Self::Pending(_) => None,
            Self::Committed(id) => Some(id),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending(uuid) => write!(f, "pending-{uuid}"),
            Self::Committed(id) => f.write_str(id),
        }
    }
}

/// Backend collection an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Files,
    Notes,
}

impl Collection {
    /// Collection name as used by the metadata store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Notes => "notes",
        }
    }
}

/// What kind of thing an item is, with its per-kind payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    File {
        /// Original filename, shown under the tile.
        name: String,
        /// MIME type as reported by the browser.
        mime_type: String,
        /// Download URL; `None` while the upload is still in flight.
        url: Option<String>,
        /// True for an optimistic placeholder whose bytes are still uploading.
        uploading: bool,
    },
    Note {
        text: String,
    },
}

impl ItemKind {
    /// Whether this is an audio file (click toggles playback).
    #[must_use]
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::File { mime_type, .. } if mime_type.starts_with("audio/"))
    }

    /// Whether this is an image file (rendered inline on the tile).
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, Self::File { mime_type, .. } if mime_type.starts_with("image/"))
    }

    /// The collection this kind persists to.
    #[must_use]
    pub fn collection(&self) -> Collection {
        match self {
            Self::File { .. } => Collection::Files,
            Self::Note { .. } => Collection::Notes,
        }
    }
}

/// A single item placed on the canvas.
///
/// `x` / `y` are the top-left corner in world coordinates. `z_index` is the
/// stacking order; higher values render on top and receive pointer priority.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub x: f64,
    pub y: f64,
    pub z_index: i64,
}

impl Item {
    /// Bounding-box size in world units, by kind.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        match self.kind {
            ItemKind::File { .. } => (FILE_TILE_SIZE, FILE_TILE_SIZE),
            ItemKind::Note { .. } => (NOTE_WIDTH, NOTE_HEIGHT),
        }
    }
}

/// In-memory store of board items plus the global z-order counter.
///
/// The counter only ever increases, and every bring-to-front takes a fresh
/// value, so z-indices are unique and totally ordered.
pub struct ItemStore {
    items: HashMap<ItemId, Item>,
    top_z: i64,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: HashMap::new(), top_z: 0 }
    }

    /// Insert or replace an item, advancing the z counter past it.
    pub fn insert(&mut self, item: Item) {
        self.top_z = self.top_z.max(item.z_index);
        self.items.insert(item.id.clone(), item);
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        self.items.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Highest z-index handed out so far.
    #[must_use]
    pub fn top_z(&self) -> i64 {
        self.top_z
    }

    /// Take the next z-index (for newly created items landing on top).
    pub fn next_z(&mut self) -> i64 {
        self.top_z += 1;
        self.top_z
    }

    /// Bump an item above everything else. Returns its new z-index, or
    /// `None` if the id is unknown.
    pub fn bring_to_front(&mut self, id: &ItemId) -> Option<i64> {
        if !self.items.contains_key(id) {
            return None;
        }
        self.top_z += 1;
        let z = self.top_z;
        if let Some(item) = self.items.get_mut(id) {
            item.z_index = z;
        }
        Some(z)
    }

    /// Atomically replace the item stored under `old` with `item` (which may
    /// carry a different id). Returns false if `old` is unknown, in which
    /// case nothing is inserted.
    pub fn swap_id(&mut self, old: &ItemId, item: Item) -> bool {
        if self.items.remove(old).is_none() {
            return false;
        }
        self.insert(item);
        true
    }

    /// Replace all items with a loaded snapshot, resetting the z counter to
    /// the highest z present.
    pub fn load_snapshot(&mut self, items: Vec<Item>) {
        self.items.clear();
        self.top_z = 0;
        for item in items {
            self.insert(item);
        }
    }

    /// All items sorted by `(z_index, id)` — back-to-front draw order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
