//! Wire DTOs for the metadata collections, and their conversions to and
//! from the engine's [`Item`] model.
//!
//! Field names mirror the backend documents (`type`, `zIndex`, `createdAt`)
//! so serde round-trips stay lossless; the Rust side uses its own names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use canvas::item::{Item, ItemId, ItemKind};
use serde::{Deserialize, Serialize};

/// A position in world coordinates, as stored in document records.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A document in the `files` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Backend-assigned document id. Absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Original file name, shown under the tile.
    pub name: String,
    /// MIME type reported by the browser at drop time.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Public download URL in object storage.
    pub url: String,
    /// Tile position in world coordinates.
    pub position: Position,
    /// Stacking order; higher draws on top.
    #[serde(rename = "zIndex")]
    pub z_index: i64,
    /// Creation timestamp in milliseconds since the Unix epoch.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// A document in the `notes` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Backend-assigned document id. Absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Note text. Never empty: empty commits delete the note instead.
    pub text: String,
    /// Note position in world coordinates.
    pub position: Position,
    /// Stacking order; higher draws on top.
    #[serde(rename = "zIndex")]
    pub z_index: i64,
}

/// Response body of a successful document create.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

impl FileRecord {
    /// Build the create payload for a committed upload.
    #[must_use]
    pub fn create_payload(name: &str, mime_type: &str, url: &str, x: f64, y: f64, z_index: i64, created_at: i64) -> Self {
        Self {
            id: None,
            name: name.to_owned(),
            mime_type: mime_type.to_owned(),
            url: url.to_owned(),
            position: Position { x, y },
            z_index,
            created_at: Some(created_at),
        }
    }

    /// Convert a fetched document into a board item. Documents without an
    /// id cannot be addressed and are dropped.
    #[must_use]
    pub fn into_item(self) -> Option<Item> {
        let id = self.id?;
        Some(Item {
            id: ItemId::Committed(id),
            kind: ItemKind::File {
                name: self.name,
                mime_type: self.mime_type,
                url: Some(self.url),
                uploading: false,
            },
            x: self.position.x,
            y: self.position.y,
            z_index: self.z_index,
        })
    }
}

impl NoteRecord {
    /// Build the create payload for a note's first non-empty commit.
    #[must_use]
    pub fn create_payload(text: &str, x: f64, y: f64, z_index: i64) -> Self {
        Self { id: None, text: text.to_owned(), position: Position { x, y }, z_index }
    }

    /// Convert a fetched document into a board item.
    #[must_use]
    pub fn into_item(self) -> Option<Item> {
        let id = self.id?;
        Some(Item {
            id: ItemId::Committed(id),
            kind: ItemKind::Note { text: self.text },
            x: self.position.x,
            y: self.position.y,
            z_index: self.z_index,
        })
    }
}

/// Partial-update body for a position write (drag end).
#[must_use]
pub fn position_patch(x: f64, y: f64) -> serde_json::Value {
    serde_json::json!({ "position": { "x": x, "y": y } })
}

/// Partial-update body for a note text write.
#[must_use]
pub fn text_patch(text: &str) -> serde_json::Value {
    serde_json::json!({ "text": text })
}
