#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn note(text: &str, z: i64) -> Item {
    Item {
        id: ItemId::pending(),
        kind: ItemKind::Note { text: text.to_owned() },
        x: 0.0,
        y: 0.0,
        z_index: z,
    }
}

fn file(name: &str, mime: &str, z: i64) -> Item {
    Item {
        id: ItemId::Committed(format!("doc-{name}")),
        kind: ItemKind::File {
            name: name.to_owned(),
            mime_type: mime.to_owned(),
            url: Some(format!("https://cdn.example/{name}")),
            uploading: false,
        },
        x: 0.0,
        y: 0.0,
        z_index: z,
    }
}

// =============================================================
// ItemId
// =============================================================

#[test]
fn pending_ids_are_unique() {
    assert_ne!(ItemId::pending(), ItemId::pending());
}

#[test]
fn pending_id_is_pending() {
    let id = ItemId::pending();
    assert!(id.is_pending());
    assert!(id.committed().is_none());
}

#[test]
fn committed_id_exposes_document_id() {
    let id = ItemId::Committed("abc123".to_owned());
    assert!(!id.is_pending());
    assert_eq!(id.committed(), Some("abc123"));
}

#[test]
fn display_of_committed_id_is_the_document_id() {
    let id = ItemId::Committed("abc123".to_owned());
    assert_eq!(id.to_string(), "abc123");
}

#[test]
fn display_of_pending_id_is_prefixed() {
    let id = ItemId::pending();
    assert!(id.to_string().starts_with("pending-"));
}

#[test]
fn item_id_serde_round_trip() {
    let id = ItemId::Committed("abc123".to_owned());
    let json = serde_json::to_string(&id).unwrap();
    let back: ItemId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, back);
}

// =============================================================
// Collection / ItemKind
// =============================================================

#[test]
fn collection_names_match_backend() {
    assert_eq!(Collection::Files.as_str(), "files");
    assert_eq!(Collection::Notes.as_str(), "notes");
}

#[test]
fn audio_mime_is_audio() {
    let item = file("song.mp3", "audio/mpeg", 1);
    assert!(item.kind.is_audio());
    assert!(!item.kind.is_image());
}

#[test]
fn image_mime_is_image() {
    let item = file("pic.png", "image/png", 1);
    assert!(item.kind.is_image());
    assert!(!item.kind.is_audio());
}

#[test]
fn plain_file_is_neither_audio_nor_image() {
    let item = file("notes.pdf", "application/pdf", 1);
    assert!(!item.kind.is_audio());
    assert!(!item.kind.is_image());
}

#[test]
fn kind_maps_to_collection() {
    assert_eq!(file("a", "text/plain", 1).kind.collection(), Collection::Files);
    assert_eq!(note("hi", 1).kind.collection(), Collection::Notes);
}

#[test]
fn item_sizes_by_kind() {
    assert_eq!(file("a", "text/plain", 1).size(), (FILE_TILE_SIZE, FILE_TILE_SIZE));
    assert_eq!(note("hi", 1).size(), (NOTE_WIDTH, NOTE_HEIGHT));
}

// =============================================================
// ItemStore: insert / remove / get
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ItemStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.top_z(), 0);
}

#[test]
fn insert_and_get() {
    let mut store = ItemStore::new();
    let item = note("hello", 3);
    let id = item.id.clone();
    store.insert(item);
    assert_eq!(store.len(), 1);
    assert!(store.contains(&id));
    assert_eq!(store.get(&id).map(|i| i.z_index), Some(3));
}

#[test]
fn insert_advances_z_counter() {
    let mut store = ItemStore::new();
    store.insert(note("a", 7));
    assert_eq!(store.top_z(), 7);
    assert_eq!(store.next_z(), 8);
}

#[test]
fn remove_returns_item() {
    let mut store = ItemStore::new();
    let item = note("bye", 1);
    let id = item.id.clone();
    store.insert(item);
    let removed = store.remove(&id);
    assert_eq!(removed.map(|i| i.z_index), Some(1));
    assert!(store.is_empty());
}

#[test]
fn remove_unknown_is_none() {
    let mut store = ItemStore::new();
    assert!(store.remove(&ItemId::pending()).is_none());
}

// =============================================================
// ItemStore: z-order
// =============================================================

#[test]
fn bring_to_front_assigns_unique_monotonic_z() {
    let mut store = ItemStore::new();
    let a = note("a", 1);
    let b = note("b", 2);
    let c = note("c", 3);
    let (ida, idb) = (a.id.clone(), b.id.clone());
    store.insert(a);
    store.insert(b);
    store.insert(c);

    let za = store.bring_to_front(&ida).unwrap();
    let zb = store.bring_to_front(&idb).unwrap();
    assert!(zb > za);
    assert!(za > 3);
    let zs: Vec<i64> = store.sorted_items().iter().map(|i| i.z_index).collect();
    assert_eq!(zs, {
        let mut sorted = zs.clone();
        sorted.sort_unstable();
        sorted
    });
}

#[test]
fn bring_to_front_unknown_id_is_none() {
    let mut store = ItemStore::new();
    assert!(store.bring_to_front(&ItemId::pending()).is_none());
    assert_eq!(store.top_z(), 0);
}

#[test]
fn sorted_items_is_back_to_front() {
    let mut store = ItemStore::new();
    store.insert(note("low", 1));
    store.insert(note("high", 9));
    store.insert(note("mid", 4));
    let zs: Vec<i64> = store.sorted_items().iter().map(|i| i.z_index).collect();
    assert_eq!(zs, vec![1, 4, 9]);
}

// =============================================================
// ItemStore: swap_id
// =============================================================

#[test]
fn swap_id_replaces_placeholder_atomically() {
    let mut store = ItemStore::new();
    let placeholder = note("draft", 2);
    let temp = placeholder.id.clone();
    store.insert(placeholder);

    let mut committed = store.get(&temp).unwrap().clone();
    committed.id = ItemId::Committed("real".to_owned());
    assert!(store.swap_id(&temp, committed));

    assert_eq!(store.len(), 1);
    assert!(!store.contains(&temp));
    assert!(store.contains(&ItemId::Committed("real".to_owned())));
}

#[test]
fn swap_id_with_unknown_old_id_inserts_nothing() {
    let mut store = ItemStore::new();
    let item = note("x", 1);
    assert!(!store.swap_id(&ItemId::pending(), item));
    assert!(store.is_empty());
}

// =============================================================
// ItemStore: load_snapshot
// =============================================================

#[test]
fn load_snapshot_replaces_contents_and_resets_counter() {
    let mut store = ItemStore::new();
    store.insert(note("old", 50));
    store.load_snapshot(vec![note("a", 2), file("b.png", "image/png", 5)]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.top_z(), 5);
}

#[test]
fn load_snapshot_of_empty_board() {
    let mut store = ItemStore::new();
    store.insert(note("old", 50));
    store.load_snapshot(Vec::new());
    assert!(store.is_empty());
    assert_eq!(store.top_z(), 0);
}
