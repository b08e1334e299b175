use super::*;

use crate::consts::{FILE_TILE_SIZE, NOTE_WIDTH};
use crate::item::ItemKind;

// =============================================================
// Helpers
// =============================================================

fn note_at(x: f64, y: f64, z: i64) -> Item {
    Item {
        id: ItemId::pending(),
        kind: ItemKind::Note { text: "hi".to_owned() },
        x,
        y,
        z_index: z,
    }
}

fn file_at(x: f64, y: f64, z: i64) -> Item {
    Item {
        id: ItemId::pending(),
        kind: ItemKind::File {
            name: "a.txt".to_owned(),
            mime_type: "text/plain".to_owned(),
            url: None,
            uploading: false,
        },
        x,
        y,
        z_index: z,
    }
}

// =============================================================
// contains
// =============================================================

#[test]
fn point_inside_file_tile_hits() {
    let item = file_at(10.0, 10.0, 1);
    assert!(contains(&item, Point::new(10.0, 10.0)));
    assert!(contains(&item, Point::new(10.0 + FILE_TILE_SIZE, 10.0 + FILE_TILE_SIZE)));
    assert!(contains(&item, Point::new(80.0, 80.0)));
}

#[test]
fn point_outside_file_tile_misses() {
    let item = file_at(10.0, 10.0, 1);
    assert!(!contains(&item, Point::new(9.9, 10.0)));
    assert!(!contains(&item, Point::new(10.0 + FILE_TILE_SIZE + 0.1, 10.0)));
}

#[test]
fn note_bounds_differ_from_file_bounds() {
    let item = note_at(0.0, 0.0, 1);
    assert!(contains(&item, Point::new(NOTE_WIDTH - 1.0, 1.0)));
    assert!(!contains(&item, Point::new(NOTE_WIDTH + 1.0, 1.0)));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn empty_store_hits_nothing() {
    let store = ItemStore::new();
    assert!(hit_test(Point::new(0.0, 0.0), &store).is_none());
}

#[test]
fn hit_finds_the_item_under_the_point() {
    let mut store = ItemStore::new();
    let item = file_at(100.0, 100.0, 1);
    let id = item.id.clone();
    store.insert(item);
    assert_eq!(hit_test(Point::new(120.0, 120.0), &store), Some(id));
    assert!(hit_test(Point::new(0.0, 0.0), &store).is_none());
}

#[test]
fn higher_z_intercepts_the_pointer_first() {
    let mut store = ItemStore::new();
    let below = file_at(0.0, 0.0, 1);
    let above = file_at(50.0, 50.0, 2);
    let above_id = above.id.clone();
    store.insert(below);
    store.insert(above);
    // (60, 60) is inside both tiles; the higher z wins.
    assert_eq!(hit_test(Point::new(60.0, 60.0), &store), Some(above_id));
}

#[test]
fn bring_to_front_changes_the_winner() {
    let mut store = ItemStore::new();
    let a = file_at(0.0, 0.0, 1);
    let b = file_at(0.0, 0.0, 2);
    let (ida, idb) = (a.id.clone(), b.id.clone());
    store.insert(a);
    store.insert(b);
    assert_eq!(hit_test(Point::new(10.0, 10.0), &store), Some(idb));
    store.bring_to_front(&ida);
    assert_eq!(hit_test(Point::new(10.0, 10.0), &store), Some(ida));
}
