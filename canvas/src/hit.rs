//! Hit-testing pointer positions against board items.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::item::{Item, ItemId, ItemStore};

/// Whether `world_pt` falls inside the item's bounding box.
#[must_use]
pub fn contains(item: &Item, world_pt: Point) -> bool {
    let (w, h) = item.size();
    world_pt.x >= item.x && world_pt.x <= item.x + w && world_pt.y >= item.y && world_pt.y <= item.y + h
}

/// The topmost item under `world_pt`, if any.
///
/// Items are checked front-to-back so higher z-indices intercept the pointer
/// first.
#[must_use]
pub fn hit_test(world_pt: Point, store: &ItemStore) -> Option<ItemId> {
    store
        .sorted_items()
        .iter()
        .rev()
        .find(|item| contains(item, world_pt))
        .map(|item| item.id.clone())
}
