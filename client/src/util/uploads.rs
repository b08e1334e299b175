//! Upload pipeline: placement math plus the drop/picker upload driver.
//!
//! Both entry points (drag-and-drop and the file picker) feed the same
//! path: insert an uploading placeholder, put the bytes into object
//! storage, create the metadata record, then resolve the placeholder.

#[cfg(test)]
#[path = "uploads_test.rs"]
mod uploads_test;

use canvas::camera::{Camera, Point};
use canvas::consts::FILE_TILE_SIZE;

#[cfg(feature = "hydrate")]
use canvas::engine::EngineCore;
#[cfg(feature = "hydrate")]
use canvas::item::Collection;
#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::spawn_local;

#[cfg(feature = "hydrate")]
use crate::net::types::FileRecord;
#[cfg(feature = "hydrate")]
use crate::net::{actions, metadata, object_store};
#[cfg(feature = "hydrate")]
use crate::state::player::PlayerState;
#[cfg(feature = "hydrate")]
use crate::util::now_ms;

/// World-space tile origin so the tile is centered under a screen point.
#[must_use]
pub fn tile_origin_at(camera: &Camera, screen: Point) -> Point {
    let world = camera.screen_to_world(screen);
    Point::new(world.x - FILE_TILE_SIZE / 2.0, world.y - FILE_TILE_SIZE / 2.0)
}

/// Placement for picker uploads: centered in the visible board surface.
#[must_use]
pub fn picker_origin(camera: &Camera, surface_w: f64, surface_h: f64) -> Point {
    tile_origin_at(camera, Point::new(surface_w / 2.0, surface_h / 2.0))
}

/// Drive one file through the upload pipeline, starting from an optimistic
/// placeholder at `origin`. Failures discard the placeholder and log.
#[cfg(feature = "hydrate")]
pub fn start_upload(
    engine: RwSignal<EngineCore>,
    player: RwSignal<PlayerState>,
    file: web_sys::File,
    origin: Point,
) {
    let name = file.name();
    let mime = file.type_();
    let Some((temp, z_index)) = engine.try_update(|e| {
        let id = e.begin_upload(name.clone(), mime.clone(), origin.x, origin.y);
        let z = e.item(&id).map_or(0, |item| item.z_index);
        (id, z)
    }) else {
        return;
    };

    spawn_local(async move {
        let path = object_store::storage_path(now_ms(), &name);
        let url = match object_store::put(&path, &file).await {
            Ok(url) => url,
            Err(err) => {
                log::error!("upload of {name} failed: {err}");
                engine.update(|e| e.fail_upload(&temp));
                return;
            }
        };

        // The placeholder may have been dragged while the bytes uploaded;
        // record wherever it is now.
        let (x, y) = engine.with_untracked(|e| {
            e.item(&temp).map_or((origin.x, origin.y), |item| (item.x, item.y))
        });
        let record = FileRecord::create_payload(&name, &mime, &url, x, y, z_index, now_ms());
        match metadata::create(Collection::Files, &record).await {
            Ok(real_id) => {
                let follow_ups = engine
                    .try_update(|e| e.finish_upload(&temp, real_id, url))
                    .unwrap_or_default();
                actions::perform(engine, player, follow_ups);
            }
            Err(err) => {
                log::error!("metadata create for {name} failed: {err}");
                engine.update(|e| e.fail_upload(&temp));
            }
        }
    });
}
