//! Interpreter for the engine's persistence [`Action`]s.
//!
//! The engine mutates local state synchronously and hands back actions; this
//! module is the host side of that contract. Each action maps to a backend
//! call on a spawned task, a player-state transition, or a fragment write.
//! Actions that name a still-pending id cannot address a backend record and
//! are skipped (last write wins once the create resolves).

#[cfg(feature = "hydrate")]
use canvas::engine::{Action, EngineCore};
#[cfg(feature = "hydrate")]
use canvas::item::{Collection, ItemId, ItemKind};
#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::spawn_local;

#[cfg(feature = "hydrate")]
use crate::net::metadata;
#[cfg(feature = "hydrate")]
use crate::net::types::{NoteRecord, position_patch, text_patch};
#[cfg(feature = "hydrate")]
use crate::state::player::PlayerState;
#[cfg(feature = "hydrate")]
use crate::util::fragment;

/// Perform a batch of engine actions. Network work is spawned; the call
/// itself never blocks the event handler that produced the actions.
#[cfg(feature = "hydrate")]
pub fn perform(engine: RwSignal<EngineCore>, player: RwSignal<PlayerState>, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::PersistMove { collection, id, x, y } => {
                let Some(doc) = id.committed().map(ToOwned::to_owned) else {
                    log::debug!("skipping position write for unresolved {id}");
                    continue;
                };
                spawn_local(async move {
                    if let Err(err) = metadata::update(collection, &doc, &position_patch(x, y)).await {
                        log::error!("position write for {doc} failed: {err}");
                    }
                });
            }
            Action::CreateNote { temp_id, x, y, z_index, text } => {
                spawn_local(async move {
                    let record = NoteRecord::create_payload(&text, x, y, z_index);
                    match metadata::create(Collection::Notes, &record).await {
                        Ok(real_id) => {
                            let follow_ups = engine
                                .try_update(|e| e.commit_note_create(&temp_id, real_id))
                                .unwrap_or_default();
                            perform(engine, player, follow_ups);
                        }
                        Err(err) => {
                            log::error!("note create failed: {err}");
                            engine.update(|e| e.fail_note_create(&temp_id));
                        }
                    }
                });
            }
            Action::UpdateNoteText { id, text } => {
                let Some(doc) = id.committed().map(ToOwned::to_owned) else {
                    log::debug!("skipping text write for unresolved {id}");
                    continue;
                };
                spawn_local(async move {
                    if let Err(err) = metadata::update(Collection::Notes, &doc, &text_patch(&text)).await {
                        log::error!("note text write for {doc} failed: {err}");
                    }
                });
            }
            Action::DeleteRecord { collection, id } => {
                let Some(doc) = id.committed().map(ToOwned::to_owned) else {
                    continue;
                };
                spawn_local(async move {
                    if let Err(err) = metadata::delete(collection, &doc).await {
                        log::error!("delete of {doc} failed: {err}");
                    }
                });
            }
            Action::ToggleAudio { id } => toggle_audio(engine, player, &id),
            Action::StopAudio => player.update(PlayerState::stop),
            Action::PanChanged => {
                let (x, y) = engine.with_untracked(|e| {
                    let camera = e.camera();
                    (camera.pan_x, camera.pan_y)
                });
                fragment::write(x, y);
            }
        }
    }
}

/// Load the clicked audio file into the player, or pause/resume it if it is
/// already loaded. Tiles still uploading have no URL yet and are ignored.
#[cfg(feature = "hydrate")]
fn toggle_audio(engine: RwSignal<EngineCore>, player: RwSignal<PlayerState>, id: &ItemId) {
    let track = engine.with_untracked(|e| {
        e.item(id).and_then(|item| match &item.kind {
            ItemKind::File { name, url: Some(url), .. } => Some((name.clone(), url.clone())),
            _ => None,
        })
    });
    if let Some((name, url)) = track {
        player.update(|p| p.toggle(id, &name, &url));
    }
}
