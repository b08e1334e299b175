//! A file on the board: inline image, or an icon tile for other types.

#[cfg(test)]
#[path = "file_tile_test.rs"]
mod file_tile_test;

use canvas::consts::FILE_TILE_SIZE;
use canvas::item::{Item, ItemKind};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use canvas::engine::EngineCore;

#[cfg(feature = "hydrate")]
use crate::net::actions;
#[cfg(feature = "hydrate")]
use crate::state::player::PlayerState;

/// Icon for a non-image file, derived from its MIME type.
#[must_use]
pub fn file_icon(mime_type: &str) -> &'static str {
    if mime_type.starts_with("audio/") {
        "\u{1f3b5}"
    } else {
        "\u{1f4c4}"
    }
}

/// One file tile, positioned in world coordinates inside the board layer.
///
/// Uploading tiles render half-opacity with a spinner; the selected tile
/// exposes a delete button. Clicking an audio tile toggles playback, but
/// that routing happens in the engine, not here.
#[component]
pub fn FileTile(item: Item, selected: bool, playing: bool) -> impl IntoView {
    let (name, mime_type, url, uploading) = match &item.kind {
        ItemKind::File { name, mime_type, url, uploading } => {
            (name.clone(), mime_type.clone(), url.clone(), *uploading)
        }
        ItemKind::Note { .. } => (String::new(), String::new(), None, false),
    };
    let is_image = item.kind.is_image();
    let position = format!(
        "left: {}px; top: {}px; width: {}px; z-index: {};",
        item.x, item.y, FILE_TILE_SIZE, item.z_index
    );

    let on_delete = {
        #[cfg(feature = "hydrate")]
        {
            let engine = expect_context::<RwSignal<EngineCore>>();
            let player = expect_context::<RwSignal<PlayerState>>();
            let id = item.id.clone();
            move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
                if player.with_untracked(|p| p.track.as_ref().is_some_and(|t| t.id == id)) {
                    player.update(PlayerState::stop);
                }
                let follow_ups = engine.try_update(|e| e.delete_item(&id)).unwrap_or_default();
                actions::perform(engine, player, follow_ups);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };
    let on_delete_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="file-tile"
            class=("file-tile--selected", selected)
            class=("file-tile--uploading", uploading)
            class=("file-tile--playing", playing)
            style=position
        >
            {if is_image && url.is_some() {
                view! { <img class="file-tile__image" src=url.unwrap_or_default() alt=name.clone()/> }.into_any()
            } else {
                view! { <span class="file-tile__icon">{file_icon(&mime_type)}</span> }.into_any()
            }}
            <div class="file-tile__name">{name}</div>
            {uploading.then(|| view! { <div class="file-tile__spinner"></div> })}
            {(selected && !uploading)
                .then(|| {
                    view! {
                        <button
                            class="file-tile__delete"
                            on:pointerdown=on_delete_pointer_down
                            on:click=on_delete
                        >
                            "\u{2715}"
                        </button>
                    }
                })}
        </div>
    }
}
