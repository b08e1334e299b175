//! The board page: initial load, fragment seeding, and layout.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::footer_player::FooterPlayer;
use crate::components::toolbar::Toolbar;

#[cfg(feature = "hydrate")]
use canvas::engine::EngineCore;
#[cfg(feature = "hydrate")]
use canvas::item::Collection;

#[cfg(feature = "hydrate")]
use crate::net::metadata;
#[cfg(feature = "hydrate")]
use crate::net::types::{FileRecord, NoteRecord};
#[cfg(feature = "hydrate")]
use crate::state::load::LoadState;
#[cfg(feature = "hydrate")]
use crate::util::fragment;

/// Fetch both collections and hydrate the engine's store. A failed fetch
/// logs and contributes nothing; the board still comes up.
#[cfg(feature = "hydrate")]
async fn load_board(engine: RwSignal<EngineCore>, load: RwSignal<LoadState>) {
    let (files, notes) = futures::join!(
        metadata::list_all::<FileRecord>(Collection::Files),
        metadata::list_all::<NoteRecord>(Collection::Notes),
    );

    let mut items = Vec::new();
    match files {
        Ok(records) => items.extend(records.into_iter().filter_map(FileRecord::into_item)),
        Err(err) => log::error!("loading files failed: {err}"),
    }
    match notes {
        Ok(records) => items.extend(records.into_iter().filter_map(NoteRecord::into_item)),
        Err(err) => log::error!("loading notes failed: {err}"),
    }

    engine.update(|e| e.load_snapshot(items));
    load.set(LoadState { loading: false });
}

/// Board page: toolbar on top, the pannable surface filling the viewport,
/// and the audio footer.
#[component]
pub fn BoardPage() -> impl IntoView {
    // Shared so the toolbar's picker can place uploads relative to the
    // surface the camera transform is anchored to.
    let surface_ref = NodeRef::<leptos::html::Div>::new();
    provide_context(surface_ref);

    #[cfg(feature = "hydrate")]
    {
        let engine = expect_context::<RwSignal<EngineCore>>();
        let load = expect_context::<RwSignal<LoadState>>();

        // Seed the camera from a shared URL before anything renders.
        if let Some((x, y)) = fragment::read() {
            engine.update(|e| e.seed_pan(x, y));
        }

        wasm_bindgen_futures::spawn_local(load_board(engine, load));
    }

    view! {
        <div class="board-page">
            <Toolbar/>
            <CanvasHost/>
            <FooterPlayer/>
        </div>
    }
}
