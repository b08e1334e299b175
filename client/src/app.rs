//! Root application component and shared context wiring.

use canvas::engine::EngineCore;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::board::BoardPage;
use crate::state::load::LoadState;
use crate::state::player::PlayerState;

/// Root application component.
///
/// Provides the engine and player state contexts and renders the single
/// board page. The whole board is one page; there is no routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let engine = RwSignal::new(EngineCore::new());
    let player = RwSignal::new(PlayerState::default());
    let load = RwSignal::new(LoadState::default());

    provide_context(engine);
    provide_context(player);
    provide_context(load);

    view! {
        <Title text="Infinite Canvas"/>
        <BoardPage/>
    }
}
