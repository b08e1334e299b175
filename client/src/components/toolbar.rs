//! Top bar: title, file-picker upload button, recenter, loading indicator.

use leptos::prelude::*;

use crate::state::load::LoadState;

#[cfg(feature = "hydrate")]
use canvas::engine::EngineCore;

#[cfg(feature = "hydrate")]
use crate::net::actions;
#[cfg(feature = "hydrate")]
use crate::state::player::PlayerState;
#[cfg(feature = "hydrate")]
use crate::util::uploads::{picker_origin, start_upload};

#[component]
pub fn Toolbar() -> impl IntoView {
    let load = expect_context::<RwSignal<LoadState>>();
    let picker_ref = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |_ev: leptos::ev::MouseEvent| {
        if let Some(input) = picker_ref.get() {
            input.click();
        }
    };

    // Picker uploads land at the center of the visible board surface.
    let on_files_chosen = {
        #[cfg(feature = "hydrate")]
        {
            let engine = expect_context::<RwSignal<EngineCore>>();
            let player = expect_context::<RwSignal<PlayerState>>();
            let surface_ref = expect_context::<NodeRef<leptos::html::Div>>();
            move |_ev: leptos::ev::Event| {
                let Some(input) = picker_ref.get() else {
                    return;
                };
                let Some(files) = input.files() else {
                    return;
                };
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                let rect = surface.get_bounding_client_rect();
                let camera = engine.with_untracked(|e| e.camera());
                let origin = picker_origin(&camera, rect.width(), rect.height());
                for index in 0..files.length() {
                    if let Some(file) = files.get(index) {
                        start_upload(engine, player, file, origin);
                    }
                }
                input.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_recenter = {
        #[cfg(feature = "hydrate")]
        {
            let engine = expect_context::<RwSignal<EngineCore>>();
            let player = expect_context::<RwSignal<PlayerState>>();
            move |_ev: leptos::ev::MouseEvent| {
                engine.update(|e| e.recenter(js_sys::Date::now()));
                if !engine.with_untracked(EngineCore::is_animating) {
                    return;
                }
                wasm_bindgen_futures::spawn_local(async move {
                    loop {
                        gloo_timers::future::TimeoutFuture::new(16).await;
                        let follow_ups = engine
                            .try_update(|e| e.tick(js_sys::Date::now()))
                            .unwrap_or_default();
                        actions::perform(engine, player, follow_ups);
                        if !engine.with_untracked(EngineCore::is_animating) {
                            break;
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <header class="toolbar">
            <h1 class="toolbar__title">"drop files anywhere"</h1>
            <div class="toolbar__actions">
                {move || load.get().loading.then(|| view! { <span class="toolbar__loading">"loading\u{2026}"</span> })}
                <button class="toolbar__button" on:click=on_recenter>
                    "recenter"
                </button>
                <button class="toolbar__button toolbar__button--primary" on:click=on_pick>
                    "upload files"
                </button>
                <input
                    node_ref=picker_ref
                    class="toolbar__picker"
                    type="file"
                    multiple=true
                    on:change=on_files_chosen
                />
            </div>
        </header>
    }
}
