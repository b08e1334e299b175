//! The board surface: event wiring for the engine, plus the item layer.
//!
//! ARCHITECTURE
//! ============
//! The surface div owns every pointer/wheel/drop handler and forwards
//! screen-space points to `canvas::engine::EngineCore`; the engine does its
//! own hit-testing against the item store, so tiles and notes carry no
//! gesture handlers of their own. Items render inside a layer div whose CSS
//! transform applies the camera (translate then scale), which keeps item
//! styles in plain world coordinates. The camera transform is anchored at
//! the surface's top-left corner, so every event position is rebased onto
//! the surface origin before it reaches the engine.

use canvas::engine::EngineCore;
use canvas::item::ItemKind;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use canvas::input::{PointerSource, WheelDelta};

#[cfg(feature = "hydrate")]
use crate::net::actions;
#[cfg(feature = "hydrate")]
use crate::util::pointer::{event_point, is_touch_device, source_from_type};
#[cfg(feature = "hydrate")]
use crate::util::uploads::{start_upload, tile_origin_at};

use crate::components::file_tile::FileTile;
use crate::components::text_note::TextNote;
use crate::state::player::PlayerState;

/// One item plus the view flags the engine derives for it.
#[derive(Clone)]
struct ItemView {
    item: canvas::item::Item,
    selected: bool,
    playing: bool,
    editing: bool,
    draft: String,
}

#[component]
pub fn CanvasHost() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let player = expect_context::<RwSignal<PlayerState>>();
    let surface_ref = expect_context::<NodeRef<leptos::html::Div>>();

    // One-time probe; touch devices get larger targets and no hover cues.
    let surface_class = {
        #[cfg(feature = "hydrate")]
        {
            if is_touch_device() {
                "canvas-surface canvas-surface--touch"
            } else {
                "canvas-surface"
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            "canvas-surface"
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                // Touch and pen contacts are always primary; only mouse
                // carries secondary buttons worth rejecting.
                if source_from_type(&ev.pointer_type()) == PointerSource::Mouse && ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                let _ = surface.set_pointer_capture(ev.pointer_id());
                engine.update(|e| e.pointer_down(event_point(&surface, &ev)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                // Idle moves are noise; skip the signal write entirely.
                if engine.with_untracked(|e| e.input.is_idle()) {
                    return;
                }
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                engine.update(|e| e.pointer_move(event_point(&surface, &ev)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                let follow_ups = engine.try_update(EngineCore::pointer_up).unwrap_or_default();
                actions::perform(engine, player, follow_ups);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_click = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                let point = event_point(&surface, &ev);
                let follow_ups = engine.try_update(|e| e.click(point)).unwrap_or_default();
                actions::perform(engine, player, follow_ups);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                engine.update(|e| e.wheel(WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() }));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };

    let on_drop = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                    return;
                };
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                let camera = engine.with_untracked(|e| e.camera());
                let origin = tile_origin_at(&camera, event_point(&surface, &ev));
                for index in 0..files.length() {
                    if let Some(file) = files.get(index) {
                        start_upload(engine, player, file, origin);
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::DragEvent| {}
        }
    };

    // Camera as a CSS transform on the layer; items stay in world coords.
    let layer_style = move || {
        engine.with(|e| {
            let camera = e.camera();
            format!(
                "transform: translate({}px, {}px) scale({});",
                camera.pan_x, camera.pan_y, camera.zoom
            )
        })
    };

    let item_views = move || {
        let playing_id = player.with(|p| p.track.as_ref().filter(|_| p.playing).map(|t| t.id.clone()));
        engine.with(|e| {
            let selected = e.selection().cloned();
            e.store
                .sorted_items()
                .into_iter()
                .map(|item| {
                    let editing = e.is_editing(&item.id);
                    ItemView {
                        item: item.clone(),
                        selected: selected.as_ref() == Some(&item.id),
                        playing: playing_id.as_ref() == Some(&item.id),
                        editing,
                        draft: if editing {
                            e.draft().unwrap_or_default().to_owned()
                        } else {
                            String::new()
                        },
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let on_add_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
    };
    let on_add_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        engine.update(|e| {
            e.add_note();
        });
    };
    let add_affordance = move || {
        engine.with(|e| e.add_affordance()).map(|at| {
            let style = format!("left: {}px; top: {}px;", at.x, at.y);
            view! {
                <button
                    class="canvas-surface__add-note"
                    style=style
                    on:pointerdown=on_add_pointer_down
                    on:click=on_add_click
                >
                    "+"
                </button>
            }
        })
    };

    view! {
        <div
            node_ref=surface_ref
            class=surface_class
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:click=on_click
            on:wheel=on_wheel
            on:dragover=on_drag_over
            on:drop=on_drop
        >
            <div class="canvas-surface__layer" style=layer_style>
                {move || {
                    item_views()
                        .into_iter()
                        .map(|v| match v.item.kind {
                            ItemKind::File { .. } => {
                                view! { <FileTile item=v.item selected=v.selected playing=v.playing/> }
                                    .into_any()
                            }
                            ItemKind::Note { .. } => {
                                view! {
                                    <TextNote
                                        item=v.item
                                        selected=v.selected
                                        editing=v.editing
                                        draft=v.draft
                                    />
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
                {add_affordance}
            </div>
        </div>
    }
}
