//! A text note: static text, or an editor when the note is being edited.

use canvas::consts::{NOTE_HEIGHT, NOTE_WIDTH};
use canvas::item::{Item, ItemKind};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use canvas::engine::EngineCore;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::net::actions;
#[cfg(feature = "hydrate")]
use crate::state::player::PlayerState;

/// One note, positioned in world coordinates inside the board layer.
///
/// Editing is keyboard-driven: Enter commits, Shift+Enter inserts a
/// newline, Escape cancels, and blur commits. The engine owns the draft;
/// this component just mirrors it into a textarea.
#[component]
pub fn TextNote(item: Item, selected: bool, editing: bool, draft: String) -> impl IntoView {
    let text = match &item.kind {
        ItemKind::Note { text } => text.clone(),
        ItemKind::File { .. } => String::new(),
    };
    let position = format!(
        "left: {}px; top: {}px; width: {}px; min-height: {}px; z-index: {};",
        item.x, item.y, NOTE_WIDTH, NOTE_HEIGHT, item.z_index
    );

    let on_editor_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
    };

    let on_input = {
        #[cfg(feature = "hydrate")]
        {
            let engine = expect_context::<RwSignal<EngineCore>>();
            move |ev: leptos::ev::Event| {
                let Some(area) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
                else {
                    return;
                };
                engine.update(|e| e.set_draft(area.value()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = expect_context::<RwSignal<EngineCore>>();
            let player = expect_context::<RwSignal<PlayerState>>();
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                let shift = ev.shift_key();
                if key == "Escape" || (key == "Enter" && !shift) {
                    ev.prevent_default();
                }
                let follow_ups = engine
                    .try_update(|e| e.note_key_down(&key, shift))
                    .unwrap_or_default();
                actions::perform(engine, player, follow_ups);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let on_blur = {
        #[cfg(feature = "hydrate")]
        {
            let engine = expect_context::<RwSignal<EngineCore>>();
            let player = expect_context::<RwSignal<PlayerState>>();
            move |_ev: leptos::ev::FocusEvent| {
                let follow_ups = engine.try_update(EngineCore::commit_edit).unwrap_or_default();
                actions::perform(engine, player, follow_ups);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::FocusEvent| {}
        }
    };

    let on_delete = {
        #[cfg(feature = "hydrate")]
        {
            let engine = expect_context::<RwSignal<EngineCore>>();
            let player = expect_context::<RwSignal<PlayerState>>();
            let id = item.id.clone();
            move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
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
        <div class="text-note" class=("text-note--selected", selected) style=position>
            {if editing {
                view! {
                    <textarea
                        class="text-note__editor"
                        prop:value=draft.clone()
                        autofocus=true
                        on:pointerdown=on_editor_pointer_down
                        on:input=on_input
                        on:keydown=on_key_down
                        on:blur=on_blur
                    >
                        {draft.clone()}
                    </textarea>
                }
                    .into_any()
            } else {
                view! { <div class="text-note__text">{text}</div> }.into_any()
            }}
            {(selected && !editing)
                .then(|| {
                    view! {
                        <button
                            class="text-note__delete"
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
