//! View-model engine for the "drop files anywhere" infinite-canvas board.
//!
//! This crate owns everything about the board that is not a DOM node or a
//! network call: camera state for pan/zoom, the item store with its z-order
//! counter, the gesture state machine that turns pointer events into drags
//! and pans, note-edit sessions, and the optimistic bookkeeping for uploads
//! that are still in flight. The host UI layer feeds it screen-space pointer
//! events and interprets the [`engine::Action`]s it emits — the engine never
//! performs I/O itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EngineCore`] and the [`engine::Action`] vocabulary |
//! | [`item`] | Board items (files, notes), ids, and the z-ordered store |
//! | [`camera`] | Pan/zoom camera, coordinate conversion, recenter animation |
//! | [`input`] | Gesture state machine and note-editor key interpretation |
//! | [`hit`] | Hit-testing pointer positions against items |
//! | [`upload`] | In-flight optimistic creates and their cancellation |
//! | [`consts`] | Shared numeric constants (zoom limits, drag threshold, tile sizes) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod item;
pub mod upload;
