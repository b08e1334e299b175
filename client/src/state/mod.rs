//! Shared client-side state modules.
//!
//! State is split by domain so individual components can depend on small
//! focused models. The board itself (items, camera, gestures) lives in
//! `canvas::engine::EngineCore` and is provided as one signal by the app.

pub mod load;
pub mod player;
