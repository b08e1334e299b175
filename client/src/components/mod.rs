//! DOM components for the board UI.

pub mod canvas_host;
pub mod file_tile;
pub mod footer_player;
pub mod text_note;
pub mod toolbar;
