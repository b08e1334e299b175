//! Input model: the gesture state machine and note-editor key handling.
//!
//! At most one gesture is active at a time. A pointer-down either begins an
//! item drag (when it lands on an item) or a pan (when it lands on empty
//! background); the two are mutually exclusive until pointer release. Both
//! variants accumulate pointer travel so the engine can tell a real drag
//! from a twitchy click.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::item::ItemId;

/// How pointer events reach the app. Chosen once at startup by a
/// touch-capability probe; both sources normalize into the same
/// screen-space [`Point`]s, so the engine never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The pointer went down on empty background and is panning the canvas.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
        /// Cumulative pointer travel in screen pixels.
        moved_px: f64,
    },
    /// The pointer went down on an item and is dragging it.
    DraggingItem {
        /// Id of the item being dragged.
        id: ItemId,
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
        /// Cumulative pointer travel in screen pixels.
        moved_px: f64,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// What a key press means inside an open note editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKey {
    /// Commit the draft (Enter without Shift; Shift+Enter inserts a newline).
    Commit,
    /// Cancel the edit, restoring the pre-edit text (Escape).
    Cancel,
}

/// Interpret a key press inside the note editor. Returns `None` for keys the
/// editor lets through to the text input.
#[must_use]
pub fn note_key(key: &str, shift: bool) -> Option<NoteKey> {
    match key {
        "Enter" if !shift => Some(NoteKey::Commit),
        "Escape" => Some(NoteKey::Cancel),
        _ => None,
    }
}
