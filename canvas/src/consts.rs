//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Minimum zoom factor.
pub const ZOOM_MIN: f64 = 0.1;

/// Maximum zoom factor.
pub const ZOOM_MAX: f64 = 2.0;

/// Zoom change applied per discrete wheel event.
pub const ZOOM_STEP: f64 = 0.1;

// ── Gestures ────────────────────────────────────────────────────

/// Cumulative pointer travel (screen pixels) past which a gesture counts as
/// a drag rather than a click, suppressing the click side effect that
/// follows pointer-up.
pub const DRAG_CLICK_THRESHOLD_PX: f64 = 5.0;

// ── Recenter animation ──────────────────────────────────────────

/// Duration of the programmatic return-to-origin pan animation.
pub const RECENTER_DURATION_MS: f64 = 1000.0;

// ── Item bounds (world units) ───────────────────────────────────

/// Edge length of a file tile; drops are offset by half of this so the tile
/// centers on the pointer.
pub const FILE_TILE_SIZE: f64 = 150.0;

/// Width of a text note card.
pub const NOTE_WIDTH: f64 = 200.0;

/// Height of a text note card.
pub const NOTE_HEIGHT: f64 = 96.0;
