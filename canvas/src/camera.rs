//! Pan/zoom camera, coordinate conversion, and the recenter animation.
//!
//! All item positions are stored in world coordinates; all pointer events
//! arrive in screen coordinates (CSS pixels) and must be converted through
//! the camera before being compared to or written into item positions.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{RECENTER_DURATION_MS, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are the world-to-screen translation in CSS pixels.
/// `zoom` is a scale factor clamped to `[ZOOM_MIN, ZOOM_MAX]`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Translate the camera by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Apply one discrete wheel event. Negative `delta_y` (scroll up) zooms
    /// in by [`ZOOM_STEP`]; positive zooms out. The result is clamped to
    /// `[ZOOM_MIN, ZOOM_MAX]`. A zero delta is ignored.
    pub fn apply_wheel(&mut self, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let step = if delta_y < 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
        self.zoom = (self.zoom + step).clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

/// Time-bounded pan animation back to the world origin.
///
/// Sampled by the engine's `tick`; the camera eases from the pan offset it
/// had when the animation started down to `(0, 0)`.
#[derive(Debug, Clone, Copy)]
pub struct RecenterAnimation {
    from_x: f64,
    from_y: f64,
    started_ms: f64,
}

impl RecenterAnimation {
    /// Begin recentering from the camera's current pan offset at `now_ms`.
    #[must_use]
    pub fn new(camera: &Camera, now_ms: f64) -> Self {
        Self { from_x: camera.pan_x, from_y: camera.pan_y, started_ms: now_ms }
    }

    /// Pan offset at `now_ms`, plus whether the animation has finished.
    ///
    /// Clock samples earlier than the start time are treated as the start.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> (f64, f64, bool) {
        let elapsed = (now_ms - self.started_ms).max(0.0);
        if elapsed >= RECENTER_DURATION_MS {
            return (0.0, 0.0, true);
        }
        let t = ease_in_out_cubic(elapsed / RECENTER_DURATION_MS);
        (self.from_x * (1.0 - t), self.from_y * (1.0 - t), false)
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
