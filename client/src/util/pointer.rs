//! Pointer normalization: every input device feeds the engine the same
//! screen-space `Point`, relative to the board surface.
//!
//! Pointer events already unify mouse, touch, and pen, so there is one
//! handler path; the source mapping exists for styling (touch targets get
//! larger affordances) and is pure and testable. Event positions arrive in
//! viewport coordinates, but the camera transform is anchored at the
//! surface's top-left corner, so the surface origin must be subtracted
//! before any coordinate conversion.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use canvas::camera::Point;
use canvas::input::PointerSource;

/// Map a `PointerEvent.pointerType` value onto the engine's source enum.
#[must_use]
pub fn source_from_type(pointer_type: &str) -> PointerSource {
    match pointer_type {
        "touch" | "pen" => PointerSource::Touch,
        _ => PointerSource::Mouse,
    }
}

/// Whether this device reports touch support, probed once at startup.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn is_touch_device() -> bool {
    web_sys::window().is_some_and(|w| w.navigator().max_touch_points() > 0)
}

/// Rebase a viewport-space position onto the surface origin. The surface
/// sits below the toolbar, so viewport and surface coordinates differ by
/// the surface's offset.
#[must_use]
pub fn surface_relative(surface_origin: Point, client: Point) -> Point {
    Point::new(client.x - surface_origin.x, client.y - surface_origin.y)
}

/// Event position relative to the board surface, in screen pixels.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn event_point(surface: &web_sys::Element, ev: &web_sys::MouseEvent) -> Point {
    let rect = surface.get_bounding_client_rect();
    surface_relative(
        Point::new(rect.left(), rect.top()),
        Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())),
    )
}
