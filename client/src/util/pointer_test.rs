use canvas::camera::Point;
use canvas::input::PointerSource;

use super::{source_from_type, surface_relative};

#[test]
fn touch_and_pen_map_to_touch() {
    assert_eq!(source_from_type("touch"), PointerSource::Touch);
    assert_eq!(source_from_type("pen"), PointerSource::Touch);
}

#[test]
fn mouse_and_unknown_map_to_mouse() {
    assert_eq!(source_from_type("mouse"), PointerSource::Mouse);
    assert_eq!(source_from_type(""), PointerSource::Mouse);
    assert_eq!(source_from_type("stylus?"), PointerSource::Mouse);
}

#[test]
fn event_positions_are_rebased_onto_the_surface_origin() {
    // Surface below a 56px toolbar: a press on a tile edge rendered at the
    // surface's (10, 10) arrives as viewport (10, 66).
    let p = surface_relative(Point::new(0.0, 56.0), Point::new(10.0, 66.0));
    assert_eq!(p.x, 10.0);
    assert_eq!(p.y, 10.0);
}

#[test]
fn surface_at_the_viewport_origin_passes_through() {
    let p = surface_relative(Point::new(0.0, 0.0), Point::new(300.0, 150.0));
    assert_eq!(p.x, 300.0);
    assert_eq!(p.y, 150.0);
}
