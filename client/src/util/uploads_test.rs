use canvas::camera::{Camera, Point};
use canvas::consts::FILE_TILE_SIZE;

use super::{picker_origin, tile_origin_at};

#[test]
fn tile_is_centered_under_the_drop_point() {
    let camera = Camera::default();
    let origin = tile_origin_at(&camera, Point::new(400.0, 300.0));
    assert_eq!(origin.x, 400.0 - FILE_TILE_SIZE / 2.0);
    assert_eq!(origin.y, 300.0 - FILE_TILE_SIZE / 2.0);
}

#[test]
fn drop_placement_respects_pan_and_zoom() {
    let camera = Camera { pan_x: 100.0, pan_y: -50.0, zoom: 2.0 };
    let origin = tile_origin_at(&camera, Point::new(300.0, 150.0));
    // Screen (300, 150) is world (100, 100) at this camera.
    assert_eq!(origin.x, 100.0 - FILE_TILE_SIZE / 2.0);
    assert_eq!(origin.y, 100.0 - FILE_TILE_SIZE / 2.0);
}

#[test]
fn picker_places_at_the_surface_center() {
    let camera = Camera::default();
    let origin = picker_origin(&camera, 1000.0, 600.0);
    assert_eq!(origin.x, 500.0 - FILE_TILE_SIZE / 2.0);
    assert_eq!(origin.y, 300.0 - FILE_TILE_SIZE / 2.0);
}
