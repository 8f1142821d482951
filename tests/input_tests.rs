// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;
use std::f32::consts::FRAC_PI_2;

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let center = Vec3::new(0.0, 0.0, 5.0);
    let t = ray_sphere(ray_origin, ray_dir, center, 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    let center = Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let center = Vec3::new(0.0, 0.0, -5.0);
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, center, 1.0).is_none());
}

#[test]
fn pick_nearest_prefers_the_closest_hit() {
    let anchors = [
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::Z, &anchors, 0.1), Some(1));
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::Y, &anchors, 0.1), None);
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::Z, &[], 0.1), None);
}

#[test]
fn anchors_follow_model_yaw_and_scale() {
    let anchor = Vec3::new(0.1, 0.05, 0.0);
    let unrotated = anchor_world_position(anchor, 0.0, 3.0);
    assert!((unrotated - Vec3::new(0.3, 0.15, 0.0)).length() < 1e-5);

    // quarter turn about +Y carries +X onto -Z
    let turned = anchor_world_position(anchor, FRAC_PI_2, 3.0);
    assert!((turned - Vec3::new(0.0, 0.15, -0.3)).length() < 1e-5);
}

#[test]
fn drag_reports_deltas_for_its_own_pointer() {
    let mut drag = DragState::default();
    assert!(drag.advance(1, 10.0, 10.0).is_none());

    drag.begin(1, 10.0, 20.0);
    assert_eq!(drag.advance(1, 15.0, 18.0), Some(glam::Vec2::new(5.0, -2.0)));
    assert_eq!(drag.advance(1, 15.0, 18.0), Some(glam::Vec2::ZERO));
    assert!(drag.advance(2, 50.0, 50.0).is_none());

    assert!(!drag.end(2));
    assert!(drag.end(1));
    assert!(!drag.active);
    assert!(drag.advance(1, 20.0, 20.0).is_none());
}

#[test]
fn short_press_counts_as_click() {
    let mut mouse = MouseState::default();
    mouse.press(100.0, 100.0);
    assert!(mouse.release(102.0, 101.0, 4.0));
    assert!(!mouse.down);

    mouse.press(100.0, 100.0);
    assert!(!mouse.release(140.0, 100.0, 4.0));

    // release without a press
    assert!(!mouse.release(100.0, 100.0, 4.0));
}

#[test]
fn wheel_delta_normalizes_modes() {
    assert_eq!(wheel_delta_px(120.0, 0, 900.0), 120.0);
    assert_eq!(wheel_delta_px(3.0, 1, 900.0), 48.0);
    assert_eq!(wheel_delta_px(1.0, 2, 900.0), 900.0);
}
