use super::*;
use crate::is_nan_point;
use approx::assert_abs_diff_eq;

#[test]
fn test_intersect_crossing_lines() {
    let a = Line::new(DVec3::new(1.0, 1.0, 0.0), DVec3::ZERO);
    let b = Line::new(DVec3::new(1.0, -1.0, 0.0), DVec3::new(0.0, 4.0, 0.0));
    let hit = a.intersect(&b);
    assert_abs_diff_eq!(hit.x, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.y, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_intersect_parallel_is_nan() {
    let a = Line::new(DVec3::new(0.0, 0.0, 2.0), DVec3::ZERO);
    let b = Line::new(DVec3::new(0.0, 0.0, -5.0), DVec3::new(1.0, 1.0, 0.0));
    let hit = a.intersect(&b);
    assert!(is_nan_point(hit));
    assert!(!a.is_intersected(&b));
}

#[test]
fn test_intersect_coincident_is_nan() {
    let a = Line::new(DVec3::X, DVec3::ZERO);
    assert!(is_nan_point(a.intersect(&a)));
}

#[test]
fn test_skew_lines_return_closest_point_on_self() {
    // x axis and a line parallel to y at z = 1 passing over x = 2
    let a = Line::new(DVec3::X, DVec3::ZERO);
    let b = Line::new(DVec3::Y, DVec3::new(2.0, 0.0, 1.0));
    let hit = a.intersect(&b);
    assert_abs_diff_eq!(hit.x, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.z, 0.0, epsilon = 1e-12);
    assert!(a.is_intersected(&b));
}

#[test]
fn test_set_and_accessors() {
    let mut line = Line::default();
    line.set(DVec3::Z, DVec3::ONE);
    assert_eq!(line.direction(), DVec3::Z);
    assert_eq!(line.point(), DVec3::ONE);
    assert_eq!(line.point_at(2.0), DVec3::new(1.0, 1.0, 3.0));
}
