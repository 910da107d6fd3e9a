use super::*;
use approx::assert_abs_diff_eq;

fn assert_vec_eq(a: DVec3, b: DVec3) {
    assert!((a - b).length() < 1e-12, "{a:?} != {b:?}");
}

#[test]
fn look_at_maps_z_onto_target() {
    for target in [
        DVec3::new(1.0, 2.0, 3.0),
        DVec3::new(-4.0, 0.5, 0.0),
        DVec3::new(0.0, 0.0, -2.0),
    ] {
        let m = look_at(target);
        assert_vec_eq(m * DVec3::Z, target.normalize());
    }
}

#[test]
fn look_at_is_orthonormal() {
    let m = look_at(DVec3::new(1.0, -2.0, 0.5));
    assert_abs_diff_eq!(m.x_axis.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m.y_axis.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m.x_axis.dot(m.y_axis), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m.x_axis.dot(m.z_axis), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
}

#[test]
fn look_at_vertical_targets_use_z_hint() {
    let up = look_at(DVec3::new(0.0, 5.0, 0.0));
    assert_vec_eq(up * DVec3::Z, DVec3::Y);
    assert_vec_eq(up.y_axis, DVec3::NEG_Z);

    let down = look_at(DVec3::new(0.0, -5.0, 0.0));
    assert_vec_eq(down * DVec3::Z, DVec3::NEG_Y);
    assert_vec_eq(down.y_axis, DVec3::Z);
}

#[test]
fn look_at_zero_is_identity() {
    assert_eq!(look_at(DVec3::ZERO), DMat3::IDENTITY);
}

#[test]
fn face_normal_follows_winding() {
    assert_eq!(face_normal(DVec3::ZERO, DVec3::Y, DVec3::X), DVec3::NEG_Z);
    let n = face_normal(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 2.0));
    assert_vec_eq(n, DVec3::NEG_Y);
}

#[test]
fn face_normal_degenerate_is_zero() {
    let tiny = DVec3::new(1e-4, 0.0, 0.0);
    assert_eq!(face_normal(DVec3::ZERO, tiny, DVec3::new(0.0, 1e-4, 0.0)), DVec3::ZERO);
}

#[test]
fn up_axis_rotations_are_proper() {
    for axis in [UpAxis::X, UpAxis::Y, UpAxis::Z] {
        assert_abs_diff_eq!(axis.rotation_from_z().determinant(), 1.0, epsilon = 1e-12);
    }
    assert_eq!(UpAxis::default(), UpAxis::Z);
}
