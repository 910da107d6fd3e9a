use super::*;
use approx::assert_abs_diff_eq;

fn cylinder(smooth: bool, sectors: u32, stacks: u32) -> Cylinder {
    Cylinder::new(1.0, 1.0, 2.0, sectors, stacks, smooth, UpAxis::Z).unwrap()
}

#[test]
fn test_flat_cylinder_triangle_count() {
    let cyl = cylinder(false, 4, 1);
    // 8 side + 4 base + 4 top
    assert_eq!(cyl.buffers().triangle_count(), 16);
    assert_eq!(cyl.side_index_count(), 8 * 3);
    assert_eq!(cyl.base_index_count(), 4 * 3);
    assert_eq!(cyl.top_index_count(), 4 * 3);
    assert!(cyl.buffers().validate());
}

#[test]
fn test_smooth_cylinder_counts() {
    let (s, t) = (8u32, 3u32);
    let cyl = cylinder(true, s, t);
    let expected_vertices = (s + 1) * (t + 1) + 2 * (s + 1);
    assert_eq!(cyl.buffers().vertex_count(), expected_vertices as usize);
    assert_eq!(cyl.buffers().triangle_count(), (2 * s * t + 2 * s) as usize);
    assert!(cyl.buffers().validate());
}

#[test]
fn test_smooth_rings_sit_at_base_and_top() {
    let (s, t) = (6u32, 2u32);
    let cyl = Cylinder::new(2.0, 0.5, 4.0, s, t, true, UpAxis::Z).unwrap();
    let vertices = cyl.buffers().vertices();
    let row = (s + 1) as usize;

    for v in &vertices[..row] {
        assert_abs_diff_eq!(v.z, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.truncate().length(), 2.0, epsilon = 1e-12);
    }
    let last = t as usize * row;
    for v in &vertices[last..last + row] {
        assert_abs_diff_eq!(v.z, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.truncate().length(), 0.5, epsilon = 1e-12);
    }
}

#[test]
fn test_side_normals_are_unit_and_tilt_for_cone() {
    let cyl = cylinder(true, 12, 1);
    let side = 13 * 2;
    for n in &cyl.buffers().normals()[..side] {
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n.z, 0.0, epsilon = 1e-12);
    }

    let cone = Cylinder::new(1.0, 0.0, 1.0, 12, 1, true, UpAxis::Z).unwrap();
    for n in &cone.buffers().normals()[..side] {
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        // 45 degree slope
        assert_abs_diff_eq!(n.z, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }
}

#[test]
fn test_side_triangles_face_outward() {
    for smooth in [true, false] {
        let cyl = cylinder(smooth, 16, 2);
        let buffers = cyl.buffers();
        for i in 0..cyl.side_index_count() / 3 {
            let [a, b, c] = buffers.triangle_positions(i).unwrap();
            let normal = (b - a).cross(c - a);
            let centre = (a + b + c) / 3.0;
            assert!(normal.truncate().dot(centre.truncate()) > 0.0);
        }
    }
}

#[test]
fn test_caps_face_away_from_each_other() {
    let cyl = cylinder(true, 8, 1);
    let buffers = cyl.buffers();
    let base_tri = cyl.base_index_start() / 3;
    let top_tri = cyl.top_index_start() / 3;

    for i in base_tri..top_tri {
        let [a, b, c] = buffers.triangle_positions(i).unwrap();
        assert!((b - a).cross(c - a).z < 0.0);
    }
    for i in top_tri..buffers.triangle_count() {
        let [a, b, c] = buffers.triangle_positions(i).unwrap();
        assert!((b - a).cross(c - a).z > 0.0);
    }
}

#[test]
fn test_flat_normals_match_faces() {
    let cyl = cylinder(false, 6, 2);
    let buffers = cyl.buffers();
    for i in 0..cyl.side_index_count() / 3 {
        let tri: Vec<u32> = buffers.indices()[i * 3..i * 3 + 3].to_vec();
        let [a, b, c] = buffers.triangle_positions(i).unwrap();
        let expected = face_normal(a, b, c);
        for idx in tri {
            let n = buffers.normals()[idx as usize];
            assert_abs_diff_eq!(n.dot(expected), 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_tex_coords_in_unit_square() {
    for smooth in [true, false] {
        let cyl = cylinder(smooth, 10, 3);
        for t in cyl.buffers().tex_coords() {
            assert!((0.0..=1.0).contains(&t.x));
            assert!((0.0..=1.0).contains(&t.y));
        }
    }
}

#[test]
fn test_wireframe_indices_valid() {
    let cyl = cylinder(true, 4, 2);
    // per sector: 2 per stack, plus the bottom ring once
    assert_eq!(cyl.buffers().line_count(), 4 * 2 * 2 + 4);
    assert!(cyl.buffers().validate());
}

#[test]
fn test_equal_value_setter_is_noop() {
    let mut cyl = Cylinder::default();
    let revision = cyl.revision();
    let buffers = cyl.buffers().clone();

    cyl.set_base_radius(cyl.base_radius()).unwrap();
    cyl.set_sector_count(cyl.sector_count()).unwrap();
    cyl.set_smooth(cyl.is_smooth()).unwrap();

    assert_eq!(cyl.revision(), revision);
    assert_eq!(cyl.buffers(), &buffers);
}

#[test]
fn test_setter_rebuilds() {
    let mut cyl = cylinder(true, 8, 1);
    let revision = cyl.revision();
    cyl.set_sector_count(16).unwrap();
    assert_eq!(cyl.revision(), revision + 1);
    assert_eq!(cyl.buffers().vertex_count(), 17 * 2 + 2 * 17);

    cyl.set_height(6.0).unwrap();
    let (min, max) = cyl.buffers().bounding_box();
    assert_abs_diff_eq!(min.z, -3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max.z, 3.0, epsilon = 1e-12);
}

#[test]
fn test_invalid_parameters_leave_state_unchanged() {
    let mut cyl = cylinder(true, 8, 1);
    let revision = cyl.revision();

    assert!(matches!(
        cyl.set_sector_count(2),
        Err(ShapeError::InvalidParameter { name: "sector_count", .. })
    ));
    assert!(cyl.set_stack_count(0).is_err());
    assert!(cyl.set_height(0.0).is_err());
    assert!(cyl.set_base_radius(-1.0).is_err());
    assert!(cyl.set_top_radius(f64::NAN).is_err());

    assert_eq!(cyl.revision(), revision);
    assert_eq!(cyl.sector_count(), 8);
}

#[test]
fn test_both_radii_zero_rejected() {
    let result = Cylinder::new(0.0, 0.0, 1.0, 8, 1, true, UpAxis::Z);
    assert!(result.is_err());
}

#[test]
fn test_up_axis_rotates_mesh() {
    let cyl = Cylinder::new(1.0, 1.0, 4.0, 8, 1, true, UpAxis::Y).unwrap();
    let (min, max) = cyl.buffers().bounding_box();
    assert_abs_diff_eq!(min.y, -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max.y, 2.0, epsilon = 1e-12);

    let top = cyl.buffers().indices()[cyl.top_index_start()] as usize;
    assert_abs_diff_eq!(cyl.buffers().normals()[top].dot(DVec3::Y), 1.0, epsilon = 1e-12);
}

#[test]
fn test_reverse_normals() {
    let mut cyl = cylinder(true, 8, 1);
    let before = cyl.buffers().normals()[0];
    cyl.reverse_normals();
    assert_eq!(cyl.buffers().normals()[0], -before);
}

#[test]
fn test_default_params_are_valid() {
    let params = CylinderParams::default();
    assert!(params.validate().is_ok());
    assert_eq!(params.up_axis, UpAxis::Z);
}

#[test]
fn test_params_from_config_use_default_sectors() {
    let config = GlobalConfig::new(1e-9, 7, 5).unwrap();
    let params = CylinderParams::from_config(&config);
    assert_eq!(params.sector_count, 7);
    assert_eq!(params.stack_count, DEFAULT_CYLINDER_STACK_COUNT);

    let cylinder = Cylinder::from_params(params).unwrap();
    assert_eq!(cylinder.sector_count(), 7);
    assert_eq!(
        CylinderParams::default().sector_count,
        GlobalConfig::default().default_sectors
    );
}
