use super::*;
use crate::pipe::circle_contour;
use approx::assert_abs_diff_eq;

fn straight_pipe(steps: u32) -> Pipe {
    Pipe::circular(vec![DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0)], 1.0, steps).unwrap()
}

#[test]
fn test_side_wall_counts() {
    let path = vec![
        DVec3::ZERO,
        DVec3::new(0.0, 0.0, 5.0),
        DVec3::new(5.0, 0.0, 5.0),
    ];
    let pipe = Pipe::circular(path, 1.0, 6).unwrap();
    let shape = PipeShape::new(pipe);
    let buffers = shape.buffers();

    assert_eq!(buffers.vertex_count(), 3 * 7);
    assert_eq!(buffers.triangle_count(), 2 * 6 * 2);
    // rings: 3 * 6, along the path: 2 * 6
    assert_eq!(buffers.line_count(), 3 * 6 + 2 * 6);
    assert!(buffers.validate());
    assert!(!shape.has_caps());
}

#[test]
fn test_side_triangles_face_outward() {
    let shape = PipeShape::new(straight_pipe(12));
    let buffers = shape.buffers();
    for i in 0..buffers.triangle_count() {
        let [a, b, c] = buffers.triangle_positions(i).unwrap();
        let normal = (b - a).cross(c - a);
        let centre = (a + b + c) / 3.0;
        assert!(normal.truncate().dot(centre.truncate()) > 0.0);
    }
}

#[test]
fn test_open_contour_wraps_around() {
    // square cross-section without a closing point
    let square = vec![
        DVec2::new(-1.0, -1.0),
        DVec2::new(1.0, -1.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(-1.0, 1.0),
    ];
    let pipe = Pipe::new(vec![DVec3::ZERO, DVec3::Z], square);
    assert!(!pipe.is_contour_closed());

    let shape = PipeShape::new(pipe);
    assert_eq!(shape.buffers().triangle_count(), 8);
    assert!(shape.buffers().indices().contains(&0));
    assert!(shape.buffers().validate());
}

#[test]
fn test_tex_coords_span_path_and_contour() {
    let shape = PipeShape::new(straight_pipe(4));
    let tex = shape.buffers().tex_coords();
    assert_eq!(tex[0], DVec2::new(0.0, 0.0));
    assert_eq!(tex[tex.len() - 1], DVec2::new(1.0, 1.0));
}

#[test]
fn test_caps_close_the_tube() {
    let shape = PipeShape::with_caps(straight_pipe(8)).unwrap();
    let buffers = shape.buffers();
    let side = shape.side_index_count() / 3;
    assert!(shape.has_caps());
    assert_eq!(side, 16);
    // an octagon needs six triangles per cap
    assert_eq!(buffers.triangle_count(), side + 2 * 6);
    assert!(buffers.validate());

    let mut area = [0.0, 0.0];
    for i in side..buffers.triangle_count() {
        let [a, b, c] = buffers.triangle_positions(i).unwrap();
        let normal = (b - a).cross(c - a);
        if a.z < 2.5 {
            assert!(normal.z < 0.0, "start cap faces backwards");
            area[0] += normal.length() * 0.5;
        } else {
            assert!(normal.z > 0.0, "end cap faces forwards");
            area[1] += normal.length() * 0.5;
        }
    }
    // regular octagon of circumradius 1
    let octagon = 2.0 * 2f64.sqrt();
    assert_abs_diff_eq!(area[0], octagon, epsilon = 1e-9);
    assert_abs_diff_eq!(area[1], octagon, epsilon = 1e-9);
}

#[test]
fn test_cap_normals_are_flat() {
    let shape = PipeShape::with_caps(straight_pipe(8)).unwrap();
    let buffers = shape.buffers();
    let first_cap_vertex = 2 * 9;
    for n in &buffers.normals()[first_cap_vertex..first_cap_vertex + 8] {
        assert_eq!(*n, DVec3::NEG_Z);
    }
    for n in &buffers.normals()[first_cap_vertex + 8..] {
        assert_eq!(*n, DVec3::Z);
    }
}

#[test]
fn test_self_intersecting_cap_is_reported() {
    let bowtie = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, 1.0),
    ];
    let pipe = Pipe::new(vec![DVec3::ZERO, DVec3::Z], bowtie);
    let result = PipeShape::with_caps(pipe);
    assert!(matches!(result, Err(ShapeError::Tessellation(_))));
}

#[test]
fn test_failed_rebuild_keeps_previous_state() {
    let mut shape = PipeShape::with_caps(straight_pipe(8)).unwrap();
    let revision = shape.revision();
    let buffers = shape.buffers().clone();

    let bowtie = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, 1.0),
    ];
    assert!(shape.set_contour(bowtie).is_err());
    assert_eq!(shape.revision(), revision);
    assert_eq!(shape.buffers(), &buffers);
    assert_eq!(shape.pipe().contour_point_count(), 9);
}

#[test]
fn test_add_path_point_extends_mesh() {
    let mut shape = PipeShape::new(straight_pipe(6));
    let before = shape.buffers().triangle_count();
    shape.add_path_point(DVec3::new(3.0, 0.0, 8.0)).unwrap();
    assert_eq!(shape.pipe().path_count(), 3);
    assert_eq!(shape.buffers().triangle_count(), before * 2);
}

#[test]
fn test_set_caps_is_noop_when_unchanged() {
    let mut shape = PipeShape::new(straight_pipe(6));
    let revision = shape.revision();
    shape.set_caps(false).unwrap();
    assert_eq!(shape.revision(), revision);

    shape.set_caps(true).unwrap();
    assert_eq!(shape.revision(), revision + 1);
    shape.set_caps(false).unwrap();
    assert_eq!(shape.side_index_count(), shape.buffers().indices().len());
}

#[test]
fn test_set_path_and_contour() {
    let mut shape = PipeShape::new(straight_pipe(6));
    shape.set_contour(circle_contour(2.0, 10).unwrap()).unwrap();
    assert_eq!(shape.buffers().vertex_count(), 2 * 11);

    shape.set_path(vec![DVec3::ZERO]).unwrap();
    assert_eq!(shape.buffers().vertex_count(), 11);
    assert_eq!(shape.buffers().triangle_count(), 0);
}

fn bent_path() -> Vec<DVec3> {
    vec![
        DVec3::ZERO,
        DVec3::new(0.0, 0.0, 10.0),
        DVec3::new(10.0, 0.0, 10.0),
        DVec3::new(10.0, 10.0, 12.0),
        DVec3::new(4.0, 12.0, 15.0),
    ]
}

#[test]
fn test_appended_points_match_full_build() {
    let contour = circle_contour(0.5, 10).unwrap();
    let full = PipeShape::new(Pipe::new(bent_path(), contour.clone()));

    let mut incremental = PipeShape::new(Pipe::new(Vec::new(), contour));
    for point in bent_path() {
        incremental.add_path_point(point).unwrap();
    }

    let (a, b) = (incremental.buffers(), full.buffers());
    assert_eq!(a.indices(), b.indices());
    assert_eq!(a.line_indices(), b.line_indices());
    assert_eq!(a.tex_coords(), b.tex_coords());
    for (p, q) in a.vertices().iter().zip(b.vertices()) {
        assert!(p.distance(*q) < 1e-12, "{p} != {q}");
    }
    for (p, q) in a.normals().iter().zip(b.normals()) {
        assert!(p.distance(*q) < 1e-12, "{p} != {q}");
    }
    assert_eq!(incremental.side_index_count(), a.indices().len());
}

#[test]
fn test_append_only_touches_last_rings() {
    let mut shape = PipeShape::new(Pipe::circular(bent_path(), 1.0, 8).unwrap());
    let before = shape.buffers().clone();
    let ring = 9;

    shape.add_path_point(DVec3::new(0.0, 20.0, 20.0)).unwrap();
    let after = shape.buffers();

    // rings 0..=3 keep their vertices, ring 4 moves, ring 5 is new
    assert_eq!(&after.vertices()[..4 * ring], &before.vertices()[..4 * ring]);
    assert_ne!(&after.vertices()[4 * ring..5 * ring], &before.vertices()[4 * ring..]);
    assert_eq!(after.vertex_count(), 6 * ring);
    assert_eq!(&after.indices()[..before.indices().len()], before.indices());
    assert_eq!(after.tex_coords()[5 * ring], DVec2::new(0.0, 5.0));
}

#[test]
fn test_append_with_caps_rebuilds_caps() {
    let mut shape = PipeShape::with_caps(straight_pipe(8)).unwrap();
    shape.add_path_point(DVec3::new(0.0, 0.0, 9.0)).unwrap();
    let side = shape.side_index_count() / 3;
    assert_eq!(side, 2 * 16);
    assert_eq!(shape.buffers().triangle_count(), side + 2 * 6);
    assert!(shape.buffers().validate());
}
