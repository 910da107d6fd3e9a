use super::*;
use approx::assert_abs_diff_eq;

fn points(n: usize) -> Vec<DVec3> {
    (0..n).map(|i| DVec3::new(i as f64, (i % 2) as f64, 0.0)).collect()
}

#[test]
fn test_triangle_list() {
    let v = points(6);
    let tris = Primitive::triangles_from(v.clone()).triangles().unwrap();
    assert_eq!(tris.len(), 2);
    assert_eq!(tris[1].vertices, [v[3], v[4], v[5]]);
}

#[test]
fn test_triangle_list_partial_is_malformed() {
    let result = Primitive::triangles_from(points(7)).triangles();
    assert!(matches!(
        result,
        Err(TessellationError::MalformedPrimitive { .. })
    ));
}

#[test]
fn test_fan_order() {
    let v = points(5);
    let tris = Primitive::new(PrimitiveKind::TriangleFan, v.clone())
        .triangles()
        .unwrap();
    assert_eq!(tris.len(), 3);
    assert_eq!(tris[0].vertices, [v[0], v[1], v[2]]);
    assert_eq!(tris[2].vertices, [v[0], v[3], v[4]]);
}

#[test]
fn test_strip_alternates_winding() {
    let v = points(5);
    let tris = Primitive::new(PrimitiveKind::TriangleStrip, v.clone())
        .triangles()
        .unwrap();
    assert_eq!(tris.len(), 3);
    assert_eq!(tris[0].vertices, [v[0], v[1], v[2]]);
    assert_eq!(tris[1].vertices, [v[2], v[1], v[3]]);
    assert_eq!(tris[2].vertices, [v[2], v[3], v[4]]);
}

#[test]
fn test_strip_of_planar_quad_has_uniform_normals() {
    let v = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
    ];
    let tris = Primitive::new(PrimitiveKind::TriangleStrip, v)
        .triangles()
        .unwrap();
    let first = tris[0].normal();
    for tri in &tris {
        assert_eq!(tri.normal(), first);
    }
}

#[test]
fn test_short_fan_and_strip_are_malformed() {
    for kind in [PrimitiveKind::TriangleFan, PrimitiveKind::TriangleStrip] {
        let result = Primitive::new(kind, points(2)).triangles();
        assert!(matches!(
            result,
            Err(TessellationError::MalformedPrimitive { .. })
        ));
    }
}

#[test]
fn test_line_kinds_are_unsupported() {
    for kind in [
        PrimitiveKind::Points,
        PrimitiveKind::Lines,
        PrimitiveKind::LineStrip,
        PrimitiveKind::LineLoop,
    ] {
        assert!(!kind.is_triangle_kind());
        let result = Primitive::new(kind, points(4)).triangles();
        assert_eq!(result, Err(TessellationError::UnsupportedPrimitive { kind }));
    }
}

#[test]
fn test_triangulate_primitives_keeps_order() {
    let a = Primitive::triangles_from(points(3));
    let b = Primitive::new(PrimitiveKind::TriangleFan, points(4));
    let tris = triangulate_primitives(&[a, b]).unwrap();
    assert_eq!(tris.len(), 3);
    assert_eq!(tris[0].vertices[0], DVec3::ZERO);
}

#[test]
fn test_triangulate_primitives_stops_on_unsupported() {
    let a = Primitive::triangles_from(points(3));
    let b = Primitive::new(PrimitiveKind::Lines, points(2));
    assert!(triangulate_primitives(&[a, b]).is_err());
}

#[test]
fn test_triangle_area_and_normal() {
    let tri = Triangle::new(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0));
    assert_abs_diff_eq!(tri.area(), 2.0);
    assert_eq!(tri.normal(), DVec3::Z);
    assert_eq!(tri.flipped().normal(), DVec3::NEG_Z);

    let degenerate = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0));
    assert_eq!(degenerate.normal(), DVec3::ZERO);
}
