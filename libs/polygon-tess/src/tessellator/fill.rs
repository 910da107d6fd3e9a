//! Ear-clipping fill of projected rings, in f64.

use earcutr::earcut;
use glam::DVec2;

use crate::error::{Result, TessellationError};
use crate::polygon::signed_area2;

/// Relative slack allowed between the triangulated area and the ring area.
const COVERAGE_TOLERANCE: f64 = 1.0e-9;

/// Triangulates `rings`, the outer ring first and holes after it.
///
/// Returns index triples into the rings flattened in order. Input must
/// already be free of self-intersections. Coordinates are moved to a local
/// origin at the first point and never leave f64, so every output index is
/// an input point and no vertex is created or merged.
///
/// A result that does not cover the rings' area is reported as
/// [`TessellationError::Internal`].
pub(crate) fn fill_rings(rings: &[Vec<DVec2>]) -> Result<Vec<[usize; 3]>> {
    let origin = rings
        .first()
        .and_then(|ring| ring.first())
        .copied()
        .unwrap_or(DVec2::ZERO);

    let mut coords: Vec<f64> = Vec::with_capacity(rings.iter().map(Vec::len).sum::<usize>() * 2);
    let mut hole_starts: Vec<usize> = Vec::with_capacity(rings.len().saturating_sub(1));
    for (index, ring) in rings.iter().enumerate() {
        if index > 0 {
            hole_starts.push(coords.len() / 2);
        }
        for p in ring {
            let local = *p - origin;
            coords.push(local.x);
            coords.push(local.y);
        }
    }

    let indices = earcut(&coords, &hole_starts, 2)
        .map_err(|_| TessellationError::internal("ear clipping failed"))?;
    if indices.len() < 3 || indices.len() % 3 != 0 {
        return Err(TessellationError::internal(format!(
            "ear clipping produced {} indices",
            indices.len()
        )));
    }

    let point_count = coords.len() / 2;
    let point = |i: usize| DVec2::new(coords[2 * i], coords[2 * i + 1]);
    let mut triangles = Vec::with_capacity(indices.len() / 3);
    let mut covered = 0.0;
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]];
        if a.max(b).max(c) >= point_count {
            return Err(TessellationError::internal("ear clipping index out of range"));
        }
        covered += (point(b) - point(a)).perp_dot(point(c) - point(a)).abs() * 0.5;
        triangles.push([a, b, c]);
    }

    let outer = rings.first().map_or(0.0, |ring| signed_area2(ring).abs() * 0.5);
    let holes: f64 = rings
        .iter()
        .skip(1)
        .map(|ring| signed_area2(ring).abs() * 0.5)
        .sum();
    let expected = outer - holes;
    if (covered - expected).abs() > COVERAGE_TOLERANCE * (outer + holes) {
        return Err(TessellationError::internal(format!(
            "triangles cover {covered}, polygon area is {expected}"
        )));
    }
    Ok(triangles)
}
