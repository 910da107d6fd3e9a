//! Polygon input: an outer ring plus optional hole rings.
//!
//! Points are 3D so planar polygons in any orientation (2.5D) can be
//! tessellated; 2D callers use `z = 0` via [`Polygon::from_xy`].

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A polygon with an outer ring and zero or more holes.
///
/// Rings are closed sequences. A final point repeating the first one is
/// accepted and ignored.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use polygon_tess::Polygon;
///
/// let square = Polygon::from_xy(&[
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(4.0, 4.0),
///     DVec2::new(0.0, 4.0),
///     DVec2::new(0.0, 0.0),
/// ]);
/// assert_eq!(square.area(), 16.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    outer: Vec<DVec3>,
    holes: Vec<Vec<DVec3>>,
}

impl Polygon {
    /// Creates a polygon without holes.
    pub fn new(outer: Vec<DVec3>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(outer: Vec<DVec3>, holes: Vec<Vec<DVec3>>) -> Self {
        Self { outer, holes }
    }

    /// Creates a polygon in the z = 0 plane.
    pub fn from_xy(outer: &[DVec2]) -> Self {
        Self::new(lift(outer))
    }

    /// Creates a holed polygon in the z = 0 plane.
    pub fn from_xy_with_holes(outer: &[DVec2], holes: &[Vec<DVec2>]) -> Self {
        Self::with_holes(lift(outer), holes.iter().map(|h| lift(h)).collect())
    }

    /// Appends a hole ring.
    pub fn add_hole(&mut self, hole: Vec<DVec3>) {
        self.holes.push(hole);
    }

    /// The outer ring.
    #[inline]
    pub fn outer(&self) -> &[DVec3] {
        &self.outer
    }

    /// The hole rings.
    #[inline]
    pub fn holes(&self) -> &[Vec<DVec3>] {
        &self.holes
    }

    /// Returns true if the polygon has at least one hole.
    #[inline]
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Number of rings, outer included.
    #[inline]
    pub fn ring_count(&self) -> usize {
        1 + self.holes.len()
    }

    /// Iterates over all rings, outer ring first.
    pub fn rings(&self) -> impl Iterator<Item = &[DVec3]> + '_ {
        std::iter::once(self.outer.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Newell normal of the outer ring; its length is twice the ring's area.
    pub fn normal(&self) -> DVec3 {
        newell_normal(&self.outer)
    }

    /// Enclosed area: outer ring area minus the hole areas.
    ///
    /// Assumes planar rings and holes lying inside the outer ring.
    pub fn area(&self) -> f64 {
        let outer = ring_area(&self.outer);
        let holes: f64 = self.holes.iter().map(|h| ring_area(h)).sum();
        outer - holes
    }
}

fn lift(points: &[DVec2]) -> Vec<DVec3> {
    points.iter().map(|p| p.extend(0.0)).collect()
}

/// Unsigned area of a planar ring.
pub(crate) fn ring_area(ring: &[DVec3]) -> f64 {
    newell_normal(ring).length() * 0.5
}

/// Newell's method: sum of edge contributions, robust for non-convex rings.
pub(crate) fn newell_normal(ring: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

/// Drops consecutive repeats (within `tolerance`) and the closing duplicate.
pub(crate) fn normalize_ring(points: &[DVec3], tolerance: f64) -> Vec<DVec3> {
    let mut ring: Vec<DVec3> = Vec::with_capacity(points.len());
    for &p in points {
        match ring.last() {
            Some(last) if last.distance(p) <= tolerance => {}
            _ => ring.push(p),
        }
    }
    while ring.len() > 1 && ring[0].distance(ring[ring.len() - 1]) <= tolerance {
        ring.pop();
    }
    ring
}

/// Plane a polygon is flattened onto before the 2D fill.
///
/// The dropped axis is the dominant component of the polygon normal; the
/// remaining two axes are taken in cyclic order so the projection keeps the
/// winding seen from the normal's positive side when that component is
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Projection {
    /// Drop X, keep (y, z).
    YZ,
    /// Drop Y, keep (z, x).
    ZX,
    /// Drop Z, keep (x, y).
    XY,
}

impl Projection {
    pub(crate) fn for_normal(normal: DVec3) -> Self {
        let a = normal.abs();
        if a.z >= a.x && a.z >= a.y {
            Projection::XY
        } else if a.x >= a.y {
            Projection::YZ
        } else {
            Projection::ZX
        }
    }

    #[inline]
    pub(crate) fn project(self, p: DVec3) -> DVec2 {
        match self {
            Projection::YZ => DVec2::new(p.y, p.z),
            Projection::ZX => DVec2::new(p.z, p.x),
            Projection::XY => DVec2::new(p.x, p.y),
        }
    }
}

/// Twice the signed area of a projected ring (positive when counter-clockwise).
pub(crate) fn signed_area2(ring: &[DVec2]) -> f64 {
    // relative to the first point, so far-off rings do not cancel out
    let Some(&origin) = ring.first() else {
        return 0.0;
    };
    let mut sum = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        sum += (*a - origin).perp_dot(b - origin);
    }
    sum
}
