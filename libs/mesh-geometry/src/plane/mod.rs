//! 3D plane `a*x + b*y + c*z + d = 0`.

use config::constants::stabilize_parameter;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{line::Line, nan_point};

/// A plane stored as its normal `(a, b, c)` and the offset term `d`.
///
/// The normal does not need to be unit length; [`Plane::distance_to`]
/// divides by the cached normal length. Only the equation is serialized;
/// the length is recomputed on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlaneEquation", into = "PlaneEquation")]
pub struct Plane {
    normal: DVec3,
    d: f64,
    normal_length: f64,
}

/// Serialized form of [`Plane`].
#[derive(Serialize, Deserialize)]
struct PlaneEquation {
    normal: DVec3,
    d: f64,
}

impl From<PlaneEquation> for Plane {
    fn from(equation: PlaneEquation) -> Self {
        Self {
            normal: equation.normal,
            d: equation.d,
            normal_length: equation.normal.length(),
        }
    }
}

impl From<Plane> for PlaneEquation {
    fn from(plane: Plane) -> Self {
        Self {
            normal: plane.normal,
            d: plane.d,
        }
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }
}

impl Plane {
    /// Creates the plane `a*x + b*y + c*z + d = 0`.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        let normal = DVec3::new(a, b, c);
        Self {
            normal,
            d,
            normal_length: normal.length(),
        }
    }

    /// Creates the plane with the given normal passing through `point`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use mesh_geometry::Plane;
    ///
    /// let plane = Plane::from_normal_point(DVec3::new(0.0, 0.0, 2.0), DVec3::new(0.0, 0.0, 3.0));
    /// assert_eq!(plane.d(), -6.0);
    /// assert_eq!(plane.distance_to(DVec3::ZERO), -3.0);
    /// ```
    pub fn from_normal_point(normal: DVec3, point: DVec3) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
            normal_length: normal.length(),
        }
    }

    /// Returns the (possibly non-unit) normal vector.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the constant term `d`.
    #[inline]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Signed distance from the origin to the plane along the normal.
    pub fn distance(&self) -> f64 {
        -self.d / self.normal_length
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    pub fn distance_to(&self, point: DVec3) -> f64 {
        (self.normal.dot(point) + self.d) / self.normal_length
    }

    /// Scales the plane equation so the normal has unit length.
    ///
    /// A zero normal is left untouched.
    pub fn normalize(&mut self) {
        if self.normal_length == 0.0 {
            return;
        }
        let inv = 1.0 / self.normal_length;
        self.normal *= inv;
        self.d *= inv;
        self.normal_length = 1.0;
    }

    /// Intersects a line with this plane.
    ///
    /// Solves `n . (p + t*v) + d = 0` for `t`. A line parallel to the plane
    /// (zero `n . v`) yields a NaN point. When `|t| > 2` the intersection is
    /// considered unstable and `t` is replaced by 1, i.e. the line's point is
    /// moved by exactly one direction vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use mesh_geometry::{Line, Plane};
    ///
    /// let plane = Plane::from_normal_point(DVec3::X, DVec3::new(1.5, 0.0, 0.0));
    /// let line = Line::new(DVec3::X, DVec3::new(0.0, 2.0, 0.0));
    /// assert_eq!(plane.intersect_line(&line), DVec3::new(1.5, 2.0, 0.0));
    /// ```
    pub fn intersect_line(&self, line: &Line) -> DVec3 {
        let p = line.point();
        let v = line.direction();

        let dot1 = self.normal.dot(p);
        let dot2 = self.normal.dot(v);
        if dot2 == 0.0 {
            return nan_point();
        }

        let t = stabilize_parameter(-(dot1 + self.d) / dot2);
        p + v * t
    }

    /// Intersects two planes.
    ///
    /// The direction is `n1 x n2`; the point is `((d2*n1 - d1*n2) x v) / |v|^2`.
    /// Parallel planes return a line whose direction and point are NaN.
    pub fn intersect_plane(&self, other: &Plane) -> Line {
        let n2 = other.normal;
        let d2 = other.d;

        let v = self.normal.cross(n2);
        if v == DVec3::ZERO {
            return Line::new(nan_point(), nan_point());
        }

        let dot = v.dot(v);
        let u1 = self.normal * d2;
        let u2 = n2 * -self.d;
        let p = (u1 + u2).cross(v) / dot;

        Line::new(v, p)
    }

    /// Returns true unless `line` is parallel to the plane.
    pub fn is_intersected_line(&self, line: &Line) -> bool {
        self.normal.dot(line.direction()) != 0.0
    }

    /// Returns true unless the planes are parallel.
    pub fn is_intersected_plane(&self, other: &Plane) -> bool {
        self.normal.cross(other.normal) != DVec3::ZERO
    }
}
