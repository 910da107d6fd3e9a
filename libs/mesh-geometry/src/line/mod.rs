//! 3D line defined by a point and a direction vector.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::nan_point;

/// An infinite 3D line: `point + t * direction`.
///
/// The direction is not normalized; intersection parameters are expressed
/// in units of the stored direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    direction: DVec3,
    point: DVec3,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            direction: DVec3::X,
            point: DVec3::ZERO,
        }
    }
}

impl Line {
    /// Creates a line through `point` running along `direction`.
    pub fn new(direction: DVec3, point: DVec3) -> Self {
        Self { direction, point }
    }

    /// Creates the line running from `from` towards `to`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use mesh_geometry::Line;
    ///
    /// let line = Line::from_points(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0));
    /// assert_eq!(line.point_at(0.5), DVec3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn from_points(from: DVec3, to: DVec3) -> Self {
        Self {
            direction: to - from,
            point: from,
        }
    }

    /// Replaces both the direction and the point.
    pub fn set(&mut self, direction: DVec3, point: DVec3) {
        self.direction = direction;
        self.point = point;
    }

    /// Returns the direction vector.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Returns the anchor point.
    #[inline]
    pub fn point(&self) -> DVec3 {
        self.point
    }

    /// Returns `point + t * direction`.
    #[inline]
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.point + self.direction * t
    }

    /// Intersects this line with `other`.
    ///
    /// Solves `p1 + a*v1` for `a = ((p2 - p1) x v2) . (v1 x v2) / |v1 x v2|^2`.
    /// For skew lines the result is the point on `self` closest to `other`.
    /// Parallel lines (zero cross product) yield a NaN point.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use mesh_geometry::{is_nan_point, Line};
    ///
    /// let x_axis = Line::new(DVec3::X, DVec3::ZERO);
    /// let vertical = Line::new(DVec3::Y, DVec3::new(3.0, -1.0, 0.0));
    /// assert_eq!(x_axis.intersect(&vertical), DVec3::new(3.0, 0.0, 0.0));
    ///
    /// let shifted = Line::new(DVec3::X, DVec3::Y);
    /// assert!(is_nan_point(x_axis.intersect(&shifted)));
    /// ```
    pub fn intersect(&self, other: &Line) -> DVec3 {
        let v2 = other.direction;
        let p2 = other.point;

        let v3 = (p2 - self.point).cross(v2);
        let v4 = self.direction.cross(v2);

        let dot = v4.dot(v4);
        if dot == 0.0 {
            return nan_point();
        }

        let alpha = v3.dot(v4) / dot;
        self.point + self.direction * alpha
    }

    /// Returns true unless the two lines are parallel.
    pub fn is_intersected(&self, other: &Line) -> bool {
        self.direction.cross(other.direction) != DVec3::ZERO
    }
}

#[cfg(test)]
mod tests;
