//! # Pipe
//!
//! Carries a 2D cross-section contour along a 3D polyline.
//!
//! ## Algorithm
//!
//! 1. The first contour is rotated so its local +Z faces the first path
//!    segment, then moved to `path[0]`
//! 2. Each following contour is the previous one pushed along the incoming
//!    segment direction until it meets the bisector plane at its path
//!    point; the plane normal is the sum of the incoming and outgoing
//!    segment directions (the incoming direction alone at the last point)
//! 3. Normals point from the path point to each contour point

use config::constants::{EPSILON, MIN_CONTOUR_STEPS};
use glam::{DMat3, DVec2, DVec3};
use mesh_geometry::{look_at, Line, Plane};

use crate::error::{Result, ShapeError};

/// Circle contour of `steps` segments, closed: `steps + 1` points with the
/// last one back at the start angle.
///
/// # Errors
///
/// [`ShapeError::InvalidParameter`] if `radius` is not finite and positive
/// or `steps` is below the minimum.
///
/// # Example
///
/// ```rust
/// use solid_mesh::circle_contour;
///
/// let circle = circle_contour(2.0, 8).unwrap();
/// assert_eq!(circle.len(), 9);
/// assert!((circle[0] - circle[8]).length() < 1e-12);
/// ```
pub fn circle_contour(radius: f64, steps: u32) -> Result<Vec<DVec2>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ShapeError::invalid_parameter(
            "radius",
            format!("must be finite and > 0, got {radius}"),
        ));
    }
    if steps < MIN_CONTOUR_STEPS {
        return Err(ShapeError::invalid_parameter(
            "steps",
            format!("must be >= {MIN_CONTOUR_STEPS}, got {steps}"),
        ));
    }
    Ok(crate::unit_circle(steps)
        .into_iter()
        .map(|u| u * radius)
        .collect())
}

/// A contour swept along a path.
///
/// Holds one transformed contour and one set of normals per path point.
/// Degenerate geometry (a path folding straight back on itself, for
/// example) yields NaN points rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipe {
    path: Vec<DVec3>,
    base_contour: Vec<DVec2>,
    contours: Vec<Vec<DVec3>>,
    normals: Vec<Vec<DVec3>>,
}

impl Pipe {
    /// Creates a pipe and generates all contours.
    pub fn new(path: Vec<DVec3>, contour: Vec<DVec2>) -> Self {
        let mut pipe = Self {
            path,
            base_contour: contour,
            contours: Vec::new(),
            normals: Vec::new(),
        };
        pipe.generate_contours();
        pipe
    }

    /// Creates a round pipe with a [`circle_contour`] cross-section.
    pub fn circular(path: Vec<DVec3>, radius: f64, steps: u32) -> Result<Self> {
        Ok(Self::new(path, circle_contour(radius, steps)?))
    }

    /// Replaces path and contour, then regenerates.
    pub fn set(&mut self, path: Vec<DVec3>, contour: Vec<DVec2>) {
        self.path = path;
        self.base_contour = contour;
        self.generate_contours();
    }

    /// Replaces the path, then regenerates.
    pub fn set_path(&mut self, path: Vec<DVec3>) {
        self.path = path;
        self.generate_contours();
    }

    /// Replaces the cross-section, then regenerates.
    pub fn set_contour(&mut self, contour: Vec<DVec2>) {
        self.base_contour = contour;
        self.generate_contours();
    }

    /// Appends a path point.
    ///
    /// Only the new contour and the one before it are computed; earlier
    /// contours are left untouched.
    pub fn add_path_point(&mut self, point: DVec3) {
        self.path.push(point);
        let count = self.path.len();
        match count {
            1 => self.transform_first_contour(),
            2 => {
                // the first contour now has a direction to face
                self.transform_first_contour();
                self.store_projection(0, 1);
            }
            _ => {
                self.store_projection(count - 3, count - 2);
                self.store_projection(count - 2, count - 1);
            }
        }
    }

    /// Recomputes every contour and normal set from the path.
    pub fn generate_contours(&mut self) {
        self.contours.clear();
        self.normals.clear();
        if self.path.is_empty() {
            return;
        }

        self.transform_first_contour();
        for i in 1..self.path.len() {
            self.store_projection(i - 1, i);
        }
        tracing::debug!(
            "Generated {} pipe contours of {} points",
            self.contours.len(),
            self.base_contour.len()
        );
    }

    /// The path.
    #[inline]
    pub fn path(&self) -> &[DVec3] {
        &self.path
    }

    /// Number of path points.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path.len()
    }

    /// The untransformed 2D cross-section.
    #[inline]
    pub fn base_contour(&self) -> &[DVec2] {
        &self.base_contour
    }

    /// Number of points in each contour.
    #[inline]
    pub fn contour_point_count(&self) -> usize {
        self.base_contour.len()
    }

    /// The contour at path point `index`.
    pub fn contour(&self, index: usize) -> Option<&[DVec3]> {
        self.contours.get(index).map(Vec::as_slice)
    }

    /// The normals at path point `index`.
    pub fn normal(&self, index: usize) -> Option<&[DVec3]> {
        self.normals.get(index).map(Vec::as_slice)
    }

    /// All contours, one per path point.
    #[inline]
    pub fn contours(&self) -> &[Vec<DVec3>] {
        &self.contours
    }

    /// All normal sets, one per path point.
    #[inline]
    pub fn normals(&self) -> &[Vec<DVec3>] {
        &self.normals
    }

    /// True if the cross-section's last point repeats its first.
    pub fn is_contour_closed(&self) -> bool {
        match (self.base_contour.first(), self.base_contour.last()) {
            (Some(first), Some(last)) if self.base_contour.len() > 1 => {
                first.distance(*last) <= EPSILON * first.length().max(1.0)
            }
            _ => false,
        }
    }

    /// Unit direction of the path at point `index`: the incoming segment, or
    /// the outgoing one at the first point. Zero for a single-point path.
    pub fn direction(&self, index: usize) -> DVec3 {
        let n = self.path.len();
        if n < 2 || index >= n {
            return DVec3::ZERO;
        }
        let (from, to) = if index == 0 { (0, 1) } else { (index - 1, index) };
        (self.path[to] - self.path[from]).normalize_or_zero()
    }

    fn transform_first_contour(&mut self) {
        let Some(&origin) = self.path.first() else {
            return;
        };
        let rotation = if self.path.len() > 1 {
            look_at(self.path[1] - origin)
        } else {
            DMat3::IDENTITY
        };

        let contour: Vec<DVec3> = self
            .base_contour
            .iter()
            .map(|p| rotation * p.extend(0.0) + origin)
            .collect();
        self.store(0, contour);
    }

    /// Projects contour `from` onto the bisector plane at `to` and stores it.
    fn store_projection(&mut self, from: usize, to: usize) {
        let contour = self.project_contour(from, to);
        self.store(to, contour);
    }

    fn project_contour(&self, from: usize, to: usize) -> Vec<DVec3> {
        let dir1 = self.path[to] - self.path[from];
        let dir2 = if to + 1 == self.path.len() {
            dir1
        } else {
            self.path[to + 1] - self.path[to]
        };
        let plane = Plane::from_normal_point(dir1 + dir2, self.path[to]);

        tracing::trace!("Projecting pipe contour {} onto path point {}", from, to);
        self.contours[from]
            .iter()
            .map(|p| plane.intersect_line(&Line::new(dir1, *p)))
            .collect()
    }

    /// Writes contour `index` and its normals, appending if it is new.
    fn store(&mut self, index: usize, contour: Vec<DVec3>) {
        let center = self.path[index];
        let normals: Vec<DVec3> = contour
            .iter()
            .map(|p| (*p - center).normalize_or_zero())
            .collect();

        if index < self.contours.len() {
            self.contours[index] = contour;
            self.normals[index] = normals;
        } else {
            self.contours.push(contour);
            self.normals.push(normals);
        }
    }
}
