//! # Mesh Geometry
//!
//! Geometry helpers shared by the polygon tessellator and the solid/pipe
//! builders.
//!
//! ## Contents
//!
//! - [`Line`]: point + direction, line/line intersection
//! - [`Plane`]: normal + offset, line/plane and plane/plane intersection
//! - [`frame`]: look-at rotation, face normals, up-axis conversion
//! - [`MeshBuffers`]: positions, normals, texcoords, triangle and wireframe
//!   indices with f32 export for GPU upload
//!
//! ## Degenerate input
//!
//! Intersections never fail loudly. Parallel inputs produce a point whose
//! components are all NaN (see [`nan_point`] / [`is_nan_point`]) and
//! degenerate faces produce a zero normal. Callers check before use.
//!
//! ```rust
//! use glam::DVec3;
//! use mesh_geometry::{is_nan_point, Line, Plane};
//!
//! let plane = Plane::from_normal_point(DVec3::Z, DVec3::new(0.0, 0.0, 1.0));
//! let hit = plane.intersect_line(&Line::new(DVec3::Z, DVec3::ZERO));
//! assert_eq!(hit, DVec3::new(0.0, 0.0, 1.0));
//!
//! let parallel = plane.intersect_line(&Line::new(DVec3::X, DVec3::ZERO));
//! assert!(is_nan_point(parallel));
//! ```

pub mod buffers;
pub mod frame;
pub mod line;
pub mod plane;

pub use buffers::MeshBuffers;
pub use frame::{face_normal, look_at, UpAxis};
pub use line::Line;
pub use plane::Plane;

use glam::DVec3;

/// Returns the sentinel point used for "no intersection".
#[inline]
pub fn nan_point() -> DVec3 {
    DVec3::splat(f64::NAN)
}

/// Returns true if every component of `point` is NaN.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_geometry::{is_nan_point, nan_point};
///
/// assert!(is_nan_point(nan_point()));
/// assert!(!is_nan_point(DVec3::ZERO));
/// ```
#[inline]
pub fn is_nan_point(point: DVec3) -> bool {
    point.x.is_nan() && point.y.is_nan() && point.z.is_nan()
}
