//! # Solid Mesh
//!
//! Render-mesh builders for parametric solids and swept tubes.
//!
//! ## Shapes
//!
//! - [`Cylinder`]: cylinder, cone or frustum with base and top caps
//! - [`Sphere`]: UV sphere with pole fans
//! - [`Pipe`]: a 2D contour carried along a 3D path
//! - [`PipeShape`]: side walls, wireframe and optional end caps of a pipe
//!
//! Every shape owns a [`MeshBuffers`] that is rebuilt in full whenever an
//! effective parameter change happens. Setting a parameter to its current
//! value does nothing.
//!
//! ## Example
//!
//! ```rust
//! use solid_mesh::Sphere;
//!
//! let mut sphere = Sphere::default();
//! sphere.set_radius(2.0).unwrap();
//! assert!(sphere
//!     .buffers()
//!     .vertices()
//!     .iter()
//!     .all(|v| (v.length() - 2.0).abs() < 1e-9));
//! ```
//!
//! [`MeshBuffers`]: mesh_geometry::MeshBuffers

pub mod cylinder;
pub mod error;
pub mod pipe;
pub mod pipe_shape;
pub mod sphere;

pub use cylinder::{Cylinder, CylinderParams};
pub use error::{Result, ShapeError};
pub use pipe::{circle_contour, Pipe};
pub use pipe_shape::PipeShape;
pub use sphere::{Sphere, SphereParams};

use glam::DVec2;

/// Unit circle samples `(cos a, sin a)` for `a = j·2π/sectors`, `j = 0..=sectors`.
///
/// The last sample repeats the first so texture seams get their own vertex.
pub(crate) fn unit_circle(sectors: u32) -> Vec<DVec2> {
    let step = std::f64::consts::TAU / sectors as f64;
    (0..=sectors)
        .map(|j| {
            let (sin, cos) = (j as f64 * step).sin_cos();
            DVec2::new(cos, sin)
        })
        .collect()
}
