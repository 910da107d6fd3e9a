//! # Polygon Tessellator
//!
//! Triangulates simple polygons and polygons with holes, given as planar
//! rings of 3D points, into drawable triangle primitives.
//!
//! ## Modules
//!
//! - [`polygon`]: input rings, area and normal
//! - [`tessellator`]: the tessellator and its blocking, listener, handle and
//!   batch modes
//! - [`primitive`]: primitive kinds and the triangle post-processor
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use polygon_tess::{Polygon, Tessellator};
//!
//! let outer = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(4.0, 0.0),
//!     DVec2::new(4.0, 4.0),
//!     DVec2::new(0.0, 4.0),
//! ];
//! let hole = vec![
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(1.0, 3.0),
//!     DVec2::new(3.0, 3.0),
//!     DVec2::new(3.0, 1.0),
//! ];
//! let polygon = Polygon::from_xy_with_holes(&outer, &[hole]);
//!
//! let tessellated = Tessellator::new().tessellate_polygon(polygon).unwrap();
//! assert!((tessellated.triangulated_area() - 12.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod polygon;
pub mod primitive;
pub mod tessellator;

pub use error::{Result, TessellationError};
pub use polygon::Polygon;
pub use primitive::{triangulate_primitives, Primitive, PrimitiveKind, Triangle};
pub use tessellator::{
    PendingTessellation, TessellatedPolygon, TessellationListener, Tessellator,
};
