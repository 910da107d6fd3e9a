//! # Tessellator
//!
//! Turns a [`Polygon`] into drawable triangle primitives.
//!
//! ## Pipeline
//!
//! ```text
//! rings → normalize → Newell normal → dominant-plane projection
//!       → self-intersection check → f64 ear clipping → 3D triangles
//! ```
//!
//! Output triangles reference the caller's original points and wind the
//! same way as the outer ring.
//!
//! ## Modes
//!
//! - [`Tessellator::tessellate`]: blocking, returns the primitives
//! - [`Tessellator::tessellate_with_listener`]: runs on the rayon pool and
//!   reports through a [`TessellationListener`]
//! - [`Tessellator::spawn`]: returns a [`PendingTessellation`] handle
//! - [`Tessellator::tessellate_all`]: parallel batch, order preserved

mod fill;
mod intersect;

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use config::constants::{GlobalConfig, MIN_RING_POINTS};
use glam::{DVec2, DVec3};
use rayon::prelude::*;

use crate::error::{Result, TessellationError};
use crate::polygon::{newell_normal, normalize_ring, signed_area2, Polygon, Projection};
use crate::primitive::{triangulate_primitives, Primitive, Triangle};

/// Receives the outcome of one asynchronous tessellation.
///
/// Exactly one of the two methods is called, exactly once. Both consume the
/// listener.
pub trait TessellationListener: Send + 'static {
    /// Tessellation succeeded.
    fn on_done(self, primitives: Vec<Primitive>);

    /// Tessellation failed.
    fn on_error(self, error: TessellationError);
}

impl TessellationListener for Sender<Result<Vec<Primitive>>> {
    fn on_done(self, primitives: Vec<Primitive>) {
        // a dropped receiver means nobody is waiting
        let _ = self.send(Ok(primitives));
    }

    fn on_error(self, error: TessellationError) {
        let _ = self.send(Err(error));
    }
}

/// Handle to a tessellation running on the rayon pool.
#[derive(Debug)]
pub struct PendingTessellation {
    receiver: Receiver<Result<Vec<Primitive>>>,
}

impl PendingTessellation {
    /// Blocks until the result is available.
    pub fn wait(self) -> Result<Vec<Primitive>> {
        self.receiver
            .recv()
            .map_err(|_| TessellationError::internal("tessellation worker disconnected"))?
    }

    /// Returns the result if it is ready, without blocking.
    pub fn try_result(&self) -> Option<Result<Vec<Primitive>>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(TessellationError::internal(
                "tessellation worker disconnected",
            ))),
        }
    }
}

/// A polygon together with the triangles covering it.
#[derive(Debug, Clone, PartialEq)]
pub struct TessellatedPolygon {
    polygon: Polygon,
    triangles: Vec<Triangle>,
}

impl TessellatedPolygon {
    /// The source polygon.
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Triangles covering the polygon.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Total area of the triangles.
    pub fn triangulated_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Splits into the polygon and its triangles.
    pub fn into_parts(self) -> (Polygon, Vec<Triangle>) {
        (self.polygon, self.triangles)
    }
}

/// Polygon tessellator.
///
/// Holds only configuration, so one instance can serve any number of
/// threads and concurrent calls.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use polygon_tess::{Polygon, PrimitiveKind, Tessellator};
///
/// let square = Polygon::from_xy(&[
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ]);
/// let primitives = Tessellator::new().tessellate(&square).unwrap();
/// assert_eq!(primitives[0].kind, PrimitiveKind::Triangles);
/// assert_eq!(primitives[0].vertex_count(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tessellator {
    config: GlobalConfig,
}

impl Tessellator {
    /// Creates a tessellator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tessellator with a custom configuration.
    pub fn with_config(config: GlobalConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Tessellates `polygon` into a single [`PrimitiveKind::Triangles`]
    /// primitive.
    ///
    /// # Errors
    ///
    /// - [`TessellationError::MalformedRing`] if a ring has fewer than three
    ///   distinct points
    /// - [`TessellationError::DegeneratePolygon`] if the outer ring or a hole
    ///   encloses no area
    /// - [`TessellationError::SelfIntersection`] if any edges touch or cross
    /// - [`TessellationError::Internal`] if the fill fails or leaves part
    ///   of the polygon uncovered
    ///
    /// [`PrimitiveKind::Triangles`]: crate::PrimitiveKind::Triangles
    pub fn tessellate(&self, polygon: &Polygon) -> Result<Vec<Primitive>> {
        let result = self.run(polygon);
        if let Err(e) = &result {
            tracing::warn!("Tessellation failed: {}", e);
        }
        result
    }

    /// Tessellates on the rayon pool and reports to `listener`.
    ///
    /// Returns immediately. The listener is called once from a worker
    /// thread.
    pub fn tessellate_with_listener<L>(&self, polygon: Polygon, listener: L)
    where
        L: TessellationListener,
    {
        let tessellator = *self;
        rayon::spawn(move || match tessellator.tessellate(&polygon) {
            Ok(primitives) => listener.on_done(primitives),
            Err(error) => listener.on_error(error),
        });
    }

    /// Starts a tessellation on the rayon pool and returns a handle to it.
    pub fn spawn(&self, polygon: Polygon) -> PendingTessellation {
        let (sender, receiver) = mpsc::channel();
        self.tessellate_with_listener(polygon, sender);
        PendingTessellation { receiver }
    }

    /// Tessellates every polygon in parallel. Results keep the input order.
    pub fn tessellate_all(&self, polygons: &[Polygon]) -> Vec<Result<Vec<Primitive>>> {
        polygons.par_iter().map(|p| self.tessellate(p)).collect()
    }

    /// Tessellates and splits the result into independent triangles.
    pub fn tessellate_polygon(&self, polygon: Polygon) -> Result<TessellatedPolygon> {
        let primitives = self.tessellate(&polygon)?;
        let triangles = triangulate_primitives(&primitives)?;
        Ok(TessellatedPolygon { polygon, triangles })
    }

    fn run(&self, polygon: &Polygon) -> Result<Vec<Primitive>> {
        let rings = self.normalized_rings(polygon)?;

        let normal = newell_normal(&rings[0]);
        if !normal.is_finite() || normal.length() <= self.config.tolerance {
            return Err(TessellationError::degenerate(
                "outer ring has a zero-length normal",
            ));
        }

        let projection = Projection::for_normal(normal);
        let flat: Vec<Vec<DVec2>> = rings
            .iter()
            .map(|ring| ring.iter().map(|p| projection.project(*p)).collect())
            .collect();

        for (index, ring) in flat.iter().enumerate().skip(1) {
            if signed_area2(ring).abs() * 0.5 <= self.config.tolerance {
                return Err(TessellationError::degenerate(format!(
                    "hole {} encloses no area",
                    index - 1
                )));
            }
        }

        if intersect::has_self_intersection(&flat) {
            return Err(TessellationError::SelfIntersection);
        }

        let triangles = fill::fill_rings(&flat)?;

        let points: Vec<DVec3> = rings.iter().flatten().copied().collect();
        let flat_points: Vec<DVec2> = flat.iter().flatten().copied().collect();
        let outer_ccw = signed_area2(&flat[0]) > 0.0;

        let mut vertices = Vec::with_capacity(triangles.len() * 3);
        for [a, b, c] in triangles {
            let area = (flat_points[b] - flat_points[a]).perp_dot(flat_points[c] - flat_points[a]);
            if (area > 0.0) == outer_ccw {
                vertices.extend_from_slice(&[points[a], points[b], points[c]]);
            } else {
                vertices.extend_from_slice(&[points[a], points[c], points[b]]);
            }
        }

        tracing::debug!(
            "Tessellated polygon with {} rings into {} triangles",
            rings.len(),
            vertices.len() / 3
        );
        Ok(vec![Primitive::triangles_from(vertices)])
    }

    fn normalized_rings(&self, polygon: &Polygon) -> Result<Vec<Vec<DVec3>>> {
        polygon
            .rings()
            .enumerate()
            .map(|(index, ring)| {
                let ring = normalize_ring(ring, self.config.tolerance);
                if ring.len() < MIN_RING_POINTS {
                    return Err(TessellationError::malformed_ring(
                        index,
                        format!(
                            "needs at least {MIN_RING_POINTS} distinct points, got {}",
                            ring.len()
                        ),
                    ));
                }
                Ok(ring)
            })
            .collect()
    }
}
