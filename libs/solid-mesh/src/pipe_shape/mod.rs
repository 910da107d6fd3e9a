//! Render mesh of a [`Pipe`]: side walls, wireframe and optional end caps.

use glam::{DVec2, DVec3};
use mesh_geometry::MeshBuffers;
use polygon_tess::{Polygon, Tessellator};

use crate::error::{Result, ShapeError};
use crate::pipe::Pipe;

/// Triangle and line buffers for a [`Pipe`].
///
/// Side vertices are laid out contour by contour, `contour_point_count`
/// per path point. Caps, when enabled, follow the side vertices: first the
/// start cap, then the end cap.
///
/// Texture `s` runs from 0 to 1 around the contour; `t` is the path point
/// index, so the texture repeats once per path segment.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_mesh::{Pipe, PipeShape};
///
/// let pipe = Pipe::circular(vec![DVec3::ZERO, DVec3::Z * 4.0], 1.0, 8).unwrap();
/// let shape = PipeShape::with_caps(pipe).unwrap();
/// assert_eq!(shape.side_index_count(), 8 * 2 * 3);
/// assert!(shape.buffers().triangle_count() > 16);
/// ```
#[derive(Debug, Clone)]
pub struct PipeShape {
    pipe: Pipe,
    caps: bool,
    tessellator: Tessellator,
    buffers: MeshBuffers,
    cap_index_start: usize,
    revision: u64,
}

impl PipeShape {
    /// Builds side walls and wireframe, without caps.
    pub fn new(pipe: Pipe) -> Self {
        let tessellator = Tessellator::new();
        let buffers = build_sides(&pipe);
        let cap_index_start = buffers.indices().len();
        Self {
            pipe,
            caps: false,
            tessellator,
            buffers,
            cap_index_start,
            revision: 1,
        }
    }

    /// Builds side walls, wireframe and both end caps.
    ///
    /// # Errors
    ///
    /// [`ShapeError::Tessellation`] if an end contour cannot be tessellated,
    /// for example because it self-intersects.
    pub fn with_caps(pipe: Pipe) -> Result<Self> {
        let mut shape = Self::new(pipe);
        shape.set_caps(true)?;
        Ok(shape)
    }

    /// Uses a custom tessellator for the caps.
    pub fn set_tessellator(&mut self, tessellator: Tessellator) -> Result<()> {
        self.tessellator = tessellator;
        self.rebuild_with(self.pipe.clone(), self.caps)
    }

    /// Turns end caps on or off.
    pub fn set_caps(&mut self, caps: bool) -> Result<()> {
        if caps == self.caps {
            return Ok(());
        }
        self.rebuild_with(self.pipe.clone(), caps)
    }

    /// Replaces the pipe path.
    pub fn set_path(&mut self, path: Vec<DVec3>) -> Result<()> {
        let mut pipe = self.pipe.clone();
        pipe.set_path(path);
        self.rebuild_with(pipe, self.caps)
    }

    /// Replaces the pipe cross-section.
    pub fn set_contour(&mut self, contour: Vec<DVec2>) -> Result<()> {
        let mut pipe = self.pipe.clone();
        pipe.set_contour(contour);
        self.rebuild_with(pipe, self.caps)
    }

    /// Extends the pipe by one path point.
    ///
    /// Without caps only the last two rings are touched: the previous ring
    /// is moved onto its new bisector plane and the new ring is appended
    /// with its quad strip. With caps the whole mesh is rebuilt.
    pub fn add_path_point(&mut self, point: DVec3) -> Result<()> {
        if self.caps {
            let mut pipe = self.pipe.clone();
            pipe.add_path_point(point);
            return self.rebuild_with(pipe, true);
        }

        self.pipe.add_path_point(point);
        let last = self.pipe.path_count() - 1;
        if last > 0 {
            update_ring(&mut self.buffers, &self.pipe, last - 1);
        }
        append_ring(&mut self.buffers, &self.pipe, last);
        self.cap_index_start = self.buffers.indices().len();
        self.revision += 1;
        tracing::trace!("Appended pipe ring {}", last);
        Ok(())
    }

    /// The underlying pipe.
    #[inline]
    pub fn pipe(&self) -> &Pipe {
        &self.pipe
    }

    /// True if end caps are generated.
    #[inline]
    pub fn has_caps(&self) -> bool {
        self.caps
    }

    /// Generated buffers.
    #[inline]
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Number of side wall index entries; cap triangles follow them.
    #[inline]
    pub fn side_index_count(&self) -> usize {
        self.cap_index_start
    }

    /// Increments on every rebuild.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Builds into fresh buffers and commits only on success.
    fn rebuild_with(&mut self, pipe: Pipe, caps: bool) -> Result<()> {
        let mut buffers = build_sides(&pipe);
        let cap_index_start = buffers.indices().len();
        if caps {
            self.add_caps(&pipe, &mut buffers)?;
        }

        self.pipe = pipe;
        self.caps = caps;
        self.buffers = buffers;
        self.cap_index_start = cap_index_start;
        self.revision += 1;
        Ok(())
    }

    fn add_caps(&self, pipe: &Pipe, buffers: &mut MeshBuffers) -> Result<()> {
        let count = pipe.path_count();
        if count < 2 {
            return Ok(());
        }
        let tex = cap_tex_coords(pipe.base_contour());
        self.add_cap(pipe, 0, -pipe.direction(0), &tex, buffers)?;
        self.add_cap(pipe, count - 1, pipe.direction(count - 1), &tex, buffers)?;
        tracing::trace!("Added pipe end caps");
        Ok(())
    }

    /// Tessellates contour `index` and appends it with flat `outward` normals.
    fn add_cap(
        &self,
        pipe: &Pipe,
        index: usize,
        outward: DVec3,
        tex: &[DVec2],
        buffers: &mut MeshBuffers,
    ) -> Result<()> {
        let contour = pipe
            .contour(index)
            .ok_or_else(|| ShapeError::invalid_contour(format!("no contour at {index}")))?;
        let ring = ring_points(pipe, contour);

        let tessellated = self
            .tessellator
            .tessellate_polygon(Polygon::new(ring.to_vec()))?;

        let first = buffers.vertex_count() as u32;
        for (p, t) in ring.iter().zip(tex) {
            buffers.add_vertex(*p, outward, *t);
        }

        for triangle in tessellated.triangles() {
            let triangle = if triangle.normal().dot(outward) < 0.0 {
                triangle.flipped()
            } else {
                *triangle
            };
            let mut ids = [0u32; 3];
            for (id, vertex) in ids.iter_mut().zip(triangle.vertices) {
                let offset = ring.iter().position(|p| *p == vertex).ok_or_else(|| {
                    ShapeError::invalid_contour("cap triangle references an unknown point")
                })?;
                *id = first + offset as u32;
            }
            buffers.add_triangle(ids[0], ids[1], ids[2]);
        }
        Ok(())
    }
}

/// Contour points without the closing duplicate.
fn ring_points<'a>(pipe: &Pipe, contour: &'a [DVec3]) -> &'a [DVec3] {
    if pipe.is_contour_closed() {
        &contour[..contour.len() - 1]
    } else {
        contour
    }
}

/// Planar texture coordinates of the cross-section, fitted to its bounds.
fn cap_tex_coords(contour: &[DVec2]) -> Vec<DVec2> {
    let (min, max) = contour.iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    );
    let size = (max - min).max(DVec2::splat(f64::MIN_POSITIVE));
    contour.iter().map(|p| (*p - min) / size).collect()
}

fn build_sides(pipe: &Pipe) -> MeshBuffers {
    let k_count = pipe.contours().len();
    let n = pipe.contour_point_count();
    let mut buffers = MeshBuffers::with_capacity(k_count * n, k_count.saturating_sub(1) * n * 2);
    for k in 0..k_count {
        append_ring(&mut buffers, pipe, k);
    }
    buffers
}

/// Quads around one ring: `n - 1` for a closed contour, else `n`.
fn segment_count(pipe: &Pipe) -> usize {
    let n = pipe.contour_point_count();
    if pipe.is_contour_closed() {
        n - 1
    } else {
        n
    }
}

/// Appends ring `k` and its wireframe, joined to ring `k - 1` when `k > 0`.
fn append_ring(buffers: &mut MeshBuffers, pipe: &Pipe, k: usize) {
    let (Some(contour), Some(normals)) = (pipe.contour(k), pipe.normal(k)) else {
        return;
    };
    let n = contour.len();
    if n == 0 {
        return;
    }

    let s_div = (n.max(2) - 1) as f64;
    let row = buffers.vertex_count() as u32;
    for (m, (p, nrm)) in contour.iter().zip(normals).enumerate() {
        buffers.add_vertex(*p, *nrm, DVec2::new(m as f64 / s_div, k as f64));
    }

    let segments = segment_count(pipe) as u32;
    let n = n as u32;
    for m in 0..segments {
        buffers.add_line(row + m, row + (m + 1) % n);
    }
    if k == 0 {
        return;
    }

    let prev = row - n;
    for m in 0..segments {
        let next = (m + 1) % n;
        let a = prev + m;
        let b = prev + next;
        let c = row + m;
        let d = row + next;
        buffers.add_triangle(a, b, c);
        buffers.add_triangle(c, b, d);
        buffers.add_line(a, c);
    }
}

/// Rewrites positions and normals of ring `k` from the pipe.
fn update_ring(buffers: &mut MeshBuffers, pipe: &Pipe, k: usize) {
    let (Some(contour), Some(normals)) = (pipe.contour(k), pipe.normal(k)) else {
        return;
    };
    let row = k * contour.len();
    for (m, (p, nrm)) in contour.iter().zip(normals).enumerate() {
        buffers.set_vertex(row + m, *p, *nrm);
    }
}

#[cfg(test)]
mod tests;
