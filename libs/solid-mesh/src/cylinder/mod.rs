//! Cylinder, cone and frustum meshes.
//!
//! The native frame is Z-up, centred on the origin: the base sits at
//! `z = -height/2`, the top at `z = +height/2`.

use config::constants::{
    GlobalConfig, DEFAULT_CYLINDER_STACK_COUNT, DEFAULT_HEIGHT, DEFAULT_RADIUS,
    MIN_CYLINDER_STACK_COUNT, MIN_SECTOR_COUNT,
};
use glam::{DVec2, DVec3};
use mesh_geometry::{face_normal, MeshBuffers, UpAxis};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapeError};
use crate::unit_circle;

/// Shape parameters of a [`Cylinder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    /// Radius at `z = -height/2`.
    pub base_radius: f64,
    /// Radius at `z = +height/2`.
    pub top_radius: f64,
    /// Extent along the up axis.
    pub height: f64,
    /// Subdivisions around the axis.
    pub sector_count: u32,
    /// Subdivisions along the axis.
    pub stack_count: u32,
    /// Interpolated normals when true, per-face normals otherwise.
    pub smooth: bool,
    /// Axis the cylinder stands on.
    pub up_axis: UpAxis,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

impl CylinderParams {
    /// Default parameters with the sector count taken from `config`.
    ///
    /// A cylinder has no use for the sphere stack default, so it keeps a
    /// single stack.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            base_radius: DEFAULT_RADIUS,
            top_radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            sector_count: config.default_sectors,
            stack_count: DEFAULT_CYLINDER_STACK_COUNT,
            smooth: true,
            up_axis: UpAxis::Z,
        }
    }

    /// Checks every parameter against its valid range.
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, radius) in [
            ("base_radius", self.base_radius),
            ("top_radius", self.top_radius),
        ] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ShapeError::invalid_parameter(
                    name,
                    format!("must be finite and >= 0, got {radius}"),
                ));
            }
        }
        if self.base_radius == 0.0 && self.top_radius == 0.0 {
            return Err(ShapeError::invalid_parameter(
                "base_radius",
                "base and top radius cannot both be 0",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ShapeError::invalid_parameter(
                "height",
                format!("must be finite and > 0, got {}", self.height),
            ));
        }
        if self.sector_count < MIN_SECTOR_COUNT {
            return Err(ShapeError::invalid_parameter(
                "sector_count",
                format!("must be >= {MIN_SECTOR_COUNT}, got {}", self.sector_count),
            ));
        }
        if self.stack_count < MIN_CYLINDER_STACK_COUNT {
            return Err(ShapeError::invalid_parameter(
                "stack_count",
                format!(
                    "must be >= {MIN_CYLINDER_STACK_COUNT}, got {}",
                    self.stack_count
                ),
            ));
        }
        Ok(())
    }
}

/// Cylinder mesh with independent base and top radii.
///
/// A zero top (or base) radius gives a cone.
///
/// # Example
///
/// ```rust
/// use mesh_geometry::UpAxis;
/// use solid_mesh::Cylinder;
///
/// let cylinder = Cylinder::new(1.0, 1.0, 2.0, 4, 1, false, UpAxis::Z).unwrap();
/// assert_eq!(cylinder.buffers().triangle_count(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct Cylinder {
    params: CylinderParams,
    buffers: MeshBuffers,
    base_index_start: usize,
    top_index_start: usize,
    revision: u64,
}

impl Default for Cylinder {
    fn default() -> Self {
        let mut cylinder = Self {
            params: CylinderParams::default(),
            buffers: MeshBuffers::new(),
            base_index_start: 0,
            top_index_start: 0,
            revision: 0,
        };
        cylinder.build();
        cylinder
    }
}

impl Cylinder {
    /// Creates and builds a cylinder.
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidParameter`] if a parameter is out of range.
    pub fn new(
        base_radius: f64,
        top_radius: f64,
        height: f64,
        sector_count: u32,
        stack_count: u32,
        smooth: bool,
        up_axis: UpAxis,
    ) -> Result<Self> {
        Self::from_params(CylinderParams {
            base_radius,
            top_radius,
            height,
            sector_count,
            stack_count,
            smooth,
            up_axis,
        })
    }

    /// Creates and builds a cylinder from a parameter set.
    pub fn from_params(params: CylinderParams) -> Result<Self> {
        params.validate()?;
        let mut cylinder = Self {
            params,
            buffers: MeshBuffers::new(),
            base_index_start: 0,
            top_index_start: 0,
            revision: 0,
        };
        cylinder.build();
        Ok(cylinder)
    }

    /// Replaces every parameter at once.
    pub fn set(&mut self, params: CylinderParams) -> Result<()> {
        self.update(|p| *p = params)
    }

    /// Sets the base radius.
    pub fn set_base_radius(&mut self, radius: f64) -> Result<()> {
        self.update(|p| p.base_radius = radius)
    }

    /// Sets the top radius.
    pub fn set_top_radius(&mut self, radius: f64) -> Result<()> {
        self.update(|p| p.top_radius = radius)
    }

    /// Sets the height.
    pub fn set_height(&mut self, height: f64) -> Result<()> {
        self.update(|p| p.height = height)
    }

    /// Sets the sector count.
    pub fn set_sector_count(&mut self, count: u32) -> Result<()> {
        self.update(|p| p.sector_count = count)
    }

    /// Sets the stack count.
    pub fn set_stack_count(&mut self, count: u32) -> Result<()> {
        self.update(|p| p.stack_count = count)
    }

    /// Switches between smooth and flat shading.
    pub fn set_smooth(&mut self, smooth: bool) -> Result<()> {
        self.update(|p| p.smooth = smooth)
    }

    /// Sets the up axis.
    pub fn set_up_axis(&mut self, up_axis: UpAxis) -> Result<()> {
        self.update(|p| p.up_axis = up_axis)
    }

    /// Flips every normal and triangle winding in place.
    ///
    /// The next rebuild restores outward normals.
    pub fn reverse_normals(&mut self) {
        self.buffers.reverse_normals();
    }

    /// Current parameters.
    #[inline]
    pub fn params(&self) -> &CylinderParams {
        &self.params
    }

    /// Radius at the base.
    #[inline]
    pub fn base_radius(&self) -> f64 {
        self.params.base_radius
    }

    /// Radius at the top.
    #[inline]
    pub fn top_radius(&self) -> f64 {
        self.params.top_radius
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.params.height
    }

    /// Sector count.
    #[inline]
    pub fn sector_count(&self) -> u32 {
        self.params.sector_count
    }

    /// Stack count.
    #[inline]
    pub fn stack_count(&self) -> u32 {
        self.params.stack_count
    }

    /// True for smooth shading.
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.params.smooth
    }

    /// Up axis.
    #[inline]
    pub fn up_axis(&self) -> UpAxis {
        self.params.up_axis
    }

    /// Generated buffers.
    #[inline]
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Offset into the index buffer where the side triangles start.
    #[inline]
    pub fn side_index_start(&self) -> usize {
        0
    }

    /// Offset into the index buffer where the base cap triangles start.
    #[inline]
    pub fn base_index_start(&self) -> usize {
        self.base_index_start
    }

    /// Offset into the index buffer where the top cap triangles start.
    #[inline]
    pub fn top_index_start(&self) -> usize {
        self.top_index_start
    }

    /// Number of side index entries.
    #[inline]
    pub fn side_index_count(&self) -> usize {
        self.base_index_start
    }

    /// Number of base cap index entries.
    #[inline]
    pub fn base_index_count(&self) -> usize {
        self.top_index_start - self.base_index_start
    }

    /// Number of top cap index entries.
    #[inline]
    pub fn top_index_count(&self) -> usize {
        self.buffers.indices().len() - self.top_index_start
    }

    /// Increments on every rebuild.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn update(&mut self, change: impl FnOnce(&mut CylinderParams)) -> Result<()> {
        let mut params = self.params;
        change(&mut params);
        if params == self.params {
            return Ok(());
        }
        params.validate()?;
        self.params = params;
        self.build();
        Ok(())
    }

    fn build(&mut self) {
        let circle = unit_circle(self.params.sector_count);
        self.buffers.clear();
        if self.params.smooth {
            self.build_smooth_sides(&circle);
        } else {
            self.build_flat_sides(&circle);
        }
        self.build_caps(&circle);

        if self.params.up_axis != UpAxis::Z {
            self.buffers.rotate(&self.params.up_axis.rotation_from_z());
        }
        self.revision += 1;
        tracing::debug!(
            "Built cylinder: {} vertices, {} triangles",
            self.buffers.vertex_count(),
            self.buffers.triangle_count()
        );
    }

    /// Radius and height of stack ring `i`.
    fn ring(&self, i: u32) -> (f64, f64) {
        let p = &self.params;
        let f = i as f64 / p.stack_count as f64;
        (
            p.base_radius + f * (p.top_radius - p.base_radius),
            -p.height * 0.5 + f * p.height,
        )
    }

    fn build_smooth_sides(&mut self, circle: &[DVec2]) {
        let sectors = self.params.sector_count;
        let stacks = self.params.stack_count;

        // side normals lean towards the narrow end
        let z_angle = (self.params.base_radius - self.params.top_radius).atan2(self.params.height);
        let (sin_z, cos_z) = z_angle.sin_cos();

        for i in 0..=stacks {
            let (radius, z) = self.ring(i);
            let t = 1.0 - i as f64 / stacks as f64;
            for (j, u) in circle.iter().enumerate() {
                self.buffers.add_vertex(
                    DVec3::new(u.x * radius, u.y * radius, z),
                    DVec3::new(u.x * cos_z, u.y * cos_z, sin_z),
                    DVec2::new(j as f64 / sectors as f64, t),
                );
            }
        }

        for i in 0..stacks {
            let mut k1 = i * (sectors + 1);
            let mut k2 = k1 + sectors + 1;
            for _ in 0..sectors {
                self.buffers.add_triangle(k1, k1 + 1, k2);
                self.buffers.add_triangle(k2, k1 + 1, k2 + 1);

                self.buffers.add_line(k1, k2);
                self.buffers.add_line(k2, k2 + 1);
                if i == 0 {
                    self.buffers.add_line(k1, k1 + 1);
                }
                k1 += 1;
                k2 += 1;
            }
        }
    }

    fn build_flat_sides(&mut self, circle: &[DVec2]) {
        let sectors = self.params.sector_count as usize;
        let stacks = self.params.stack_count;

        let mut grid: Vec<(DVec3, DVec2)> = Vec::with_capacity((stacks as usize + 1) * (sectors + 1));
        for i in 0..=stacks {
            let (radius, z) = self.ring(i);
            let t = 1.0 - i as f64 / stacks as f64;
            for (j, u) in circle.iter().enumerate() {
                grid.push((
                    DVec3::new(u.x * radius, u.y * radius, z),
                    DVec2::new(j as f64 / sectors as f64, t),
                ));
            }
        }

        for i in 0..stacks as usize {
            let row1 = i * (sectors + 1);
            let row2 = row1 + sectors + 1;
            for j in 0..sectors {
                // v1 - v3   bottom row
                // |    |
                // v2 - v4   top row
                let v1 = grid[row1 + j];
                let v2 = grid[row2 + j];
                let v3 = grid[row1 + j + 1];
                let v4 = grid[row2 + j + 1];
                let normal = face_normal(v1.0, v3.0, v2.0);

                let index = self.buffers.add_vertex(v1.0, normal, v1.1);
                self.buffers.add_vertex(v2.0, normal, v2.1);
                self.buffers.add_vertex(v3.0, normal, v3.1);
                self.buffers.add_vertex(v4.0, normal, v4.1);

                self.buffers.add_triangle(index, index + 2, index + 1);
                self.buffers.add_triangle(index + 1, index + 2, index + 3);

                self.buffers.add_line(index, index + 1);
                self.buffers.add_line(index + 1, index + 3);
                if i == 0 {
                    self.buffers.add_line(index, index + 2);
                }
            }
        }
    }

    fn build_caps(&mut self, circle: &[DVec2]) {
        let sectors = self.params.sector_count;
        let half = self.params.height * 0.5;
        let rim = &circle[..sectors as usize];

        let base = self.buffers.add_vertex(
            DVec3::new(0.0, 0.0, -half),
            DVec3::NEG_Z,
            DVec2::splat(0.5),
        );
        for u in rim {
            let r = self.params.base_radius;
            self.buffers.add_vertex(
                DVec3::new(u.x * r, u.y * r, -half),
                DVec3::NEG_Z,
                DVec2::new(-u.x * 0.5 + 0.5, -u.y * 0.5 + 0.5),
            );
        }

        let top = self.buffers.add_vertex(
            DVec3::new(0.0, 0.0, half),
            DVec3::Z,
            DVec2::splat(0.5),
        );
        for u in rim {
            let r = self.params.top_radius;
            self.buffers.add_vertex(
                DVec3::new(u.x * r, u.y * r, half),
                DVec3::Z,
                DVec2::new(u.x * 0.5 + 0.5, -u.y * 0.5 + 0.5),
            );
        }

        self.base_index_start = self.buffers.indices().len();
        for j in 0..sectors {
            let k = base + 1 + j;
            let next = if j + 1 < sectors { k + 1 } else { base + 1 };
            self.buffers.add_triangle(base, next, k);
        }

        self.top_index_start = self.buffers.indices().len();
        for j in 0..sectors {
            let k = top + 1 + j;
            let next = if j + 1 < sectors { k + 1 } else { top + 1 };
            self.buffers.add_triangle(top, k, next);
        }
    }
}

#[cfg(test)]
mod tests;
