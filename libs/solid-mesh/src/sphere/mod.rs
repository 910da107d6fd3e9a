//! UV sphere meshes.
//!
//! Stacks run from the north pole (`+Z`) to the south pole; sectors run
//! counter-clockwise around `+Z` starting at `+X`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use config::constants::{GlobalConfig, DEFAULT_RADIUS, MIN_SECTOR_COUNT, MIN_SPHERE_STACK_COUNT};
use glam::{DVec2, DVec3};
use mesh_geometry::{face_normal, MeshBuffers, UpAxis};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapeError};

/// Shape parameters of a [`Sphere`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    /// Sphere radius.
    pub radius: f64,
    /// Subdivisions around the axis (longitude).
    pub sector_count: u32,
    /// Subdivisions from pole to pole (latitude).
    pub stack_count: u32,
    /// Interpolated normals when true, per-face normals otherwise.
    pub smooth: bool,
    /// Axis through the poles.
    pub up_axis: UpAxis,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

impl SphereParams {
    /// Default parameters with sector and stack counts taken from `config`.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            sector_count: config.default_sectors,
            stack_count: config.default_stacks,
            smooth: true,
            up_axis: UpAxis::Z,
        }
    }

    /// Checks every parameter against its valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ShapeError::invalid_parameter(
                "radius",
                format!("must be finite and > 0, got {}", self.radius),
            ));
        }
        if self.sector_count < MIN_SECTOR_COUNT {
            return Err(ShapeError::invalid_parameter(
                "sector_count",
                format!("must be >= {MIN_SECTOR_COUNT}, got {}", self.sector_count),
            ));
        }
        if self.stack_count < MIN_SPHERE_STACK_COUNT {
            return Err(ShapeError::invalid_parameter(
                "stack_count",
                format!(
                    "must be >= {MIN_SPHERE_STACK_COUNT}, got {}",
                    self.stack_count
                ),
            ));
        }
        Ok(())
    }
}

/// Sphere mesh centred on the origin.
///
/// # Example
///
/// ```rust
/// use mesh_geometry::UpAxis;
/// use solid_mesh::Sphere;
///
/// let sphere = Sphere::new(1.0, 8, 4, true, UpAxis::Z).unwrap();
/// assert_eq!(sphere.buffers().vertex_count(), 9 * 5);
/// // one triangle per sector at each pole, two elsewhere
/// assert_eq!(sphere.buffers().triangle_count(), 8 + 8 + 2 * 8 * 2);
/// ```
#[derive(Debug, Clone)]
pub struct Sphere {
    params: SphereParams,
    buffers: MeshBuffers,
    revision: u64,
}

impl Default for Sphere {
    fn default() -> Self {
        let mut sphere = Self {
            params: SphereParams::default(),
            buffers: MeshBuffers::new(),
            revision: 0,
        };
        sphere.build();
        sphere
    }
}

impl Sphere {
    /// Creates and builds a sphere.
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidParameter`] if a parameter is out of range.
    pub fn new(
        radius: f64,
        sector_count: u32,
        stack_count: u32,
        smooth: bool,
        up_axis: UpAxis,
    ) -> Result<Self> {
        Self::from_params(SphereParams {
            radius,
            sector_count,
            stack_count,
            smooth,
            up_axis,
        })
    }

    /// Creates and builds a sphere from a parameter set.
    pub fn from_params(params: SphereParams) -> Result<Self> {
        params.validate()?;
        let mut sphere = Self {
            params,
            buffers: MeshBuffers::new(),
            revision: 0,
        };
        sphere.build();
        Ok(sphere)
    }

    /// Replaces every parameter at once.
    pub fn set(&mut self, params: SphereParams) -> Result<()> {
        self.update(|p| *p = params)
    }

    /// Sets the radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.update(|p| p.radius = radius)
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
    pub fn reverse_normals(&mut self) {
        self.buffers.reverse_normals();
    }

    /// Current parameters.
    #[inline]
    pub fn params(&self) -> &SphereParams {
        &self.params
    }

    /// Radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.params.radius
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

    /// Increments on every rebuild.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn update(&mut self, change: impl FnOnce(&mut SphereParams)) -> Result<()> {
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
        self.buffers.clear();
        let grid = self.grid();
        if self.params.smooth {
            self.build_smooth(&grid);
        } else {
            self.build_flat(&grid);
        }

        if self.params.up_axis != UpAxis::Z {
            self.buffers.rotate(&self.params.up_axis.rotation_from_z());
        }
        self.revision += 1;
        tracing::debug!(
            "Built sphere: {} vertices, {} triangles",
            self.buffers.vertex_count(),
            self.buffers.triangle_count()
        );
    }

    /// Surface samples with texcoords, `(stacks + 1) × (sectors + 1)`, row-major.
    fn grid(&self) -> Vec<(DVec3, DVec2)> {
        let SphereParams {
            radius,
            sector_count: sectors,
            stack_count: stacks,
            ..
        } = self.params;
        let sector_step = TAU / sectors as f64;
        let stack_step = PI / stacks as f64;

        let mut grid = Vec::with_capacity((stacks as usize + 1) * (sectors as usize + 1));
        for i in 0..=stacks {
            let stack_angle = FRAC_PI_2 - i as f64 * stack_step;
            let xy = radius * stack_angle.cos();
            let z = radius * stack_angle.sin();
            for j in 0..=sectors {
                let (sin, cos) = (j as f64 * sector_step).sin_cos();
                grid.push((
                    DVec3::new(xy * cos, xy * sin, z),
                    DVec2::new(j as f64 / sectors as f64, i as f64 / stacks as f64),
                ));
            }
        }
        grid
    }

    fn build_smooth(&mut self, grid: &[(DVec3, DVec2)]) {
        let inv_radius = 1.0 / self.params.radius;
        for &(position, tex) in grid {
            self.buffers.add_vertex(position, position * inv_radius, tex);
        }

        let sectors = self.params.sector_count;
        let stacks = self.params.stack_count;
        for i in 0..stacks {
            let mut k1 = i * (sectors + 1);
            let mut k2 = k1 + sectors + 1;
            for _ in 0..sectors {
                if i != 0 {
                    self.buffers.add_triangle(k1, k2, k1 + 1);
                }
                if i != stacks - 1 {
                    self.buffers.add_triangle(k1 + 1, k2, k2 + 1);
                }

                self.buffers.add_line(k1, k2);
                if i != 0 {
                    self.buffers.add_line(k1, k1 + 1);
                }
                k1 += 1;
                k2 += 1;
            }
        }
    }

    fn build_flat(&mut self, grid: &[(DVec3, DVec2)]) {
        let sectors = self.params.sector_count as usize;
        let stacks = self.params.stack_count as usize;

        for i in 0..stacks {
            let row1 = i * (sectors + 1);
            let row2 = row1 + sectors + 1;
            for j in 0..sectors {
                // v1 - v3   upper stack
                // |    |
                // v2 - v4   lower stack
                let v1 = grid[row1 + j];
                let v2 = grid[row2 + j];
                let v3 = grid[row1 + j + 1];
                let v4 = grid[row2 + j + 1];

                if i == 0 {
                    let normal = face_normal(v1.0, v2.0, v4.0);
                    let index = self.buffers.add_vertex(v1.0, normal, v1.1);
                    self.buffers.add_vertex(v2.0, normal, v2.1);
                    self.buffers.add_vertex(v4.0, normal, v4.1);
                    self.buffers.add_triangle(index, index + 1, index + 2);
                    self.buffers.add_line(index, index + 1);
                } else if i == stacks - 1 {
                    let normal = face_normal(v1.0, v2.0, v3.0);
                    let index = self.buffers.add_vertex(v1.0, normal, v1.1);
                    self.buffers.add_vertex(v2.0, normal, v2.1);
                    self.buffers.add_vertex(v3.0, normal, v3.1);
                    self.buffers.add_triangle(index, index + 1, index + 2);
                    self.buffers.add_line(index, index + 1);
                    self.buffers.add_line(index, index + 2);
                } else {
                    let normal = face_normal(v1.0, v2.0, v3.0);
                    let index = self.buffers.add_vertex(v1.0, normal, v1.1);
                    self.buffers.add_vertex(v2.0, normal, v2.1);
                    self.buffers.add_vertex(v3.0, normal, v3.1);
                    self.buffers.add_vertex(v4.0, normal, v4.1);
                    self.buffers.add_triangle(index, index + 1, index + 2);
                    self.buffers.add_triangle(index + 2, index + 1, index + 3);
                    self.buffers.add_line(index, index + 1);
                    self.buffers.add_line(index, index + 2);
                }
            }
        }
    }
}
