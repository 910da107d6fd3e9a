//! # Mesh Buffers
//!
//! Flat render buffers shared by every generated solid: positions, normals,
//! texture coordinates, triangle indices, and wireframe line indices.

use config::constants::INTERLEAVED_COMPONENTS;
use glam::{DMat3, DVec2, DVec3};
use serde::Serialize;

/// Parallel vertex buffers plus triangle and line index lists.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the rendering boundary.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use mesh_geometry::MeshBuffers;
///
/// let mut buffers = MeshBuffers::new();
/// let a = buffers.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
/// let b = buffers.add_vertex(DVec3::X, DVec3::Z, DVec2::X);
/// let c = buffers.add_vertex(DVec3::Y, DVec3::Z, DVec2::Y);
/// buffers.add_triangle(a, b, c);
/// buffers.add_line(a, b);
/// assert_eq!(buffers.triangle_count(), 1);
/// assert_eq!(buffers.line_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshBuffers {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    tex_coords: Vec<DVec2>,
    indices: Vec<u32>,
    line_indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            tex_coords: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
            line_indices: Vec::new(),
        }
    }

    /// Drops every vertex and index.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.tex_coords.clear();
        self.indices.clear();
        self.line_indices.clear();
    }

    /// Adds a vertex with its normal and texture coordinate and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, tex_coord: DVec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
        index
    }

    /// Moves vertex `index` and replaces its normal, keeping its texture
    /// coordinate. Returns false if there is no such vertex.
    pub fn set_vertex(&mut self, index: usize, position: DVec3, normal: DVec3) -> bool {
        match (self.vertices.get_mut(index), self.normals.get_mut(index)) {
            (Some(v), Some(n)) => {
                *v = position;
                *n = normal;
                true
            }
            _ => false,
        }
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, i1: u32, i2: u32, i3: u32) {
        self.indices.extend_from_slice(&[i1, i2, i3]);
    }

    /// Adds a wireframe edge by vertex indices.
    pub fn add_line(&mut self, i1: u32, i2: u32) {
        self.line_indices.extend_from_slice(&[i1, i2]);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the number of wireframe edges.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_indices.len() / 2
    }

    /// Returns true if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Per-vertex normals, parallel to [`MeshBuffers::vertices`].
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Per-vertex texture coordinates, parallel to [`MeshBuffers::vertices`].
    #[inline]
    pub fn tex_coords(&self) -> &[DVec2] {
        &self.tex_coords
    }

    /// Triangle indices, three per triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Wireframe line indices, two per edge.
    #[inline]
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns the positions of the triangle at `index`.
    pub fn triangle_positions(&self, index: usize) -> Option<[DVec3; 3]> {
        let tri = self.indices.get(index * 3..index * 3 + 3)?;
        Some([
            *self.vertices.get(tri[0] as usize)?,
            *self.vertices.get(tri[1] as usize)?,
            *self.vertices.get(tri[2] as usize)?,
        ])
    }

    /// Flips every normal and reverses triangle winding.
    pub fn reverse_normals(&mut self) {
        for normal in &mut self.normals {
            *normal = -*normal;
        }
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(0, 2);
        }
    }

    /// Rotates positions and normals by `rotation`.
    pub fn rotate(&mut self, rotation: &DMat3) {
        for v in &mut self.vertices {
            *v = *rotation * *v;
        }
        for n in &mut self.normals {
            *n = *rotation * *n;
        }
    }

    /// Translates the positions by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another set of buffers, offsetting its indices.
    pub fn merge(&mut self, other: &MeshBuffers) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.tex_coords.extend_from_slice(&other.tex_coords);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
        self.line_indices
            .extend(other.line_indices.iter().map(|i| i + offset));
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates buffer consistency.
    ///
    /// Checks:
    /// - Parallel buffers have the same length
    /// - Index lists are complete triples/pairs
    /// - All indices reference existing vertices
    pub fn validate(&self) -> bool {
        let count = self.vertices.len();
        if self.normals.len() != count || self.tex_coords.len() != count {
            return false;
        }
        if self.indices.len() % 3 != 0 || self.line_indices.len() % 2 != 0 {
            return false;
        }
        self.indices
            .iter()
            .chain(self.line_indices.iter())
            .all(|&i| (i as usize) < count)
    }

    /// Exports positions as a flat f32 array `[x, y, z, ...]`.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten3(&self.vertices)
    }

    /// Exports normals as a flat f32 array `[nx, ny, nz, ...]`.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports texture coordinates as a flat f32 array `[s, t, ...]`.
    pub fn tex_coords_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.tex_coords.len() * 2);
        for t in &self.tex_coords {
            result.push(t.x as f32);
            result.push(t.y as f32);
        }
        result
    }

    /// Exports an interleaved f32 array: position, normal, texcoord per vertex.
    ///
    /// Each vertex occupies `INTERLEAVED_COMPONENTS` floats.
    pub fn interleaved_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * INTERLEAVED_COMPONENTS);
        for ((v, n), t) in self
            .vertices
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
        {
            result.extend_from_slice(&[
                v.x as f32, v.y as f32, v.z as f32, n.x as f32, n.y as f32, n.z as f32,
                t.x as f32, t.y as f32,
            ]);
        }
        result
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
