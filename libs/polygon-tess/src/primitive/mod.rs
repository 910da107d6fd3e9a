//! # Primitives
//!
//! Drawable primitives produced by tessellation and the post-processor that
//! turns triangle lists, strips, and fans into independent triangles.

use glam::DVec3;
use mesh_geometry::face_normal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TessellationError};

/// Drawing mode of a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Independent triangles, three vertices each.
    Triangles,
    /// Each vertex after the second forms a triangle with the previous two.
    TriangleStrip,
    /// Each vertex after the second forms a triangle with the first and previous.
    TriangleFan,
    /// Individual points.
    Points,
    /// Independent line segments.
    Lines,
    /// Connected line segments.
    LineStrip,
    /// Connected line segments, closed.
    LineLoop,
}

impl PrimitiveKind {
    /// Returns true for the kinds the post-processor can split into triangles.
    pub fn is_triangle_kind(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Triangles | PrimitiveKind::TriangleStrip | PrimitiveKind::TriangleFan
        )
    }
}

/// A drawing mode plus its ordered vertex list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Drawing mode.
    pub kind: PrimitiveKind,
    /// Vertices, interpreted according to `kind`.
    pub vertices: Vec<DVec3>,
}

impl Primitive {
    /// Creates a primitive.
    pub fn new(kind: PrimitiveKind, vertices: Vec<DVec3>) -> Self {
        Self { kind, vertices }
    }

    /// Creates a triangle-list primitive.
    pub fn triangles_from(vertices: Vec<DVec3>) -> Self {
        Self::new(PrimitiveKind::Triangles, vertices)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Splits this primitive into independent triangles.
    ///
    /// # Errors
    ///
    /// - [`TessellationError::UnsupportedPrimitive`] for point and line kinds
    /// - [`TessellationError::MalformedPrimitive`] for a triangle list whose
    ///   length is not a multiple of three, or a strip/fan with fewer than
    ///   three vertices
    pub fn triangles(&self) -> Result<Vec<Triangle>> {
        let v = &self.vertices;
        match self.kind {
            PrimitiveKind::Triangles => {
                if v.len() % 3 != 0 {
                    return Err(TessellationError::malformed_primitive(format!(
                        "triangle list has {} vertices, not a multiple of 3",
                        v.len()
                    )));
                }
                Ok(v
                    .chunks_exact(3)
                    .map(|c| Triangle::new(c[0], c[1], c[2]))
                    .collect())
            }
            PrimitiveKind::TriangleFan => {
                require_three(self.kind, v.len())?;
                Ok((2..v.len())
                    .map(|i| Triangle::new(v[0], v[i - 1], v[i]))
                    .collect())
            }
            PrimitiveKind::TriangleStrip => {
                require_three(self.kind, v.len())?;
                Ok((2..v.len())
                    .map(|i| {
                        // odd triangles flip to keep a consistent winding
                        if i % 2 == 0 {
                            Triangle::new(v[i - 2], v[i - 1], v[i])
                        } else {
                            Triangle::new(v[i - 1], v[i - 2], v[i])
                        }
                    })
                    .collect())
            }
            kind => Err(TessellationError::UnsupportedPrimitive { kind }),
        }
    }
}

fn require_three(kind: PrimitiveKind, count: usize) -> Result<()> {
    if count < 3 {
        return Err(TessellationError::malformed_primitive(format!(
            "{kind:?} needs at least 3 vertices, got {count}"
        )));
    }
    Ok(())
}

/// Flattens a primitive list into independent triangles, in input order.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use polygon_tess::{triangulate_primitives, Primitive, PrimitiveKind};
///
/// let fan = Primitive::new(
///     PrimitiveKind::TriangleFan,
///     vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
/// );
/// let triangles = triangulate_primitives(&[fan]).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate_primitives(primitives: &[Primitive]) -> Result<Vec<Triangle>> {
    let mut triangles = Vec::new();
    for primitive in primitives {
        triangles.extend(primitive.triangles()?);
    }
    Ok(triangles)
}

/// Three vertices of one output triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Vertices in winding order.
    pub vertices: [DVec3; 3],
}

impl Triangle {
    /// Creates a triangle.
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Triangle area.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a).length() * 0.5
    }

    /// Unit normal following the winding, or zero for a degenerate triangle.
    pub fn normal(&self) -> DVec3 {
        let [a, b, c] = self.vertices;
        face_normal(a, b, c)
    }

    /// Same triangle with the opposite winding.
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(a, c, b)
    }
}

#[cfg(test)]
mod tests;
