//! Orientation helpers: look-at rotation, face normals, up-axis conversion.

use config::constants::{FACE_NORMAL_EPSILON, LOOK_AT_EPSILON};
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Builds the rotation that turns the local +Z axis towards `target`.
///
/// Columns are `(left, up, forward)`. The up hint is +Y, switched to -Z/+Z
/// when `target` is (nearly) parallel to +Y/-Y. A zero `target` yields the
/// identity.
///
/// # Example
///
/// ```rust
/// use glam::{DMat3, DVec3};
/// use mesh_geometry::look_at;
///
/// assert_eq!(look_at(DVec3::Z), DMat3::IDENTITY);
/// let m = look_at(DVec3::new(3.0, 0.0, 0.0));
/// assert!((m * DVec3::Z - DVec3::X).length() < 1e-12);
/// ```
pub fn look_at(target: DVec3) -> DMat3 {
    let forward = target.normalize_or_zero();
    if forward == DVec3::ZERO {
        return DMat3::IDENTITY;
    }

    let up = if forward.x.abs() < LOOK_AT_EPSILON && forward.z.abs() < LOOK_AT_EPSILON {
        if forward.y > 0.0 {
            DVec3::NEG_Z
        } else {
            DVec3::Z
        }
    } else {
        DVec3::Y
    };

    let left = up.cross(forward).normalize();
    let up = forward.cross(left);

    DMat3::from_cols(left, up, forward)
}

/// Computes the unit normal of the triangle `(p1, p2, p3)`.
///
/// Uses the cross product of the edges `p2 - p1` and `p3 - p1`. Faces whose
/// cross product is not longer than `FACE_NORMAL_EPSILON` return the zero
/// vector.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_geometry::face_normal;
///
/// let n = face_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(n, DVec3::Z);
/// assert_eq!(face_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0), DVec3::ZERO);
/// ```
pub fn face_normal(p1: DVec3, p2: DVec3, p3: DVec3) -> DVec3 {
    let normal = (p2 - p1).cross(p3 - p1);
    let length = normal.length();
    if length > FACE_NORMAL_EPSILON {
        normal / length
    } else {
        DVec3::ZERO
    }
}

/// Axis that a generated solid treats as "up".
///
/// Solids are built with +Z up and rotated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpAxis {
    /// +X is up.
    X,
    /// +Y is up.
    Y,
    /// +Z is up (native orientation).
    #[default]
    Z,
}

impl UpAxis {
    /// Rotation mapping the native +Z-up frame onto this axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use mesh_geometry::UpAxis;
    ///
    /// assert_eq!(UpAxis::Y.rotation_from_z() * DVec3::Z, DVec3::Y);
    /// assert_eq!(UpAxis::X.rotation_from_z() * DVec3::Z, DVec3::X);
    /// ```
    pub fn rotation_from_z(self) -> DMat3 {
        match self {
            // (x, y, z) -> (z, y, -x)
            UpAxis::X => DMat3::from_cols(DVec3::NEG_Z, DVec3::Y, DVec3::X),
            // (x, y, z) -> (x, z, -y)
            UpAxis::Y => DMat3::from_cols(DVec3::X, DVec3::NEG_Z, DVec3::Y),
            UpAxis::Z => DMat3::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests;
