//! # Configuration Constants
//!
//! Centralized constants for the tessellation and mesh-generation pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Minimum and default sector/stack counts
//! - **Projection**: Stabilization values for line/plane intersection
//! - **Buffers**: Layout of exported vertex data

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum length a face normal must exceed before it is normalized.
///
/// Faces whose edge cross product is shorter than this are treated as
/// degenerate and receive a zero normal instead of a division by zero.
///
/// # Example
///
/// ```rust
/// use config::constants::FACE_NORMAL_EPSILON;
/// assert!(FACE_NORMAL_EPSILON > 0.0);
/// ```
pub const FACE_NORMAL_EPSILON: f64 = 1e-6;

/// Tolerance used by `look_at` to detect a forward vector parallel to +Y/-Y.
///
/// # Example
///
/// ```rust
/// use config::constants::LOOK_AT_EPSILON;
/// assert!(LOOK_AT_EPSILON < 1e-3);
/// ```
pub const LOOK_AT_EPSILON: f64 = 1e-5;

/// Distance below which two consecutive ring points are collapsed into one.
///
/// # Example
///
/// ```rust
/// use config::constants::POINT_MERGE_EPSILON;
///
/// let a = [0.0_f64, 0.0];
/// let b = [1e-13_f64, 0.0];
/// let d = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt();
/// assert!(d < POINT_MERGE_EPSILON);
/// ```
pub const POINT_MERGE_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of points a polygon ring needs after normalization.
pub const MIN_RING_POINTS: usize = 3;

/// Minimum number of sectors (longitude subdivisions) for any solid of
/// revolution.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SECTOR_COUNT;
/// assert_eq!(MIN_SECTOR_COUNT, 3);
/// ```
pub const MIN_SECTOR_COUNT: u32 = 3;

/// Minimum number of stacks for a cylinder (one band between base and top).
pub const MIN_CYLINDER_STACK_COUNT: u32 = 1;

/// Minimum number of stacks for a sphere (the two polar bands).
pub const MIN_SPHERE_STACK_COUNT: u32 = 2;

/// Default sector count used by `Default` shape constructors.
pub const DEFAULT_SECTOR_COUNT: u32 = 36;

/// Default stack count for spheres.
pub const DEFAULT_SPHERE_STACK_COUNT: u32 = 18;

/// Default stack count for cylinders.
pub const DEFAULT_CYLINDER_STACK_COUNT: u32 = 1;

/// Default radius for spheres and cylinders.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default cylinder height.
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Minimum number of steps for a generated circular pipe contour.
pub const MIN_CONTOUR_STEPS: u32 = 3;

// =============================================================================
// PROJECTION CONSTANTS
// =============================================================================

/// Parametric offset magnitude above which a line/plane intersection is
/// considered numerically unstable.
///
/// # Example
///
/// ```rust
/// use config::constants::{PROJECTION_CLAMP_LIMIT, PROJECTION_CLAMP_VALUE};
///
/// let t: f64 = -3.5;
/// let t = if t.abs() > PROJECTION_CLAMP_LIMIT { PROJECTION_CLAMP_VALUE } else { t };
/// assert_eq!(t, 1.0);
/// ```
pub const PROJECTION_CLAMP_LIMIT: f64 = 2.0;

/// Parametric offset substituted when [`PROJECTION_CLAMP_LIMIT`] is exceeded.
pub const PROJECTION_CLAMP_VALUE: f64 = 1.0;

// =============================================================================
// BUFFER CONSTANTS
// =============================================================================

/// Number of f32 components per interleaved vertex (position, normal, texcoord).
pub const INTERLEAVED_COMPONENTS: usize = 8;

/// Byte stride of one interleaved vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::{INTERLEAVED_COMPONENTS, INTERLEAVED_STRIDE};
/// assert_eq!(INTERLEAVED_STRIDE, INTERLEAVED_COMPONENTS * 4);
/// ```
pub const INTERLEAVED_STRIDE: usize = INTERLEAVED_COMPONENTS * std::mem::size_of::<f32>();

// =============================================================================
// HELPERS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Stabilizes a line parameter the way pipe projection expects.
///
/// Values whose magnitude exceeds [`PROJECTION_CLAMP_LIMIT`] are replaced by
/// [`PROJECTION_CLAMP_VALUE`]. This is a heuristic kept for compatibility
/// with existing pipe geometry, not a derived bound.
///
/// # Example
///
/// ```rust
/// use config::constants::stabilize_parameter;
///
/// assert_eq!(stabilize_parameter(0.5), 0.5);
/// assert_eq!(stabilize_parameter(2.0), 2.0);
/// assert_eq!(stabilize_parameter(-7.0), 1.0);
/// ```
#[inline]
pub fn stabilize_parameter(t: f64) -> f64 {
    if t.abs() > PROJECTION_CLAMP_LIMIT {
        PROJECTION_CLAMP_VALUE
    } else {
        t
    }
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance used when collapsing repeated ring points.
    pub tolerance: f64,
    /// Default sector count for solids of revolution.
    pub default_sectors: u32,
    /// Default stack count for spheres.
    pub default_stacks: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-9, 24, 12).expect("valid config");
    /// assert_eq!(cfg.default_sectors, 24);
    /// ```
    pub fn new(
        tolerance: f64,
        default_sectors: u32,
        default_stacks: u32,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_sectors < MIN_SECTOR_COUNT {
            return Err(ConfigError::InvalidSectors(default_sectors));
        }
        if default_stacks < MIN_SPHERE_STACK_COUNT {
            return Err(ConfigError::InvalidStacks(default_stacks));
        }
        Ok(Self {
            tolerance,
            default_sectors,
            default_stacks,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: POINT_MERGE_EPSILON,
            default_sectors: DEFAULT_SECTOR_COUNT,
            default_stacks: DEFAULT_SPHERE_STACK_COUNT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the sector count is too small to close a ring.
    InvalidSectors(u32),
    /// Raised when the stack count cannot form both sphere poles.
    InvalidStacks(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and non-negative: {value}")
            }
            ConfigError::InvalidSectors(value) => {
                write!(f, "default_sectors must be >= {MIN_SECTOR_COUNT}: {value}")
            }
            ConfigError::InvalidStacks(value) => {
                write!(f, "default_stacks must be >= {MIN_SPHERE_STACK_COUNT}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
