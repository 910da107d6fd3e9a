//! # Config Crate
//!
//! Centralized configuration constants for the polygon tessellation and
//! solid-mesh crates. Tolerances, minimum resolutions, and the default
//! shape parameters live here so geometry code never carries bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_SECTOR_COUNT, MIN_SECTOR_COUNT};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Resolution defaults for solids of revolution
//! let requested = 0u32;
//! let sectors = if requested >= MIN_SECTOR_COUNT { requested } else { DEFAULT_SECTOR_COUNT };
//! assert_eq!(sectors, DEFAULT_SECTOR_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Renderer-Agnostic**: No GPU or windowing values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
