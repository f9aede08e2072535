//! 3D Vector Math Core Library
//!
//! A small value-type library for 3D spatial computation (positions,
//! directions and rotations) used by cameras, transforms and scene graphs in
//! the rendering toolkit.
//!
//! ## Overview
//!
//! - [`Vector3`]: three `f64` components with in-place operations
//!   (normalize, compound arithmetic, axis rotations)
//! - [`ops`]: pure free functions (`add`, `sub`, `dot`, `cross`) and the std
//!   operator impls built on them
//! - [`core_types::angle`]: `Degrees` / `Radians` newtypes and conversion factors
//! - `interop` (feature `nalgebra`): conversions to and from `nalgebra` vectors
//!
//! ```
//! use vector3_core::{ops, Vector3};
//!
//! let mut forward = Vector3::new(0.0, 0.0, 5.0);
//! forward.normalize();
//! let right = ops::cross(&Vector3::UNIT_Y, &forward);
//! assert_eq!(right.to_string(), "x:1 y:0 z:0");
//! ```

// Core types and utilities
pub mod core_types;

// Pure operations and operator overloads
pub mod ops;

// Linear-algebra interop
#[cfg(feature = "nalgebra")]
pub mod interop;

// Re-export core types
pub use core_types::{Degrees, Radians, Vector3};
pub use core_types::{DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};

// Re-export free operations
pub use ops::{add, cross, dot, sub};
