//! Core types and utilities

pub mod angle;
pub mod vector3;

pub use angle::{Degrees, Radians, DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};
pub use vector3::Vector3;
