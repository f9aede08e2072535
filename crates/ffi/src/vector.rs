//! FFI-exposed vector value type and pure operations.
//!
//! `CVector3` has a stable C layout and is passed by value for the pure
//! operations below. None of them can fail, so they return their result
//! directly and leave the last-error state untouched.

use vector3_core::{ops, Vector3};

/// C-compatible 3D vector.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CVector3 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Depth coordinate.
    pub z: f64,
}

impl From<Vector3> for CVector3 {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<CVector3> for Vector3 {
    fn from(v: CVector3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<&CVector3> for Vector3 {
    fn from(v: &CVector3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// Construct a vector from three components.
#[no_mangle]
pub extern "C" fn vector3_new(x: f64, y: f64, z: f64) -> CVector3 {
    Vector3::new(x, y, z).into()
}

/// Componentwise sum `v + w`.
#[no_mangle]
pub extern "C" fn vector3_add(v: CVector3, w: CVector3) -> CVector3 {
    ops::add(&v.into(), &w.into()).into()
}

/// Componentwise difference `v - w`.
#[no_mangle]
pub extern "C" fn vector3_sub(v: CVector3, w: CVector3) -> CVector3 {
    ops::sub(&v.into(), &w.into()).into()
}

/// Dot product of `v` and `w`.
#[no_mangle]
pub extern "C" fn vector3_dot(v: CVector3, w: CVector3) -> f64 {
    ops::dot(&v.into(), &w.into())
}

/// Right-handed cross product `v x w`.
#[no_mangle]
pub extern "C" fn vector3_cross(v: CVector3, w: CVector3) -> CVector3 {
    ops::cross(&v.into(), &w.into()).into()
}

/// Euclidean length of `v`.
#[no_mangle]
pub extern "C" fn vector3_magnitude(v: CVector3) -> f64 {
    Vector3::from(v).magnitude()
}

/// Squared length of `v`.
#[no_mangle]
pub extern "C" fn vector3_magnitude_squared(v: CVector3) -> f64 {
    Vector3::from(v).magnitude_squared()
}
