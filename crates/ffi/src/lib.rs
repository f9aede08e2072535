//! C ABI for the 3D vector math core.
//!
//! Exposes `CVector3` (a `#[repr(C)]` mirror of `vector3_core::Vector3`)
//! plus pure and in-place operations for engines and toolkits written in
//! C/C++/C#. The header `Vector3FFI.h` is generated by `build.rs`.
//!
//! Fallible functions return `Vector3ErrorCode` (0 = success). After a
//! failure, `vector3_get_last_error()` returns a description; the state is
//! per thread and cleared by the next successful fallible call.

mod error;
mod format;
mod helpers;
mod in_place;
mod vector;

pub use error::{vector3_get_last_error, vector3_get_last_error_code, Vector3ErrorCode};
pub use format::vector3_format;
pub use in_place::{
    vector3_add_eq, vector3_copy_from, vector3_multiply_eq, vector3_normalize, vector3_rotate_x,
    vector3_rotate_y, vector3_rotate_z, vector3_sub_eq,
};
pub use vector::{
    vector3_add, vector3_cross, vector3_dot, vector3_magnitude, vector3_magnitude_squared,
    vector3_new, vector3_sub, CVector3,
};
