//! In-place operations on caller-owned vectors.
//!
//! Every function takes a pointer to a `CVector3` owned by the caller and
//! mutates it. Null pointers are rejected with `Vector3ErrorCode::NullPointer`
//! and leave the target untouched; success clears the thread's last error.

use vector3_core::Vector3;

use crate::error::Vector3ErrorCode;
use crate::helpers::{track_result, vector_from_ptr, vector_from_ptr_mut};
use crate::vector::CVector3;

/// Run `op` on the core vector behind `ptr` and write the result back.
///
/// # Safety
/// `ptr` must be null or point to a valid, writable `CVector3`.
unsafe fn update_in_place(ptr: *mut CVector3, op: impl FnOnce(&mut Vector3)) -> Vector3ErrorCode {
    track_result(
        // SAFETY: forwarded from the caller's contract.
        unsafe { vector_from_ptr_mut(ptr, "target") }.map(|target| {
            let mut v = Vector3::from(&*target);
            op(&mut v);
            *target = v.into();
        }),
    )
}

/// Normalize `target` in place.
///
/// Vectors of magnitude exactly 0 or exactly 1 are left unchanged.
///
/// # Safety
/// `target` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_normalize(target: *mut CVector3) -> Vector3ErrorCode {
    unsafe { update_in_place(target, Vector3::normalize) }
}

/// Scale `target` by `scalar` in place.
///
/// # Safety
/// `target` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_multiply_eq(
    target: *mut CVector3,
    scalar: f64,
) -> Vector3ErrorCode {
    unsafe { update_in_place(target, |v| v.multiply_eq(scalar)) }
}

/// Add `other` to `target` in place.
///
/// # Safety
/// `target` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_add_eq(
    target: *mut CVector3,
    other: CVector3,
) -> Vector3ErrorCode {
    unsafe { update_in_place(target, |v| v.add_eq(&other.into())) }
}

/// Subtract `other` from `target` in place.
///
/// # Safety
/// `target` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_sub_eq(
    target: *mut CVector3,
    other: CVector3,
) -> Vector3ErrorCode {
    unsafe { update_in_place(target, |v| v.sub_eq(&other.into())) }
}

/// Rotate `target` about the X axis by `degrees`.
///
/// # Safety
/// `target` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_rotate_x(target: *mut CVector3, degrees: f64) -> Vector3ErrorCode {
    unsafe { update_in_place(target, |v| v.rotate_x(degrees)) }
}

/// Rotate `target` about the Y axis by `degrees`.
///
/// # Safety
/// `target` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_rotate_y(target: *mut CVector3, degrees: f64) -> Vector3ErrorCode {
    unsafe { update_in_place(target, |v| v.rotate_y(degrees)) }
}

/// Rotate `target` about the Z axis by `degrees`.
///
/// # Safety
/// `target` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_rotate_z(target: *mut CVector3, degrees: f64) -> Vector3ErrorCode {
    unsafe { update_in_place(target, |v| v.rotate_z(degrees)) }
}

/// Overwrite `target` with the components of `source`.
///
/// # Safety
/// - `target` must be null or point to a valid, writable `CVector3`.
/// - `source` must be null or point to a valid `CVector3`. It may alias `target`.
#[no_mangle]
pub unsafe extern "C" fn vector3_copy_from(
    target: *mut CVector3,
    source: *const CVector3,
) -> Vector3ErrorCode {
    // Read source first so an aliased pair never holds two live references.
    let source = match unsafe { vector_from_ptr(source, "source") } {
        Ok(source) => Vector3::from(source),
        Err(error) => return track_result(Err(error)),
    };

    unsafe { update_in_place(target, |v| v.copy_from(&source)) }
}
