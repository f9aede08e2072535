use crate::error::{with_last_error_mut, DefaultVector3Error, Vector3Error, Vector3ErrorCode};
use crate::vector::CVector3;
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `Vector3Error` trait.
pub(crate) fn set_last_error(error: &impl Vector3Error) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl Vector3Error) -> Vector3ErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = Vector3ErrorCode::Ok;
    });
}

/// Convert a `Result` into an error code, recording failures and clearing
/// the last error on success.
pub(crate) fn track_result(result: Result<(), DefaultVector3Error>) -> Vector3ErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            Vector3ErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow a caller-owned vector mutably, rejecting null.
///
/// # Safety
/// `ptr` must be null or point to a valid, writable `CVector3` that is not
/// aliased for the duration of the borrow.
pub(crate) unsafe fn vector_from_ptr_mut<'a>(
    ptr: *mut CVector3,
    param_name: &str,
) -> Result<&'a mut CVector3, DefaultVector3Error> {
    // SAFETY: null is rejected; validity is the caller's contract.
    unsafe { ptr.as_mut() }.ok_or_else(|| DefaultVector3Error::null_pointer(param_name))
}

/// Borrow a caller-owned vector immutably, rejecting null.
///
/// # Safety
/// `ptr` must be null or point to a valid `CVector3`.
pub(crate) unsafe fn vector_from_ptr<'a>(
    ptr: *const CVector3,
    param_name: &str,
) -> Result<&'a CVector3, DefaultVector3Error> {
    // SAFETY: null is rejected; validity is the caller's contract.
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultVector3Error::null_pointer(param_name))
}
