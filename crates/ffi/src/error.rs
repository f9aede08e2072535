use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait Vector3Error {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> Vector3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `Vector3Error` for the FFI error scenarios.
///
/// Wraps a `Vector3ErrorCode` and provides a constructor for each error
/// kind (except Ok, which represents success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVector3Error {
    code: Vector3ErrorCode,
    msg: String,
}

impl DefaultVector3Error {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"target"`, `"buf"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: Vector3ErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    ///
    /// # Arguments
    /// * `required` - Bytes needed including the NUL terminator
    /// * `available` - Bytes the caller provided
    pub fn buffer_too_small(required: usize, available: usize) -> Self {
        Self {
            code: Vector3ErrorCode::BufferTooSmall,
            msg: format!("Buffer too small: {required} bytes required, {available} provided"),
        }
    }
}

impl Vector3Error for DefaultVector3Error {
    fn code(&self) -> Vector3ErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector3ErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Output buffer too small for the formatted text.
    BufferTooSmall = 2,
}

impl From<DefaultVector3Error> for Vector3ErrorCode {
    fn from(error: DefaultVector3Error) -> Self {
        error.code
    }
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The CString is kept here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, Vector3ErrorCode)> =
        const { RefCell::new((None, Vector3ErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, Vector3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, Vector3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// if (vector3_normalize(v) != Vector3ErrorCode_Ok) {
///     const char* error = vector3_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vector3_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code for this thread.
///
/// Returns `Vector3ErrorCode::Ok` (0) if the last call succeeded.
#[no_mangle]
pub extern "C" fn vector3_get_last_error_code() -> Vector3ErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
