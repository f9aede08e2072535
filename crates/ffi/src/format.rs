use std::os::raw::c_char;
use std::ptr;

use vector3_core::Vector3;

use crate::error::{DefaultVector3Error, Vector3ErrorCode};
use crate::helpers::{track_result, vector_from_ptr};
use crate::vector::CVector3;

/// Render `v` as `x:<x> y:<y> z:<z>` (two-decimal rounding) into a caller buffer.
///
/// Parameters
/// - `v`: vector to render. Must be non-null.
/// - `buf`: destination for the NUL-terminated text. May be null only when `buf_len` is 0.
/// - `buf_len`: size of `buf` in bytes, including room for the NUL terminator.
/// - `out_len`: optional; receives the text length in bytes (excluding NUL),
///   even when the buffer is too small. Pass null to ignore.
///
/// Returns
/// - `Vector3ErrorCode::Ok`: text written to `buf`
/// - `Vector3ErrorCode::NullPointer`: `v` is null, or `buf` is null with `buf_len > 0`
/// - `Vector3ErrorCode::BufferTooSmall`: `buf_len` cannot hold text plus NUL; `buf` untouched
///
/// # Safety
/// - `v` must be null or point to a valid `CVector3`.
/// - `buf` must be null or point to at least `buf_len` writable bytes.
/// - `out_len` must be null or point to a writable `usize`.
///
/// Example (C)
/// ```c
/// size_t len = 0;
/// vector3_format(&v, NULL, 0, &len);          // query length
/// char* text = malloc(len + 1);
/// vector3_format(&v, text, len + 1, NULL);
/// ```
#[no_mangle]
pub unsafe extern "C" fn vector3_format(
    v: *const CVector3,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> Vector3ErrorCode {
    let result = unsafe { vector_from_ptr(v, "v") }.and_then(|v| {
        let text = Vector3::from(v).to_string();

        if !out_len.is_null() {
            // SAFETY: non-null and writable per the caller's contract.
            unsafe { *out_len = text.len() };
        }

        let required = text.len() + 1;
        if buf.is_null() && buf_len > 0 {
            return Err(DefaultVector3Error::null_pointer("buf"));
        }
        if buf_len < required {
            return Err(DefaultVector3Error::buffer_too_small(required, buf_len));
        }

        // SAFETY: buf is non-null (buf_len >= required > 0) and holds
        // `required` bytes; the source is a distinct heap allocation.
        unsafe {
            ptr::copy_nonoverlapping(text.as_ptr(), buf.cast::<u8>(), text.len());
            *buf.add(text.len()) = 0;
        }
        Ok(())
    });

    track_result(result)
}
