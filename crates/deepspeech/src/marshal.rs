//! Conversions between native-allocated data and owned Rust values.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use deepspeech_sys as ds;

/// Copies a native string into an owned `String` and frees the original.
///
/// Returns `None` when the pointer is null, which the callers treat as a
/// failure signal distinct from an empty string.
///
/// # Safety
///
/// `ptr` must be null or a NUL-terminated string allocated by the native
/// library, and must not be used after this call.
pub(crate) unsafe fn take_native_string(ptr: *mut c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let copied = CStr::from_ptr(ptr).to_string_lossy().into_owned();
    ds::DS_FreeString(ptr);
    Some(copied)
}

/// Renders a native status code through the library's own code-to-message
/// table.
pub(crate) fn describe_code(code: c_int) -> String {
    let message = unsafe { take_native_string(ds::DS_ErrorCodeToErrorMessage(code)) }
        .unwrap_or_else(|| "unknown error".to_string());
    format!("{} (status {:#06x})", message, code)
}
