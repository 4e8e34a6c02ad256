//! errno access for ABI entrypoints.
//!
//! This library is loaded next to the host libc, so failures are reported
//! through the host's thread-local errno slot rather than a private one.

use std::ffi::c_int;

#[cfg(any(target_os = "linux", target_os = "emscripten"))]
#[inline]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__errno_location() }
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
#[inline]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__error() }
}

#[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
#[inline]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__errno() }
}

/// Store `val` in the calling thread's errno.
///
/// # Safety
///
/// Must be called on a thread with a live libc TLS block (any Rust thread).
#[inline]
pub unsafe fn set_errno(val: c_int) {
    let p = unsafe { errno_location() };
    unsafe { *p = val };
}

/// Read the calling thread's errno.
///
/// # Safety
///
/// Same as [`set_errno`].
#[inline]
pub unsafe fn errno() -> c_int {
    let p = unsafe { errno_location() };
    unsafe { *p }
}
