//! ABI layer for `<arpa/inet.h>` `inet_pton`.
//!
//! Pointer and family validation happen here; the text itself is handed to
//! `inetpton_core::inet` as a byte slice.

use std::ffi::{c_char, c_int, c_void};

use inetpton_core::inet as inet_core;
use inetpton_core::socket::AddressFamily;

use crate::config::{SafetyLevel, safety_level};
use crate::errno_abi::set_errno;
use crate::util::scan_c_string;

/// `inet_pton` under an explicit runtime mode.
///
/// Same contract as the exported [`inet_pton`], except that the C-string scan
/// follows `level` instead of the process-wide `INETPTON_MODE` setting.
///
/// # Safety
///
/// `src` must be null or point to a readable NUL-terminated string (in
/// hardened mode, readable up to the terminator or the scan limit, whichever
/// comes first). `dst` must be null or writable for 4 bytes (`AF_INET`) or
/// 16 bytes (`AF_INET6`).
pub unsafe fn inet_pton_in_mode(
    level: SafetyLevel,
    af: c_int,
    src: *const c_char,
    dst: *mut c_void,
) -> c_int {
    if src.is_null() || dst.is_null() {
        unsafe { set_errno(libc::EFAULT) };
        return -1;
    }

    let Some(family) = AddressFamily::from_raw(af) else {
        unsafe { set_errno(libc::EAFNOSUPPORT) };
        return -1;
    };

    let (len, terminated) = unsafe { scan_c_string(src, level.scan_bound()) };
    if !terminated {
        unsafe { set_errno(libc::EINVAL) };
        return 0;
    }

    let src_bytes = unsafe { std::slice::from_raw_parts(src.cast::<u8>(), len) };
    let dst_slice =
        unsafe { std::slice::from_raw_parts_mut(dst.cast::<u8>(), family.address_len()) };
    inet_core::inet_pton(af, src_bytes, dst_slice)
}

abi_fn! {
    /// Convert text IP address to binary form.
    ///
    /// Returns 1 on success, 0 if `src` is not a valid address for the given
    /// family, -1 if `af` is unsupported (errno `EAFNOSUPPORT`) or a pointer
    /// is null (errno `EFAULT`). `dst` is written only on success.
    fn inet_pton(af: c_int, src: *const c_char, dst: *mut c_void) -> c_int {
        inet_pton_in_mode(safety_level(), af, src, dst)
    }
}
