//! Safe driver for the exported entrypoint.
//!
//! Lets callers that forbid `unsafe` (the conformance harness) execute
//! `inet_pton` exactly as a C caller would: the text is copied into a
//! NUL-terminated buffer, errno is cleared, and the result is read back from
//! the host errno slot.

use std::ffi::c_int;

use inetpton_core::inet::NS_IN6ADDRSZ;

use crate::config::SafetyLevel;
use crate::errno_abi::{errno, set_errno};
use crate::inet_abi::inet_pton_in_mode;

/// Outcome of one call through the C entrypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PtonCall {
    /// Return value of `inet_pton`.
    pub rc: c_int,
    /// errno after the call (cleared to 0 beforehand).
    pub errno: c_int,
    /// Destination buffer after the call, prefilled with [`DST_FILL`].
    pub dst: [u8; NS_IN6ADDRSZ],
}

/// Byte the destination is prefilled with, so untouched bytes are visible.
pub const DST_FILL: u8 = 0xA5;

/// Call `inet_pton` under `level`. `src` of `None` passes a null pointer.
///
/// Interior NUL bytes in `src` end the C string there.
#[must_use]
pub fn run_inet_pton(level: SafetyLevel, af: c_int, src: Option<&[u8]>) -> PtonCall {
    let text = src.map(|bytes| {
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);
        buf
    });
    let src_ptr = text.as_ref().map_or(std::ptr::null(), |buf| buf.as_ptr().cast());
    let mut dst = [DST_FILL; NS_IN6ADDRSZ];

    // SAFETY: `src_ptr` is null or a NUL-terminated buffer that outlives the
    // call; `dst` is 16 writable bytes, enough for either family.
    let (rc, err) = unsafe {
        set_errno(0);
        let rc = inet_pton_in_mode(level, af, src_ptr, dst.as_mut_ptr().cast());
        (rc, errno())
    };
    PtonCall { rc, errno: err, dst }
}
