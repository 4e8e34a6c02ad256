//! Shared internal utilities for ABI adapters.

use std::ffi::c_char;

/// Scan a C string with an optional hard bound.
///
/// Returns `(len, terminated)` where:
/// - `len` is the byte length before the first NUL or before the bound.
/// - `terminated` indicates whether a NUL byte was observed.
///
/// # Safety
///
/// `ptr` must be valid to read up to the discovered length (and bound when given).
pub unsafe fn scan_c_string(ptr: *const c_char, bound: Option<usize>) -> (usize, bool) {
    match bound {
        Some(limit) => {
            for i in 0..limit {
                if unsafe { *ptr.add(i) } == 0 {
                    return (i, true);
                }
            }
            (limit, false)
        }
        None => {
            let mut i = 0usize;
            while unsafe { *ptr.add(i) } != 0 {
                i += 1;
            }
            (i, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_scan() {
        let s = b"fe80::1\0tail";
        let (len, terminated) = unsafe { scan_c_string(s.as_ptr().cast(), None) };
        assert_eq!((len, terminated), (7, true));
    }

    #[test]
    fn test_bounded_scan_finds_terminator() {
        let s = b"::1\0";
        let (len, terminated) = unsafe { scan_c_string(s.as_ptr().cast(), Some(4)) };
        assert_eq!((len, terminated), (3, true));
    }

    #[test]
    fn test_bounded_scan_stops_at_limit() {
        let s = [b'1'; 8];
        let (len, terminated) = unsafe { scan_c_string(s.as_ptr().cast(), Some(8)) };
        assert_eq!((len, terminated), (8, false));

        let (len, terminated) = unsafe { scan_c_string(s.as_ptr().cast(), Some(0)) };
        assert_eq!((len, terminated), (0, false));
    }
}
