//! Integration tests for the exported `inet_pton` entrypoint.

use std::ffi::{CString, c_char, c_int, c_void};
use std::ptr;

use inetpton_abi::config::{HARDENED_SCAN_LIMIT, SafetyLevel};
use inetpton_abi::errno_abi::{errno, set_errno};
use inetpton_abi::exec::{DST_FILL, PtonCall, run_inet_pton};
use inetpton_abi::inet_abi::{inet_pton, inet_pton_in_mode};
use libc::{EAFNOSUPPORT, EFAULT, EINVAL};
use inetpton_core::socket::{AF_INET, AF_INET6, AF_UNSPEC};

const LEVELS: [SafetyLevel; 2] = [SafetyLevel::Strict, SafetyLevel::Hardened];

fn call(level: SafetyLevel, af: c_int, text: &str, dst: &mut [u8]) -> c_int {
    let src = CString::new(text).unwrap();
    unsafe { inet_pton_in_mode(level, af, src.as_ptr(), dst.as_mut_ptr().cast::<c_void>()) }
}

#[test]
fn exported_symbol_parses_both_families() {
    let mut v4 = [0u8; 4];
    let src = CString::new("192.168.1.1").unwrap();
    let rc = unsafe { inet_pton(AF_INET, src.as_ptr(), v4.as_mut_ptr().cast()) };
    assert_eq!(rc, 1);
    assert_eq!(v4, [192, 168, 1, 1]);

    let mut v6 = [0u8; 16];
    let src = CString::new("2001:db8::1").unwrap();
    let rc = unsafe { inet_pton(AF_INET6, src.as_ptr(), v6.as_mut_ptr().cast()) };
    assert_eq!(rc, 1);
    assert_eq!(
        v6,
        [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]
    );
}

#[test]
fn invalid_text_returns_zero_and_keeps_destination() {
    for level in LEVELS {
        let mut v4 = [0xAAu8; 4];
        assert_eq!(call(level, AF_INET, "256.0.0.1", &mut v4), 0);
        assert_eq!(v4, [0xAA; 4]);

        let mut v6 = [0xAAu8; 16];
        assert_eq!(call(level, AF_INET6, "1::2::3", &mut v6), 0);
        assert_eq!(v6, [0xAA; 16]);

        assert_eq!(call(level, AF_INET6, "::ffff:10.0.0.1", &mut v6), 0);
        assert_eq!(call(level, AF_INET, "", &mut v4), 0);
    }
}

#[test]
fn unsupported_family_sets_eafnosupport() {
    for level in LEVELS {
        for af in [AF_UNSPEC, 1, -1, 99] {
            let mut dst = [0x55u8; 16];
            unsafe { set_errno(0) };
            assert_eq!(call(level, af, "127.0.0.1", &mut dst), -1);
            assert_eq!(unsafe { errno() }, EAFNOSUPPORT);
            assert_eq!(dst, [0x55; 16]);
        }
    }
}

#[test]
fn null_pointers_set_efault() {
    let src = CString::new("::1").unwrap();
    let mut dst = [0u8; 16];
    for level in LEVELS {
        unsafe { set_errno(0) };
        let rc = unsafe {
            inet_pton_in_mode(level, AF_INET6, ptr::null::<c_char>(), dst.as_mut_ptr().cast())
        };
        assert_eq!(rc, -1);
        assert_eq!(unsafe { errno() }, EFAULT);

        unsafe { set_errno(0) };
        let rc = unsafe { inet_pton_in_mode(level, AF_INET6, src.as_ptr(), ptr::null_mut()) };
        assert_eq!(rc, -1);
        assert_eq!(unsafe { errno() }, EFAULT);
    }
}

#[test]
fn null_pointer_wins_over_bad_family() {
    unsafe { set_errno(0) };
    let rc = unsafe { inet_pton(AF_UNSPEC, ptr::null(), ptr::null_mut()) };
    assert_eq!(rc, -1);
    assert_eq!(unsafe { errno() }, EFAULT);
}

#[test]
fn success_writes_only_address_width() {
    let mut dst = [0xEEu8; 20];
    assert_eq!(call(SafetyLevel::Strict, AF_INET, "10.0.0.7", &mut dst), 1);
    assert_eq!(&dst[..4], &[10, 0, 0, 7]);
    assert!(dst[4..].iter().all(|&b| b == 0xEE));

    let mut dst = [0xEEu8; 20];
    assert_eq!(call(SafetyLevel::Strict, AF_INET6, "::1", &mut dst), 1);
    assert_eq!(dst[15], 1);
    assert!(dst[..15].iter().all(|&b| b == 0));
    assert!(dst[16..].iter().all(|&b| b == 0xEE));
}

#[test]
fn hardened_mode_bounds_the_terminator_scan() {
    let long = "1".repeat(HARDENED_SCAN_LIMIT + 10);
    let mut dst = [0u8; 16];

    unsafe { set_errno(0) };
    assert_eq!(call(SafetyLevel::Hardened, AF_INET6, &long, &mut dst), 0);
    assert_eq!(unsafe { errno() }, EINVAL);

    // Strict mode reads the whole string and rejects it as bad syntax.
    unsafe { set_errno(0) };
    assert_eq!(call(SafetyLevel::Strict, AF_INET6, &long, &mut dst), 0);
    assert_eq!(unsafe { errno() }, 0);
}

#[test]
fn hardened_mode_accepts_normal_text() {
    let mut dst = [0u8; 4];
    assert_eq!(call(SafetyLevel::Hardened, AF_INET, "8.8.4.4", &mut dst), 1);
    assert_eq!(dst, [8, 8, 4, 4]);
}

#[test]
fn errno_values_are_the_host_libc_codes() {
    let mut dst = [0u8; 16];
    unsafe { set_errno(0) };
    assert_eq!(call(SafetyLevel::Strict, 99, "::1", &mut dst), -1);
    assert_eq!(unsafe { errno() }, libc::EAFNOSUPPORT);

    unsafe { set_errno(0) };
    let rc = unsafe { inet_pton(AF_INET, ptr::null(), dst.as_mut_ptr().cast()) };
    assert_eq!(rc, -1);
    assert_eq!(unsafe { errno() }, libc::EFAULT);
}

#[test]
fn safe_driver_reports_rc_errno_and_destination() {
    let ok = run_inet_pton(SafetyLevel::Strict, AF_INET, Some(b"10.9.8.7"));
    assert_eq!((ok.rc, ok.errno), (1, 0));
    assert_eq!(&ok.dst[..4], &[10, 9, 8, 7]);
    assert!(ok.dst[4..].iter().all(|&b| b == DST_FILL));

    let bad = run_inet_pton(SafetyLevel::Strict, AF_INET6, Some(b"1::2::3"));
    assert_eq!(
        bad,
        PtonCall {
            rc: 0,
            errno: 0,
            dst: [DST_FILL; 16]
        }
    );

    let null = run_inet_pton(SafetyLevel::Hardened, AF_UNSPEC, None);
    assert_eq!((null.rc, null.errno), (-1, EFAULT));

    let family = run_inet_pton(SafetyLevel::Hardened, AF_UNSPEC, Some(b"::1"));
    assert_eq!((family.rc, family.errno), (-1, EAFNOSUPPORT));
}

#[test]
fn safe_driver_applies_mode_scan_bound() {
    let at_limit = vec![b'1'; HARDENED_SCAN_LIMIT];
    let hardened = run_inet_pton(SafetyLevel::Hardened, AF_INET6, Some(&at_limit));
    assert_eq!((hardened.rc, hardened.errno), (0, EINVAL));
    let strict = run_inet_pton(SafetyLevel::Strict, AF_INET6, Some(&at_limit));
    assert_eq!((strict.rc, strict.errno), (0, 0));

    let under = vec![b'0'; HARDENED_SCAN_LIMIT - 1];
    let hardened = run_inet_pton(SafetyLevel::Hardened, AF_INET6, Some(&under));
    assert_eq!((hardened.rc, hardened.errno), (0, 0));
}

#[test]
fn safe_driver_stops_at_interior_nul() {
    let call = run_inet_pton(SafetyLevel::Strict, AF_INET, Some(b"1.2.3.4\0junk"));
    assert_eq!(call.rc, 1);
    assert_eq!(&call.dst[..4], &[1, 2, 3, 4]);
}
