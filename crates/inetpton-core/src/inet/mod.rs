//! Internet address text-to-binary conversion.
//!
//! Implements `<arpa/inet.h>` `inet_pton` for `AF_INET` and `AF_INET6`.
//! All logic is safe Rust with no syscalls and no allocation. Each parser
//! fills a stack scratch buffer and hands it back only on full success, so a
//! caller's destination is never partially written.

mod error;
mod ipv4;
mod ipv6;

pub use error::{AddrParseError, ErrorKind};
pub use ipv4::parse_ipv4;
pub use ipv6::parse_ipv6;

use crate::socket::AddressFamily;

/// Size of a binary IPv4 address.
pub const NS_INADDRSZ: usize = 4;
/// Size of a binary IPv6 address.
pub const NS_IN6ADDRSZ: usize = 16;
/// Size of one IPv6 hextet.
pub const NS_INT16SZ: usize = 2;

/// A parsed binary address in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InetAddr {
    V4([u8; NS_INADDRSZ]),
    V6([u8; NS_IN6ADDRSZ]),
}

impl InetAddr {
    #[must_use]
    pub const fn family(&self) -> AddressFamily {
        match self {
            Self::V4(_) => AddressFamily::Inet,
            Self::V6(_) => AddressFamily::Inet6,
        }
    }

    /// The address bytes, 4 or 16 long.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::V4(octets) => octets,
            Self::V6(octets) => octets,
        }
    }
}

// ---------------------------------------------------------------------------
// inet_pton
// ---------------------------------------------------------------------------

/// Converts an IP address from text to binary form for a typed family.
pub fn pton(family: AddressFamily, src: &[u8]) -> Result<InetAddr, AddrParseError> {
    match family {
        AddressFamily::Inet => parse_ipv4(src).map(InetAddr::V4),
        AddressFamily::Inet6 => parse_ipv6(src).map(InetAddr::V6),
    }
}

/// Converts an IP address from text to binary form.
///
/// Equivalent to C `inet_pton`. `af` is the address family (`AF_INET` or `AF_INET6`).
/// Returns 1 on success, 0 if `src` is not a valid address for the family,
/// or -1 for an unsupported address family or a `dst` too small for it.
/// Only the first 4 (or 16) bytes of `dst` are written, and only on success.
pub fn inet_pton(af: i32, src: &[u8], dst: &mut [u8]) -> i32 {
    let Some(family) = AddressFamily::from_raw(af) else {
        return -1;
    };
    let len = family.address_len();
    if dst.len() < len {
        return -1;
    }
    match pton(family, src) {
        Ok(addr) => {
            dst[..len].copy_from_slice(addr.as_bytes());
            1
        }
        Err(_) => 0,
    }
}

// ---------------------------------------------------------------------------
// Shared scanning helpers
// ---------------------------------------------------------------------------

/// The bytes of `src` up to (not including) the first NUL.
fn c_text(src: &[u8]) -> &[u8] {
    match src.iter().position(|&b| b == 0) {
        Some(nul) => &src[..nul],
        None => src,
    }
}

fn decimal_digit(ch: u8) -> Option<u8> {
    ch.is_ascii_digit().then(|| ch - b'0')
}

fn hex_digit(ch: u8) -> Option<u8> {
    const XDIGITS: &[u8; 16] = b"0123456789abcdef";
    let lower = ch.to_ascii_lowercase();
    XDIGITS.iter().position(|&x| x == lower).map(|i| i as u8)
}

/// Whether `width` more bytes fit at `cursor` in a buffer of `capacity`.
fn fits(cursor: usize, width: usize, capacity: usize) -> bool {
    cursor
        .checked_add(width)
        .is_some_and(|end| end <= capacity)
}

// ===========================================================================
// Tests
// ===========================================================================
