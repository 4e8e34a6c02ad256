//! Socket address families.
//!
//! Implements the `<sys/socket.h>` `AF_*` constants used to select an address
//! parser, plus a typed [`AddressFamily`] for Rust callers.

use crate::inet::{NS_IN6ADDRSZ, NS_INADDRSZ};

// ---------------------------------------------------------------------------
// Address families (AF_*)
// ---------------------------------------------------------------------------

/// Unspecified address family.
pub const AF_UNSPEC: i32 = 0;
/// IPv4 Internet protocols.
pub const AF_INET: i32 = 2;
/// IPv6 Internet protocols.
pub const AF_INET6: i32 = 10;

/// Address family accepted by the text-to-binary converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// IPv4, 4-byte addresses.
    Inet,
    /// IPv6, 16-byte addresses.
    Inet6,
}

impl AddressFamily {
    /// Map a raw `AF_*` value. Returns `None` for unsupported families.
    #[must_use]
    pub const fn from_raw(af: i32) -> Option<Self> {
        match af {
            AF_INET => Some(Self::Inet),
            AF_INET6 => Some(Self::Inet6),
            _ => None,
        }
    }

    /// The raw `AF_*` value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Inet => AF_INET,
            Self::Inet6 => AF_INET6,
        }
    }

    /// Size in bytes of a binary address of this family.
    #[must_use]
    pub const fn address_len(self) -> usize {
        match self {
            Self::Inet => NS_INADDRSZ,
            Self::Inet6 => NS_IN6ADDRSZ,
        }
    }

    /// Parse a family name (`inet`, `ipv4`, `4`, `inet6`, `ipv6`, `6`),
    /// case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "inet" | "af_inet" | "ipv4" | "v4" | "4" => Some(Self::Inet),
            "inet6" | "af_inet6" | "ipv6" | "v6" | "6" => Some(Self::Inet6),
            _ => None,
        }
    }

    /// Canonical lowercase name, as accepted by [`AddressFamily::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inet => "inet",
            Self::Inet6 => "inet6",
        }
    }
}
