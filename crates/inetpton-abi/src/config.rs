//! Runtime mode configuration.
//!
//! The runtime mode is set via the `INETPTON_MODE` environment variable:
//! - `strict` (default): POSIX behavior. `src` is read up to its NUL
//!   terminator however far away it is.
//! - `hardened`: the scan for the terminator is bounded at
//!   [`HARDENED_SCAN_LIMIT`] bytes. Longer or unterminated input is rejected
//!   as invalid text (`0`, errno `EINVAL`) instead of being read further.

use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable selecting the runtime mode.
pub const MODE_ENV: &str = "INETPTON_MODE";

/// Upper bound on bytes examined in hardened mode. Far beyond any valid
/// address text, which tops out at 45 bytes.
pub const HARDENED_SCAN_LIMIT: usize = 4096;

/// Runtime operating mode for ABI entrypoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyLevel {
    /// POSIX-correct behavior, unbounded C-string scan.
    #[default]
    Strict,
    /// Bounded C-string scan.
    Hardened,
}

impl SafetyLevel {
    /// Parse from string (case-insensitive). Unknown values fall back to strict.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "hardened" | "harden" | "bounded" => Self::Hardened,
            _ => Self::Strict,
        }
    }

    /// Maximum number of bytes to examine when looking for the terminator.
    #[must_use]
    pub const fn scan_bound(self) -> Option<usize> {
        match self {
            Self::Strict => None,
            Self::Hardened => Some(HARDENED_SCAN_LIMIT),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Hardened => "hardened",
        }
    }
}

// Atomic cache: 0=unresolved, 1=Strict, 2=Hardened, 255=resolving.
static CACHED_LEVEL: AtomicU8 = AtomicU8::new(0);

const LEVEL_UNRESOLVED: u8 = 0;
const LEVEL_STRICT: u8 = 1;
const LEVEL_HARDENED: u8 = 2;
const LEVEL_RESOLVING: u8 = 255;

fn level_to_u8(level: SafetyLevel) -> u8 {
    match level {
        SafetyLevel::Strict => LEVEL_STRICT,
        SafetyLevel::Hardened => LEVEL_HARDENED,
    }
}

fn u8_to_level(v: u8) -> SafetyLevel {
    match v {
        LEVEL_HARDENED => SafetyLevel::Hardened,
        _ => SafetyLevel::Strict,
    }
}

/// Get the configured safety level (reads the environment on first call,
/// caches thereafter).
///
/// A call that races the first resolution sees `Strict` until the winner has
/// stored its result.
#[must_use]
pub fn safety_level() -> SafetyLevel {
    let cached = CACHED_LEVEL.load(Ordering::Acquire);
    if cached != LEVEL_UNRESOLVED && cached != LEVEL_RESOLVING {
        return u8_to_level(cached);
    }
    if cached == LEVEL_RESOLVING {
        return SafetyLevel::Strict;
    }

    if CACHED_LEVEL
        .compare_exchange(
            LEVEL_UNRESOLVED,
            LEVEL_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        let v = CACHED_LEVEL.load(Ordering::Acquire);
        return if v != LEVEL_UNRESOLVED && v != LEVEL_RESOLVING {
            u8_to_level(v)
        } else {
            SafetyLevel::Strict
        };
    }

    let level = std::env::var(MODE_ENV)
        .map(|v| SafetyLevel::from_str_loose(&v))
        .unwrap_or_default();
    CACHED_LEVEL.store(level_to_u8(level), Ordering::Release);
    level
}
