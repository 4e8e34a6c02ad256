//! # inetpton-abi
//!
//! ABI-compatible extern "C" boundary for inetpton.
//!
//! This crate produces a `cdylib` (`libinetpton.so`) exporting `inet_pton`.
//! The entry point validates raw pointers, reads the C string according to
//! the runtime mode, and delegates to the safe parser in `inetpton-core`.
//!
//! ```text
//! C caller -> ABI entry (this crate) -> pointer/family checks -> core parser -> return
//! ```

// Raw-pointer entrypoints document their contract on the C side.
#![allow(clippy::missing_safety_doc)]

#[macro_use]
mod macros;

pub mod config;
pub mod errno_abi;
pub mod util;

// Exports a #[no_mangle] `inet_pton` that would shadow the host libc symbol
// inside this crate's own unit-test binary.
#[cfg(not(test))]
pub mod inet_abi;

#[cfg(not(test))]
pub mod exec;
