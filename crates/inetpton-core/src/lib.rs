//! # inetpton-core
//!
//! Safe Rust implementation of `inet_pton`: converts IPv4 dotted-quad and
//! IPv6 colon-hex text into network-order bytes. No `unsafe` code, no
//! allocation, no I/O.

#![deny(unsafe_code)]

pub mod inet;
pub mod socket;
