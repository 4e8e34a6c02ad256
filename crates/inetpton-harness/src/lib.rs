//! Conformance testing harness for inetpton.
//!
//! This crate provides:
//! - Fixture loading: `inet_pton` reference cases as versioned JSON
//! - Fixture verify: run the cases against the core parser under a runtime mode
//! - Report generation: markdown + JSON conformance reports
//! - Structured logging: JSONL evidence logs and a SHA-256 artifact index

#![forbid(unsafe_code)]

pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
