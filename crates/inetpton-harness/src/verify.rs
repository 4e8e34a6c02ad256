//! Output comparison and verification.

use serde::{Deserialize, Serialize};

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Campaign the runner was created for.
    pub campaign: String,
    /// Function family of the fixture set.
    pub family: String,
    /// Runtime mode the case ran under.
    pub mode: String,
    /// POSIX/RFC section reference.
    pub spec_section: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Expected output.
    pub expected: String,
    /// Actual output from our implementation.
    pub actual: String,
    /// Expected errno.
    pub expected_errno: i32,
    /// errno observed after the call.
    pub actual_errno: i32,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Render a line diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }
    format!("--- expected\n+++ actual\n-{expected}\n+{actual}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(passed: bool) -> VerificationResult {
        VerificationResult {
            case_name: String::from("c"),
            campaign: String::from("unit"),
            family: String::from("inet/inet_pton"),
            mode: String::from("strict"),
            spec_section: String::from("POSIX inet_pton"),
            passed,
            expected: String::from("0"),
            actual: String::from("0"),
            expected_errno: 0,
            actual_errno: 0,
            diff: None,
        }
    }

    #[test]
    fn test_summary_counts() {
        let summary = VerificationSummary::from_results(vec![result(true), result(false)]);
        assert_eq!((summary.total, summary.passed, summary.failed), (2, 1, 1));
        assert!(!summary.all_passed());
        assert!(VerificationSummary::from_results(vec![result(true)]).all_passed());
    }

    #[test]
    fn test_render_diff() {
        assert_eq!(render_diff("0", "0"), "[identical]");
        let diff = render_diff("1:7f000001", "0");
        assert!(diff.contains("-1:7f000001"));
        assert!(diff.contains("+0"));
    }
}
