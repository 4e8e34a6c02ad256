//! Test execution engine.
//!
//! Cases run through the exported `inet_pton` entrypoint via
//! `inetpton_abi::exec`, so return codes, errno, and the hardened scan bound
//! are those a C caller observes. A `null` source stands for a null pointer.

use inetpton_abi::config::SafetyLevel;
use inetpton_abi::exec::run_inet_pton;
use inetpton_core::socket::AddressFamily;

use crate::error::HarnessError;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::{VerificationResult, render_diff};

/// Observed result of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRun {
    /// `1:<hex bytes>`, `0`, or `-1`.
    pub output: String,
    /// errno after the call (0 when untouched).
    pub errno: i32,
}

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Mode being tested.
    pub mode: SafetyLevel,
}

impl TestRunner {
    /// Create a new test runner. `mode` must name `strict` or `hardened`.
    pub fn new(campaign: impl Into<String>, mode: &str) -> Result<Self, HarnessError> {
        let level = SafetyLevel::from_str_loose(mode);
        if !mode.trim().eq_ignore_ascii_case(level.as_str()) {
            return Err(HarnessError::UnsupportedMode(mode.to_string()));
        }
        Ok(Self {
            campaign: campaign.into(),
            mode: level,
        })
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        let level = self.mode;
        fixture_set
            .cases
            .iter()
            .filter(|case| mode_matches(level.as_str(), &case.mode))
            .map(|case| {
                let case_name = if case.mode.eq_ignore_ascii_case("both") {
                    format!("{} [{}]", case.name, level.as_str())
                } else {
                    case.name.clone()
                };
                let (actual, actual_errno) = match execute_case(case, level) {
                    Ok(run) => (run.output, run.errno),
                    Err(err) => (format!("unsupported:{err}"), 0),
                };
                let passed = actual == case.expected_output && actual_errno == case.expected_errno;
                let diff = (!passed).then(|| {
                    render_diff(
                        &format!("{} errno={}", case.expected_output, case.expected_errno),
                        &format!("{actual} errno={actual_errno}"),
                    )
                });
                VerificationResult {
                    case_name,
                    campaign: self.campaign.clone(),
                    family: fixture_set.family.clone(),
                    mode: level.as_str().to_string(),
                    spec_section: case.spec_section.clone(),
                    passed,
                    expected: case.expected_output.clone(),
                    actual,
                    expected_errno: case.expected_errno,
                    actual_errno,
                    diff,
                }
            })
            .collect()
    }
}

fn mode_matches(active_mode: &str, case_mode: &str) -> bool {
    let case = case_mode.to_ascii_lowercase();
    case == active_mode || case == "both"
}

/// Execute one fixture case under `level`.
pub fn execute_case(case: &FixtureCase, level: SafetyLevel) -> Result<CaseRun, HarnessError> {
    if case.function != "inet_pton" {
        return Err(HarnessError::UnsupportedFunction(case.function.clone()));
    }
    let af = case_af(case)?;
    let src = case_src(case)?;
    Ok(execute_inet_pton(af, src.as_deref(), level))
}

/// Call the exported `inet_pton` and render its result.
#[must_use]
pub fn execute_inet_pton(af: i32, src: Option<&[u8]>, level: SafetyLevel) -> CaseRun {
    let call = run_inet_pton(level, af, src);
    let output = match (call.rc, AddressFamily::from_raw(af)) {
        (1, Some(family)) => format!("1:{}", hex_lower(&call.dst[..family.address_len()])),
        (rc, _) => rc.to_string(),
    };
    CaseRun {
        output,
        errno: call.errno,
    }
}

fn case_af(case: &FixtureCase) -> Result<i32, HarnessError> {
    let bad = |message: String| HarnessError::BadInput {
        case: case.name.clone(),
        message,
    };
    match case.inputs.get("af") {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| bad(format!("af out of range: {n}"))),
        Some(serde_json::Value::String(name)) => AddressFamily::from_name(name)
            .map(AddressFamily::raw)
            .ok_or_else(|| bad(format!("unknown family name '{name}'"))),
        Some(other) => Err(bad(format!("af must be a number or name, got {other}"))),
        None => Err(bad(String::from("missing 'af'"))),
    }
}

fn case_src(case: &FixtureCase) -> Result<Option<Vec<u8>>, HarnessError> {
    let bad = |message: &str| HarnessError::BadInput {
        case: case.name.clone(),
        message: message.to_string(),
    };
    let text = match case.inputs.get("src") {
        Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(text)) => text,
        Some(_) => return Err(bad("src must be a string or null")),
        None => return Err(bad("missing 'src'")),
    };
    let repeat = match case.inputs.get("src_repeat") {
        None => 1,
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| bad("src_repeat must be a non-negative integer"))?,
    };
    Ok(Some(text.repeat(repeat).into_bytes()))
}

/// Lowercase hex rendering of `bytes`.
#[must_use]
pub fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inetpton_abi::config::HARDENED_SCAN_LIMIT;
    use inetpton_core::socket::{AF_INET, AF_INET6, AF_UNSPEC};

    fn runner(mode: &str) -> TestRunner {
        TestRunner::new("unit", mode).expect("known mode")
    }

    fn fixture(cases: &str) -> FixtureSet {
        FixtureSet::from_json(&format!(
            r#"{{"version":"v1","family":"inet/inet_pton","captured_at":"2026-10-01T00:00:00Z","cases":[{cases}]}}"#
        ))
        .expect("valid fixture json")
    }

    #[test]
    fn strict_runner_executes_matching_cases() {
        let set = fixture(
            r#"{"name":"strict_v4","function":"inet_pton","spec_section":"POSIX inet_pton","inputs":{"af":2,"src":"192.168.0.1"},"expected_output":"1:c0a80001","expected_errno":0,"mode":"strict"},
               {"name":"hard_v4","function":"inet_pton","spec_section":"POSIX inet_pton","inputs":{"af":2,"src":"1.2.3.4"},"expected_output":"1:01020304","expected_errno":0,"mode":"hardened"}"#,
        );
        let strict = runner("strict").run(&set);
        assert_eq!(strict.len(), 1);
        assert!(strict[0].passed, "{:?}", strict[0]);
        assert_eq!(strict[0].case_name, "strict_v4");
    }

    #[test]
    fn both_mode_fixture_executes_under_active_mode() {
        let set = fixture(
            r#"{"name":"v6_loopback","function":"inet_pton","spec_section":"RFC 4291 2.2","inputs":{"af":"AF_INET6","src":"::1"},"expected_output":"1:00000000000000000000000000000001","expected_errno":0,"mode":"both"}"#,
        );
        let strict = runner("strict").run(&set);
        assert_eq!(strict.len(), 1);
        assert!(strict[0].passed);
        assert_eq!(strict[0].case_name, "v6_loopback [strict]");

        let hardened = runner("hardened").run(&set);
        assert_eq!(hardened.len(), 1);
        assert!(hardened[0].passed);
        assert_eq!(hardened[0].case_name, "v6_loopback [hardened]");
    }

    #[test]
    fn mismatch_produces_diff() {
        let set = fixture(
            r#"{"name":"wrong","function":"inet_pton","spec_section":"POSIX inet_pton","inputs":{"af":2,"src":"256.0.0.1"},"expected_output":"1:00000000","expected_errno":0,"mode":"both"}"#,
        );
        let results = runner("strict").run(&set);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "0");
        assert!(results[0].diff.as_deref().unwrap().contains("+0 errno=0"));
    }

    #[test]
    fn unknown_function_is_reported() {
        let set = fixture(
            r#"{"name":"ntop","function":"inet_ntop","spec_section":"n/a","inputs":{},"expected_output":"","expected_errno":0,"mode":"strict"}"#,
        );
        let results = runner("strict").run(&set);
        assert!(!results[0].passed);
        assert!(results[0].actual.starts_with("unsupported:"));
    }

    #[test]
    fn test_execute_inet_pton_return_codes() {
        let strict = SafetyLevel::Strict;
        assert_eq!(
            execute_inet_pton(AF_INET, Some(b"127.0.0.1"), strict),
            CaseRun { output: String::from("1:7f000001"), errno: 0 }
        );
        assert_eq!(
            execute_inet_pton(AF_INET6, Some(b"1::2::3"), strict).output,
            "0"
        );
        assert_eq!(
            execute_inet_pton(AF_UNSPEC, Some(b"::"), strict),
            CaseRun { output: String::from("-1"), errno: libc::EAFNOSUPPORT }
        );
        assert_eq!(
            execute_inet_pton(AF_UNSPEC, None, strict),
            CaseRun { output: String::from("-1"), errno: libc::EFAULT }
        );
    }

    #[test]
    fn execution_matches_entrypoint_call() {
        for (af, src) in [
            (AF_INET, Some(&b"8.8.4.4"[..])),
            (AF_INET6, Some(&b"fe80::1"[..])),
            (AF_INET, Some(&b"1.2.3"[..])),
            (99, Some(&b"::"[..])),
            (AF_INET6, None),
        ] {
            for level in [SafetyLevel::Strict, SafetyLevel::Hardened] {
                let call = run_inet_pton(level, af, src);
                let run = execute_inet_pton(af, src, level);
                assert_eq!(run.errno, call.errno);
                assert!(run.output.starts_with(&call.rc.to_string()));
            }
        }
    }

    #[test]
    fn test_hardened_scan_bound() {
        let long = vec![b'0'; HARDENED_SCAN_LIMIT];
        assert_eq!(
            execute_inet_pton(AF_INET6, Some(&long), SafetyLevel::Hardened),
            CaseRun { output: String::from("0"), errno: libc::EINVAL }
        );
        assert_eq!(
            execute_inet_pton(AF_INET6, Some(&long), SafetyLevel::Strict),
            CaseRun { output: String::from("0"), errno: 0 }
        );
        assert_eq!(
            execute_inet_pton(AF_INET6, Some(&long[..HARDENED_SCAN_LIMIT - 1]), SafetyLevel::Hardened)
                .errno,
            0
        );
    }

    #[test]
    fn test_src_repeat_and_bad_inputs() {
        let set = fixture(
            r#"{"name":"rep","function":"inet_pton","spec_section":"x","inputs":{"af":"inet","src":"1","src_repeat":3},"expected_output":"0","expected_errno":0,"mode":"strict"},
               {"name":"noaf","function":"inet_pton","spec_section":"x","inputs":{"src":"1"},"expected_output":"0","expected_errno":0,"mode":"strict"},
               {"name":"badname","function":"inet_pton","spec_section":"x","inputs":{"af":"appletalk","src":"1"},"expected_output":"0","expected_errno":0,"mode":"strict"}"#,
        );
        assert_eq!(case_src(&set.cases[0]).unwrap(), Some(b"111".to_vec()));
        assert!(matches!(case_af(&set.cases[1]), Err(HarnessError::BadInput { .. })));
        assert!(case_af(&set.cases[2]).unwrap_err().to_string().contains("appletalk"));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        for mode in ["bogus", "", "bounded"] {
            assert!(matches!(
                TestRunner::new("unit", mode),
                Err(HarnessError::UnsupportedMode(m)) if m == mode
            ));
        }
        assert_eq!(runner(" Hardened ").mode, SafetyLevel::Hardened);
        assert_eq!(runner("STRICT").mode, SafetyLevel::Strict);
    }

    #[test]
    fn results_carry_campaign_and_mode() {
        let set = fixture(
            r#"{"name":"v4","function":"inet_pton","spec_section":"x","inputs":{"af":2,"src":"1.2.3.4"},"expected_output":"1:01020304","expected_errno":0,"mode":"both"}"#,
        );
        let results = TestRunner::new("nightly", "hardened").unwrap().run(&set);
        assert_eq!(results[0].campaign, "nightly");
        assert_eq!(results[0].mode, "hardened");
    }

    #[test]
    fn test_hex_lower() {
        assert_eq!(hex_lower(&[0x20, 0x01, 0x0d, 0xb8]), "20010db8");
        assert_eq!(hex_lower(&[]), "");
    }
}
