//! CLI entrypoint for the inetpton conformance harness.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use inetpton_abi::config::SafetyLevel;
use inetpton_core::inet::pton;
use inetpton_core::socket::AddressFamily;
use inetpton_harness::runner::hex_lower;
use inetpton_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, StreamKind, now_utc,
    validate_log_file,
};
use inetpton_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary, fixtures};

const BEAD_ID: &str = "inetpton";
const CAMPAIGN: &str = "fixture-verify";

/// Conformance tooling for inetpton.
#[derive(Debug, Parser)]
#[command(name = "inetpton-harness")]
#[command(about = "Conformance testing harness for inetpton")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the parser against fixture sets.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Output report path (markdown; a JSON twin is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Run only one mode (`strict` or `hardened`); both when omitted.
        #[arg(long)]
        mode: Option<String>,
    },
    /// Parse one address and print its bytes as hex.
    Parse {
        /// Address family (`inet` or `inet6`).
        #[arg(long)]
        family: String,
        /// Address text.
        text: String,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        /// Log file path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            log,
            report,
            mode,
        } => {
            let runners = match mode.as_deref() {
                None => vec![
                    TestRunner::new(CAMPAIGN, SafetyLevel::Strict.as_str())?,
                    TestRunner::new(CAMPAIGN, SafetyLevel::Hardened.as_str())?,
                ],
                Some(m) => vec![TestRunner::new(CAMPAIGN, m)?],
            };

            eprintln!("Verifying against fixtures in {}", fixture.display());
            let mut fixture_sets = Vec::new();
            let fixture_paths = fixtures::discover(&fixture)?;
            for path in &fixture_paths {
                match FixtureSet::from_file(path) {
                    Ok(set) => fixture_sets.push(set),
                    Err(err) => eprintln!("Skipping {err}"),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let run_id = format!("verify-{}", std::process::id());
            let mut emitter = log
                .as_deref()
                .map(|path| LogEmitter::to_file(path, BEAD_ID, &run_id))
                .transpose()?;
            if let Some(emitter) = emitter.as_mut() {
                emitter.emit(LogLevel::Info, "verify_start")?;
            }

            let mut results = Vec::new();
            for runner in &runners {
                for set in &fixture_sets {
                    let started = Instant::now();
                    let batch = runner.run(set);
                    let elapsed = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
                    if let Some(emitter) = emitter.as_mut() {
                        for r in &batch {
                            let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
                            let severity = if r.passed { LogLevel::Info } else { LogLevel::Error };
                            emitter.emit_entry(
                                LogEntry::new("", severity, "fixture_case")
                                    .with_stream(StreamKind::Conformance)
                                    .with_mode(r.mode.as_str())
                                    .with_api("inet", "inet_pton")
                                    .with_outcome(outcome)
                                    .with_errno(r.actual_errno)
                                    .with_details(serde_json::json!({
                                        "campaign": r.campaign,
                                        "case": r.case_name,
                                        "family": r.family,
                                        "expected": r.expected,
                                        "actual": r.actual,
                                        "expected_errno": r.expected_errno,
                                    })),
                            )?;
                        }
                        emitter.emit_entry(
                            LogEntry::new("", LogLevel::Info, "fixture_set_complete")
                                .with_stream(StreamKind::Conformance)
                                .with_mode(runner.mode.as_str())
                                .with_latency_ns(elapsed)
                                .with_details(serde_json::json!({
                                    "campaign": runner.campaign,
                                    "family": set.family,
                                    "cases": batch.len(),
                                })),
                        )?;
                    }
                    results.extend(batch);
                }
            }

            results.sort_by(|a, b| {
                a.family
                    .cmp(&b.family)
                    .then_with(|| a.mode.cmp(&b.mode))
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            let summary = VerificationSummary::from_results(results);
            let mode_label = runners
                .iter()
                .map(|r| r.mode.as_str())
                .collect::<Vec<_>>()
                .join("+");
            let report_doc = ConformanceReport {
                title: String::from("inetpton Conformance Report"),
                mode: mode_label,
                timestamp: now_utc(),
                summary,
            };

            for r in report_doc.summary.results.iter().filter(|r| !r.passed) {
                eprintln!("FAIL {} ({})", r.case_name, r.mode);
                if let Some(diff) = &r.diff {
                    eprintln!("{diff}");
                }
            }
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            let mut index = ArtifactIndex::new(&run_id, BEAD_ID);
            for path in &fixture_paths {
                index.add_file(path, "fixture")?;
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
                index.add_file(&report_path, "report")?;
                index.add_file(&json_path, "report")?;
            }

            if let (Some(mut emitter), Some(log_path)) = (emitter, log) {
                let refs = index.artifacts.iter().map(|a| a.path.clone()).collect();
                let severity = if report_doc.summary.all_passed() {
                    LogLevel::Info
                } else {
                    LogLevel::Error
                };
                emitter.emit_entry(
                    LogEntry::new("", severity, "verify_complete")
                        .with_stream(StreamKind::Conformance)
                        .with_artifacts(refs)
                        .with_details(serde_json::json!({
                            "total": report_doc.summary.total,
                            "passed": report_doc.summary.passed,
                            "failed": report_doc.summary.failed,
                        })),
                )?;
                emitter.flush()?;
                let index_path = log_path.with_extension("artifacts.json");
                std::fs::write(&index_path, index.to_json()?)?;
                eprintln!("Wrote artifact index to {}", index_path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Parse { family, text } => {
            let Some(af) = AddressFamily::from_name(&family) else {
                return Err(format!("Unknown family '{family}', expected inet|inet6").into());
            };
            match pton(af, text.as_bytes()) {
                Ok(addr) => println!("{}", hex_lower(addr.as_bytes())),
                Err(err) => {
                    return Err(format!("{}: {err} [{}]", af.name(), err.kind().as_str()).into());
                }
            }
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "Validated {} lines in {}: {} error(s)",
                lines,
                log.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err("Structured log validation failed".into());
            }
        }
    }

    Ok(())
}
