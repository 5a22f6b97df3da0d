//! Validate command implementation
//!
//! Discovers the input files, validates them concurrently on the blocking
//! thread pool and prints a per-file report.

use super::shared::{
    RunOutcome, create_progress_bar, discover_inputs, load_configuration, setup_logging,
};
use crate::afi_parser::{FileProcessor, ParseStats, SpanishDocuments};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::ValidatorConfig;
use crate::models::{ParseResult, Severity};
use crate::AfiError;
use anyhow::Context;
use colored::Colorize;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Report for a single validated file
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub blocking: bool,
    pub stats: ParseStats,
    pub result: ParseResult,
}

/// A file that could not be read
#[derive(Debug, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    files: &'a [FileReport],
    failures: &'a [FileFailure],
    files_processed: usize,
    files_blocked: usize,
}

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> anyhow::Result<RunOutcome> {
    let start_time = Instant::now();

    // Step 1: logging and arguments
    setup_logging(args.get_log_level());
    args.validate()?;
    debug!("Validate arguments: {:?}", args);

    // Step 2: configuration, with CLI flags taking precedence
    let config = apply_cli_overrides(
        load_configuration(args.config_file.as_deref()).context("Failed to load configuration")?,
        &args,
    );
    config.validate()?;

    // Step 3: inputs
    let files = discover_inputs(&args.paths, args.recursive, &config.extension)
        .context("Failed to discover input files")?;
    info!("Validating {} files with {} workers", files.len(), config.workers);

    // Step 4: validate
    let (reports, failures) = validate_files(files, &config, args.show_progress()).await?;

    // Step 5: report
    let outcome = RunOutcome {
        files_processed: reports.len(),
        files_blocked: reports.iter().filter(|r| r.blocking).count(),
        files_failed: failures.len(),
    };

    match args.output_format {
        OutputFormat::Human => print_human_report(&reports, &failures, args.max_findings),
        OutputFormat::Json => {
            let report = JsonReport {
                files: &reports,
                failures: &failures,
                files_processed: outcome.files_processed,
                files_blocked: outcome.files_blocked,
            };
            println!("{}", serde_json::to_string_pretty(&report).map_err(AfiError::from)?);
        }
    }

    info!(
        "Validated {} files in {:.2?} ({} blocked, {} failed)",
        outcome.files_processed,
        start_time.elapsed(),
        outcome.files_blocked,
        outcome.files_failed
    );
    Ok(outcome)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(mut config: ValidatorConfig, args: &ValidateArgs) -> ValidatorConfig {
    if args.strict {
        config = config.with_strict();
    }
    if args.no_reserved_warnings {
        config = config.without_reserved_warnings();
    }
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    config
}

/// Validate files concurrently, returning reports sorted by path
pub async fn validate_files(
    files: Vec<PathBuf>,
    config: &ValidatorConfig,
    show_progress: bool,
) -> crate::Result<(Vec<FileReport>, Vec<FileFailure>)> {
    let processor = FileProcessor::new(Arc::new(SpanishDocuments), config.clone());
    let strict = config.strict;

    let progress = show_progress.then(|| create_progress_bar(files.len() as u64, "Validating"));

    let mut results = stream::iter(files)
        .map(|path| {
            let processor = processor.clone();
            tokio::task::spawn_blocking(move || {
                let result = processor.process_file(&path);
                (path, result)
            })
        })
        .buffer_unordered(config.workers.max(1));

    let mut reports = Vec::new();
    let mut failures = Vec::new();

    while let Some(joined) = results.next().await {
        let (path, result) = joined?;
        if let Some(pb) = &progress {
            pb.inc(1);
        }

        match result {
            Ok(result) => {
                let stats = ParseStats::from_result(&result);
                debug!(
                    "{}: {} errors, {} warnings",
                    path.display(),
                    stats.errors,
                    stats.warnings
                );
                reports.push(FileReport {
                    blocking: result.has_blocking_findings(strict),
                    path,
                    stats,
                    result,
                });
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                failures.push(FileFailure {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    failures.sort_by(|a, b| a.path.cmp(&b.path));
    Ok((reports, failures))
}

fn print_human_report(reports: &[FileReport], failures: &[FileFailure], max_findings: usize) {
    for report in reports {
        let stats = &report.stats;
        let summary = format!(
            "{} lines, {} companies, {} workers",
            stats.total_lines, stats.records, stats.workers
        );

        if stats.is_clean() {
            println!("{} {} ({})", "✓".green(), report.path.display(), summary);
            continue;
        }

        let marker = if report.blocking { "✗".red() } else { "!".yellow() };
        println!(
            "{} {} ({}; {} errors, {} warnings)",
            marker,
            report.path.display(),
            summary,
            stats.errors,
            stats.warnings
        );

        let limit = if max_findings == 0 { usize::MAX } else { max_findings };
        for finding in report.result.findings.iter().take(limit) {
            let severity = match finding.severity {
                Severity::Error => "error".red(),
                Severity::Warning => "warning".yellow(),
            };
            let field = finding.field.map(|f| format!(" {}:", f)).unwrap_or_default();
            println!(
                "    line {:>5} {} [{}]{} {}",
                finding.line,
                severity,
                finding.kind.code().dimmed(),
                field,
                finding.message
            );
        }
        if report.result.findings.len() > limit {
            println!(
                "    ... {} more findings",
                report.result.findings.len() - limit
            );
        }
    }

    for failure in failures {
        println!("{} {}: {}", "✗".red(), failure.path.display(), failure.error);
    }

    let blocked = reports.iter().filter(|r| r.blocking).count();
    println!();
    println!(
        "{} files checked: {} passed, {} with blocking findings, {} unreadable",
        reports.len() + failures.len(),
        (reports.len() - blocked).to_string().green(),
        blocked.to_string().red(),
        failures.len()
    );
}
