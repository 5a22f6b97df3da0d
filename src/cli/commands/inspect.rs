//! Inspect command implementation
//!
//! Prints the logical-record tree of one AFI file together with the
//! findings attached to each line.

use super::shared::{RunOutcome, load_configuration, setup_logging};
use crate::afi_parser::{FileProcessor, SpanishDocuments};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::models::{ParseResult, ParsedLine, Severity};
use crate::schema::FieldKind;
use crate::AfiError;
use anyhow::Context;
use colored::Colorize;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::info;

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> anyhow::Result<RunOutcome> {
    setup_logging(args.get_log_level());

    let config =
        load_configuration(args.config_file.as_deref()).context("Failed to load configuration")?;
    let processor = FileProcessor::new(Arc::new(SpanishDocuments), config);
    let strict = processor.config().strict;

    let path = args.file.clone();
    let result = tokio::task::spawn_blocking(move || processor.process_file(&path))
        .await
        .map_err(AfiError::from)??;
    info!(
        "{}: {} records, {} findings",
        args.file.display(),
        result.records.len(),
        result.findings.len()
    );

    match args.output_format {
        OutputFormat::Human => print!("{}", render_tree(&result)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result).map_err(AfiError::from)?)
        }
    }

    Ok(RunOutcome {
        files_processed: 1,
        files_blocked: usize::from(result.has_blocking_findings(strict)),
        files_failed: 0,
    })
}

/// Render the record tree as indented text
pub fn render_tree(result: &ParseResult) -> String {
    let mut out = String::new();

    if let Some(label) = &result.label {
        render_line(&mut out, result, label, 0);
    }
    for record in &result.records {
        render_line(&mut out, result, &record.header, 0);
        for detail in &record.details {
            render_line(&mut out, result, detail, 1);
        }
        for block in &record.workers {
            render_line(&mut out, result, &block.worker, 1);
            for child in &block.children {
                render_line(&mut out, result, child, 2);
            }
        }
    }

    // Lines that never made it into the tree still carry findings
    let placed = placed_lines(result);
    for finding in result.findings.iter().filter(|f| !placed.contains(&f.line)) {
        let _ = writeln!(out, "{} line {}: {}", "✗".red(), finding.line, finding.message);
    }

    let _ = writeln!(
        out,
        "\n{} lines, {} companies, {} workers, {} errors, {} warnings",
        result.total_lines,
        result.records.len(),
        result.worker_count(),
        result.error_count(),
        result.warning_count()
    );
    out
}

fn placed_lines(result: &ParseResult) -> BTreeSet<usize> {
    let mut lines: BTreeSet<usize> = result.label.iter().map(|label| label.line).collect();
    for record in &result.records {
        lines.insert(record.header.line);
        lines.extend(record.details.iter().map(|d| d.line));
        for block in &record.workers {
            lines.insert(block.worker.line);
            lines.extend(block.children.iter().map(|c| c.line));
        }
    }
    lines
}

fn render_line(out: &mut String, result: &ParseResult, line: &ParsedLine, depth: usize) {
    let indent = "  ".repeat(depth);
    let fields: Vec<String> = line
        .fields
        .iter()
        .filter(|field| field.spec.kind != FieldKind::Reserved && !field.value.is_empty())
        .map(|field| format!("{}={}", field.spec.name, field.value))
        .collect();

    let _ = writeln!(
        out,
        "{}{} {} {}",
        indent,
        format!("{:>5}", line.line).dimmed(),
        line.record_type.code().bold(),
        fields.join(" ")
    );

    for finding in result.findings_for_line(line.line) {
        let marker = match finding.severity {
            Severity::Error => "✗".red(),
            Severity::Warning => "!".yellow(),
        };
        let _ = writeln!(out, "{}      {} {}", indent, marker, finding.message);
    }
}
