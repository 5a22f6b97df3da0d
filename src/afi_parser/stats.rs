//! Summary statistics over a processing result
//!
//! Counts lines, records and findings so reports can show an overview
//! without walking the record tree themselves.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::ParseResult;

/// Summary counts for one processed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Total number of input lines
    pub total_lines: usize,

    /// Number of company blocks
    pub records: usize,

    /// Number of worker blocks across all records
    pub workers: usize,

    /// Lines attached under workers
    pub sub_lines: usize,

    /// Company detail lines (legal names)
    pub detail_lines: usize,

    /// Distinct lines carrying at least one error
    pub lines_with_errors: usize,

    pub errors: usize,
    pub warnings: usize,

    /// Finding counts keyed by finding code
    pub by_kind: BTreeMap<&'static str, usize>,
}

impl ParseStats {
    /// Compute statistics for a result
    pub fn from_result(result: &ParseResult) -> Self {
        let mut by_kind = BTreeMap::new();
        for finding in &result.findings {
            *by_kind.entry(finding.kind.code()).or_insert(0) += 1;
        }

        let lines_with_errors = result
            .findings
            .iter()
            .filter(|f| f.is_error())
            .map(|f| f.line)
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            total_lines: result.total_lines,
            records: result.records.len(),
            workers: result.worker_count(),
            sub_lines: result
                .records
                .iter()
                .flat_map(|record| &record.workers)
                .map(|block| block.children.len())
                .sum(),
            detail_lines: result.records.iter().map(|r| r.details.len()).sum(),
            lines_with_errors,
            errors: result.error_count(),
            warnings: result.warning_count(),
            by_kind,
        }
    }

    /// Share of lines without errors, as a percentage
    pub fn clean_line_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            ((self.total_lines - self.lines_with_errors) as f64 / self.total_lines as f64) * 100.0
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}
