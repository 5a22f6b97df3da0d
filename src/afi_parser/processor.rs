//! Processing façade
//!
//! Drives every line through classification, decoding, validation and
//! segmentation in file order, collecting all findings into one result.

use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::classifier::classify;
use super::decoder::decode;
use super::documents::{DocumentValidator, SpanishDocuments};
use super::segmenter::{Segmented, Segmenter};
use super::validator::RecordValidator;
use crate::Result;
use crate::config::ValidatorConfig;
use crate::models::{Finding, ParseResult, ParsedLine, RawLine};
use crate::reader::{read_afi_file, split_lines};

/// Entry point for processing AFI content.
///
/// Holds no per-file state: each call starts a fresh [`FilePass`], so one
/// processor can be cloned into many concurrent tasks.
#[derive(Clone)]
pub struct FileProcessor {
    validator: RecordValidator,
    config: ValidatorConfig,
}

impl FileProcessor {
    /// Create a new processor with the given document checks
    pub fn new(documents: Arc<dyn DocumentValidator>, config: ValidatorConfig) -> Self {
        Self {
            validator: RecordValidator::new(documents, config.report_reserved_fields),
            config,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Start an incremental pass
    pub fn begin(&self) -> FilePass<'_> {
        FilePass {
            validator: &self.validator,
            segmenter: Segmenter::new(),
            findings: Vec::new(),
            total_lines: 0,
        }
    }

    /// Process a complete sequence of lines
    pub fn process_lines<I>(&self, lines: I) -> ParseResult
    where
        I: IntoIterator<Item = RawLine>,
    {
        let mut pass = self.begin();
        for line in lines {
            pass.feed(line);
        }
        pass.finish()
    }

    /// Process in-memory text, numbering lines from 1
    pub fn process_str(&self, content: &str) -> ParseResult {
        self.process_lines(split_lines(content))
    }

    /// Read and process a file from disk
    pub fn process_file(&self, path: &Path) -> Result<ParseResult> {
        debug!("Processing AFI file: {}", path.display());
        let lines = read_afi_file(path)?;
        Ok(self.process_lines(lines))
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(Arc::new(SpanishDocuments), ValidatorConfig::default())
    }
}

/// State of one in-progress processing pass
pub struct FilePass<'a> {
    validator: &'a RecordValidator,
    segmenter: Segmenter,
    findings: Vec<Finding>,
    total_lines: usize,
}

impl FilePass<'_> {
    /// Process the next line of the file
    pub fn feed(&mut self, line: RawLine) {
        self.total_lines += 1;

        // Step 1: classify; unclassifiable lines stop here
        let record_type = match classify(&line) {
            Ok(record_type) => record_type,
            Err(finding) => {
                self.findings.push(finding);
                return;
            }
        };

        // Step 2: decode and validate fields
        let fields = decode(&line, record_type);
        self.findings
            .extend(self.validator.validate(&fields, record_type, line.number));

        // Step 3: place the line in the tree
        let parsed = ParsedLine {
            line: line.number,
            record_type,
            fields,
        };
        if let Some(finding) = self.segmenter.push(parsed) {
            self.findings.push(finding);
        }
    }

    /// Lines fed so far
    pub fn lines_seen(&self) -> usize {
        self.total_lines
    }

    /// End of input: close any open record and return the result
    pub fn finish(self) -> ParseResult {
        let total_lines = self.total_lines;
        let findings = self.findings;
        let segmented = self.segmenter.finish();
        build_result(segmented, findings, total_lines)
    }

    /// Stop early: the record still open is left out of the result
    pub fn abandon(self) -> ParseResult {
        debug!("Pass abandoned after {} lines", self.total_lines);
        let total_lines = self.total_lines;
        let findings = self.findings;
        let segmented = self.segmenter.abandon();
        build_result(segmented, findings, total_lines)
    }
}

fn build_result(segmented: Segmented, findings: Vec<Finding>, total_lines: usize) -> ParseResult {
    let result = ParseResult {
        label: segmented.label,
        records: segmented.records,
        findings,
        total_lines,
    };

    debug!(
        "Pass complete: {} lines, {} records, {} workers, {} errors, {} warnings",
        result.total_lines,
        result.records.len(),
        result.worker_count(),
        result.error_count(),
        result.warning_count()
    );
    result
}
