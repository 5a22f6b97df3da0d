//! Logical-record segmentation
//!
//! Groups classified lines into company blocks and worker blocks with an
//! explicit state machine. The allowed moves live in [`transition`]; the
//! [`Segmenter`] only applies them.

use std::mem;

use crate::models::{Finding, FindingKind, LogicalRecord, ParsedLine, WorkerBlock};
use crate::schema::RecordRole;

/// Where the segmenter is in the record grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmenterState {
    AwaitingHeader,
    InCompanyBlock,
    InWorkerBlock,
}

/// What to do with an incoming line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StoreLabel,
    /// Close the open record (if any) and start a new one
    OpenRecord,
    AttachDetail,
    /// Close the open worker (if any) and start a new one
    OpenWorker,
    AttachToWorker,
    /// Drop the line from the tree and report it
    Reject(FindingKind),
}

/// The transition table: next action and state for a line of `role`
pub fn transition(
    state: SegmenterState,
    role: RecordRole,
    label_seen: bool,
) -> (Transition, SegmenterState) {
    use SegmenterState::*;

    match (state, role) {
        (AwaitingHeader, RecordRole::Label) if !label_seen => {
            (Transition::StoreLabel, AwaitingHeader)
        }
        (_, RecordRole::Label) => (Transition::Reject(FindingKind::MisplacedRecord), state),
        (_, RecordRole::CompanyHeader) => (Transition::OpenRecord, InCompanyBlock),
        (AwaitingHeader, _) => (
            Transition::Reject(FindingKind::MissingCompanyHeader),
            AwaitingHeader,
        ),
        (InCompanyBlock, RecordRole::CompanyDetail) => (Transition::AttachDetail, InCompanyBlock),
        (InWorkerBlock, RecordRole::CompanyDetail) => (
            Transition::Reject(FindingKind::MisplacedRecord),
            InWorkerBlock,
        ),
        (_, RecordRole::Worker) => (Transition::OpenWorker, InWorkerBlock),
        (InCompanyBlock, RecordRole::SubLine) => (
            Transition::Reject(FindingKind::OrphanSubLine),
            InCompanyBlock,
        ),
        (InWorkerBlock, RecordRole::SubLine) => (Transition::AttachToWorker, InWorkerBlock),
    }
}

/// Segmenter state with the record under construction
#[derive(Debug)]
enum State {
    AwaitingHeader,
    InCompanyBlock(LogicalRecord),
    InWorkerBlock(LogicalRecord),
}

impl State {
    fn phase(&self) -> SegmenterState {
        match self {
            State::AwaitingHeader => SegmenterState::AwaitingHeader,
            State::InCompanyBlock(_) => SegmenterState::InCompanyBlock,
            State::InWorkerBlock(_) => SegmenterState::InWorkerBlock,
        }
    }

    fn into_record(self) -> Option<LogicalRecord> {
        match self {
            State::AwaitingHeader => None,
            State::InCompanyBlock(record) | State::InWorkerBlock(record) => Some(record),
        }
    }
}

/// Forward-only builder of the logical-record tree
#[derive(Debug)]
pub struct Segmenter {
    state: State,
    label: Option<ParsedLine>,
    records: Vec<LogicalRecord>,
}

/// Tree produced by a segmenter
#[derive(Debug, Default)]
pub struct Segmented {
    pub label: Option<ParsedLine>,
    pub records: Vec<LogicalRecord>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            state: State::AwaitingHeader,
            label: None,
            records: Vec::new(),
        }
    }

    pub fn state(&self) -> SegmenterState {
        self.state.phase()
    }

    /// Place a line in the tree, returning a finding if it was rejected
    pub fn push(&mut self, line: ParsedLine) -> Option<Finding> {
        let role = line.record_type.role();
        let (action, next) = transition(self.state.phase(), role, self.label.is_some());
        let open = mem::replace(&mut self.state, State::AwaitingHeader).into_record();

        let mut finding = None;
        let open = match action {
            Transition::StoreLabel => {
                self.label = Some(line);
                open
            }
            Transition::OpenRecord => {
                self.records.extend(open);
                Some(LogicalRecord::new(line))
            }
            Transition::AttachDetail => open.map(|mut record| {
                record.details.push(line);
                record
            }),
            Transition::OpenWorker => open.map(|mut record| {
                record.workers.push(WorkerBlock::new(line));
                record
            }),
            Transition::AttachToWorker => open.map(|mut record| {
                if let Some(worker) = record.workers.last_mut() {
                    worker.children.push(line);
                }
                record
            }),
            Transition::Reject(kind) => {
                finding = Some(rejection(&line, kind));
                open
            }
        };

        self.state = match (next, open) {
            (SegmenterState::InCompanyBlock, Some(record)) => State::InCompanyBlock(record),
            (SegmenterState::InWorkerBlock, Some(record)) => State::InWorkerBlock(record),
            (_, leftover) => {
                self.records.extend(leftover);
                State::AwaitingHeader
            }
        };

        finding
    }

    /// End of input: close the open record
    pub fn finish(mut self) -> Segmented {
        let open = mem::replace(&mut self.state, State::AwaitingHeader).into_record();
        self.records.extend(open);
        Segmented {
            label: self.label,
            records: self.records,
        }
    }

    /// Stop early: keep only the records already closed
    pub fn abandon(self) -> Segmented {
        Segmented {
            label: self.label,
            records: self.records,
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn rejection(line: &ParsedLine, kind: FindingKind) -> Finding {
    let code = line.record_type.code();
    let message = match kind {
        FindingKind::OrphanSubLine => {
            format!("{} line has no open worker (TRA) to attach to", code)
        }
        FindingKind::MissingCompanyHeader => {
            format!("{} line appears before any company header (EMP)", code)
        }
        _ => format!("{} line is not allowed at this position", code),
    };
    Finding::new(line.line, kind, message)
}
