//! Tests for logical-record segmentation

use super::*;
use crate::afi_parser::segmenter::{Segmented, Segmenter, SegmenterState, Transition, transition};
use crate::schema::RecordRole;

/// Push a stream of record types, returning the tree and the findings
fn segment(types: &[RecordType]) -> (Segmented, Vec<Finding>) {
    let mut segmenter = Segmenter::new();
    let findings = types
        .iter()
        .enumerate()
        .filter_map(|(i, record_type)| segmenter.push(parsed(i + 1, *record_type)))
        .collect();
    (segmenter.finish(), findings)
}

#[test]
fn test_two_companies_with_workers() {
    use RecordType::*;
    let (tree, findings) = segment(&[
        CompanyHeader,
        Worker,
        Address,
        Worker,
        Peculiarity,
        CompanyHeader,
        Worker,
    ]);

    assert!(findings.is_empty());
    assert_eq!(tree.records.len(), 2);

    let first = &tree.records[0];
    assert_eq!(first.header.line, 1);
    assert_eq!(first.workers.len(), 2);
    assert_eq!(first.workers[0].worker.line, 2);
    assert_eq!(first.workers[0].children.len(), 1);
    assert_eq!(first.workers[0].children[0].record_type, Address);
    // a peculiarity attaches to the open worker block, even after a second worker
    assert_eq!(first.workers[1].worker.line, 4);
    assert_eq!(first.workers[1].children.len(), 1);
    assert_eq!(first.workers[1].children[0].record_type, Peculiarity);

    let second = &tree.records[1];
    assert_eq!(second.header.line, 6);
    assert_eq!(second.workers.len(), 1);
    assert!(second.workers[0].children.is_empty());
}

#[test]
fn test_orphan_sub_line() {
    use RecordType::*;
    let (tree, findings) = segment(&[CompanyHeader, Address, Worker]);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::OrphanSubLine);
    assert_eq!(findings[0].line, 2);

    let record = &tree.records[0];
    assert_eq!(record.workers.len(), 1);
    assert!(record.workers[0].children.is_empty());
    assert_eq!(record.line_count(), 2);
}

#[test]
fn test_end_of_input_closes_open_worker() {
    use RecordType::*;
    let (tree, findings) = segment(&[CompanyHeader, Worker, WorkerName, Address]);

    assert!(findings.is_empty());
    assert_eq!(tree.records.len(), 1);
    assert_eq!(tree.records[0].workers[0].children.len(), 2);
}

#[test]
fn test_abandon_drops_open_record() {
    let mut segmenter = Segmenter::new();
    segmenter.push(parsed(1, RecordType::CompanyHeader));
    segmenter.push(parsed(2, RecordType::Worker));
    segmenter.push(parsed(3, RecordType::CompanyHeader));
    assert_eq!(segmenter.state(), SegmenterState::InCompanyBlock);

    let tree = segmenter.abandon();
    assert_eq!(tree.records.len(), 1);
    assert_eq!(tree.records[0].header.line, 1);
}

#[test]
fn test_lines_before_any_company() {
    use RecordType::*;
    let (tree, findings) = segment(&[Worker, Address, CompanyName, CompanyHeader]);

    assert_eq!(kinds(&findings), vec![FindingKind::MissingCompanyHeader; 3]);
    assert_eq!(tree.records.len(), 1);
    assert!(tree.records[0].workers.is_empty());
}

#[test]
fn test_label_placement() {
    use RecordType::*;
    let (tree, findings) = segment(&[Label, Label, CompanyHeader, Label]);

    assert_eq!(tree.label.as_ref().map(|l| l.line), Some(1));
    assert_eq!(
        findings.iter().map(|f| (f.line, f.kind)).collect::<Vec<_>>(),
        vec![
            (2, FindingKind::MisplacedRecord),
            (4, FindingKind::MisplacedRecord)
        ]
    );
}

#[test]
fn test_company_detail_placement() {
    use RecordType::*;
    let (tree, findings) = segment(&[CompanyHeader, CompanyName, Worker, CompanyName]);

    assert_eq!(tree.records[0].details.len(), 1);
    assert_eq!(tree.records[0].details[0].line, 2);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::MisplacedRecord);
    assert_eq!(findings[0].line, 4);
}

#[test]
fn test_state_progression() {
    let mut segmenter = Segmenter::new();
    assert_eq!(segmenter.state(), SegmenterState::AwaitingHeader);

    segmenter.push(parsed(1, RecordType::CompanyHeader));
    assert_eq!(segmenter.state(), SegmenterState::InCompanyBlock);

    segmenter.push(parsed(2, RecordType::Worker));
    assert_eq!(segmenter.state(), SegmenterState::InWorkerBlock);

    segmenter.push(parsed(3, RecordType::Address));
    assert_eq!(segmenter.state(), SegmenterState::InWorkerBlock);

    segmenter.push(parsed(4, RecordType::CompanyHeader));
    assert_eq!(segmenter.state(), SegmenterState::InCompanyBlock);
}

#[test]
fn test_transition_table() {
    use SegmenterState::*;

    let cases = [
        (AwaitingHeader, RecordRole::CompanyHeader, Transition::OpenRecord, InCompanyBlock),
        (InWorkerBlock, RecordRole::CompanyHeader, Transition::OpenRecord, InCompanyBlock),
        (InCompanyBlock, RecordRole::Worker, Transition::OpenWorker, InWorkerBlock),
        (InWorkerBlock, RecordRole::Worker, Transition::OpenWorker, InWorkerBlock),
        (InWorkerBlock, RecordRole::SubLine, Transition::AttachToWorker, InWorkerBlock),
        (InCompanyBlock, RecordRole::CompanyDetail, Transition::AttachDetail, InCompanyBlock),
        (
            InCompanyBlock,
            RecordRole::SubLine,
            Transition::Reject(FindingKind::OrphanSubLine),
            InCompanyBlock,
        ),
        (
            AwaitingHeader,
            RecordRole::SubLine,
            Transition::Reject(FindingKind::MissingCompanyHeader),
            AwaitingHeader,
        ),
        (
            InWorkerBlock,
            RecordRole::CompanyDetail,
            Transition::Reject(FindingKind::MisplacedRecord),
            InWorkerBlock,
        ),
    ];

    for (state, role, action, next) in cases {
        assert_eq!(transition(state, role, false), (action, next), "{:?} + {:?}", state, role);
    }

    assert_eq!(
        transition(AwaitingHeader, RecordRole::Label, false),
        (Transition::StoreLabel, AwaitingHeader)
    );
    assert_eq!(
        transition(AwaitingHeader, RecordRole::Label, true),
        (Transition::Reject(FindingKind::MisplacedRecord), AwaitingHeader)
    );
}
