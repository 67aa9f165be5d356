//! Absorb short N runs into their flanking ACGT runs.
//!
//! The raw runs of all contigs, concatenated in dictionary order, form a
//! work queue. While the front three runs are `ACGT, N, ACGT`, abut each
//! other and the N run is at most `max_to_merge` bases long, they are
//! replaced by one ACGT run pushed back onto the front, so a merged run can
//! immediately absorb the next short gap. Otherwise the front run is final.

use std::collections::VecDeque;

use crate::core::run::Run;
use crate::core::types::RunLabel;

/// Merge `ACGT, N, ACGT` triples whose N run is at most `max_to_merge` long.
///
/// A threshold of 0 returns the input unchanged. Runs on different contigs
/// never abut, so merging never crosses a contig boundary.
#[must_use]
pub fn merge_runs(runs: Vec<Run>, max_to_merge: u64) -> Vec<Run> {
    let mut queue: VecDeque<Run> = runs.into();
    let mut merged = Vec::with_capacity(queue.len());

    while let Some(first) = queue.pop_front() {
        if is_mergeable(&first, queue.front(), queue.get(1), max_to_merge) {
            // both are present, checked by is_mergeable
            if let (Some(_gap), Some(last)) = (queue.pop_front(), queue.pop_front()) {
                queue.push_front(Run::new(
                    first.contig,
                    first.start,
                    last.end,
                    RunLabel::AcgtMer,
                ));
            }
        } else {
            merged.push(first);
        }
    }

    merged
}

fn is_mergeable(a: &Run, b: Option<&Run>, c: Option<&Run>, max_to_merge: u64) -> bool {
    let (Some(b), Some(c)) = (b, c) else {
        return false;
    };

    a.label == RunLabel::AcgtMer
        && b.label == RunLabel::Nmer
        && c.label == RunLabel::AcgtMer
        && a.abuts(b)
        && b.abuts(c)
        && b.length() <= max_to_merge
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scatter::scanner::scan_contig;
    use crate::core::types::RunLabel::{AcgtMer, Nmer};

    fn spans(runs: &[Run]) -> Vec<(&str, u64, u64, RunLabel)> {
        runs.iter()
            .map(|r| (r.contig.as_str(), r.start, r.end, r.label))
            .collect()
    }

    #[test]
    fn test_merge_within_threshold() {
        let merged = merge_runs(scan_contig("chr1", b"ACGTNNNNACGT"), 4);
        assert_eq!(spans(&merged), vec![("chr1", 1, 12, AcgtMer)]);
    }

    #[test]
    fn test_no_merge_above_threshold() {
        let raw = scan_contig("chr1", b"ACGTNNNNACGT");
        let merged = merge_runs(raw.clone(), 3);
        assert_eq!(merged, raw);
    }

    #[test]
    fn test_cascading_merge() {
        let raw = scan_contig("chr1", b"ACGTNACGTNACGT");
        assert_eq!(raw.len(), 5);
        let merged = merge_runs(raw, 1);
        assert_eq!(spans(&merged), vec![("chr1", 1, 14, AcgtMer)]);
    }

    #[test]
    fn test_cascade_stops_at_long_gap() {
        let merged = merge_runs(scan_contig("chr1", b"ANANNNANA"), 1);
        assert_eq!(
            spans(&merged),
            vec![
                ("chr1", 1, 3, AcgtMer),
                ("chr1", 4, 6, Nmer),
                ("chr1", 7, 9, AcgtMer)
            ]
        );
    }

    #[test]
    fn test_threshold_zero_is_identity() {
        let raw = scan_contig("chr1", b"ANANNA");
        assert_eq!(merge_runs(raw.clone(), 0), raw);
    }

    #[test]
    fn test_edge_ns_are_never_merged() {
        let raw = scan_contig("chr1", b"NACGTN");
        assert_eq!(merge_runs(raw.clone(), 100), raw);
    }

    #[test]
    fn test_merge_does_not_cross_contigs() {
        // chr1 ends in ACGT, chr2 = N then ACGT; the triple spans a boundary
        let mut runs = scan_contig("chr1", b"ACGT");
        runs.extend(scan_contig("chr2", b"NACGT"));
        let merged = merge_runs(runs.clone(), 10);
        assert_eq!(merged, runs);

        // Contigs with identical coordinates must not be stitched together either
        let mut runs = scan_contig("chr1", b"AN");
        runs.extend(scan_contig("chr2", b"AN"));
        assert_eq!(merge_runs(runs.clone(), 10), runs);
    }

    #[test]
    fn test_merge_per_contig_independent() {
        let mut runs = scan_contig("chr1", b"ANA");
        runs.extend(scan_contig("chr2", b"ANNA"));
        let merged = merge_runs(runs, 1);
        assert_eq!(
            spans(&merged),
            vec![
                ("chr1", 1, 3, AcgtMer),
                ("chr2", 1, 1, AcgtMer),
                ("chr2", 2, 3, Nmer),
                ("chr2", 4, 4, AcgtMer)
            ]
        );
    }

    /// Every sequence over {A, N} up to length 10 and thresholds 0..=4:
    /// lengths are preserved and no mergeable triple survives.
    #[test]
    fn test_merge_soundness_and_fixpoint_exhaustive() {
        for len in 1..=10usize {
            for mask in 0u32..(1 << len) {
                let bases: Vec<u8> = (0..len)
                    .map(|i| if mask & (1 << i) == 0 { b'A' } else { b'N' })
                    .collect();
                let raw = scan_contig("c", &bases);

                for threshold in 0..=4u64 {
                    let merged = merge_runs(raw.clone(), threshold);

                    assert_eq!(merged.iter().map(Run::length).sum::<u64>(), len as u64);
                    assert_eq!(merged[0].start, 1);
                    for pair in merged.windows(2) {
                        assert!(pair[0].abuts(&pair[1]));
                    }
                    for triple in merged.windows(3) {
                        assert!(
                            !is_mergeable(
                                &triple[0],
                                Some(&triple[1]),
                                Some(&triple[2]),
                                threshold
                            ),
                            "unmerged triple in {:?} at T={threshold}",
                            String::from_utf8_lossy(&bases)
                        );
                    }
                    if threshold == 0 {
                        assert_eq!(merged, raw);
                    }
                }
            }
        }
    }
}
