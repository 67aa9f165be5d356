//! Single-pass partition of one contig into alternating N / ACGT runs.

use crate::core::run::Run;
use crate::scatter::classify::classify;

/// Split `bases` into maximal runs of no-call and called bases.
///
/// Runs are returned in scan order, alternate label, and together cover
/// `[1, bases.len()]`. An empty sequence yields no runs.
#[must_use]
pub fn scan_contig(contig: &str, bases: &[u8]) -> Vec<Run> {
    let Some(&first) = bases.first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut open_label = classify(first);
    let mut start = 0usize;

    for (i, &base) in bases.iter().enumerate() {
        let label = classify(base);
        if label != open_label {
            runs.push(Run::new(contig, (start + 1) as u64, i as u64, open_label));
            start = i;
            open_label = open_label.flip();
        }
    }

    // last block of the contig
    runs.push(Run::new(
        contig,
        (start + 1) as u64,
        bases.len() as u64,
        open_label,
    ));

    runs
}
