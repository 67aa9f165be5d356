use crate::core::run::Run;
use crate::core::types::OutputMode;

/// Keep the runs whose label is accepted by `mode`, preserving order
#[must_use]
pub fn select_runs(runs: Vec<Run>, mode: OutputMode) -> Vec<Run> {
    runs.into_iter()
        .filter(|run| mode.accepts(run.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RunLabel;
    use crate::scatter::merger::merge_runs;
    use crate::scatter::scanner::scan_contig;

    #[test]
    fn test_select_n_only() {
        let merged = merge_runs(scan_contig("chr1", b"ACGTNNNNACGT"), 3);
        let selected = select_runs(merged, OutputMode::N);
        assert_eq!(selected, vec![Run::new("chr1", 5, 8, RunLabel::Nmer)]);
    }

    #[test]
    fn test_select_partitions_runs() {
        let merged = merge_runs(scan_contig("chr1", b"NNANANNNAAN"), 1);

        let n = select_runs(merged.clone(), OutputMode::N);
        let acgt = select_runs(merged.clone(), OutputMode::Acgt);
        let both = select_runs(merged.clone(), OutputMode::Both);

        assert!(n.iter().all(|r| r.label == RunLabel::Nmer));
        assert!(acgt.iter().all(|r| r.label == RunLabel::AcgtMer));
        assert_eq!(n.len() + acgt.len(), merged.len());
        assert_eq!(both, merged);

        let expected_n: Vec<Run> = merged
            .iter()
            .filter(|r| r.label == RunLabel::Nmer)
            .cloned()
            .collect();
        assert_eq!(n, expected_n);
    }
}
