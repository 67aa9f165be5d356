use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::contig::Contig;
use crate::core::dictionary::SequenceDictionary;
use crate::core::run::Run;
use crate::core::types::{OutputMode, RunLabel};
use crate::parsing::fasta::ReferenceError;
use crate::scatter::merger::merge_runs;
use crate::scatter::scanner::scan_contig;
use crate::scatter::selector::select_runs;
use crate::scatter::source::SequenceSource;

#[derive(Error, Debug)]
pub enum ScatterError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for splitting a reference
#[derive(Debug, Clone, Copy)]
pub struct ScatterConfig {
    /// Longest N run that is absorbed into its flanking ACGT runs
    pub max_to_merge: u64,
    /// Which runs are kept in the result
    pub output_mode: OutputMode,
    /// Worker threads for scanning; 0 uses the rayon default, 1 scans on
    /// the calling thread
    pub threads: usize,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            max_to_merge: 1,
            output_mode: OutputMode::Both,
            threads: 0,
        }
    }
}

/// Counts gathered while splitting a reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterStats {
    pub contigs: usize,
    pub loci_examined: u64,
    pub raw_runs: usize,
    pub merged_runs: usize,
    pub selected_runs: usize,
    /// No-call bases in the reference
    pub n_bases: u64,
    /// Called bases in the reference
    pub called_bases: u64,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone)]
pub struct ScatterResult {
    pub runs: Vec<Run>,
    pub stats: ScatterStats,
}

/// Runs of one contig plus its local counts
struct ContigScan {
    runs: Vec<Run>,
    loci: u64,
    n_bases: u64,
}

/// Scan, merge and select runs over every contig of a reference
pub struct ScatterEngine {
    config: ScatterConfig,
}

impl ScatterEngine {
    #[must_use]
    pub fn new(config: ScatterConfig) -> Self {
        Self { config }
    }

    /// Split the reference described by `dictionary` into runs.
    ///
    /// `open` is called once per worker, before any contig is scanned, to
    /// obtain a reader; contigs are scanned independently but always merged
    /// in dictionary order.
    ///
    /// # Errors
    ///
    /// Returns an error if a reader cannot be opened, a contig cannot be
    /// read, or a contig's bases disagree with the dictionary length.
    pub fn run<S, F>(
        &self,
        dictionary: &SequenceDictionary,
        open: F,
    ) -> Result<ScatterResult, ScatterError>
    where
        S: SequenceSource + Send,
        F: Fn() -> Result<S, ReferenceError> + Sync,
    {
        let started = Instant::now();

        let scans = self.scan_all(dictionary, open)?;

        let mut stats = ScatterStats {
            contigs: scans.len(),
            ..ScatterStats::default()
        };
        let mut raw = Vec::with_capacity(scans.iter().map(|s| s.runs.len()).sum());
        for scan in scans {
            stats.loci_examined += scan.loci;
            stats.n_bases += scan.n_bases;
            raw.extend(scan.runs);
        }
        stats.called_bases = stats.loci_examined - stats.n_bases;
        stats.raw_runs = raw.len();

        let merged = merge_runs(raw, self.config.max_to_merge);
        stats.merged_runs = merged.len();
        info!(
            "Found {} intervals in {} loci during {:.1} seconds",
            stats.merged_runs,
            stats.loci_examined,
            started.elapsed().as_secs_f64()
        );

        info!(
            "Collecting requested type of intervals ({})",
            self.config.output_mode
        );
        let runs = select_runs(merged, self.config.output_mode);
        stats.selected_runs = runs.len();
        stats.elapsed_secs = started.elapsed().as_secs_f64();

        Ok(ScatterResult { runs, stats })
    }

    fn scan_all<S, F>(
        &self,
        dictionary: &SequenceDictionary,
        open: F,
    ) -> Result<Vec<ContigScan>, ScatterError>
    where
        S: SequenceSource + Send,
        F: Fn() -> Result<S, ReferenceError> + Sync,
    {
        if self.config.threads == 1 {
            let mut source = open()?;
            let mut buffer = Vec::new();
            return dictionary
                .iter()
                .map(|contig| scan_one(&mut source, contig, &mut buffer))
                .collect::<Result<Vec<_>, _>>()
                .map_err(ScatterError::from);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()?;
        let workers = pool.current_num_threads();
        debug!(threads = workers, "Scanning contigs");

        // one reader per worker, indexed by rayon thread index
        let slots = (0..workers)
            .map(|_| open().map(|source| Mutex::new((source, Vec::new()))))
            .collect::<Result<Vec<_>, _>>()?;

        let scans = pool.install(|| {
            dictionary
                .contigs
                .par_iter()
                .map(|contig| {
                    let slot = rayon::current_thread_index().unwrap_or(0) % slots.len();
                    let mut guard = slots[slot].lock().unwrap_or_else(PoisonError::into_inner);
                    let (source, buffer) = &mut *guard;
                    scan_one(source, contig, buffer)
                })
                .collect::<Result<Vec<_>, ReferenceError>>()
        })?;

        Ok(scans)
    }
}

fn scan_one<S: SequenceSource>(
    source: &mut S,
    contig: &Contig,
    buffer: &mut Vec<u8>,
) -> Result<ContigScan, ReferenceError> {
    if contig.length == 0 {
        return Err(ReferenceError::EmptyContig(contig.name.clone()));
    }

    source.fetch(contig, buffer)?;
    let loci = buffer.len() as u64;
    if loci != contig.length {
        return Err(ReferenceError::SequenceLength {
            contig: contig.name.clone(),
            expected: contig.length,
            actual: loci,
        });
    }

    let runs = scan_contig(&contig.name, buffer);
    let n_bases = runs
        .iter()
        .filter(|r| r.label == RunLabel::Nmer)
        .map(Run::length)
        .sum();

    debug!(contig = %contig.name, length = loci, runs = runs.len(), n_bases, "Scanned contig");

    Ok(ContigScan {
        runs,
        loci,
        n_bases,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::core::types::RunLabel::{AcgtMer, Nmer};
    use crate::scatter::source::InMemoryReference;

    fn reference() -> InMemoryReference {
        InMemoryReference::new()
            .with_contig("chr1", "ACGTNACGTNACGT")
            .with_contig("chr2", "NNNNacgtNNNNacgt")
            .with_contig("chrM", "ACGTACGT")
    }

    fn spans(runs: &[Run]) -> Vec<(&str, u64, u64, RunLabel)> {
        runs.iter()
            .map(|r| (r.contig.as_str(), r.start, r.end, r.label))
            .collect()
    }

    fn run_with(config: ScatterConfig) -> ScatterResult {
        let reference = reference();
        let dictionary = reference.dictionary();
        ScatterEngine::new(config)
            .run(&dictionary, || Ok(reference.clone()))
            .unwrap()
    }

    #[test]
    fn test_run_both() {
        let result = run_with(ScatterConfig {
            threads: 1,
            ..ScatterConfig::default()
        });

        assert_eq!(
            spans(&result.runs),
            vec![
                ("chr1", 1, 14, AcgtMer),
                ("chr2", 1, 4, Nmer),
                ("chr2", 5, 8, AcgtMer),
                ("chr2", 9, 12, Nmer),
                ("chr2", 13, 16, AcgtMer),
                ("chrM", 1, 8, AcgtMer),
            ]
        );

        let stats = result.stats;
        assert_eq!(stats.contigs, 3);
        assert_eq!(stats.loci_examined, 38);
        assert_eq!(stats.raw_runs, 10);
        assert_eq!(stats.merged_runs, 6);
        assert_eq!(stats.selected_runs, 6);
        assert_eq!(stats.n_bases, 10);
        assert_eq!(stats.called_bases, 28);
    }

    #[test]
    fn test_run_n_only() {
        let result = run_with(ScatterConfig {
            output_mode: OutputMode::N,
            threads: 1,
            ..ScatterConfig::default()
        });

        assert_eq!(
            spans(&result.runs),
            vec![("chr2", 1, 4, Nmer), ("chr2", 9, 12, Nmer)]
        );
        assert_eq!(result.stats.merged_runs, 6);
        assert_eq!(result.stats.selected_runs, 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = run_with(ScatterConfig {
            max_to_merge: 4,
            threads: 1,
            ..ScatterConfig::default()
        });
        let parallel = run_with(ScatterConfig {
            max_to_merge: 4,
            threads: 4,
            ..ScatterConfig::default()
        });

        assert_eq!(sequential.runs, parallel.runs);
        assert_eq!(sequential.stats.raw_runs, parallel.stats.raw_runs);
        assert_eq!(sequential.stats.n_bases, parallel.stats.n_bases);
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let reference = InMemoryReference::new().with_contig("chr1", "ACGT");
        let dictionary = SequenceDictionary::new(vec![Contig::new("chr1", 5)]);

        let result = ScatterEngine::new(ScatterConfig::default())
            .run(&dictionary, || Ok(reference.clone()));
        assert!(matches!(
            result,
            Err(ScatterError::Reference(ReferenceError::SequenceLength {
                expected: 5,
                actual: 4,
                ..
            }))
        ));
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dictionary = SequenceDictionary::new(vec![Contig::new("chr1", 4)]);
        let result = ScatterEngine::new(ScatterConfig::default()).run(
            &dictionary,
            || -> Result<InMemoryReference, ReferenceError> {
                Err(ReferenceError::Reader("boom".to_string()))
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parallel_open_failure_keeps_variant() {
        let dictionary = SequenceDictionary::new(vec![Contig::new("chr1", 4)]);
        let result = ScatterEngine::new(ScatterConfig {
            threads: 2,
            ..ScatterConfig::default()
        })
        .run(
            &dictionary,
            || -> Result<InMemoryReference, ReferenceError> {
                Err(ReferenceError::MissingIndex(PathBuf::from("ref.fa.fai")))
            },
        );
        assert!(matches!(
            result,
            Err(ScatterError::Reference(ReferenceError::MissingIndex(path)))
                if path == PathBuf::from("ref.fa.fai")
        ));
    }

    #[test]
    fn test_parallel_opens_one_reader_per_worker() {
        let reference = InMemoryReference::new()
            .with_contig("chr1", "ACGT")
            .with_contig("chr2", "NNAC")
            .with_contig("chr3", "ACNN")
            .with_contig("chr4", "GGGG")
            .with_contig("chr5", "NNNN")
            .with_contig("chr6", "ANAN");
        let dictionary = reference.dictionary();
        let opened = AtomicUsize::new(0);

        let result = ScatterEngine::new(ScatterConfig {
            threads: 3,
            ..ScatterConfig::default()
        })
        .run(&dictionary, || {
            opened.fetch_add(1, Ordering::SeqCst);
            Ok(reference.clone())
        })
        .unwrap();

        assert_eq!(opened.load(Ordering::SeqCst), 3);
        assert_eq!(result.stats.contigs, 6);
    }

    #[test]
    fn test_empty_contig_rejected() {
        let reference = InMemoryReference::new()
            .with_contig("chr1", "ACGT")
            .with_contig("chr0", "");
        let dictionary = reference.dictionary();

        let result = ScatterEngine::new(ScatterConfig {
            threads: 1,
            ..ScatterConfig::default()
        })
        .run(&dictionary, || Ok(reference.clone()));
        assert!(matches!(
            result,
            Err(ScatterError::Reference(ReferenceError::EmptyContig(name))) if name == "chr0"
        ));
    }
}
