//! # scatter-by-n
//!
//! Split a reference genome into an interval list of no-call (`Nmer`) and
//! called (`ACGTmer`) runs.
//!
//! Whole-genome pipelines are commonly scattered over fixed-length
//! intervals, which cut through called sequence at arbitrary points.
//! `scatter-by-n` instead breaks the reference where it has runs of `N`s,
//! producing intervals that are natural scatter-gather units.
//!
//! ## Features
//!
//! - **Single-pass scanning**: each contig is partitioned into alternating N / ACGT runs
//! - **Gap tolerance**: N runs up to a threshold are absorbed into the flanking ACGT runs,
//!   cascading across consecutive short gaps
//! - **Output selection**: write N runs, ACGT runs, or both
//! - **Parallel scanning**: contigs are scanned concurrently, results stay in dictionary order
//!
//! ## Example
//!
//! ```rust,no_run
//! use scatter_by_n::{IndexedFasta, ScatterConfig, ScatterEngine};
//! use scatter_by_n::output::interval_list::write_interval_list_file;
//! use std::path::Path;
//!
//! let reference = IndexedFasta::open(Path::new("hg38.fa")).unwrap();
//!
//! let engine = ScatterEngine::new(ScatterConfig::default());
//! let result = engine
//!     .run(reference.dictionary(), || reference.reader())
//!     .unwrap();
//!
//! write_interval_list_file(
//!     Path::new("hg38.interval_list"),
//!     reference.dictionary(),
//!     &result.runs,
//! )
//! .unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Contigs, dictionaries, runs and labels
//! - [`scatter`]: Scanner, merger, selector and the engine driving them
//! - [`parsing`]: Dictionary, index and indexed FASTA readers
//! - [`output`]: Interval-list writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod scatter;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::contig::Contig;
pub use core::dictionary::SequenceDictionary;
pub use core::run::Run;
pub use core::types::*;
pub use parsing::fasta::{IndexedFasta, ReferenceError};
pub use scatter::engine::{ScatterConfig, ScatterEngine, ScatterResult, ScatterStats};
