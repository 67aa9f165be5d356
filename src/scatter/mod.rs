//! Splitting a reference into runs of no-call and called bases.
//!
//! The pipeline runs strictly forward:
//!
//! 1. [`scanner`]: one pass per contig, emitting alternating `Nmer` / `ACGTmer` runs
//! 2. [`merger`]: absorbs `ACGT, N, ACGT` triples whose N run is short enough,
//!    cascading until no such triple remains
//! 3. [`selector`]: keeps the runs requested by the [`OutputMode`]
//!
//! [`engine::ScatterEngine`] drives the three stages over a whole reference.
//!
//! ## Example
//!
//! ```rust
//! use scatter_by_n::scatter::engine::{ScatterConfig, ScatterEngine};
//! use scatter_by_n::scatter::source::InMemoryReference;
//!
//! let reference = InMemoryReference::new().with_contig("chr1", "ACGTNACGTNNNNACGT");
//! let dictionary = reference.dictionary();
//!
//! let engine = ScatterEngine::new(ScatterConfig::default());
//! let result = engine.run(&dictionary, || Ok(reference.clone())).unwrap();
//!
//! // The single N is absorbed, the four Ns are kept
//! assert_eq!(result.runs.len(), 3);
//! ```
//!
//! [`OutputMode`]: crate::core::types::OutputMode

pub mod classify;
pub mod engine;
pub mod merger;
pub mod scanner;
pub mod selector;
pub mod source;
