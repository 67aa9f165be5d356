//! Core data types for splitting a reference by no-call runs.
//!
//! - [`Contig`]: A single sequence/chromosome with name, length and optional SAM tags
//! - [`SequenceDictionary`]: The ordered contigs of a reference
//! - [`Run`]: A 1-based, inclusive span of one contig carrying a [`RunLabel`]
//! - [`OutputMode`]: Which run labels are written out
//!
//! ## Coordinates
//!
//! Runs use the interval-list convention: 1-based, closed on both ends. A
//! contig of length `L` is covered by runs spanning exactly `[1, L]`.
//!
//! [`Contig`]: contig::Contig
//! [`SequenceDictionary`]: dictionary::SequenceDictionary
//! [`Run`]: run::Run
//! [`RunLabel`]: types::RunLabel
//! [`OutputMode`]: types::OutputMode

pub mod contig;
pub mod dictionary;
pub mod run;
pub mod types;
