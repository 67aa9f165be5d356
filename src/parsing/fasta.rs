//! Indexed FASTA access using noodles.
//!
//! A reference `ref.fa` must be accompanied by
//! - a FASTA index `ref.fa.fai`
//! - a sequence dictionary `ref.dict` (or `ref.fa.dict`)
//!
//! The dictionary defines contig order. Every dictionary contig must be
//! present in the index with the same length.
//!
//! Compressed references are not supported for random access.

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use noodles::core::Region;
use noodles::fasta;
use thiserror::Error;
use tracing::debug;

use crate::core::contig::Contig;
use crate::core::dictionary::SequenceDictionary;
use crate::parsing::dict::parse_dict_file;
use crate::parsing::fai::{parse_fai_file, read_fai_index};
use crate::parsing::sam::ParseError;
use crate::scatter::source::SequenceSource;

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Reference file not found or not readable: {}", .0.display())]
    MissingReference(PathBuf),

    #[error("Reference file must be indexed, but no index file was found: {}", .0.display())]
    MissingIndex(PathBuf),

    #[error("Reference file must include a dictionary, but no dictionary file was found (tried {})", format_paths(.0))]
    MissingDictionary(Vec<PathBuf>),

    #[error("Compressed references are not supported: {}", .0.display())]
    UnsupportedCompression(PathBuf),

    #[error("Contig '{0}' from the dictionary is not in the reference index")]
    ContigNotIndexed(String),

    #[error("Contig '{contig}' has length {dictionary} in the dictionary but {index} in the index")]
    LengthMismatch {
        contig: String,
        dictionary: u64,
        index: u64,
    },

    #[error("Contig '{0}' has length zero")]
    EmptyContig(String),

    #[error("Read {actual} bases for contig '{contig}', expected {expected}")]
    SequenceLength {
        contig: String,
        expected: u64,
        actual: u64,
    },

    #[error("Failed to read contig '{contig}': {message}")]
    Fetch { contig: String, message: String },

    #[error("Failed to open reference reader: {0}")]
    Reader(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Append `suffix` to the full file name, e.g. `ref.fa` -> `ref.fa.fai`
fn with_appended_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}

/// Expected location of the FASTA index
#[must_use]
pub fn index_path(fasta: &Path) -> PathBuf {
    with_appended_suffix(fasta, ".fai")
}

/// Candidate dictionary locations, in lookup order
#[must_use]
pub fn dictionary_candidates(fasta: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if fasta.extension().and_then(OsStr::to_str).is_some() {
        candidates.push(fasta.with_extension("dict"));
    }
    candidates.push(with_appended_suffix(fasta, ".dict"));
    candidates
}

/// A validated, indexed FASTA reference with its sequence dictionary.
///
/// Holds paths and the dictionary only; readers are opened on demand so
/// each worker can own one.
#[derive(Debug, Clone)]
pub struct IndexedFasta {
    path: PathBuf,
    index_path: PathBuf,
    dictionary_path: PathBuf,
    dictionary: SequenceDictionary,
}

impl IndexedFasta {
    /// Locate and validate the index and dictionary of `path`
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing prerequisite if the reference,
    /// its index or its dictionary is absent, or if the dictionary and index
    /// disagree.
    pub fn open(path: &Path) -> Result<Self, ReferenceError> {
        if !path.is_file() {
            return Err(ReferenceError::MissingReference(path.to_path_buf()));
        }
        if is_gzipped(path) {
            return Err(ReferenceError::UnsupportedCompression(path.to_path_buf()));
        }

        let index_path = index_path(path);
        if !index_path.is_file() {
            return Err(ReferenceError::MissingIndex(index_path));
        }

        let candidates = dictionary_candidates(path);
        let Some(dictionary_path) = candidates.iter().find(|p| p.is_file()).cloned() else {
            return Err(ReferenceError::MissingDictionary(candidates));
        };

        let dictionary = parse_dict_file(&dictionary_path)?;
        let index = parse_fai_file(&index_path)?;

        for contig in &dictionary {
            let indexed = index
                .get(&contig.name)
                .ok_or_else(|| ReferenceError::ContigNotIndexed(contig.name.clone()))?;
            if indexed.length != contig.length {
                return Err(ReferenceError::LengthMismatch {
                    contig: contig.name.clone(),
                    dictionary: contig.length,
                    index: indexed.length,
                });
            }
            if contig.length == 0 {
                return Err(ReferenceError::EmptyContig(contig.name.clone()));
            }
        }

        debug!(
            reference = %path.display(),
            index = %index_path.display(),
            dictionary = %dictionary_path.display(),
            contigs = dictionary.len(),
            "Opened indexed reference"
        );

        Ok(Self {
            path: path.to_path_buf(),
            index_path,
            dictionary_path,
            dictionary,
        })
    }

    #[must_use]
    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary_path
    }

    #[must_use]
    pub fn dictionary(&self) -> &SequenceDictionary {
        &self.dictionary
    }

    /// Open an independent reader over this reference
    ///
    /// # Errors
    ///
    /// Returns an error if the FASTA or its index cannot be opened.
    pub fn reader(&self) -> Result<FastaSequenceReader, ReferenceError> {
        let index = read_fai_index(&self.index_path)?;
        let file = File::open(&self.path).map(BufReader::new)?;

        Ok(FastaSequenceReader {
            inner: fasta::io::IndexedReader::new(file, index),
        })
    }
}

/// Whole-contig reader over an indexed FASTA file
pub struct FastaSequenceReader {
    inner: fasta::io::IndexedReader<BufReader<File>>,
}

impl SequenceSource for FastaSequenceReader {
    fn fetch(&mut self, contig: &Contig, buffer: &mut Vec<u8>) -> Result<(), ReferenceError> {
        let region = Region::new(contig.name.as_str(), ..);
        let record = self
            .inner
            .query(&region)
            .map_err(|e| ReferenceError::Fetch {
                contig: contig.name.clone(),
                message: e.to_string(),
            })?;

        buffer.clear();
        buffer.extend_from_slice(record.sequence().as_ref());
        Ok(())
    }
}
