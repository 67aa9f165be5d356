use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::contig::Contig;

/// Ordered sequence dictionary of a reference.
///
/// The order of `contigs` defines the processing and output order of the
/// whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceDictionary {
    /// Source file path (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// All contigs, in dictionary order
    pub contigs: Vec<Contig>,

    /// Name to position in `contigs`
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl SequenceDictionary {
    #[must_use]
    pub fn new(contigs: Vec<Contig>) -> Self {
        let by_name = contigs
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();

        Self {
            source: None,
            contigs,
            by_name,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Contig> {
        self.by_name.get(name).map(|&i| &self.contigs[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    /// Sum of all contig lengths
    #[must_use]
    pub fn total_length(&self) -> u64 {
        self.contigs.iter().map(|c| c.length).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contig> {
        self.contigs.iter()
    }
}

impl<'a> IntoIterator for &'a SequenceDictionary {
    type Item = &'a Contig;
    type IntoIter = std::slice::Iter<'a, Contig>;

    fn into_iter(self) -> Self::IntoIter {
        self.contigs.iter()
    }
}
