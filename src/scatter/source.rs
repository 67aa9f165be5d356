use std::collections::HashMap;

use crate::core::contig::Contig;
use crate::core::dictionary::SequenceDictionary;
use crate::parsing::fasta::ReferenceError;

/// Random access to the bases of a reference, one whole contig at a time.
///
/// Implementations are not required to be shareable across threads; the
/// engine opens one per worker.
pub trait SequenceSource {
    /// Replace the contents of `buffer` with the bases of `contig`
    ///
    /// # Errors
    ///
    /// Returns an error if the contig cannot be read or its length differs
    /// from the dictionary.
    fn fetch(&mut self, contig: &Contig, buffer: &mut Vec<u8>) -> Result<(), ReferenceError>;
}

/// A reference held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryReference {
    sequences: HashMap<String, Vec<u8>>,
    order: Vec<Contig>,
}

impl InMemoryReference {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_contig(mut self, name: impl Into<String>, bases: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let bases = bases.into();
        self.order.push(Contig::new(name.clone(), bases.len() as u64));
        self.sequences.insert(name, bases);
        self
    }

    #[must_use]
    pub fn dictionary(&self) -> SequenceDictionary {
        SequenceDictionary::new(self.order.clone())
    }
}

impl SequenceSource for InMemoryReference {
    fn fetch(&mut self, contig: &Contig, buffer: &mut Vec<u8>) -> Result<(), ReferenceError> {
        let bases = self
            .sequences
            .get(&contig.name)
            .ok_or_else(|| ReferenceError::ContigNotIndexed(contig.name.clone()))?;

        buffer.clear();
        buffer.extend_from_slice(bases);
        Ok(())
    }
}
