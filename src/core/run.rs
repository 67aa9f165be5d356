use serde::{Deserialize, Serialize};

use crate::core::types::RunLabel;

/// A maximal, label-homogeneous span of one contig.
///
/// Coordinates are 1-based and inclusive on both ends, so `start <= end`
/// always holds and the shortest run has length 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub contig: String,
    pub start: u64,
    pub end: u64,
    pub label: RunLabel,
}

impl Run {
    pub fn new(contig: impl Into<String>, start: u64, end: u64, label: RunLabel) -> Self {
        debug_assert!(start >= 1 && start <= end, "invalid run [{start}, {end}]");
        Self {
            contig: contig.into(),
            start,
            end,
            label,
        }
    }

    /// Number of bases covered by this run
    #[must_use]
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// True when `next` starts on the base right after this run, on the same contig
    #[must_use]
    pub fn abuts(&self, next: &Run) -> bool {
        self.contig == next.contig && self.end + 1 == next.start
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{} {}", self.contig, self.start, self.end, self.label)
    }
}
