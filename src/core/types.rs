use serde::{Deserialize, Serialize};

/// Label attached to every run produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunLabel {
    /// A run of no-call bases
    #[serde(rename = "Nmer")]
    Nmer,
    /// A run of called bases
    #[serde(rename = "ACGTmer")]
    AcgtMer,
}

impl RunLabel {
    /// Name written in the interval-list name column
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nmer => "Nmer",
            Self::AcgtMer => "ACGTmer",
        }
    }

    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Nmer => Self::AcgtMer,
            Self::AcgtMer => Self::Nmer,
        }
    }
}

impl std::fmt::Display for RunLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which runs end up in the output interval list
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum OutputMode {
    /// Only runs of no-call bases
    #[value(name = "N")]
    #[serde(rename = "N")]
    N,
    /// Only runs of called bases
    #[value(name = "ACGT")]
    #[serde(rename = "ACGT")]
    Acgt,
    /// Every run
    #[default]
    #[value(name = "BOTH")]
    #[serde(rename = "BOTH")]
    Both,
}

impl OutputMode {
    #[must_use]
    pub fn accepts(self, label: RunLabel) -> bool {
        match self {
            Self::N => label == RunLabel::Nmer,
            Self::Acgt => label == RunLabel::AcgtMer,
            Self::Both => true,
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::N => write!(f, "N"),
            Self::Acgt => write!(f, "ACGT"),
            Self::Both => write!(f, "BOTH"),
        }
    }
}
