use serde::{Deserialize, Serialize};

/// A single contig/sequence in a reference genome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// Sequence name (SN tag in SAM)
    pub name: String,

    /// Sequence length (LN tag in SAM)
    pub length: u64,

    /// MD5 checksum of the sequence (M5 tag in SAM)
    /// Lowercase hex, 32 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,

    /// Assembly identifier (AS tag in SAM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,

    /// URI where sequence can be retrieved (UR tag in SAM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Species (SP tag in SAM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,

    /// Any other `@SQ` tags (e.g. AN, TP, DS), in header order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_tags: Vec<(String, String)>,
}

impl Contig {
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            length,
            md5: None,
            assembly: None,
            uri: None,
            species: None,
            other_tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_md5(mut self, md5: impl Into<String>) -> Self {
        self.md5 = Some(md5.into());
        self
    }

    /// Render this contig as a SAM `@SQ` header line (without trailing newline)
    #[must_use]
    pub fn to_sq_line(&self) -> String {
        let mut line = format!("@SQ\tSN:{}\tLN:{}", self.name, self.length);
        let optional = [
            ("M5", &self.md5),
            ("AS", &self.assembly),
            ("UR", &self.uri),
            ("SP", &self.species),
        ];
        let tags = optional
            .into_iter()
            .filter_map(|(tag, value)| value.as_deref().map(|v| (tag, v)))
            .chain(self.other_tags.iter().map(|(t, v)| (t.as_str(), v.as_str())));
        for (tag, value) in tags {
            line.push('\t');
            line.push_str(tag);
            line.push(':');
            line.push_str(value);
        }
        line
    }
}
