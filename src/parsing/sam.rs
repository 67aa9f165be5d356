use thiserror::Error;
use tracing::warn;

use crate::core::contig::Contig;
use crate::core::dictionary::SequenceDictionary;
use crate::utils::validation::{check_contig_limit, normalize_md5};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid SAM header format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many contigs: {0} exceeds maximum allowed (100000)")]
    TooManyContigs(usize),
}

/// Parse the `@SQ` lines of SAM header text into a sequence dictionary
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if an `@SQ` line lacks a name or a
/// valid length, or no `@SQ` lines are found, or `ParseError::TooManyContigs`
/// if the limit is exceeded.
pub fn parse_header_text(text: &str) -> Result<SequenceDictionary, ParseError> {
    let mut contigs = Vec::new();

    for (line_number, line) in text.lines().enumerate() {
        if !line.starts_with("@SQ") {
            continue;
        }

        let mut name: Option<String> = None;
        let mut length: Option<u64> = None;
        let mut md5_raw: Option<String> = None;
        let mut assembly: Option<String> = None;
        let mut uri: Option<String> = None;
        let mut species: Option<String> = None;
        let mut other_tags = Vec::new();

        for field in line.split('\t').skip(1) {
            if let Some((tag, value)) = field.split_once(':') {
                match tag {
                    "SN" => name = Some(value.to_string()),
                    "LN" => {
                        length = Some(value.parse().map_err(|_| {
                            ParseError::InvalidFormat(format!(
                                "Invalid LN value '{value}' on line {}",
                                line_number + 1
                            ))
                        })?);
                    }
                    "M5" => md5_raw = Some(value.to_string()),
                    "AS" => assembly = Some(value.to_string()),
                    "UR" => uri = Some(value.to_string()),
                    "SP" => species = Some(value.to_string()),
                    _ => other_tags.push((tag.to_string(), value.to_string())),
                }
            }
        }

        let (Some(name), Some(length)) = (name, length) else {
            return Err(ParseError::InvalidFormat(format!(
                "@SQ line {} is missing SN or LN",
                line_number + 1
            )));
        };

        // Check contig limit for DOS protection
        if check_contig_limit(contigs.len()).is_some() {
            return Err(ParseError::TooManyContigs(contigs.len()));
        }

        let md5 = md5_raw.and_then(|raw| {
            let normalized = normalize_md5(&raw);
            if normalized.is_none() {
                warn!(contig = %name, md5 = %raw, "Invalid MD5 checksum format, ignoring");
            }
            normalized
        });

        let mut contig = Contig::new(name, length);
        contig.md5 = md5;
        contig.assembly = assembly;
        contig.uri = uri;
        contig.species = species;
        contig.other_tags = other_tags;
        contigs.push(contig);
    }

    if contigs.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No @SQ lines found in header".to_string(),
        ));
    }

    Ok(SequenceDictionary::new(contigs))
}
