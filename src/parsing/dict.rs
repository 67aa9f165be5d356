use std::path::Path;

use crate::core::dictionary::SequenceDictionary;
use crate::parsing::sam::ParseError;

/// Parse a Picard sequence dictionary (.dict) file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_dict_file(path: &Path) -> Result<SequenceDictionary, ParseError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_dict_text(&content)?.with_source(path.display().to_string()))
}

/// Parse dictionary from text
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text is not valid dictionary format,
/// or `ParseError::TooManyContigs` if the number of contigs exceeds the maximum.
pub fn parse_dict_text(text: &str) -> Result<SequenceDictionary, ParseError> {
    // .dict files are essentially SAM headers with only @HD and @SQ lines
    crate::parsing::sam::parse_header_text(text)
}
