//! Parser for FASTA index (.fai) files using noodles.
//!
//! FAI format provides name and length for each contig, but no MD5.
//! Format: `name\tlength\toffset\tline_bases\tline_width`

use std::io::BufReader;
use std::path::Path;

use noodles::fasta;

use crate::core::contig::Contig;
use crate::core::dictionary::SequenceDictionary;
use crate::parsing::sam::ParseError;
use crate::utils::validation::check_contig_limit;

/// Read a FASTA index (.fai) file using noodles
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Noodles`
/// if parsing fails.
pub fn read_fai_index(path: &Path) -> Result<fasta::fai::Index, ParseError> {
    let reader = std::fs::File::open(path).map(BufReader::new)?;

    fasta::fai::io::Reader::new(reader)
        .read_index()
        .map_err(|e| ParseError::Noodles(format!("Failed to parse FAI file: {e}")))
}

/// Parse a FASTA index (.fai) file into a dictionary of names and lengths
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no contigs are found, or
/// `ParseError::TooManyContigs` if the limit is exceeded.
pub fn parse_fai_file(path: &Path) -> Result<SequenceDictionary, ParseError> {
    let index = read_fai_index(path)?;
    Ok(index_to_dictionary(&index)?.with_source(path.display().to_string()))
}

/// Convert noodles FAI index to `SequenceDictionary`
fn index_to_dictionary(index: &fasta::fai::Index) -> Result<SequenceDictionary, ParseError> {
    let mut contigs = Vec::new();

    for record in index.as_ref() {
        // Check contig limit for DOS protection
        if check_contig_limit(contigs.len()).is_some() {
            return Err(ParseError::TooManyContigs(contigs.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        contigs.push(Contig::new(name, record.length()));
    }

    if contigs.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No contigs found in FAI file".to_string(),
        ));
    }

    Ok(SequenceDictionary::new(contigs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_fai_file() {
        let fai = "chr1\t248956422\t112\t70\t71\n\
                   chr2\t242193529\t253404903\t70\t71\n\
                   chrM\t16569\t3099922541\t70\t71\n";

        let mut temp = NamedTempFile::with_suffix(".fai").unwrap();
        temp.write_all(fai.as_bytes()).unwrap();
        temp.flush().unwrap();

        let dict = parse_fai_file(temp.path()).unwrap();
        assert_eq!(dict.len(), 3);

        assert_eq!(dict.contigs[0].name, "chr1");
        assert_eq!(dict.contigs[0].length, 248_956_422);
        assert!(dict.contigs[0].md5.is_none()); // FAI doesn't have MD5

        assert_eq!(dict.contigs[1].name, "chr2");
        assert_eq!(dict.contigs[1].length, 242_193_529);

        assert_eq!(dict.contigs[2].name, "chrM");
        assert_eq!(dict.contigs[2].length, 16569);
    }

    #[test]
    fn test_parse_fai_empty() {
        let temp = NamedTempFile::with_suffix(".fai").unwrap();
        assert!(parse_fai_file(temp.path()).is_err());
    }

    #[test]
    fn test_parse_fai_missing() {
        let result = parse_fai_file(Path::new("/nonexistent/ref.fa.fai"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
