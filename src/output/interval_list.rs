//! Writer for Picard-style interval lists.
//!
//! ```text
//! @HD	VN:1.6	SO:coordinate
//! @SQ	SN:chr1	LN:248956422
//! chr1	1	10000	+	Nmer
//! chr1	10001	207666	+	ACGTmer
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::dictionary::SequenceDictionary;
use crate::core::run::Run;

const HEADER_LINE: &str = "@HD\tVN:1.6\tSO:coordinate";

/// Write the dictionary header followed by one line per run
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_interval_list<W: Write>(
    writer: &mut W,
    dictionary: &SequenceDictionary,
    runs: &[Run],
) -> std::io::Result<()> {
    writeln!(writer, "{HEADER_LINE}")?;
    for contig in dictionary {
        writeln!(writer, "{}", contig.to_sq_line())?;
    }

    for run in runs {
        writeln!(
            writer,
            "{}\t{}\t{}\t+\t{}",
            run.contig, run.start, run.end, run.label
        )?;
    }

    writer.flush()
}

/// Create (or truncate) `path` and write the interval list into it
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_interval_list_file(
    path: &Path,
    dictionary: &SequenceDictionary,
    runs: &[Run],
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_interval_list(&mut writer, dictionary, runs)
}
