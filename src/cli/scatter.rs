//! Split a reference by Ns and write the resulting interval list.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::types::OutputMode;
use crate::output::interval_list::write_interval_list_file;
use crate::parsing::fasta::IndexedFasta;
use crate::scatter::engine::{ScatterConfig, ScatterEngine, ScatterStats};
use crate::utils::validation::check_output_writable;

#[derive(Args)]
pub struct ScatterArgs {
    /// Reference FASTA. Requires an index (.fai) and a sequence dictionary (.dict)
    #[arg(short = 'R', long, required = true)]
    pub reference: PathBuf,

    /// Output file for the interval list
    #[arg(short = 'O', long, required = true)]
    pub output: PathBuf,

    /// Type of intervals to output
    #[arg(short = 't', long, value_enum, ignore_case = true, default_value = "BOTH")]
    pub output_type: OutputMode,

    /// Maximal number of contiguous N bases to tolerate, thereby continuing
    /// the current ACGT interval
    #[arg(short = 'N', long, default_value = "1", value_parser = clap::value_parser!(u64))]
    pub max_to_merge: u64,

    /// Threads used to scan contigs (0 = all available cores)
    #[arg(long, default_value = "0")]
    pub threads: usize,
}

/// Execute the split
///
/// # Errors
///
/// Returns an error if the output is not writable, the reference lacks an
/// index or dictionary, a contig cannot be read, or writing fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScatterArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    check_output_writable(&args.output)?;

    let reference = IndexedFasta::open(&args.reference)
        .with_context(|| format!("Failed to open reference {}", args.reference.display()))?;

    if verbose {
        eprintln!(
            "Reference: {} contigs, {} bases",
            reference.dictionary().len(),
            reference.dictionary().total_length(),
        );
    }

    let config = ScatterConfig {
        max_to_merge: args.max_to_merge,
        output_mode: args.output_type,
        threads: args.threads,
    };
    let result = ScatterEngine::new(config).run(reference.dictionary(), || reference.reader())?;

    info!("Writing Intervals.");
    write_interval_list_file(&args.output, reference.dictionary(), &result.runs)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        "Execution ending. Total time {:.1} seconds",
        result.stats.elapsed_secs
    );

    let summary = Summary {
        reference: &args.reference,
        output: &args.output,
        config: &config,
        stats: &result.stats,
    };
    match format {
        OutputFormat::Text => summary.print_text(),
        OutputFormat::Json => summary.print_json()?,
        OutputFormat::Tsv => summary.print_tsv(),
    }

    Ok(())
}

struct Summary<'a> {
    reference: &'a Path,
    output: &'a Path,
    config: &'a ScatterConfig,
    stats: &'a ScatterStats,
}

impl Summary<'_> {
    fn print_text(&self) {
        println!(
            "\nSplit {} into {}",
            self.reference.display(),
            self.output.display()
        );
        println!(
            "   Output type: {}, max N run merged: {}",
            self.config.output_mode, self.config.max_to_merge
        );
        println!(
            "   Contigs: {}, loci examined: {}",
            self.stats.contigs, self.stats.loci_examined
        );
        println!(
            "   Bases: {} called, {} no-call",
            self.stats.called_bases, self.stats.n_bases
        );
        println!(
            "   Intervals: {} raw → {} merged → {} written",
            self.stats.raw_runs, self.stats.merged_runs, self.stats.selected_runs
        );
        println!("   Elapsed: {:.2}s", self.stats.elapsed_secs);
    }

    fn print_json(&self) -> anyhow::Result<()> {
        let output = serde_json::json!({
            "reference": self.reference.display().to_string(),
            "output": self.output.display().to_string(),
            "output_type": self.config.output_mode,
            "max_to_merge": self.config.max_to_merge,
            "stats": self.stats,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn print_tsv(&self) {
        println!(
            "reference\toutput\toutput_type\tmax_to_merge\tcontigs\tloci\tcalled_bases\tn_bases\traw_intervals\tmerged_intervals\twritten_intervals\telapsed_secs"
        );
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.3}",
            self.reference.display(),
            self.output.display(),
            self.config.output_mode,
            self.config.max_to_merge,
            self.stats.contigs,
            self.stats.loci_examined,
            self.stats.called_bases,
            self.stats.n_bases,
            self.stats.raw_runs,
            self.stats.merged_runs,
            self.stats.selected_runs,
            self.stats.elapsed_secs,
        );
    }
}
