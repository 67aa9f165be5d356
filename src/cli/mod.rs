//! Command-line interface for scatter-by-n.
//!
//! ## Usage
//!
//! ```text
//! # Split a reference into N and ACGT intervals, tolerating single Ns
//! scatter-by-n -R hg38.fa -O hg38.interval_list
//!
//! # Only the called stretches, bridging gaps of up to 100 Ns
//! scatter-by-n -R hg38.fa -O acgt.interval_list --output-type ACGT -N 100
//!
//! # JSON summary for scripting
//! scatter-by-n -R hg38.fa -O hg38.interval_list --format json
//! ```
//!
//! The reference must have a `.fai` index and a `.dict` sequence dictionary.

use clap::Parser;

pub mod scatter;

#[derive(Parser)]
#[command(name = "scatter-by-n")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Write an interval list based on splitting a reference by Ns")]
#[command(
    long_about = "scatter-by-n identifies positions in a reference where the bases are no-calls and writes an interval list of the resulting N and ACGT runs.\n\nThis can be used to create an interval list for whole genome sequence for scatter-gather purposes, as an alternative to using fixed-length intervals. The number of contiguous no-calls that can be tolerated before creating a break is adjustable with --max-to-merge."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: scatter::ScatterArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
