use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod output;
mod parsing;
mod scatter;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("scatter_by_n=debug,info")
    } else {
        EnvFilter::new("scatter_by_n=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::scatter::run(cli.args, cli.format, cli.verbose)?;

    Ok(())
}
