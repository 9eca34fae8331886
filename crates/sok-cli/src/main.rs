use anyhow::Context;
use clap::Parser;
use sok_config::SokConfig;

mod cli;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("sok-tables error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = SokConfig::load_with_dotenv().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    pipeline::run(&config.paths, &mut stdout.lock())?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SOK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
