use clap::Parser;

/// Top-level CLI parser for the `sok-tables` binary.
///
/// Paths come from configuration (`sok.toml`, `SOK_*`), not flags.
#[derive(Debug, Parser)]
#[command(
    name = "sok-tables",
    version,
    about = "Regenerate Table 1, Table 2, and the summary statistics from the systematization data"
)]
pub struct Cli {
    /// Quiet mode (errors only in the log)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
