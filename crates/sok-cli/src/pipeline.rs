//! The generation run: load, render both tables, compute statistics, write.
//!
//! Progress lines and the final statistics go to `console`; each artifact is
//! written before the next stage starts.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use sok_config::PathsConfig;
use sok_report::artifacts::{STATISTICS_FILE, TABLE1_FILE, TABLE2_FILE};
use sok_report::tables::{defense_family_document, deployment_pattern_document};
use sok_report::{ArtifactWriter, Dataset, SummaryStatistics};
use tracing::info;

/// Run every stage and return the output directory.
pub fn run(paths: &PathsConfig, console: &mut impl Write) -> anyhow::Result<PathBuf> {
    let writer = ArtifactWriter::create(&paths.output_dir)
        .context("failed to prepare output directory")?;

    writeln!(console, "Loading systematization data...")?;
    let dataset = Dataset::load(&paths.data_dir).context("failed to load systematization data")?;
    info!(
        defense_families = dataset.defense_families.len(),
        deployment_patterns = dataset.deployment_patterns.len(),
        failure_modes = dataset.failure_modes.len(),
        "systematization data loaded"
    );

    writeln!(console, "Generating Table 1: Defense Family Guarantees...")?;
    let path = writer.write(TABLE1_FILE, &defense_family_document(&dataset.defense_families))?;
    writeln!(console, "  -> Saved to {}", path.display())?;

    writeln!(console, "Generating Table 2: Deployment Patterns...")?;
    let path = writer.write(
        TABLE2_FILE,
        &deployment_pattern_document(&dataset.deployment_patterns),
    )?;
    writeln!(console, "  -> Saved to {}", path.display())?;

    writeln!(console, "Computing summary statistics...")?;
    let statistics = SummaryStatistics::compute(
        &dataset.defense_families,
        &dataset.deployment_patterns,
        &dataset.failure_modes,
    )
    .render();
    let path = writer.write(STATISTICS_FILE, &statistics)?;
    writeln!(console, "  -> Saved to {}", path.display())?;

    writeln!(console, "\n{statistics}")?;
    writeln!(
        console,
        "\nDone! All outputs saved to: {}",
        writer.output_dir().display()
    )?;
    info!(output_dir = %writer.output_dir().display(), "all artifacts written");

    Ok(writer.output_dir().to_path_buf())
}
