//! Output directory sink for the generated artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ReportError;

pub const TABLE1_FILE: &str = "table1_defense_families.md";
pub const TABLE2_FILE: &str = "table2_deployment_patterns.md";
pub const STATISTICS_FILE: &str = "summary_statistics.txt";

/// Writes artifacts into a single output directory, overwriting earlier runs.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    /// Create the output directory (and parents) if absent.
    pub fn create(output_dir: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| ReportError::Write {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `contents` to `name` inside the output directory and return the full path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf, ReportError> {
        let path = self.output_dir.join(name);
        fs::write(&path, contents).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn creates_nested_output_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let target = tmp.path().join("a").join("outputs");
        let writer = ArtifactWriter::create(&target).expect("create");
        assert!(target.is_dir());
        assert_eq!(writer.output_dir(), target.as_path());
    }

    #[test]
    fn write_overwrites_previous_contents() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let writer = ArtifactWriter::create(tmp.path()).expect("create");
        writer.write(STATISTICS_FILE, "first run").expect("write");
        let path = writer.write(STATISTICS_FILE, "second").expect("write");
        assert_eq!(fs::read_to_string(path).expect("read"), "second");
    }

    #[test]
    fn output_dir_over_a_file_fails() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let blocker = tmp.path().join("outputs");
        fs::write(&blocker, "not a dir").expect("write blocker");
        let err = ArtifactWriter::create(&blocker).expect_err("should fail");
        assert!(matches!(err, ReportError::Write { .. }));
    }
}
