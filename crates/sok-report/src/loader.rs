//! CSV source for the systematization data.
//!
//! Columns are resolved by header name. Empty cells, and cells missing from a
//! short row, normalize to [`PLACEHOLDER`](sok_core::PLACEHOLDER). The literal
//! `N/A` is kept as data.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use sok_core::entities::{DefenseFamily, DeploymentPattern, FailureMode};
use sok_core::normalize_cell;
use tracing::debug;

use crate::ReportError;

pub const DEFENSE_FAMILIES_FILE: &str = "defense_families.csv";
pub const DEPLOYMENT_PATTERNS_FILE: &str = "deployment_patterns.csv";
pub const FAILURE_MODES_FILE: &str = "failure_modes.csv";

/// A record type that can be built from one CSV row.
pub trait FromRow: Sized {
    /// Columns that must be present in the header row.
    const REQUIRED_COLUMNS: &'static [&'static str];

    fn from_row(row: &Row<'_>) -> Result<Self, ReportError>;
}

/// One data row together with its header, for lookup by column name.
pub struct Row<'a> {
    source_name: &'a str,
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl Row<'_> {
    /// The normalized cell under `column`.
    pub fn get(&self, column: &str) -> Result<String, ReportError> {
        let index = column_index(self.headers, column).ok_or_else(|| {
            ReportError::MissingColumn {
                source_name: self.source_name.to_string(),
                column: column.to_string(),
            }
        })?;
        Ok(normalize_cell(self.record.get(index)))
    }
}

fn column_index(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|header| header == column)
}

/// Parse records of type `T` from CSV text. `source_name` is used in errors.
pub fn parse_records<T: FromRow>(
    source_name: &str,
    reader: impl std::io::Read,
) -> Result<Vec<T>, ReportError> {
    let csv_error = |source: csv::Error| ReportError::Csv {
        path: PathBuf::from(source_name),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    if let Some(column) = T::REQUIRED_COLUMNS
        .iter()
        .find(|column| column_index(&headers, column).is_none())
    {
        return Err(ReportError::MissingColumn {
            source_name: source_name.to_string(),
            column: (*column).to_string(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let row = Row {
            source_name,
            headers: &headers,
            record: &record,
        };
        records.push(T::from_row(&row)?);
    }
    Ok(records)
}

/// Read and parse records of type `T` from a CSV file.
pub fn load_records<T: FromRow>(path: &Path) -> Result<Vec<T>, ReportError> {
    let file = File::open(path).map_err(|source| ReportError::MissingSource {
        path: path.to_path_buf(),
        source,
    })?;
    let source_name = path.display().to_string();
    let records = parse_records(&source_name, file)?;
    debug!(path = %path.display(), rows = records.len(), "loaded data source");
    Ok(records)
}

impl FromRow for DefenseFamily {
    const REQUIRED_COLUMNS: &'static [&'static str] = &Self::COLUMNS;

    fn from_row(row: &Row<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            defense_id: row.get("defense_id")?,
            defense_family: row.get("defense_family")?,
            afr_support: row.get("afr_support")?,
            auth_correctness: row.get("auth_correctness")?,
            delegation_correctness: row.get("delegation_correctness")?,
            staleness_risk: row.get("staleness_risk")?,
            deployment_complexity: row.get("deployment_complexity")?,
            notes: row.get("notes")?,
        })
    }
}

impl FromRow for DeploymentPattern {
    const REQUIRED_COLUMNS: &'static [&'static str] = &Self::COLUMNS;

    fn from_row(row: &Row<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            representative_pattern: row.get("representative_pattern")?,
            afr_support: row.get("afr_support")?,
            auth_correctness: row.get("auth_correctness")?,
            delegation_correctness: row.get("delegation_correctness")?,
            state_isolation: row.get("state_isolation")?,
            reason: row.get("reason")?,
        })
    }
}

impl FromRow for FailureMode {
    const REQUIRED_COLUMNS: &'static [&'static str] = &Self::COLUMNS;

    fn from_row(row: &Row<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            mode_id: row.get("mode_id")?,
            failure_mode: row.get("failure_mode")?,
        })
    }
}

/// The three record sets, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub defense_families: Vec<DefenseFamily>,
    pub deployment_patterns: Vec<DeploymentPattern>,
    pub failure_modes: Vec<FailureMode>,
}

impl Dataset {
    /// Load all three files from `data_dir`. The first failure aborts the load.
    pub fn load(data_dir: &Path) -> Result<Self, ReportError> {
        Ok(Self {
            defense_families: load_records(&data_dir.join(DEFENSE_FAMILIES_FILE))?,
            deployment_patterns: load_records(&data_dir.join(DEPLOYMENT_PATTERNS_FILE))?,
            failure_modes: load_records(&data_dir.join(FAILURE_MODES_FILE))?,
        })
    }
}
