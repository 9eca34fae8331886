//! # sok-core
//!
//! Core types shared by the SoK reproducibility crates.
//!
//! - The [`PLACEHOLDER`] used for missing or empty values
//! - The closed [`Rating`](enums::Rating) vocabulary and its display glyphs
//! - Record structs for defense families, deployment patterns, and failure modes

pub mod entities;
pub mod enums;

/// Stand-in for a missing or empty cell.
pub const PLACEHOLDER: &str = "—";

/// Whether `value` counts as missing: empty, or already the placeholder.
#[must_use]
pub fn is_missing(value: &str) -> bool {
    value.is_empty() || value == PLACEHOLDER
}

/// Normalize a raw cell: missing values become [`PLACEHOLDER`].
#[must_use]
pub fn normalize_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
