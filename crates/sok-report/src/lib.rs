//! # sok-report
//!
//! Turns the systematization CSV data into the paper's report artifacts.
//!
//! - [`symbols`]: categorical value -> display glyph
//! - [`tables`]: Table 1 (defense families) and Table 2 (deployment patterns) as markdown
//! - [`statistics`]: observations O1-O5 and the failure-mode tally
//! - [`loader`]: CSV source with placeholder normalization
//! - [`artifacts`]: output directory sink
//!
//! The first three are pure; only `loader` and `artifacts` touch the filesystem.

pub mod artifacts;
pub mod error;
pub mod loader;
pub mod statistics;
pub mod symbols;
pub mod tables;

pub use artifacts::ArtifactWriter;
pub use error::ReportError;
pub use loader::Dataset;
pub use statistics::{NegativeResult, SummaryStatistics};
pub use symbols::display_symbol;
