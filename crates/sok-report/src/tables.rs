//! Markdown rendering for Table 1 and Table 2.
//!
//! Categorical columns go through [`display_symbol`]; free-text columns are
//! copied as-is. Rows keep input order.

use sok_core::PLACEHOLDER;
use sok_core::entities::{DefenseFamily, DeploymentPattern};

use crate::symbols::display_symbol;

/// Reasons longer than this many characters are cut in Table 2.
pub const REASON_MAX_CHARS: usize = 80;

const TABLE1_HEADER: &str = "| Defense Family | AFR | Auth | Deleg | Stale | Deploy | Notes |";
const TABLE1_SEPARATOR: &str = "|---|---|---|---|---|---|---|";

const TABLE2_HEADER: &str = "| Representative Pattern | AFR | Auth | Deleg | State Iso. | Reason |";
const TABLE2_SEPARATOR: &str = "|---|---|---|---|---|---|";

fn markdown_row(cells: &[&str]) -> String {
    format!("| {} |", cells.join(" | "))
}

fn markdown_table(header: &str, separator: &str, rows: impl Iterator<Item = String>) -> String {
    let mut lines = vec![header.to_string(), separator.to_string()];
    lines.extend(rows);
    lines.join("\n")
}

/// Table 1: one row per defense family.
#[must_use]
pub fn render_defense_family_table(records: &[DefenseFamily]) -> String {
    let rows = records.iter().map(|record| {
        let family = format!("{} {}", record.defense_id, record.defense_family);
        markdown_row(&[
            family.as_str(),
            display_symbol(&record.afr_support),
            display_symbol(&record.auth_correctness),
            display_symbol(&record.delegation_correctness),
            display_symbol(&record.staleness_risk),
            display_symbol(&record.deployment_complexity),
            record.notes.as_str(),
        ])
    });
    markdown_table(TABLE1_HEADER, TABLE1_SEPARATOR, rows)
}

/// Shorten a Table 2 reason to [`REASON_MAX_CHARS`] characters plus `...`.
///
/// The placeholder is returned untouched. Any other reason always gets the
/// ellipsis, even when it is already short.
#[must_use]
pub fn truncate_reason(reason: &str) -> String {
    if reason == PLACEHOLDER {
        return PLACEHOLDER.to_string();
    }
    let mut out: String = reason.chars().take(REASON_MAX_CHARS).collect();
    out.push_str("...");
    out
}

/// Table 2: one row per deployment pattern.
#[must_use]
pub fn render_deployment_pattern_table(records: &[DeploymentPattern]) -> String {
    let rows = records.iter().map(|record| {
        let reason = truncate_reason(&record.reason);
        markdown_row(&[
            record.representative_pattern.as_str(),
            display_symbol(&record.afr_support),
            display_symbol(&record.auth_correctness),
            display_symbol(&record.delegation_correctness),
            display_symbol(&record.state_isolation),
            reason.as_str(),
        ])
    });
    markdown_table(TABLE2_HEADER, TABLE2_SEPARATOR, rows)
}

/// The full `table1_defense_families.md` document.
///
/// Preamble order (title, abbreviation glossary, legend) mirrors the published artifacts.
#[must_use]
pub fn defense_family_document(records: &[DefenseFamily]) -> String {
    format!(
        "# Table 1: Qualitative Guarantee Analysis\n\n\
         AFR = Authorization-First Retrieval, Auth = Authorization Correctness, \
         Deleg = Delegation Correctness, Stale = Staleness Risk, Deploy = Deployment Complexity\n\n\
         Legend: ✓ = Yes, ✗ = No, ± = Conditional\n\n\
         {}",
        render_defense_family_table(records)
    )
}

/// The full `table2_deployment_patterns.md` document.
///
/// Same preamble order as Table 1: title, state-isolation glossary, legend.
#[must_use]
pub fn deployment_pattern_document(records: &[DeploymentPattern]) -> String {
    format!(
        "# Table 2: Representative Deployment Patterns\n\n\
         State Iso. = Isolation of caches, rerankers, and adaptive components across users\n\n\
         Legend: ✓ = Can guarantee, ✗ = Cannot guarantee by construction, ± = Conditional\n\n\
         {}",
        render_deployment_pattern_table(records)
    )
}
