//! Summary statistics backing observations O1-O5.
//!
//! [`SummaryStatistics::compute`] filters the record sets; rendering to the
//! fixed text report is a separate step ([`SummaryStatistics::render`]).

use std::fmt;

use sok_core::entities::{DefenseFamily, DeploymentPattern, FailureMode};
use sok_core::enums::Rating;
use tracing::warn;

const BANNER_WIDTH: usize = 60;

/// Outcome of the O5 check for a pattern with every property at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeResult {
    /// No deployment pattern satisfies all properties.
    Confirmed,
    /// Some patterns do; the paper's negative result needs review.
    Contradicted { matches: usize },
}

/// Whether a deployment pattern has full AFR, authorization, delegation, and
/// state isolation support.
#[must_use]
pub fn satisfies_all_properties(pattern: &DeploymentPattern) -> bool {
    Rating::Yes.matches(&pattern.afr_support)
        && Rating::Yes.matches(&pattern.auth_correctness)
        && (Rating::Yes.matches(&pattern.delegation_correctness)
            || Rating::ConditionalYes.matches(&pattern.delegation_correctness))
        && Rating::Yes.matches(&pattern.state_isolation)
}

/// Counts and itemized records for observations O1-O5 and the failure-mode tally.
///
/// Borrows from the loaded record sets; nothing is copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStatistics<'a> {
    /// O1: families that cannot satisfy AFR.
    pub no_afr: Vec<&'a DefenseFamily>,
    /// O2: families with conditional AFR.
    pub conditional_afr: Vec<&'a DefenseFamily>,
    /// O3: number of families without delegation correctness.
    pub no_delegation: usize,
    /// O4: deployment patterns with full AFR support.
    pub full_afr_patterns: Vec<&'a DeploymentPattern>,
    /// O5: whether any deployment pattern satisfies every property at once.
    pub negative_result: NegativeResult,
    /// Failure modes in input order, itemized and totalled in the report.
    pub failure_modes: &'a [FailureMode],
}

impl<'a> SummaryStatistics<'a> {
    #[must_use]
    pub fn compute(
        defense_families: &'a [DefenseFamily],
        deployment_patterns: &'a [DeploymentPattern],
        failure_modes: &'a [FailureMode],
    ) -> Self {
        let families_with = |rating: Rating| {
            defense_families
                .iter()
                .filter(|family| rating.matches(&family.afr_support))
                .collect::<Vec<_>>()
        };

        let no_delegation = defense_families
            .iter()
            .filter(|family| Rating::NotApplicable.matches(&family.delegation_correctness))
            .count();

        let full_afr_patterns = deployment_patterns
            .iter()
            .filter(|pattern| Rating::Yes.matches(&pattern.afr_support))
            .collect();

        let matches = deployment_patterns
            .iter()
            .filter(|pattern| satisfies_all_properties(pattern))
            .count();
        let negative_result = if matches == 0 {
            NegativeResult::Confirmed
        } else {
            warn!(matches, "deployment patterns contradict the negative result");
            NegativeResult::Contradicted { matches }
        };

        Self {
            no_afr: families_with(Rating::No),
            conditional_afr: families_with(Rating::Conditional),
            no_delegation,
            full_afr_patterns,
            negative_result,
            failure_modes,
        }
    }

    /// The plain-text report written to `summary_statistics.txt`.
    #[must_use]
    pub fn render(&self) -> String {
        let banner = "=".repeat(BANNER_WIDTH);
        let mut lines = vec![
            banner.clone(),
            "SUMMARY STATISTICS - SoK Authorization in Multi-Agent RAG".to_string(),
            banner.clone(),
            String::new(),
        ];

        lines.push(format!(
            "O1: Defense families that CANNOT satisfy AFR: {}",
            self.no_afr.len()
        ));
        for family in &self.no_afr {
            lines.push(format!(
                "    - {}: {}",
                family.defense_id, family.defense_family
            ));
        }
        lines.push(String::new());

        lines.push(format!(
            "O2: Defense families with CONDITIONAL AFR: {}",
            self.conditional_afr.len()
        ));
        for family in &self.conditional_afr {
            lines.push(format!(
                "    - {}: {} ({})",
                family.defense_id, family.defense_family, family.notes
            ));
        }
        lines.push(String::new());

        lines.push(format!(
            "O3: Defense families with NO delegation correctness: {}",
            self.no_delegation
        ));
        lines.push(String::new());

        lines.push(format!(
            "O4: Deployment patterns with FULL AFR support: {}",
            self.full_afr_patterns.len()
        ));
        for pattern in &self.full_afr_patterns {
            lines.push(format!("    - {}", pattern.representative_pattern));
        }
        lines.push(String::new());

        lines.push("O5: NEGATIVE RESULT VERIFICATION".to_string());
        lines.push(
            "    Checking for patterns with AFR + Delegation + State Isolation...".to_string(),
        );
        match self.negative_result {
            NegativeResult::Confirmed => {
                lines.push(
                    "    CONFIRMED: No pattern achieves all three properties simultaneously"
                        .to_string(),
                );
                lines.push(
                    "    (AFR PEP pattern achieves AFR+Auth but State Isolation remains Conditional)"
                        .to_string(),
                );
            }
            NegativeResult::Contradicted { matches } => {
                lines.push(format!(
                    "    Found {matches} pattern(s) - review paper claims"
                ));
            }
        }
        lines.push(String::new());

        lines.push("FAILURE MODES CLASSIFIED:".to_string());
        for mode in self.failure_modes {
            lines.push(format!("    {}: {}", mode.mode_id, mode.failure_mode));
        }
        lines.push(format!(
            "    Total failure modes: {}",
            self.failure_modes.len()
        ));
        lines.push(String::new());

        lines.push(banner.clone());
        lines.push("All statistics derived from systematization data.".to_string());
        lines.push("See paper Sections 6-8 for full analysis.".to_string());
        lines.push(banner);

        lines.join("\n")
    }
}

impl fmt::Display for SummaryStatistics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sok_core::PLACEHOLDER;

    use super::*;

    fn family(id: &str, afr: &str, delegation: &str) -> DefenseFamily {
        DefenseFamily {
            defense_id: id.to_string(),
            defense_family: format!("Family {id}"),
            afr_support: afr.to_string(),
            auth_correctness: "Yes".to_string(),
            delegation_correctness: delegation.to_string(),
            staleness_risk: "Low".to_string(),
            deployment_complexity: "High".to_string(),
            notes: format!("notes for {id}"),
        }
    }

    fn pattern(name: &str, afr: &str, auth: &str, delegation: &str, iso: &str) -> DeploymentPattern {
        DeploymentPattern {
            representative_pattern: name.to_string(),
            afr_support: afr.to_string(),
            auth_correctness: auth.to_string(),
            delegation_correctness: delegation.to_string(),
            state_isolation: iso.to_string(),
            reason: PLACEHOLDER.to_string(),
        }
    }

    fn mode(id: &str, name: &str) -> FailureMode {
        FailureMode {
            mode_id: id.to_string(),
            failure_mode: name.to_string(),
        }
    }

    #[test]
    fn single_no_afr_family_is_counted_and_listed() {
        let families = vec![family("D1", "No", "Yes"), family("D2", "Yes", "Yes")];
        let stats = SummaryStatistics::compute(&families, &[], &[]);
        assert_eq!(stats.no_afr.len(), 1);

        let text = stats.render();
        assert!(text.contains("O1: Defense families that CANNOT satisfy AFR: 1\n    - D1: Family D1\n"));
    }

    #[test]
    fn conditional_families_include_notes() {
        let families = vec![family("D4", "Conditional", "Yes")];
        let text = SummaryStatistics::compute(&families, &[], &[]).render();
        assert!(text.contains("O2: Defense families with CONDITIONAL AFR: 1"));
        assert!(text.contains("    - D4: Family D4 (notes for D4)"));
    }

    #[test]
    fn delegation_gap_counts_only_not_applicable() {
        let families = vec![
            family("D1", "Yes", "N/A"),
            family("D2", "Yes", "N/A"),
            family("D3", "Yes", "No"),
            family("D4", "Yes", PLACEHOLDER),
        ];
        let stats = SummaryStatistics::compute(&families, &[], &[]);
        assert_eq!(stats.no_delegation, 2);
        assert!(
            stats
                .render()
                .contains("O3: Defense families with NO delegation correctness: 2\n\nO4")
        );
    }

    #[test]
    fn full_afr_patterns_are_listed() {
        let patterns = vec![
            pattern("AFR PEP", "Yes", "Yes", "Yes", "Conditional"),
            pattern("Post-filter", "No", "Yes", "Yes", "No"),
        ];
        let text = SummaryStatistics::compute(&[], &patterns, &[]).render();
        assert!(text.contains("O4: Deployment patterns with FULL AFR support: 1\n    - AFR PEP\n"));
    }

    #[test]
    fn no_matching_pattern_confirms_negative_result() {
        let patterns = vec![pattern("AFR PEP", "Yes", "Yes", "Conditional/Yes", "Conditional")];
        let stats = SummaryStatistics::compute(&[], &patterns, &[]);
        assert_eq!(stats.negative_result, NegativeResult::Confirmed);

        let text = stats.render();
        assert!(text.contains(
            "    CONFIRMED: No pattern achieves all three properties simultaneously"
        ));
        assert!(!text.contains("review paper claims"));
    }

    #[test]
    fn matching_pattern_flags_review() {
        let patterns = vec![
            pattern("Isolated PEP", "Yes", "Yes", "Conditional/Yes", "Yes"),
            pattern("AFR PEP", "Yes", "Yes", "Yes", "Conditional"),
        ];
        let stats = SummaryStatistics::compute(&[], &patterns, &[]);
        assert_eq!(
            stats.negative_result,
            NegativeResult::Contradicted { matches: 1 }
        );

        let text = stats.render();
        assert!(text.contains("    Found 1 pattern(s) - review paper claims"));
        assert!(!text.contains("CONFIRMED"));
    }

    #[test]
    fn delegation_must_be_yes_or_conditional_yes() {
        assert!(satisfies_all_properties(&pattern("p", "Yes", "Yes", "Yes", "Yes")));
        assert!(satisfies_all_properties(&pattern(
            "p",
            "Yes",
            "Yes",
            "Conditional/Yes",
            "Yes"
        )));
        assert!(!satisfies_all_properties(&pattern(
            "p",
            "Yes",
            "Yes",
            "Yes/Conditional",
            "Yes"
        )));
        assert!(!satisfies_all_properties(&pattern("p", "Yes", "No", "Yes", "Yes")));
    }

    #[test]
    fn failure_modes_are_tallied_in_order() {
        let modes = vec![
            mode("F3", "Cache leakage"),
            mode("F1", "Stale grants"),
            mode("F2", "Confused deputy"),
        ];
        let text = SummaryStatistics::compute(&[], &[], &modes).render();
        assert!(text.contains(
            "FAILURE MODES CLASSIFIED:\n    F3: Cache leakage\n    F1: Stale grants\n    F2: Confused deputy\n    Total failure modes: 3\n"
        ));
    }

    #[test]
    fn empty_inputs_degrade_to_zero_counts() {
        let text = SummaryStatistics::compute(&[], &[], &[]).render();
        let expected = [
            "=".repeat(60).as_str(),
            "SUMMARY STATISTICS - SoK Authorization in Multi-Agent RAG",
            "=".repeat(60).as_str(),
            "",
            "O1: Defense families that CANNOT satisfy AFR: 0",
            "",
            "O2: Defense families with CONDITIONAL AFR: 0",
            "",
            "O3: Defense families with NO delegation correctness: 0",
            "",
            "O4: Deployment patterns with FULL AFR support: 0",
            "",
            "O5: NEGATIVE RESULT VERIFICATION",
            "    Checking for patterns with AFR + Delegation + State Isolation...",
            "    CONFIRMED: No pattern achieves all three properties simultaneously",
            "    (AFR PEP pattern achieves AFR+Auth but State Isolation remains Conditional)",
            "",
            "FAILURE MODES CLASSIFIED:",
            "    Total failure modes: 0",
            "",
            "=".repeat(60).as_str(),
            "All statistics derived from systematization data.",
            "See paper Sections 6-8 for full analysis.",
            "=".repeat(60).as_str(),
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn rendering_is_deterministic() {
        let families = vec![family("D1", "No", "N/A"), family("D2", "Conditional", "Yes")];
        let patterns = vec![pattern("AFR PEP", "Yes", "Yes", "Yes", "Conditional")];
        let modes = vec![mode("F1", "Stale grants")];

        let first = SummaryStatistics::compute(&families, &patterns, &modes).render();
        let second = SummaryStatistics::compute(&families, &patterns, &modes).render();
        assert_eq!(first, second);
        assert_eq!(
            SummaryStatistics::compute(&families, &patterns, &modes).to_string(),
            first
        );
    }
}
