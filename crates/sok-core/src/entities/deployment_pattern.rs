use serde::{Deserialize, Serialize};

/// One row of `deployment_patterns.csv`: a representative system architecture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeploymentPattern {
    pub representative_pattern: String,
    pub afr_support: String,
    pub auth_correctness: String,
    pub delegation_correctness: String,
    pub state_isolation: String,
    pub reason: String,
}

impl DeploymentPattern {
    pub const COLUMNS: [&'static str; 6] = [
        "representative_pattern",
        "afr_support",
        "auth_correctness",
        "delegation_correctness",
        "state_isolation",
        "reason",
    ];
}
