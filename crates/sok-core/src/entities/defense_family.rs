use serde::{Deserialize, Serialize};

/// One row of `defense_families.csv`: a class of authorization defense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefenseFamily {
    pub defense_id: String,
    pub defense_family: String,
    pub afr_support: String,
    pub auth_correctness: String,
    pub delegation_correctness: String,
    pub staleness_risk: String,
    pub deployment_complexity: String,
    pub notes: String,
}

impl DefenseFamily {
    /// Column names, in the order the CSV header lists them.
    pub const COLUMNS: [&'static str; 8] = [
        "defense_id",
        "defense_family",
        "afr_support",
        "auth_correctness",
        "delegation_correctness",
        "staleness_risk",
        "deployment_complexity",
        "notes",
    ];
}
