use serde::{Deserialize, Serialize};

/// One row of `failure_modes.csv`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureMode {
    pub mode_id: String,
    pub failure_mode: String,
}

impl FailureMode {
    pub const COLUMNS: [&'static str; 2] = ["mode_id", "failure_mode"];
}
