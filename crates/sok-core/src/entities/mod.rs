//! Record types loaded from the systematization CSV files.
//!
//! All fields are owned strings, normalized at load time so that an empty cell
//! is [`PLACEHOLDER`](crate::PLACEHOLDER). Records are never mutated after load.

mod defense_family;
mod deployment_pattern;
mod failure_mode;

pub use defense_family::DefenseFamily;
pub use deployment_pattern::DeploymentPattern;
pub use failure_mode::FailureMode;
