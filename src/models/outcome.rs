use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// The single pass/fail result that drives everything on the dashboard.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Upper-case mode name used in console summaries, e.g. `SUCCESS`.
    pub fn mode(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }
}
