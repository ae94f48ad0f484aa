//! Shared types and enums used across numerus.
//! Includes `OutputFormat` for CLI/report rendering and `InvalidLinePolicy`
//! for deciding what a savings scan does with lines that fail to decode.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLinePolicy {
    /// Stop at the first line that does not decode
    #[default]
    Abort,
    /// Record the line in the report and keep going
    Skip,
}

impl std::fmt::Display for InvalidLinePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InvalidLinePolicy::Abort => "abort",
            InvalidLinePolicy::Skip => "skip",
        };
        write!(f, "{}", s)
    }
}
