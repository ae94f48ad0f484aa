use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::InvalidLinePolicy;

/// Savings-scan parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsParams {
    /// What to do with a line that fails to decode
    pub on_invalid: InvalidLinePolicy,
    /// If true, lines that are empty after trimming are counted as skipped
    pub skip_blank_lines: bool,
}

impl Default for SavingsParams {
    fn default() -> Self {
        Self {
            on_invalid: InvalidLinePolicy::Abort,
            skip_blank_lines: true,
        }
    }
}

impl SavingsParams {
    /// Load parameters from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let params: SavingsParams = serde_json::from_str(&text)?;
        debug!("Loaded savings params from {:?}: {:?}", path, params);
        Ok(params)
    }
}
