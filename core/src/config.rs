use crate::alphabet::Alphabet;
use crate::timing::Timing;
use crate::types::{SpacingParams, TimingParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid morse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Spacing and timing settings in one flat, camelCase object:
///
/// ```json
/// { "interLetterSpace": 3, "interWordSpace": 7, "ditMs": 50, "ditsInADah": 3.0 }
/// ```
///
/// Every field is optional. Values outside the accepted range fall back to
/// the defaults when the alphabet and timing are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorseConfig {
    #[serde(flatten)]
    pub spacing: SpacingParams,
    #[serde(flatten)]
    pub timing: TimingParams,
}

impl MorseConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from_params(&self.spacing)
    }

    pub fn timing(&self) -> Timing {
        Timing::from_params(&self.timing)
    }
}
