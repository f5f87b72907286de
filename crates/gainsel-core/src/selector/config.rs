use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::GainChannel;
use crate::consts::DEFAULT_GAIN_THRESHOLD;
use crate::error::Result;
use crate::waveform::Sample;

use super::{GainSelector, ManualGainSelector, ThresholdGainSelector};

/// Serializable choice of gain selection strategy and its options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectorConfig {
    /// Read every pixel from a fixed channel.
    Manual { channel: GainChannel },
    /// Switch to low gain where the high-gain peak exceeds `threshold`.
    Threshold {
        #[serde(default = "default_threshold")]
        threshold: f64,
    },
}

fn default_threshold() -> f64 {
    DEFAULT_GAIN_THRESHOLD
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig::Threshold {
            threshold: DEFAULT_GAIN_THRESHOLD,
        }
    }
}

impl fmt::Display for SelectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorConfig::Manual { channel } => write!(f, "Manual ({})", channel),
            SelectorConfig::Threshold { threshold } => write!(f, "Threshold (> {})", threshold),
        }
    }
}

impl SelectorConfig {
    /// Validate the options and construct the selector.
    pub fn build<T: Sample>(&self) -> Result<Box<dyn GainSelector<T>>> {
        match self {
            SelectorConfig::Manual { channel } => Ok(Box::new(ManualGainSelector::new(*channel))),
            SelectorConfig::Threshold { threshold } => {
                Ok(Box::new(ThresholdGainSelector::new(*threshold)?))
            }
        }
    }
}
