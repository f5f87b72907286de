use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::selector::SelectorConfig;

/// File-to-file gain selection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub selector: SelectorConfig,
}

fn default_input() -> PathBuf {
    PathBuf::from("waveforms.wvf")
}
fn default_output() -> PathBuf {
    PathBuf::from("selected.wvf")
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            selector: SelectorConfig::default(),
        }
    }
}
