//! Runtime configuration for the `enhance_demo` binary.
//!
//! A config file is a JSON document naming the input image, an ordered
//! pipeline of operations (the [`Operation`](crate::ops::Operation) tagged
//! schema), and where to put the results.

use crate::ops::Operation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to save the final enhanced image.
    pub image_out: Option<PathBuf>,
    /// Where to dump the enhanced image's 256-bin histogram as JSON.
    pub histogram_json: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Operations applied in order; the first reads the loaded original,
    /// each subsequent one chains on the previous result.
    pub pipeline: Vec<Operation>,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
