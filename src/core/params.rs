use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Input file the CLI looks for when no `--input` is given.
pub const DEFAULT_INPUT: &str = "v3x_logo.png";
/// Output file the CLI writes when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "v3x_logo_youtube_1024x576.png";

/// Paths for one crop run, suitable for presets and programmatic use.
/// Target dimensions and output format are fixed and not part of the params.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropParams {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Also write a `<output>.json` report next to the PNG
    #[serde(default)]
    pub report: bool,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            report: false,
        }
    }
}
