use clap::Parser;
use std::path::PathBuf;

use ytcrop::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(
    name = "ytcrop",
    version,
    about = "Crop an image to YouTube channel art (1024x576 PNG)"
)]
pub struct CliArgs {
    /// Input image (any format the decoder recognises)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output PNG path; an existing file is replaced
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Also write a JSON crop report next to the output
    #[arg(long, default_value_t = false)]
    pub report: bool,
}
