use clap::Parser;
use std::path::PathBuf;

use icon_resizer::ResampleFilter;

#[derive(Parser, Debug)]
#[command(
    name = "icon-resizer",
    version,
    about = "Resize every PNG under a directory into a mirrored output tree"
)]
pub struct CliArgs {
    /// Input directory, searched recursively for *.png files
    #[arg(short, long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Output directory; created if missing
    #[arg(short, long, default_value = "../resized_icons")]
    pub output_dir: PathBuf,

    /// Target size. Options:
    /// - WxH: exact width and height (e.g., 180x180)
    /// - N: square of side N (e.g., 64)
    /// Defaults to 180x180 unless set by --config.
    #[arg(short, long)]
    pub size: Option<String>,

    /// Resampling filter (nearest, bilinear, catmull-rom, mitchell, lanczos3)
    #[arg(short, long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// JSON file with resize parameters; --size and --filter override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log skipped files and other debug detail
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
