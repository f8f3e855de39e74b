use clap::{Args, Parser};
use std::path::PathBuf;

/// Converts between cuesheets and tag lists (`start<TAB>end<TAB>json` lines,
/// e.g. Audacity labels).
#[derive(Parser, Debug, Clone)]
pub struct TaglistCommand {
    #[command(flatten)]
    pub direction: TaglistDirection,

    /// Codec of the input file
    #[arg(long, value_name = "CODEC", default_value = "utf-8")]
    pub codec: String,

    /// Input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file, defaults to stdout
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TaglistDirection {
    /// Converts a tag list into a cuesheet
    #[arg(long)]
    pub to_cue: bool,

    /// Converts a cuesheet into a tag list
    #[arg(long)]
    pub to_tag: bool,
}
