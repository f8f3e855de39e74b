use crate::format::{DEFAULT_HEADER, DEFAULT_TRACK, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Prints a cuesheet as text
#[derive(Parser, Debug, Clone)]
#[command(
    long_about = "Prints a cuesheet as text\n\nHeader placeholders: %performer% %songwriter% %title% %flags% %isrc% %file% %tracks%\nTrack placeholders: %performer% %songwriter% %title% %index% %offset% %number% %start% %end% and the c_ prefixed sheet fields"
)]
pub struct PrintCommand {
    /// Input cuesheet
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file, defaults to stdout
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Codec of the input file
    #[arg(long, value_name = "CODEC", default_value = "utf-8")]
    pub codec: String,

    /// Header template
    #[arg(long, value_name = "TEMPLATE", env = "CUECOMMANDER_HEADER", default_value = DEFAULT_HEADER)]
    pub header: String,

    /// Template for each track
    #[arg(long, value_name = "TEMPLATE", env = "CUECOMMANDER_TRACK", default_value = DEFAULT_TRACK)]
    pub track: String,

    #[arg(
        long,
        short = 'd',
        help = "skips tracks whose performer, songwriter and title repeat an earlier track",
        default_value = "false"
    )]
    pub dedupe: bool,
}

impl PrintCommand {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::new(self.header.replace("\\n", "\n"), self.track.replace("\\n", "\n"))
    }
}
