use clap::Parser;
use std::path::PathBuf;

/// Splits the audio file of a cuesheet into tagged per-track files
#[derive(Parser, Debug, Clone)]
#[command(
    long_about = "Splits the audio file of a cuesheet into tagged per-track files\n\nNote: the splitter is called shnsplit style (-o FORMAT -f CUE AUDIO) from the cuesheet's directory, the tagger metaflac style (--remove-all-tags --set-tag=KEY=VALUE FILE)"
)]
pub struct SplitCommand {
    /// Input cuesheet, the referenced audio file must be next to it
    #[arg(value_name = "INPUT_CUE")]
    pub input_cue: PathBuf,

    /// Codec of the input file
    #[arg(long, value_name = "CODEC", default_value = "utf-8")]
    pub codec: String,

    /// Output format, also used as file extension
    #[arg(long, short = 'o', value_name = "FORMAT", default_value = "flac")]
    pub format: String,

    /// File name template, filled with the track's tags (e.g. %ARTIST%, %ALBUM%, %TRACKNUMBER%, %TITLE%)
    #[arg(
        long,
        short = 'n',
        value_name = "TEMPLATE",
        env = "CUECOMMANDER_NAME_FORMAT",
        default_value = "%TRACKNUMBER% - %TITLE%"
    )]
    pub name_format: String,

    /// Splitter program
    #[arg(long, value_name = "PROGRAM", env = "CUECOMMANDER_SPLITTER", default_value = "shnsplit")]
    pub splitter: String,

    /// Tagger program
    #[arg(long, value_name = "PROGRAM", env = "CUECOMMANDER_TAGGER", default_value = "metaflac")]
    pub tagger: String,
}
