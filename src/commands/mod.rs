use crate::commands::print::PrintCommand;
use crate::commands::split::SplitCommand;
use crate::commands::taglist::TaglistCommand;
use clap::{Parser, Subcommand};

pub mod print;
pub mod split;
pub mod taglist;

/// Cuesheet tools: tag list conversion, printing and splitting.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Taglist(TaglistCommand),
    Print(PrintCommand),
    Split(SplitCommand),
}
