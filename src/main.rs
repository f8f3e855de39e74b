use crate::commands::{Cli, Commands};
use crate::format::print_cue_sheet;
use crate::split::split_cue_sheet;
use crate::taglist::{convert_cue_to_taglist, convert_taglist_to_cue};
use anyhow::Result;
use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

mod commands;
mod cue;
mod error;
mod format;
mod split;
mod taglist;
mod util;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Taglist(cmd) => {
            let output = cmd.output.as_deref();
            if cmd.direction.to_cue {
                convert_taglist_to_cue(&cmd.input, output, &cmd.codec).await?
            } else {
                convert_cue_to_taglist(&cmd.input, output, &cmd.codec).await?
            }
        }
        Commands::Print(cmd) => {
            print_cue_sheet(
                &cmd.input,
                cmd.output.as_deref(),
                &cmd.codec,
                &cmd.output_format(),
                cmd.dedupe,
            )
            .await?
        }
        Commands::Split(cmd) => split_cue_sheet(pb.clone(), cmd).await?,
    }

    Ok(())
}
