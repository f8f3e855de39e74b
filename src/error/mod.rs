use crate::cue::error::CueError;
use crate::split::error::SplitError;
use crate::taglist::error::TaglistError;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueCommanderError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    TaglistError(#[from] TaglistError),

    #[error(transparent)]
    SplitError(#[from] SplitError),

    #[error("Unknown codec: {0}")]
    UnknownCodec(String),

    #[error("Could not decode {path:?} as {codec}")]
    UndecodableInput { path: PathBuf, codec: String },
}

pub type CueCommanderResult<T> = result::Result<T, CueCommanderError>;
