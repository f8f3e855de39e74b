use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error("Malformed cuesheet at line {line}: {reason}")]
    MalformedCuesheet { line: usize, reason: String },
}

impl CueError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        CueError::MalformedCuesheet {
            line,
            reason: reason.into(),
        }
    }
}

pub type CueResult<T> = Result<T, CueError>;
