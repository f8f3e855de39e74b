use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaglistError {
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Line {line} is not a start<TAB>end<TAB>data tag list entry: {text}")]
    MalformedIntervalLine { line: usize, text: String },

    #[error("Can't decode track data in line {line}: {text} ({source})")]
    CorruptIntervalLine {
        line: usize,
        text: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type TaglistResult<T> = Result<T, TaglistError>;
