use crate::error::{CueCommanderError, CueCommanderResult};
use encoding_rs::Encoding;
use log::debug;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Reads a whole file and decodes it with the codec named by `codec`
/// (any WHATWG encoding label). A byte order mark overrides the label.
pub async fn read_text(path: &Path, codec: &str) -> CueCommanderResult<String> {
    let encoding = Encoding::for_label(codec.trim().as_bytes())
        .ok_or_else(|| CueCommanderError::UnknownCodec(codec.to_string()))?;

    let data = fs::read(path).await?;
    let (text, used, had_errors) = encoding.decode(&data);

    if had_errors {
        return Err(CueCommanderError::UndecodableInput {
            path: path.to_path_buf(),
            codec: used.name().to_string(),
        });
    }

    debug!("Read {} bytes from {path:?} as {}", data.len(), used.name());

    Ok(text.into_owned())
}

/// Writes `text` to `output`, or to stdout when no path is given.
pub async fn write_output(output: Option<&Path>, text: &str) -> CueCommanderResult<()> {
    match output {
        Some(path) => {
            fs::write(path, text).await?;
            debug!("Wrote {path:?}");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

/// Names of the regular files living next to `path`.
pub async fn list_siblings(path: &Path) -> CueCommanderResult<Vec<String>> {
    let dir = parent_dir(path);
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}

pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
