use crate::cue::models::{CueFile, CueSheet, FileType, Track};
use crate::cue::writer::write_cue_sheet;
use crate::taglist::interval::TaggedInterval;
use log::{debug, warn};
use std::path::Path;

const DEFAULT_PERFORMER: &str = "Unknown";
const UNKNOWN_FIELD: &str = "UNKNOWN";
const DEFAULT_INDEX: &str = "01";
const DEFAULT_OFFSET: &str = "0:00:00";

/// Outcome of looking for the audio file a tag list belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioFileChoice {
    /// Nothing matched, `<stem>.wav` is assumed.
    Default(String),
    Found(String),
    Ambiguous {
        guess: String,
        candidates: Vec<String>,
    },
}

impl AudioFileChoice {
    pub fn filename(&self) -> &str {
        match self {
            AudioFileChoice::Default(name) | AudioFileChoice::Found(name) => name,
            AudioFileChoice::Ambiguous { guess, .. } => guess,
        }
    }
}

/// Picks the audio file among `siblings` (file names in the input's
/// directory) whose name starts with the input's stem.
pub fn resolve_audio_file(infile: &Path, siblings: &[String]) -> AudioFileChoice {
    let file_name = infile
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = infile
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let default = format!("{stem}.wav");

    let mut candidates: Vec<String> = siblings
        .iter()
        .filter(|name| {
            name.starts_with(&stem)
                && **name != file_name
                && !name.to_ascii_lowercase().ends_with(".cue")
        })
        .cloned()
        .collect();

    match candidates.len() {
        0 => AudioFileChoice::Default(default),
        1 => AudioFileChoice::Found(candidates.remove(0)),
        _ => {
            candidates.sort();
            AudioFileChoice::Ambiguous {
                guess: default,
                candidates,
            }
        }
    }
}

/// Builds a minimal cuesheet from tag list entries. Entry position is the
/// track number.
pub fn reconstruct(infile: &Path, siblings: &[String], entries: &[TaggedInterval]) -> String {
    let audio_file = resolve_audio_file(infile, siblings);
    match &audio_file {
        AudioFileChoice::Default(name) => debug!("No audio file found next to {infile:?}, using {name}"),
        AudioFileChoice::Found(name) => debug!("Using audio file {name}"),
        AudioFileChoice::Ambiguous { guess, candidates } => warn!(
            "Could not decide which source file to use ({}), guessing {guess}",
            candidates.join(", ")
        ),
    }

    let performer = entries
        .iter()
        .find_map(|entry| {
            entry
                .record
                .c_performer
                .clone()
                .filter(|performer| !performer.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_PERFORMER.to_string());

    let tracks = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let record = &entry.record;
            debug!("Track {} spans {}..{}", i + 1, entry.start, entry.end);
            Track {
                number: i + 1,
                title: Some(record.title.clone().unwrap_or_else(|| UNKNOWN_FIELD.to_string())),
                performer: Some(
                    record
                        .performer
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
                ),
                songwriter: None,
                index: Some(record.index.clone().unwrap_or_else(|| DEFAULT_INDEX.to_string())),
                offset: Some(record.offset.clone().unwrap_or_else(|| DEFAULT_OFFSET.to_string())),
            }
        })
        .collect();

    let sheet = CueSheet {
        performer: Some(performer),
        file: Some(CueFile {
            filename: audio_file.filename().to_string(),
            file_type: FileType::Wave,
        }),
        tracks,
        ..Default::default()
    };

    write_cue_sheet(&sheet)
}
