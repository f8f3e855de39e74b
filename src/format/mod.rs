use crate::cue::CueParser;
use crate::cue::dedupe::dedupe;
use crate::cue::models::{CueSheet, SheetField, Track};
use crate::error::CueCommanderResult;
use crate::taglist::interval::derive_intervals;
use crate::taglist::record::FlatRecord;
use crate::util::fs::{read_text, write_output};
use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use std::path::Path;

pub const DEFAULT_HEADER: &str = "%performer% - %title%\n%file%\n%tracks%";
pub const DEFAULT_TRACK: &str = "%performer% - %title%";

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"%([A-Za-z0-9_]+)%").unwrap();
}

/// Replaces every `%name%` in `template` with `lookup(name)`, or with
/// nothing when the lookup has no value.
pub fn substitute<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

/// Header and per-track templates used to print a cuesheet.
///
/// Header placeholders: the sheet fields, `file` and `tracks`. Track
/// placeholders: every flat record key plus `number`, `start` and `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    pub header: String,
    pub track: String,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            track: DEFAULT_TRACK.to_string(),
        }
    }
}

impl OutputFormat {
    pub fn new(header: impl Into<String>, track: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            track: track.into(),
        }
    }

    /// Renders `tracks`, which are a subset of `sheet.tracks`, under the
    /// sheet header.
    pub fn render(&self, sheet: &CueSheet, tracks: &[Track]) -> String {
        let intervals = derive_intervals(&sheet.tracks);

        let track_lines: Vec<String> = tracks
            .iter()
            .map(|track| {
                let record = FlatRecord::flatten(track, sheet);
                let interval = track
                    .number
                    .checked_sub(1)
                    .and_then(|i| intervals.get(i));

                substitute(&self.track, |key| match key {
                    "number" => Some(track.number.to_string()),
                    "start" => interval.and_then(|i| i.start).map(|o| o.to_string()),
                    "end" => interval.and_then(|i| i.end).map(|o| o.to_string()),
                    _ => record.get(key).map(str::to_string),
                })
            })
            .collect();
        let track_list = track_lines.join("\n");

        let mut out = substitute(&self.header, |key| match key {
            "tracks" => Some(track_list.clone()),
            "file" => sheet.file.as_ref().map(|f| f.filename.clone()),
            _ => SheetField::from_name(key)
                .and_then(|field| sheet.field(field))
                .map(str::to_string),
        });

        if !out.ends_with('\n') {
            out.push('\n');
        }

        out
    }
}

pub async fn print_cue_sheet(
    input: &Path,
    output: Option<&Path>,
    codec: &str,
    format: &OutputFormat,
    remove_duplicates: bool,
) -> CueCommanderResult<()> {
    debug!("Parsing CUE file: {input:?}");
    let text = read_text(input, codec).await?;
    let sheet = CueParser::new(&text).parse()?;

    let tracks = if remove_duplicates {
        let kept = dedupe(&sheet.tracks);
        debug!(
            "Removed {} duplicate tracks",
            sheet.tracks.len() - kept.len()
        );
        kept
    } else {
        sheet.tracks.clone()
    };

    write_output(output, &format.render(&sheet, &tracks)).await
}
