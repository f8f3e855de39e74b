use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{CueFile, CueSheet, FileType, Remark, SheetField, Track, TrackField};
use log::{debug, warn};

pub mod dedupe;
pub mod error;
pub mod models;
pub mod offset;
pub mod writer;

pub struct CueParser<'a> {
    text: &'a str,
}

impl<'a> CueParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn parse(&self) -> CueResult<CueSheet> {
        let mut cue_sheet = CueSheet::default();
        let mut current_track: Option<Track> = None;

        for (line_number, line) in self.text.lines().enumerate() {
            let line_number = line_number + 1;
            let line = line.trim_start_matches('\u{feff}').trim();

            if line.is_empty() {
                continue;
            }

            let (directive, rest) = match line.split_once(char::is_whitespace) {
                Some((directive, rest)) => (directive, rest.trim()),
                None => (line, ""),
            };

            match directive.to_ascii_uppercase().as_str() {
                "REM" => {
                    if current_track.is_some() {
                        debug!("Ignoring track level REM at line {line_number}");
                    } else {
                        cue_sheet.remarks.push(Remark(rest.to_string()));
                    }
                }
                "FILE" => {
                    let file = self.parse_file(line_number, rest)?;

                    if let Some(existing) = &cue_sheet.file {
                        warn!(
                            "Cuesheet references more than one file, keeping {} and ignoring {} (line {line_number})",
                            existing.filename, file.filename
                        );
                    } else {
                        cue_sheet.file = Some(file);
                    }
                }
                "TRACK" => {
                    if let Some(track) = current_track.take() {
                        cue_sheet.tracks.push(track);
                    }

                    let declared = rest.split_whitespace().next().ok_or_else(|| {
                        CueError::malformed(line_number, "TRACK without a track number")
                    })?;
                    declared.parse::<u32>().map_err(|_| {
                        CueError::malformed(line_number, format!("invalid track number {declared}"))
                    })?;

                    current_track = Some(Track::new(cue_sheet.tracks.len() + 1));
                }
                "INDEX" => {
                    let (index, offset) = self.parse_index(line_number, rest)?;

                    match &mut current_track {
                        Some(track) => Self::apply_index(track, index, offset),
                        None => debug!("Ignoring INDEX outside of a track at line {line_number}"),
                    }
                }
                "PERFORMER" | "SONGWRITER" | "TITLE" => {
                    let name = directive.to_ascii_lowercase();
                    let value = self.parse_value(line_number, rest)?;

                    match &mut current_track {
                        Some(track) => {
                            if let Some(field) = TrackField::from_name(&name) {
                                *track.field_mut(field) = Some(value);
                            }
                        }
                        None => {
                            if let Some(field) = SheetField::from_name(&name) {
                                *cue_sheet.field_mut(field) = Some(value);
                            }
                        }
                    }
                }
                "FLAGS" | "ISRC" => {
                    if current_track.is_some() {
                        debug!("Ignoring track level {directive} at line {line_number}");
                    } else if let Some(field) = SheetField::from_name(&directive.to_ascii_lowercase())
                    {
                        *cue_sheet.field_mut(field) = Some(self.parse_value(line_number, rest)?);
                    }
                }
                _ => debug!("Ignoring {directive} directive at line {line_number}"),
            }
        }

        if let Some(track) = current_track {
            cue_sheet.tracks.push(track);
        }

        Ok(cue_sheet)
    }

    fn apply_index(track: &mut Track, index: String, offset: String) {
        let is_primary = index.parse::<u32>() == Ok(1);
        let has_primary = track
            .index
            .as_deref()
            .is_some_and(|existing| existing.parse::<u32>() == Ok(1));

        if track.index.is_none() || (is_primary && !has_primary) {
            track.index = Some(index);
            track.offset = Some(offset);
        }
    }

    fn parse_file(&self, line_number: usize, rest: &str) -> CueResult<CueFile> {
        let (filename, remainder) = if rest.starts_with('"') {
            self.extract_quoted_string(line_number, rest)?
        } else {
            match rest.split_once(char::is_whitespace) {
                Some((name, remainder)) => (name.to_string(), remainder),
                None => (rest.to_string(), ""),
            }
        };

        if filename.is_empty() {
            return Err(CueError::malformed(line_number, "FILE without a file name"));
        }

        let type_str = remainder.split_whitespace().next().ok_or_else(|| {
            CueError::malformed(line_number, format!("FILE {filename} without a file type"))
        })?;
        let file_type = self.parse_file_type(line_number, type_str)?;

        Ok(CueFile {
            filename,
            file_type,
        })
    }

    fn parse_index(&self, line_number: usize, rest: &str) -> CueResult<(String, String)> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(CueError::malformed(
                line_number,
                "INDEX needs an index number and a time",
            ));
        }

        if parts[0].parse::<u32>().is_err() {
            return Err(CueError::malformed(
                line_number,
                format!("invalid index number {}", parts[0]),
            ));
        }

        Ok((parts[0].to_string(), parts[1].to_string()))
    }

    /// Reads the argument of a text directive, quoted or bare.
    fn parse_value(&self, line_number: usize, rest: &str) -> CueResult<String> {
        if rest.is_empty() {
            return Err(CueError::malformed(line_number, "directive without a value"));
        }

        if rest.starts_with('"') {
            let (value, _) = self.extract_quoted_string(line_number, rest)?;
            Ok(value)
        } else {
            Ok(rest.to_string())
        }
    }

    /// Reads a quoted string at the start of `text`, undoing `\"` and `\\`
    /// escapes, and returns it with whatever follows the closing quote.
    fn extract_quoted_string<'t>(
        &self,
        line_number: usize,
        text: &'t str,
    ) -> CueResult<(String, &'t str)> {
        let mut value = String::new();
        let mut chars = text.char_indices().skip(1).peekable();

        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.peek() {
                    Some(&(_, next @ ('"' | '\\'))) => {
                        value.push(next);
                        chars.next();
                    }
                    _ => value.push('\\'),
                },
                '"' => return Ok((value, &text[i + 1..])),
                _ => value.push(c),
            }
        }

        Err(CueError::malformed(line_number, "missing closing quote"))
    }

    fn parse_file_type(&self, line_number: usize, type_str: &str) -> CueResult<FileType> {
        match type_str.to_ascii_uppercase().as_str() {
            "BINARY" => Ok(FileType::Binary),
            "MOTOROLA" => Ok(FileType::Motorola),
            "AIFF" => Ok(FileType::Aiff),
            "WAVE" => Ok(FileType::Wave),
            "MP3" => Ok(FileType::Mp3),
            _ => Err(CueError::malformed(
                line_number,
                format!("unknown file type {type_str}"),
            )),
        }
    }
}
