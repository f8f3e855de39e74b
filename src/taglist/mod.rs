use crate::cue::CueParser;
use crate::cue::models::CueSheet;
use crate::error::CueCommanderResult;
use crate::taglist::error::TaglistResult;
use crate::taglist::interval::{derive_intervals, read_tagged_intervals, write_tagged_intervals};
use crate::taglist::reconstruct::reconstruct;
use crate::taglist::record::FlatRecord;
use crate::util::fs::{list_siblings, read_text, write_output};
use log::{debug, info};
use std::path::Path;

pub mod error;
pub mod interval;
pub mod reconstruct;
pub mod record;

/// Renders every track of `sheet` as a tag list line.
pub fn cue_to_taglist(sheet: &CueSheet) -> TaglistResult<String> {
    let entries: Vec<_> = derive_intervals(&sheet.tracks)
        .into_iter()
        .zip(&sheet.tracks)
        .map(|(interval, track)| (interval, FlatRecord::flatten(track, sheet)))
        .collect();

    write_tagged_intervals(&entries)
}

/// Rebuilds a cuesheet from tag list text. `siblings` are the file names
/// next to `infile`, used to find the referenced audio file.
pub fn taglist_to_cue(infile: &Path, siblings: &[String], text: &str) -> TaglistResult<String> {
    let entries = read_tagged_intervals(text)?;
    Ok(reconstruct(infile, siblings, &entries))
}

pub async fn convert_cue_to_taglist(
    input: &Path,
    output: Option<&Path>,
    codec: &str,
) -> CueCommanderResult<()> {
    debug!("Parsing CUE file: {input:?}");
    let text = read_text(input, codec).await?;
    let sheet = CueParser::new(&text).parse()?;

    debug!("Found {} tracks", sheet.tracks.len());
    let taglist = cue_to_taglist(&sheet)?;

    write_output(output, &taglist).await?;

    if let Some(output) = output {
        info!("Wrote tag list with {} tracks to {output:?}", sheet.tracks.len());
    }

    Ok(())
}

pub async fn convert_taglist_to_cue(
    input: &Path,
    output: Option<&Path>,
    codec: &str,
) -> CueCommanderResult<()> {
    debug!("Parsing tag list: {input:?}");
    let text = read_text(input, codec).await?;
    let siblings = list_siblings(input).await?;

    let cue = taglist_to_cue(input, &siblings, &text)?;

    write_output(output, &cue).await?;

    if let Some(output) = output {
        info!("Wrote cuesheet to {output:?}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CueCommanderError;
    use crate::taglist::error::TaglistError;

    const ALBUM: &str = r#"REM DATE 1999
PERFORMER "Band"
TITLE "Album"
FILE "album.wav" WAVE
  TRACK 01 AUDIO
    TITLE "Intro"
    PERFORMER "Band"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    TITLE "Song"
    INDEX 01 03:30:00
"#;

    #[test]
    fn cue_to_taglist_writes_one_line_per_track() {
        let sheet = CueParser::new(ALBUM).parse().unwrap();
        let taglist = cue_to_taglist(&sheet).unwrap();

        assert_eq!(
            taglist,
            concat!(
                "0.0\t210.0\t{\"c_performer\":\"Band\",\"c_title\":\"Album\",\"performer\":\"Band\",\"title\":\"Intro\",\"index\":\"01\",\"offset\":\"00:00:00\"}\n",
                "210.0\t270.0\t{\"c_performer\":\"Band\",\"c_title\":\"Album\",\"title\":\"Song\",\"index\":\"01\",\"offset\":\"03:30:00\"}\n",
            )
        );
    }

    #[test]
    fn taglist_round_trips_to_an_equivalent_cuesheet() {
        let sheet = CueParser::new(ALBUM).parse().unwrap();
        let taglist = cue_to_taglist(&sheet).unwrap();

        let cue = taglist_to_cue(Path::new("album.txt"), &[], &taglist).unwrap();
        let rebuilt = CueParser::new(&cue).parse().unwrap();

        assert_eq!(rebuilt.performer.as_deref(), Some("Band"));
        assert_eq!(rebuilt.file.unwrap().filename, "album.wav");
        assert_eq!(rebuilt.tracks.len(), 2);
        assert_eq!(rebuilt.tracks[0].title, sheet.tracks[0].title);
        assert_eq!(rebuilt.tracks[1].offset, sheet.tracks[1].offset);
        assert_eq!(rebuilt.tracks[1].performer.as_deref(), Some("UNKNOWN"));
    }

    #[tokio::test]
    async fn converts_taglist_file_next_to_its_audio() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("album.txt");
        let output = dir.path().join("album.cue");
        std::fs::write(&input, "0.0\t60.0\t{\"title\":\"Only\"}\n").unwrap();
        std::fs::write(dir.path().join("album.flac"), "").unwrap();

        convert_taglist_to_cue(&input, Some(&output), "utf-8")
            .await
            .unwrap();

        let cue = std::fs::read_to_string(&output).unwrap();
        assert!(cue.contains("FILE \"album.flac\" WAVE\n"));
        assert!(cue.contains("    TITLE \"Only\"\n"));
    }

    #[tokio::test]
    async fn corrupt_line_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("album.txt");
        let output = dir.path().join("out.cue");
        std::fs::write(&input, "0.0\t60.0\t{}\n60.0\t120.0\t{broken\n").unwrap();

        let err = convert_taglist_to_cue(&input, Some(&output), "utf-8")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CueCommanderError::TaglistError(TaglistError::CorruptIntervalLine { line: 2, .. })
        ));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn malformed_cuesheet_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("album.cue");
        let output = dir.path().join("album.txt");
        std::fs::write(&input, "TRACK x AUDIO\n").unwrap();

        let err = convert_cue_to_taglist(&input, Some(&output), "utf-8")
            .await
            .unwrap_err();

        assert!(matches!(err, CueCommanderError::CueError(_)));
        assert!(!output.exists());
    }
}
