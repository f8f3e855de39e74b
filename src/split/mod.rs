use crate::commands::split::SplitCommand;
use crate::cue::CueParser;
use crate::cue::models::{CueSheet, Track};
use crate::error::CueCommanderResult;
use crate::format::substitute;
use crate::split::error::{SplitError, SplitResult};
use crate::util::fs::{parent_dir, read_text};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::process::Command;

pub mod error;

/// Stand-in for path separators inside values used as file names.
const SEPARATOR_PLACEHOLDER: &str = "_";

/// File name the splitter gives to track `number`.
pub fn split_output_name(number: usize, extension: &str) -> String {
    format!("split-track{number:02}.{extension}")
}

/// Tags written to one split file: the sheet's `REM` tags followed by the
/// track's own.
pub fn track_tags(sheet: &CueSheet, track: &Track) -> Vec<(String, String)> {
    let mut tags = sheet.remark_tags();

    if let Some(album) = &sheet.title {
        tags.push(("ALBUM".to_string(), album.clone()));
    }
    tags.push(("TRACKNUMBER".to_string(), format!("{:02}", track.number)));
    if let Some(title) = &track.title {
        tags.push(("TITLE".to_string(), title.clone()));
    }
    if let Some(artist) = track.performer.as_ref().or(sheet.performer.as_ref()) {
        tags.push(("ARTIST".to_string(), artist.clone()));
    }
    if let Some(songwriter) = &track.songwriter {
        tags.push(("SONGWRITER".to_string(), songwriter.clone()));
    }

    tags
}

/// Final file name for a track: `template` filled from `tags`, path
/// separators inside tag values replaced.
pub fn target_file_name(template: &str, tags: &[(String, String)], extension: &str) -> String {
    let stem = substitute(template, |key| {
        tags.iter()
            .rev()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.replace(['/', '\\'], SEPARATOR_PLACEHOLDER))
    });

    format!("{stem}.{extension}")
}

async fn run_tool(program: &str, args: &[String], dir: Option<&Path>) -> SplitResult<()> {
    debug!("Running {program} {}", args.join(" "));

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let status = command
        .status()
        .await
        .map_err(|source| SplitError::ToolNotRunnable {
            tool: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(SplitError::ExternalToolFailure {
            tool: program.to_string(),
            status,
        });
    }

    Ok(())
}

async fn tag_and_rename(
    cmd: &SplitCommand,
    dir: &Path,
    sheet: &CueSheet,
    track: &Track,
) -> SplitResult<PathBuf> {
    let split_path = dir.join(split_output_name(track.number, &cmd.format));
    if !tokio::fs::try_exists(&split_path).await? {
        return Err(SplitError::MissingSplitOutput(split_path));
    }

    let tags = track_tags(sheet, track);

    let mut args = vec!["--remove-all-tags".to_string()];
    args.extend(
        tags.iter()
            .map(|(key, value)| format!("--set-tag={key}={value}")),
    );
    args.push(split_path.to_string_lossy().into_owned());
    run_tool(&cmd.tagger, &args, None).await?;

    let target = dir.join(target_file_name(&cmd.name_format, &tags, &cmd.format));
    tokio::fs::rename(&split_path, &target).await?;

    Ok(target)
}

/// Splits the audio file referenced by a cuesheet into tagged, named
/// per-track files next to it.
pub async fn split_cue_sheet(pb: MultiProgress, cmd: SplitCommand) -> CueCommanderResult<()> {
    debug!("Parsing CUE file: {:?}", cmd.input_cue);
    let text = read_text(&cmd.input_cue, &cmd.codec).await?;
    let sheet = CueParser::new(&text).parse()?;

    let audio = sheet
        .file
        .as_ref()
        .ok_or(SplitError::NoFileReferencedInCueSheet)?;
    let dir = parent_dir(&cmd.input_cue);
    let cue_name = cmd
        .input_cue
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    info!("Splitting {} into {} tracks", audio.filename, sheet.tracks.len());
    let args = vec![
        "-o".to_string(),
        cmd.format.clone(),
        "-f".to_string(),
        cue_name,
        audio.filename.clone(),
    ];
    run_tool(&cmd.splitter, &args, Some(dir)).await?;

    let bar = pb.add(ProgressBar::new(sheet.tracks.len() as u64));
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .map_err(SplitError::from)?,
    );

    for track in &sheet.tracks {
        let target = tag_and_rename(&cmd, dir, &sheet, track).await?;
        debug!("Track {} written to {target:?}", track.number);
        if let Some(name) = target.file_name() {
            bar.set_message(name.to_string_lossy().into_owned());
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    info!("Split complete!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::models::Remark;

    fn sheet() -> CueSheet {
        CueSheet {
            performer: Some("Band".to_string()),
            title: Some("Album".to_string()),
            remarks: vec![
                Remark("GENRE Rock".to_string()),
                Remark("DATE 1999".to_string()),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn split_output_names_are_zero_padded() {
        assert_eq!(split_output_name(3, "flac"), "split-track03.flac");
        assert_eq!(split_output_name(12, "wav"), "split-track12.wav");
    }

    #[test]
    fn tags_combine_remarks_and_track_fields() {
        let track = Track {
            number: 2,
            title: Some("Song".to_string()),
            songwriter: Some("Writer".to_string()),
            ..Default::default()
        };

        let tags = track_tags(&sheet(), &track);
        let expected: Vec<(String, String)> = [
            ("GENRE", "Rock"),
            ("DATE", "1999"),
            ("ALBUM", "Album"),
            ("TRACKNUMBER", "02"),
            ("TITLE", "Song"),
            ("ARTIST", "Band"),
            ("SONGWRITER", "Writer"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn track_performer_overrides_sheet_performer() {
        let track = Track {
            number: 1,
            performer: Some("Guest".to_string()),
            ..Default::default()
        };
        let tags = track_tags(&sheet(), &track);
        assert!(tags.contains(&("ARTIST".to_string(), "Guest".to_string())));
    }

    #[test]
    fn target_name_replaces_separators_in_values() {
        let tags = vec![
            ("TRACKNUMBER".to_string(), "04".to_string()),
            ("TITLE".to_string(), "AC/DC \\ live".to_string()),
        ];
        assert_eq!(
            target_file_name("%TRACKNUMBER% - %TITLE%", &tags, "flac"),
            "04 - AC_DC _ live.flac"
        );
    }

    #[test]
    fn target_name_placeholders_ignore_case_and_allow_literal_separators() {
        let tags = vec![("ARTIST".to_string(), "Band".to_string())];
        assert_eq!(
            target_file_name("%artist%/%missing%x", &tags, "ogg"),
            "Band/x.ogg"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_a_failure() {
        let err = run_tool("false", &[], None).await.unwrap_err();
        assert!(matches!(err, SplitError::ExternalToolFailure { tool, .. } if tool == "false"));
        run_tool("true", &[], None).await.unwrap();
    }

    #[cfg(unix)]
    mod pipeline {
        use super::*;
        use crate::error::CueCommanderError;
        use indicatif::ProgressDrawTarget;
        use std::os::unix::fs::PermissionsExt;

        const ALBUM: &str = r#"PERFORMER "Band"
TITLE "Album"
FILE "album.wav" WAVE
  TRACK 01 AUDIO
    TITLE "Intro"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    TITLE "AC/DC"
    INDEX 01 03:00:00
"#;

        fn write_script(dir: &Path, name: &str, body: &str) -> String {
            let path = dir.join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().into_owned()
        }

        /// Splitter that creates `split-trackNN.<format>` for each of `tracks`.
        fn splitter(dir: &Path, tracks: &[&str]) -> String {
            let body: String = tracks
                .iter()
                .map(|n| format!(": > \"split-track{n}.$2\"\n"))
                .collect();
            write_script(dir, "splitter.sh", &body)
        }

        fn command(dir: &Path, splitter: String, tagger: String) -> SplitCommand {
            let input_cue = dir.join("album.cue");
            std::fs::write(&input_cue, ALBUM).unwrap();

            SplitCommand {
                input_cue,
                codec: "utf-8".to_string(),
                format: "flac".to_string(),
                name_format: "%TRACKNUMBER% - %TITLE%".to_string(),
                splitter,
                tagger,
            }
        }

        fn hidden_progress() -> MultiProgress {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        }

        #[tokio::test]
        async fn splits_tags_and_renames_every_track() {
            let dir = tempfile::tempdir().unwrap();
            let splitter = splitter(dir.path(), &["01", "02"]);
            let tagger = write_script(
                dir.path(),
                "tagger.sh",
                "echo \"$@\" >> \"$(dirname \"$0\")/tagger.log\"\n",
            );

            split_cue_sheet(hidden_progress(), command(dir.path(), splitter, tagger))
                .await
                .unwrap();

            assert!(dir.path().join("01 - Intro.flac").exists());
            assert!(dir.path().join("02 - AC_DC.flac").exists());
            assert!(!dir.path().join("split-track01.flac").exists());
            assert!(!dir.path().join("split-track02.flac").exists());

            let log = std::fs::read_to_string(dir.path().join("tagger.log")).unwrap();
            let calls: Vec<&str> = log.lines().collect();
            assert_eq!(calls.len(), 2);
            assert!(calls[0].starts_with(
                "--remove-all-tags --set-tag=ALBUM=Album --set-tag=TRACKNUMBER=01 \
                 --set-tag=TITLE=Intro --set-tag=ARTIST=Band "
            ));
            assert!(calls[0].ends_with("split-track01.flac"));
            assert!(calls[1].contains("--set-tag=TITLE=AC/DC"));
        }

        #[tokio::test]
        async fn missing_split_output_is_an_error() {
            let dir = tempfile::tempdir().unwrap();
            let splitter = splitter(dir.path(), &["01"]);

            let err = split_cue_sheet(
                hidden_progress(),
                command(dir.path(), splitter, "true".to_string()),
            )
            .await
            .unwrap_err();

            match err {
                CueCommanderError::SplitError(SplitError::MissingSplitOutput(path)) => {
                    assert_eq!(path, dir.path().join("split-track02.flac"));
                }
                other => panic!("unexpected error {other:?}"),
            }
        }

        #[tokio::test]
        async fn tagger_failure_stops_before_renaming() {
            let dir = tempfile::tempdir().unwrap();
            let splitter = splitter(dir.path(), &["01", "02"]);

            let err = split_cue_sheet(
                hidden_progress(),
                command(dir.path(), splitter, "false".to_string()),
            )
            .await
            .unwrap_err();

            assert!(matches!(
                err,
                CueCommanderError::SplitError(SplitError::ExternalToolFailure { .. })
            ));
            assert!(dir.path().join("split-track01.flac").exists());
            assert!(dir.path().join("split-track02.flac").exists());
            assert!(!dir.path().join("01 - Intro.flac").exists());
        }

        #[tokio::test]
        async fn splitter_failure_skips_tagging() {
            let dir = tempfile::tempdir().unwrap();
            let splitter = write_script(dir.path(), "splitter.sh", "exit 2\n");

            let err = split_cue_sheet(
                hidden_progress(),
                command(dir.path(), splitter, "true".to_string()),
            )
            .await
            .unwrap_err();

            assert!(matches!(
                err,
                CueCommanderError::SplitError(SplitError::ExternalToolFailure { .. })
            ));
            assert!(!dir.path().join("split-track01.flac").exists());
        }
    }

    #[tokio::test]
    async fn missing_program_is_not_runnable() {
        let err = run_tool("cuecommander-no-such-tool", &[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, SplitError::ToolNotRunnable { .. }));
    }
}
