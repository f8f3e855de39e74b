use crate::cue::models::CueSheet;

const DEFAULT_INDEX: &str = "01";

/// Escapes a value for embedding between double quotes in a cuesheet.
/// Line breaks become spaces, a directive can't span lines.
pub fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace(['\r', '\n'], " ")
}

/// Serializes a sheet. Tracks are renumbered from 1 in list order.
pub fn write_cue_sheet(sheet: &CueSheet) -> String {
    let mut lines = Vec::new();

    for remark in &sheet.remarks {
        lines.push(format!("REM {}", remark.0));
    }
    if let Some(performer) = &sheet.performer {
        lines.push(format!("PERFORMER \"{}\"", escape(performer)));
    }
    if let Some(title) = &sheet.title {
        lines.push(format!("TITLE \"{}\"", escape(title)));
    }
    if let Some(songwriter) = &sheet.songwriter {
        lines.push(format!("SONGWRITER \"{}\"", escape(songwriter)));
    }
    if let Some(flags) = &sheet.flags {
        lines.push(format!("FLAGS {flags}"));
    }
    if let Some(isrc) = &sheet.isrc {
        lines.push(format!("ISRC {isrc}"));
    }
    if let Some(file) = &sheet.file {
        lines.push(format!(
            "FILE \"{}\" {}",
            escape(&file.filename),
            file.file_type.as_str()
        ));
    }

    for (i, track) in sheet.tracks.iter().enumerate() {
        lines.push(format!("  TRACK {} AUDIO", i + 1));

        if let Some(title) = &track.title {
            lines.push(format!("    TITLE \"{}\"", escape(title)));
        }
        if let Some(performer) = &track.performer {
            lines.push(format!("    PERFORMER \"{}\"", escape(performer)));
        }
        if let Some(songwriter) = &track.songwriter {
            lines.push(format!("    SONGWRITER \"{}\"", escape(songwriter)));
        }
        if let Some(offset) = &track.offset {
            let index = track.index.as_deref().unwrap_or(DEFAULT_INDEX);
            lines.push(format!("    INDEX {} {}", escape(index), escape(offset)));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
