use crate::cue::models::Track;
use crate::cue::offset::Offset;
use crate::taglist::error::{TaglistError, TaglistResult};
use crate::taglist::record::FlatRecord;
use serde_json::{Map, Value};

/// Length given to the last track, which has no following offset.
pub const LAST_TRACK_LENGTH: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: Option<Offset>,
    pub end: Option<Offset>,
}

/// One parsed tag list line. Start and end stay textual.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedInterval {
    pub start: String,
    pub end: String,
    pub record: FlatRecord,
}

pub fn derive_intervals(tracks: &[Track]) -> Vec<Interval> {
    let offsets: Vec<Option<Offset>> = tracks
        .iter()
        .map(|track| track.offset.as_deref().and_then(Offset::parse))
        .collect();

    offsets
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = match offsets.get(i + 1) {
                Some(&next) => next,
                None => start.map(|s| Offset::from_seconds(s.seconds() + LAST_TRACK_LENGTH)),
            };
            Interval { start, end }
        })
        .collect()
}

fn format_seconds(offset: Option<Offset>) -> String {
    offset.map(|o| format!("{:?}", o.seconds())).unwrap_or_default()
}

/// Renders `start\tend\tjson` lines, one per entry, newline terminated.
pub fn write_tagged_intervals(entries: &[(Interval, FlatRecord)]) -> TaglistResult<String> {
    let mut out = String::new();

    for (interval, record) in entries {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            format_seconds(interval.start),
            format_seconds(interval.end),
            serde_json::to_string(record)?
        ));
    }

    Ok(out)
}

/// Parses tag list text. Blank lines are skipped; any other line must hold
/// three tab separated fields with a JSON object last.
pub fn read_tagged_intervals(text: &str) -> TaglistResult<Vec<TaggedInterval>> {
    let mut entries = Vec::new();

    for (line_number, line) in text.lines().enumerate() {
        let line_number = line_number + 1;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, '\t');
        let (Some(start), Some(end), Some(data)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(TaglistError::MalformedIntervalLine {
                line: line_number,
                text: line.to_string(),
            });
        };

        let record = serde_json::from_str::<Map<String, Value>>(data)
            .and_then(|object| serde_json::from_value::<FlatRecord>(Value::Object(object)))
            .map_err(|source| TaglistError::CorruptIntervalLine {
                line: line_number,
                text: data.to_string(),
                source,
            })?;

        entries.push(TaggedInterval {
            start: start.to_string(),
            end: end.to_string(),
            record,
        });
    }

    Ok(entries)
}
