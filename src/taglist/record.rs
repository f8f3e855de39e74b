use crate::cue::models::{CueSheet, SheetField, Track, TrackField};
use serde::{Deserialize, Serialize};

const SHEET_PREFIX: &str = "c_";

/// Per-track view merging sheet level (`c_` prefixed) and track level fields.
///
/// Absent fields are left out of the JSON form entirely. Field order is the
/// serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_performer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_songwriter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_flags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_isrc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songwriter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

impl FlatRecord {
    /// Flattens one track of `sheet`. Empty values are treated as absent.
    pub fn flatten(track: &Track, sheet: &CueSheet) -> Self {
        let mut record = FlatRecord::default();

        for field in SheetField::ALL {
            if let Some(value) = sheet.field(field).filter(|v| !v.is_empty()) {
                *record.sheet_field_mut(field) = Some(value.to_string());
            }
        }
        for field in TrackField::ALL {
            if let Some(value) = track.field(field).filter(|v| !v.is_empty()) {
                *record.track_field_mut(field) = Some(value.to_string());
            }
        }

        record
    }

    pub fn sheet_field(&self, field: SheetField) -> Option<&str> {
        match field {
            SheetField::Performer => self.c_performer.as_deref(),
            SheetField::Songwriter => self.c_songwriter.as_deref(),
            SheetField::Title => self.c_title.as_deref(),
            SheetField::Flags => self.c_flags.as_deref(),
            SheetField::Isrc => self.c_isrc.as_deref(),
        }
    }

    fn sheet_field_mut(&mut self, field: SheetField) -> &mut Option<String> {
        match field {
            SheetField::Performer => &mut self.c_performer,
            SheetField::Songwriter => &mut self.c_songwriter,
            SheetField::Title => &mut self.c_title,
            SheetField::Flags => &mut self.c_flags,
            SheetField::Isrc => &mut self.c_isrc,
        }
    }

    pub fn track_field(&self, field: TrackField) -> Option<&str> {
        match field {
            TrackField::Performer => self.performer.as_deref(),
            TrackField::Songwriter => self.songwriter.as_deref(),
            TrackField::Title => self.title.as_deref(),
            TrackField::Index => self.index.as_deref(),
            TrackField::Offset => self.offset.as_deref(),
        }
    }

    fn track_field_mut(&mut self, field: TrackField) -> &mut Option<String> {
        match field {
            TrackField::Performer => &mut self.performer,
            TrackField::Songwriter => &mut self.songwriter,
            TrackField::Title => &mut self.title,
            TrackField::Index => &mut self.index,
            TrackField::Offset => &mut self.offset,
        }
    }

    /// Looks a value up by its record key, e.g. `c_title` or `offset`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key.strip_prefix(SHEET_PREFIX) {
            Some(name) => self.sheet_field(SheetField::from_name(name)?),
            None => self.track_field(TrackField::from_name(key)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_with_track() -> (CueSheet, Track) {
        let sheet = CueSheet {
            performer: Some("Band".to_string()),
            title: Some("Album".to_string()),
            songwriter: Some(String::new()),
            ..Default::default()
        };
        let track = Track {
            number: 1,
            title: Some("Intro".to_string()),
            index: Some("01".to_string()),
            offset: Some("0:00:00".to_string()),
            ..Default::default()
        };
        (sheet, track)
    }

    #[test]
    fn prefixes_sheet_fields_and_skips_absent_ones() {
        let (sheet, track) = sheet_with_track();
        let record = FlatRecord::flatten(&track, &sheet);

        assert_eq!(record.get("c_performer"), Some("Band"));
        assert_eq!(record.get("c_title"), Some("Album"));
        assert_eq!(record.get("c_songwriter"), None);
        assert_eq!(record.get("title"), Some("Intro"));
        assert_eq!(record.get("performer"), None);
    }

    #[test]
    fn track_fields_do_not_inherit_sheet_values() {
        let (sheet, track) = sheet_with_track();
        let record = FlatRecord::flatten(&track, &sheet);
        assert_eq!(record.performer, None);
        assert_eq!(record.c_performer.as_deref(), Some("Band"));
    }

    #[test]
    fn json_has_fixed_key_order_and_no_nulls() {
        let (sheet, track) = sheet_with_track();
        let json = serde_json::to_string(&FlatRecord::flatten(&track, &sheet)).unwrap();
        assert_eq!(
            json,
            r#"{"c_performer":"Band","c_title":"Album","title":"Intro","index":"01","offset":"0:00:00"}"#
        );
    }

    #[test]
    fn unknown_keys_are_absent() {
        let record = FlatRecord::default();
        assert_eq!(record.get("c_index"), None);
        assert_eq!(record.get("number"), None);
        assert_eq!(record.get("c_"), None);
    }

    #[test]
    fn deserializes_records_with_extra_keys() {
        let record: FlatRecord =
            serde_json::from_str(r#"{"title": "X", "comment": "ignored"}"#).unwrap();
        assert_eq!(record.title.as_deref(), Some("X"));
    }
}
