// src/cue/models
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueSheet {
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub title: Option<String>,
    pub flags: Option<String>,
    pub isrc: Option<String>,
    pub file: Option<CueFile>,
    pub remarks: Vec<Remark>,
    pub tracks: Vec<Track>,
}

impl CueSheet {
    pub fn field(&self, field: SheetField) -> Option<&str> {
        match field {
            SheetField::Performer => self.performer.as_deref(),
            SheetField::Songwriter => self.songwriter.as_deref(),
            SheetField::Title => self.title.as_deref(),
            SheetField::Flags => self.flags.as_deref(),
            SheetField::Isrc => self.isrc.as_deref(),
        }
    }

    pub fn field_mut(&mut self, field: SheetField) -> &mut Option<String> {
        match field {
            SheetField::Performer => &mut self.performer,
            SheetField::Songwriter => &mut self.songwriter,
            SheetField::Title => &mut self.title,
            SheetField::Flags => &mut self.flags,
            SheetField::Isrc => &mut self.isrc,
        }
    }

    /// Key/value tags carried by the `REM` lines, in file order.
    pub fn remark_tags(&self) -> Vec<(String, String)> {
        self.remarks.iter().filter_map(Remark::tag).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CueFile {
    pub filename: String,
    pub file_type: FileType,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    /// 1-based position in parse order.
    pub number: usize,
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub title: Option<String>,
    pub index: Option<String>,
    pub offset: Option<String>,
}

impl Track {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    pub fn field(&self, field: TrackField) -> Option<&str> {
        match field {
            TrackField::Performer => self.performer.as_deref(),
            TrackField::Songwriter => self.songwriter.as_deref(),
            TrackField::Title => self.title.as_deref(),
            TrackField::Index => self.index.as_deref(),
            TrackField::Offset => self.offset.as_deref(),
        }
    }

    pub fn field_mut(&mut self, field: TrackField) -> &mut Option<String> {
        match field {
            TrackField::Performer => &mut self.performer,
            TrackField::Songwriter => &mut self.songwriter,
            TrackField::Title => &mut self.title,
            TrackField::Index => &mut self.index,
            TrackField::Offset => &mut self.offset,
        }
    }
}

/// Raw text of one `REM` line, without the `REM` keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remark(pub String);

impl Remark {
    /// Splits `KEY value...` on whitespace. The key is upper-cased and
    /// surrounding quotes are removed from the value.
    pub fn tag(&self) -> Option<(String, String)> {
        let mut parts = self.0.split_whitespace();
        let key = parts.next()?.to_ascii_uppercase();
        let value = parts.collect::<Vec<_>>().join(" ");
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value.as_str())
            .to_string();

        if value.is_empty() {
            return None;
        }

        Some((key, value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetField {
    Performer,
    Songwriter,
    Title,
    Flags,
    Isrc,
}

impl SheetField {
    pub const ALL: [SheetField; 5] = [
        SheetField::Performer,
        SheetField::Songwriter,
        SheetField::Title,
        SheetField::Flags,
        SheetField::Isrc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SheetField::Performer => "performer",
            SheetField::Songwriter => "songwriter",
            SheetField::Title => "title",
            SheetField::Flags => "flags",
            SheetField::Isrc => "isrc",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    Performer,
    Songwriter,
    Title,
    Index,
    Offset,
}

impl TrackField {
    pub const ALL: [TrackField; 5] = [
        TrackField::Performer,
        TrackField::Songwriter,
        TrackField::Title,
        TrackField::Index,
        TrackField::Offset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TrackField::Performer => "performer",
            TrackField::Songwriter => "songwriter",
            TrackField::Title => "title",
            TrackField::Index => "index",
            TrackField::Offset => "offset",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Binary,
    Motorola,
    Aiff,
    Wave,
    Mp3,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Binary => "BINARY",
            FileType::Motorola => "MOTOROLA",
            FileType::Aiff => "AIFF",
            FileType::Wave => "WAVE",
            FileType::Mp3 => "MP3",
        }
    }
}
