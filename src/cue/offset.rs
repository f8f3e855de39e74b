use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref OFFSET_RE: Regex = Regex::new(r"^([0-9]+):([0-9]+)(:([0-9]+))?").unwrap();
}

/// A position inside the audio file, in seconds.
///
/// The optional third group of the textual form counts thousandths of a
/// second, not 1/75 second CD frames.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Offset(f64);

impl Offset {
    pub fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Parses `MM:SS` or `MM:SS:FFF`. Anything else yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let captures = OFFSET_RE.captures(text)?;

        let minutes: f64 = captures.get(1)?.as_str().parse().ok()?;
        let seconds: f64 = captures.get(2)?.as_str().parse().ok()?;
        let mut value = minutes * 60.0 + seconds;

        if let Some(fraction) = captures.get(4) {
            let fraction: f64 = fraction.as_str().parse().ok()?;
            value += fraction * 0.001;
        }

        Some(Self(value))
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_millis = (self.0.max(0.0) * 1000.0).round() as u64;
        let minutes = total_millis / 60_000;
        let seconds = (total_millis / 1000) % 60;
        let millis = total_millis % 1000;
        write!(f, "{minutes}:{seconds:02}:{millis:03}")
    }
}
