use std::fmt;

use serde::{Deserialize, Serialize};

/// Day number used in the export to keep a talk out of the published schedule.
pub const HIDDEN_DAY: i64 = 0;

/// One row of the schedule export, keyed by the spreadsheet's column names.
///
/// Columns missing from the header and empty cells both come through as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Wer")]
    pub speaker: Option<String>,
    #[serde(rename = "Was?")]
    pub title: Option<String>,
    #[serde(rename = "Tag")]
    pub day: Option<String>,
    #[serde(rename = "Beginn")]
    pub start: Option<String>,
    #[serde(rename = "Ende")]
    pub end: Option<String>,
    #[serde(rename = "Raum")]
    pub location: Option<String>,
    #[serde(rename = "Beschreibung (description)")]
    pub description: Option<String>,
    #[serde(rename = "Link")]
    pub link: Option<String>,
}

impl RawRecord {
    /// Replaces every empty cell with `None`.
    pub fn normalized(self) -> Self {
        Self {
            speaker: blank_to_none(self.speaker),
            title: blank_to_none(self.title),
            day: blank_to_none(self.day),
            start: blank_to_none(self.start),
            end: blank_to_none(self.end),
            location: blank_to_none(self.location),
            description: blank_to_none(self.description),
            link: blank_to_none(self.link),
        }
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TalkField {
    Speaker,
    Title,
    Day,
    Start,
    End,
    Location,
    Description,
    Link,
}

impl TalkField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TalkField::Speaker => "speaker",
            TalkField::Title => "title",
            TalkField::Day => "day",
            TalkField::Start => "start",
            TalkField::End => "end",
            TalkField::Location => "location",
            TalkField::Description => "description",
            TalkField::Link => "link",
        }
    }
}

impl fmt::Display for TalkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A talk as imported from the export. `start` and `end` are minutes since midnight.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Talk {
    pub speaker: Option<String>,
    pub title: Option<String>,
    pub day: Option<i64>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    /// Fields that had a value in the export which could not be converted.
    #[serde(skip)]
    pub malformed: Vec<TalkField>,
}

impl Talk {
    pub fn has(&self, field: TalkField) -> bool {
        match field {
            TalkField::Speaker => self.speaker.is_some(),
            TalkField::Title => self.title.is_some(),
            TalkField::Day => self.day.is_some(),
            TalkField::Start => self.start.is_some(),
            TalkField::End => self.end.is_some(),
            TalkField::Location => self.location.is_some(),
            TalkField::Description => self.description.is_some(),
            TalkField::Link => self.link.is_some(),
        }
    }

    /// Length in minutes, if both ends are known.
    pub fn duration(&self) -> Option<f64> {
        Some(self.end? - self.start?)
    }

    pub fn is_hidden(&self) -> bool {
        self.day == Some(HIDDEN_DAY)
    }
}
