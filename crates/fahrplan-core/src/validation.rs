use fahrplan_parser::{Talk, TalkField};
use tracing::warn;

/// Fields a row needs before it can be placed in the schedule.
pub const REQUIRED_FIELDS: [TalkField; 5] = [
    TalkField::Title,
    TalkField::Day,
    TalkField::Start,
    TalkField::End,
    TalkField::Location,
];

/// Receives diagnostics about rows that are dropped from the schedule.
pub trait WarningSink {
    fn warn(&mut self, message: &str, talk: &Talk);
}

/// Forwards warnings to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, message: &str, talk: &Talk) {
        warn!(talk = ?talk, "{message}");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
    pub talk: Talk,
}

/// Keeps warnings in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub warnings: Vec<Warning>,
}

impl WarningSink for CollectingSink {
    fn warn(&mut self, message: &str, talk: &Talk) {
        self.warnings.push(Warning {
            message: message.to_string(),
            talk: talk.clone(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// Not a talk at all, e.g. a spacer row that only carries a day.
    Empty,
    ZeroLength,
    Malformed { fields: Vec<TalkField> },
    Corrupt { missing: Vec<TalkField> },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Diagnostic to report for this verdict. Empty rows are dropped silently.
    pub fn warning(&self) -> Option<String> {
        match self {
            Verdict::Accepted | Verdict::Empty => None,
            Verdict::ZeroLength => Some("zero length talk? This can't be right!".to_string()),
            Verdict::Malformed { fields } => Some(format!(
                "corrupt talk entry has unparseable keys {}",
                field_set(fields)
            )),
            Verdict::Corrupt { missing } => Some(format!(
                "corrupt talk entry is missing the keys {}",
                field_set(missing)
            )),
        }
    }
}

pub fn classify(talk: &Talk) -> Verdict {
    let (present, missing): (Vec<TalkField>, Vec<TalkField>) = REQUIRED_FIELDS
        .into_iter()
        .partition(|field| talk.has(*field));

    if present.is_empty() || present == [TalkField::Day] {
        return Verdict::Empty;
    }

    if !talk.malformed.is_empty() {
        return Verdict::Malformed {
            fields: talk.malformed.clone(),
        };
    }

    if talk.duration() == Some(0.0) {
        return Verdict::ZeroLength;
    }

    if !missing.is_empty() {
        return Verdict::Corrupt { missing };
    }

    Verdict::Accepted
}

/// Decides whether `talk` belongs in the schedule, reporting rejected rows to `sink`.
pub fn is_valid_talk(talk: &Talk, sink: &mut dyn WarningSink) -> bool {
    let verdict = classify(talk);
    if let Some(message) = verdict.warning() {
        sink.warn(&message, talk);
    }
    verdict.is_accepted()
}

fn field_set(fields: &[TalkField]) -> String {
    let names: Vec<&str> = fields.iter().map(TalkField::as_str).collect();
    format!("{{{}}}", names.join(", "))
}
