use crate::model::{RawRecord, Talk, TalkField};
use crate::time::decode_time;

/// Maps an export row onto a [`Talk`].
///
/// Numeric columns that hold text which does not convert are left empty on the
/// talk and listed in [`Talk::malformed`].
pub fn import_talk(record: &RawRecord) -> Talk {
    let mut malformed = Vec::new();

    let day = map_present(record.day.as_deref(), TalkField::Day, parse_day, &mut malformed);
    let start = map_present(
        record.start.as_deref(),
        TalkField::Start,
        parse_time,
        &mut malformed,
    );
    let end = map_present(record.end.as_deref(), TalkField::End, parse_time, &mut malformed);

    Talk {
        speaker: record.speaker.clone(),
        title: record.title.clone(),
        day,
        start,
        end,
        location: record.location.clone(),
        description: record.description.clone(),
        link: record.link.clone(),
        malformed,
    }
}

impl From<&RawRecord> for Talk {
    fn from(record: &RawRecord) -> Self {
        import_talk(record)
    }
}

/// Applies `convert` only when a value is present. A present value that fails to
/// convert yields `None` and is recorded against `field`.
fn map_present<T>(
    value: Option<&str>,
    field: TalkField,
    convert: fn(&str) -> Option<T>,
    malformed: &mut Vec<TalkField>,
) -> Option<T> {
    let raw = value?;
    let converted = convert(raw);
    if converted.is_none() {
        malformed.push(field);
    }
    converted
}

fn parse_day(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    trimmed.parse::<i64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

fn parse_time(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(decode_time)
}
