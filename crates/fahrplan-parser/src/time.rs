//! Spreadsheet exports store clock times as a fraction of a 24 hour day.
//! Everything downstream works in minutes since midnight.

use std::fmt::Display;

pub const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Converts a fraction of a day (`0.5` is noon) into minutes since midnight.
///
/// The result is not rounded and not range checked.
pub fn decode_time(fraction: f64) -> f64 {
    fraction * MINUTES_PER_DAY
}

/// Left-pads the decimal rendering of `value` with zeros up to `width` characters.
pub fn zero_pad(value: impl Display, width: usize) -> String {
    format!("{value:0>width$}")
}

/// Formats minutes since midnight as `HH:MM`.
///
/// Minutes are rounded after the hour is taken, so `59.6` renders as `00:60`.
pub fn format_time(minutes: f64) -> String {
    let (hours, mins) = split_minutes(minutes);
    format!("{}:{}", zero_pad(hours, 2), zero_pad(mins, 2))
}

/// Formats a length in minutes as `2:30h`, `2h` or `45m`.
pub fn format_duration(minutes: f64) -> String {
    let (hours, mins) = split_minutes(minutes);
    if hours > 0 && mins > 0 {
        format!("{hours}:{}h", zero_pad(mins, 2))
    } else if hours == 0 {
        format!("{mins}m")
    } else {
        format!("{hours}h")
    }
}

fn split_minutes(minutes: f64) -> (i64, i64) {
    let hours = (minutes / 60.0).floor() as i64;
    let mins = (minutes % 60.0).round() as i64;
    (hours, mins)
}
