use std::io::Read;

use fahrplan_parser::{read_records, Talk};
use tracing::{debug, info};

use crate::error::Result;
use crate::render::{Renderer, TemplateSource};
use crate::schedule::{schedule, Day};
use crate::validation::{is_valid_talk, WarningSink};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Data rows read from the export, header excluded.
    pub rows: usize,
    /// Talks that passed validation, hidden ones included.
    pub accepted: usize,
    /// Rows dropped by validation, with or without a warning.
    pub rejected: usize,
    pub hidden: usize,
    pub days: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub days: Vec<Day>,
    pub document: String,
    pub stats: RunStats,
}

/// Reads, validates and groups an export without rendering it.
pub fn plan<R: Read>(input: R, sink: &mut dyn WarningSink) -> Result<(Vec<Day>, RunStats)> {
    let records = read_records(input)?;
    debug!(rows = records.len(), "read schedule export");

    let mut stats = RunStats {
        rows: records.len(),
        ..RunStats::default()
    };

    let accepted: Vec<Talk> = records
        .iter()
        .map(Talk::from)
        .filter(|talk| is_valid_talk(talk, &mut *sink))
        .collect();

    stats.accepted = accepted.len();
    stats.rejected = stats.rows - stats.accepted;
    stats.hidden = accepted.iter().filter(|talk| talk.is_hidden()).count();

    let days = schedule(accepted);
    stats.days = days.len();

    Ok((days, stats))
}

/// Runs the whole conversion from CSV export to rendered document.
pub fn run<R: Read>(
    input: R,
    template: &TemplateSource,
    sink: &mut dyn WarningSink,
) -> Result<Schedule> {
    let (days, stats) = plan(input, sink)?;

    let renderer = Renderer::new(template)?;
    let document = renderer.render(&days)?;
    info!(
        template = renderer.template_name(),
        rows = stats.rows,
        accepted = stats.accepted,
        rejected = stats.rejected,
        hidden = stats.hidden,
        days = stats.days,
        "rendered schedule"
    );

    Ok(Schedule {
        days,
        document,
        stats,
    })
}
