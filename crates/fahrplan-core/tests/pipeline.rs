use std::fs;
use std::path::PathBuf;

use fahrplan_core::pipeline::{plan, run};
use fahrplan_core::{CollectingSink, RunStats, TemplateSource};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../fahrplan-parser/tests/data")
        .join(name)
}

fn fixture() -> String {
    fs::read_to_string(fixture_path("fahrplan.csv")).expect("failed to read fixture")
}

#[test]
fn fixture_is_grouped_by_day_and_start() {
    let mut sink = CollectingSink::default();
    let (days, stats) = plan(fixture().as_bytes(), &mut sink).expect("plan failed");

    let names: Vec<i64> = days.iter().map(|day| day.name).collect();
    assert_eq!(names, vec![1, 2, 3]);

    let first_day: Vec<&str> = days[0]
        .talks
        .iter()
        .filter_map(|talk| talk.title.as_deref())
        .collect();
    assert_eq!(first_day, vec!["Opening", "Apollo", "Kernel Hacking"]);

    assert_eq!(
        stats,
        RunStats {
            rows: 11,
            accepted: 6,
            rejected: 5,
            hidden: 1,
            days: 3,
        }
    );
}

#[test]
fn fixture_warnings_cover_zero_length_corrupt_and_unparseable_rows() {
    let mut sink = CollectingSink::default();
    plan(fixture().as_bytes(), &mut sink).expect("plan failed");

    let warned: Vec<&str> = sink
        .warnings
        .iter()
        .filter_map(|warning| warning.talk.title.as_deref())
        .collect();
    assert_eq!(warned, vec!["Zero", "Missing Room", "Broken Day"]);
}

#[test]
fn hidden_talks_are_not_rendered() {
    let mut sink = CollectingSink::default();
    let schedule = run(fixture().as_bytes(), &TemplateSource::Bundled, &mut sink)
        .expect("run failed");

    assert!(schedule
        .days
        .iter()
        .all(|day| day.talks.iter().all(|talk| talk.day != Some(0))));
    assert!(!schedule.document.contains("Draft Talk"));
    assert!(schedule.document.contains("Late Night"));
}

#[test]
fn output_is_identical_across_runs() {
    let input = fixture();

    let first = run(
        input.as_bytes(),
        &TemplateSource::Bundled,
        &mut CollectingSink::default(),
    )
    .expect("first run failed");
    let second = run(
        input.as_bytes(),
        &TemplateSource::Bundled,
        &mut CollectingSink::default(),
    )
    .expect("second run failed");

    assert_eq!(first.document, second.document);
}

#[test]
fn empty_export_renders_an_empty_schedule() {
    let mut sink = CollectingSink::default();
    let schedule = run("".as_bytes(), &TemplateSource::Bundled, &mut sink).expect("run failed");

    assert!(schedule.days.is_empty());
    assert!(schedule.document.contains("<h1>Fahrplan</h1>"));
    assert!(sink.warnings.is_empty());
}

#[test]
fn malformed_csv_aborts_the_run() {
    let input = "Was?,Tag\nKeynote,1\nBroken,1,extra\n";
    let mut sink = CollectingSink::default();

    assert!(run(input.as_bytes(), &TemplateSource::Bundled, &mut sink).is_err());
}
