use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::{self, ExitCode};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use fahrplan_core::{pipeline, TemplateSource, TracingSink};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SIGNAL_EXIT_CODE: i32 = 128;
const FATAL_EXIT_CODE: i32 = 1;

/// Render a talk schedule export (CSV on stdin) into a document on stdout
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Cli {
    /// Template to render with; the bundled HTML schedule is used when omitted
    #[arg(env = "FAHRPLAN_TEMPLATE")]
    template: Option<PathBuf>,

    /// Write diagnostics to stderr as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);
    install_panic_hook();

    if let Err(err) = install_signal_handlers() {
        report_fatal(format_args!("{err:#}"));
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_fatal(format_args!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let template = cli
        .template
        .clone()
        .map_or(TemplateSource::Bundled, TemplateSource::File);

    let stdin = io::stdin().lock();
    let schedule = pipeline::run(stdin, &template, &mut TracingSink)
        .context("failed to build schedule")?;
    info!(days = schedule.stats.days, "writing schedule");

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(schedule.document.as_bytes())
        .context("failed to write schedule to stdout")?;
    if !schedule.document.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Written straight to stderr so the log filter cannot swallow it.
fn report_fatal(message: impl Display) {
    eprintln!("[FATAL] {message}");
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        report_fatal(info);
        process::exit(FATAL_EXIT_CODE);
    }));
}

/// SIGINT and SIGTERM end the process straight away; nothing is in flight that
/// needs cleaning up.
fn install_signal_handlers() -> Result<()> {
    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("failed to install signal handlers")?;

    thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            warn!(signal, "interrupted");
            process::exit(SIGNAL_EXIT_CODE);
        }
    });

    Ok(())
}
