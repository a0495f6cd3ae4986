use std::io::{self, Write};
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use clap::Parser;
use strum::{EnumMessage, IntoEnumIterator};

use classlab::evaluation::{EvaluationReport, Prediction};
use classlab::streams::json::read_datasets;
use classlab::tasks::LineupEvaluator;
use classlab::ui::cli::args::{Cli, Command, RunArgs};
use classlab::ui::types::build::build_lineup;
use classlab::ui::types::choices::{LearnerKind, Lineup};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";
const FG_MAGENTA: &str = "\x1b[35m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = match cli.command {
        Some(Command::Run(args)) => args,
        Some(Command::Schema) => {
            let schema = serde_json::to_string_pretty(&Lineup::schema())
                .context("failed to serialize lineup schema")?;
            println!("{schema}");
            return Ok(());
        }
        Some(Command::Learners) => {
            print_learner_kinds();
            return Ok(());
        }
        None => RunArgs::default(),
    };

    let lineup = args.lineup().context("failed to resolve lineup")?;
    let dump_format = args.report_format()?;
    let datasets = read_datasets(&args.data)
        .with_context(|| format!("failed to read datasets from {}", args.data.display()))?;
    if datasets.is_empty() {
        eprintln!(
            "{FG_GREY}no datasets in {}, nothing to classify{RESET}",
            args.data.display()
        );
    }

    let learners = build_lineup(&lineup).context("failed to build lineup")?;

    let header: Vec<String> = vec![
        format!("{BOLD}{FG_CYAN}▶ Classification Lab{RESET}"),
        format!(
            "{DIM}data={}{RESET}  {DIM}datasets={}{RESET}  {DIM}learners={}{RESET}  {}",
            args.data.display(),
            datasets.len(),
            learners.len(),
            timestamp_now()
        ),
        format!(
            "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
        ),
    ];

    let (tx, rx) = std::sync::mpsc::channel();
    let render: JoinHandle<()> = std::thread::spawn(move || render_predictions(rx, header));

    let mut runner = LineupEvaluator::new(learners, datasets).with_progress(tx);
    let outcome = runner.run();
    let report = runner.into_report();
    let _ = render.join();
    outcome.context("evaluation failed")?;

    print_summary(&report);

    if let Some(path) = args.dump_file
        && !path.as_os_str().is_empty()
    {
        report
            .export(&path, dump_format)
            .with_context(|| format!("failed to export predictions to {}", path.display()))?;
        println!("{DIM}predictions written to {}{RESET}", path.display());
    }

    Ok(())
}

/// Prints each classifier's name once, then one predicted label per dataset.
fn render_predictions(rx: Receiver<Prediction>, header_lines: Vec<String>) {
    for line in &header_lines {
        println!("{line}");
    }

    let mut current: Option<usize> = None;
    for p in rx {
        if current != Some(p.learner) {
            println!("{BOLD}{FG_MAGENTA}{}{RESET}", p.classifier);
            current = Some(p.learner);
        }
        let color = match p.is_correct() {
            Some(true) => FG_GREEN,
            Some(false) => FG_RED,
            None => "",
        };
        println!("{color}{}{RESET}", p.predicted);
    }
    let _ = io::stdout().flush();
}

fn print_summary(report: &EvaluationReport) {
    println!(
        "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
    );
    for s in report.summaries() {
        println!(
            "{BOLD}{:<24}{RESET} {DIM}predictions{RESET} {:>4}  {FG_GREEN}{BOLD}correct{RESET} {:>4}/{:<4} {FG_CYAN}{BOLD}acc{RESET} {:>8}  {DIM}t{RESET} {:>.6}s",
            s.classifier,
            s.predictions,
            s.correct,
            s.scored,
            fmt_percent(s.accuracy()),
            s.cpu_seconds
        );
    }
}

fn print_learner_kinds() {
    for kind in LearnerKind::iter() {
        let key: &'static str = kind.into();
        println!(
            "{BOLD}{key:<22}{RESET} {}  {DIM}{}{RESET}",
            kind.get_message().unwrap_or_default(),
            kind.get_detailed_message().unwrap_or_default()
        );
    }
}

fn fmt_percent(x: f64) -> String {
    if x.is_nan() {
        format!("{DIM}NaN{RESET}")
    } else {
        format!("{:.2}%", x * 100.0)
    }
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
