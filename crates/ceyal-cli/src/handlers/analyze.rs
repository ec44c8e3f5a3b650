use super::HandlerContext;
use crate::args::OutputFormat;
use anyhow::Result;
use ceyal_engine::{LogSummary, summarize};
use ceyal_providers::write_frequencies;
use ceyal_types::TIMESTAMP_FORMAT;
use std::path::Path;

const LABEL_WIDTH: usize = 24;

pub fn handle(
    ctx: &HandlerContext,
    file: &Path,
    sort: bool,
    expected_process: Option<String>,
) -> Result<()> {
    let log = ctx.load_log(file, sort)?;
    let expected_process = expected_process.or_else(|| ctx.config.analysis.expected_process.clone());

    let summary = summarize(&log, expected_process.as_deref());

    match ctx.format {
        OutputFormat::Plain => print_plain(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Csv => write_frequencies(std::io::stdout().lock(), &summary.event_frequencies)?,
    }

    Ok(())
}

fn print_plain(summary: &LogSummary) {
    print_field("Records:", summary.record_count);

    match (summary.first_timestamp, summary.last_timestamp) {
        (Some(first), Some(last)) => print_field(
            "Span:",
            format!(
                "{} .. {}",
                first.format(TIMESTAMP_FORMAT),
                last.format(TIMESTAMP_FORMAT)
            ),
        ),
        _ => print_field("Span:", "-"),
    }

    print_field(
        "Avg inter-event time:",
        format!("{:.3} s", summary.average_inter_event_seconds),
    );
    print_field(
        "Total event duration:",
        format!("{:.3} s", summary.total_event_duration_seconds),
    );

    // No process models ship with the CLI, so every verdict is the assumed one
    if let Some(conformance) = &summary.conformance {
        let verdict = if conformance.conforms {
            "conforms"
        } else {
            "does not conform"
        };
        print_field(
            "Conformance:",
            format!(
                "{} to '{}' (assumed, no process model)",
                verdict, conformance.expected_process
            ),
        );
    }

    println!();
    if summary.event_frequencies.is_empty() {
        println!("No events.");
        return;
    }

    println!("Event frequencies:");
    let width = summary
        .event_frequencies
        .keys()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);
    for (name, count) in &summary.event_frequencies {
        println!("  {:<width$}  {}", name, count, width = width);
    }
}

fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{:<width$}{}", label, value, width = LABEL_WIDTH);
}
