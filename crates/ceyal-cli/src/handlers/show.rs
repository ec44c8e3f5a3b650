use super::HandlerContext;
use crate::args::OutputFormat;
use anyhow::Result;
use ceyal_engine::filter_records;
use ceyal_providers::write_event_log;
use ceyal_types::EventLogRecord;
use std::path::Path;

const HEADERS: [&str; 5] = ["Event", "Timestamp", "Resource", "Cost", "Duration"];

pub fn handle(ctx: &HandlerContext, file: &Path, filter: Option<&str>, sort: bool) -> Result<()> {
    let log = ctx.load_log(file, sort)?;
    let records = filter_records(&log, filter.unwrap_or_default());
    tracing::debug!(matched = records.len(), total = log.len(), "records filtered");

    match ctx.format {
        OutputFormat::Plain => {
            print_table(&records);
            println!();
            println!("{} of {} records", records.len(), log.len());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Csv => write_event_log(std::io::stdout().lock(), records)?,
    }

    Ok(())
}

fn table_row(record: &EventLogRecord) -> [String; 5] {
    [
        record.event_name().to_string(),
        record.timestamp_text(),
        record.resource().unwrap_or("-").to_string(),
        record.cost().unwrap_or("-").to_string(),
        record.duration_text().to_string(),
    ]
}

fn print_table(records: &[&EventLogRecord]) {
    let rows: Vec<[String; 5]> = records.iter().map(|record| table_row(record)).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_row(&HEADERS, &widths);
    for row in &rows {
        print_row(row, &widths);
    }
}

fn print_row<S: AsRef<str>>(cells: &[S; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}
