use super::HandlerContext;
use crate::args::OutputFormat;
use anyhow::{Context, Result};
use ceyal_engine::process_discovery;
use ceyal_providers::write_frequencies;
use std::fs::File;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, file: &Path, output: &Path) -> Result<()> {
    let log = ctx.load_log(file, false)?;
    let frequencies = process_discovery(&log);

    let out = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    write_frequencies(out, &frequencies)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(output = %output.display(), events = frequencies.len(), "frequencies exported");
    if ctx.format == OutputFormat::Plain {
        println!(
            "Wrote {} event types ({} records) to {}",
            frequencies.len(),
            log.len(),
            output.display()
        );
    }
    Ok(())
}
