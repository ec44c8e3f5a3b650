use crate::args::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};
use ceyal_engine::sort_chronologically;
use ceyal_providers::read_event_log_with;
use ceyal_types::EventLogRecord;
use std::path::Path;

/// Shared state handed to every subcommand handler
pub struct HandlerContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl HandlerContext {
    /// Load a log with the configured CSV options.
    ///
    /// Records stay in file order unless `sort` or the config asks otherwise.
    pub fn load_log(&self, path: &Path, sort: bool) -> Result<Vec<EventLogRecord>> {
        let options = self.config.csv.to_options()?;
        let mut log = read_event_log_with(path, &options)
            .with_context(|| format!("failed to load event log {}", path.display()))?;

        if sort || self.config.analysis.sort_chronologically {
            sort_chronologically(&mut log);
        }

        tracing::info!(path = %path.display(), records = log.len(), "event log loaded");
        Ok(log)
    }
}
