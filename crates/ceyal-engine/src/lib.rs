// Engine module - pure analysis over ordered event logs
// Every operation borrows the log and returns an owned result; nothing here
// performs I/O or keeps state between calls.

pub mod analysis;
pub mod conformance;
pub mod filter;
pub mod summary;

pub use analysis::{
    average_inter_event_duration, process_discovery, sort_chronologically, total_event_duration,
};
pub use conformance::{AssumeConformant, ProcessModel, ProcessModels, conformance_check};
pub use filter::filter_records;
pub use summary::{Conformance, LogSummary, summarize, summarize_with};

use ceyal_types::EventLogRecord;
use std::collections::BTreeMap;

/// Stateless handle over the analysis operations.
///
/// Exists for callers that prefer to pass an analyzer around; every method
/// forwards to the free function of the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessAnalyzer;

impl ProcessAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn process_discovery(&self, log: &[EventLogRecord]) -> BTreeMap<String, usize> {
        process_discovery(log)
    }

    pub fn average_inter_event_duration(&self, log: &[EventLogRecord]) -> f64 {
        average_inter_event_duration(log)
    }

    pub fn conformance_check(&self, log: &[EventLogRecord], expected_process: &str) -> bool {
        conformance_check(log, expected_process)
    }
}
