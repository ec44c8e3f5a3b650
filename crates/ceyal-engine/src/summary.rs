use crate::analysis::{average_inter_event_duration, process_discovery, total_event_duration};
use crate::conformance::ProcessModels;
use ceyal_types::EventLogRecord;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the analysis layer derives from one log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    pub record_count: usize,
    pub event_frequencies: BTreeMap<String, usize>,
    pub average_inter_event_seconds: f64,
    pub total_event_duration_seconds: f64,
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conformance: Option<Conformance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conformance {
    pub expected_process: String,
    pub conforms: bool,
}

/// Summarize a log; conformance is only evaluated when a process is named
pub fn summarize(log: &[EventLogRecord], expected_process: Option<&str>) -> LogSummary {
    summarize_with(log, expected_process, &ProcessModels::new())
}

pub fn summarize_with(
    log: &[EventLogRecord],
    expected_process: Option<&str>,
    models: &ProcessModels,
) -> LogSummary {
    let conformance = expected_process.map(|name| Conformance {
        expected_process: name.to_string(),
        conforms: models.check(log, name),
    });

    let summary = LogSummary {
        record_count: log.len(),
        event_frequencies: process_discovery(log),
        average_inter_event_seconds: average_inter_event_duration(log),
        total_event_duration_seconds: total_event_duration(log),
        first_timestamp: log.first().map(EventLogRecord::timestamp),
        last_timestamp: log.last().map(EventLogRecord::timestamp),
        conformance,
    };

    tracing::debug!(
        records = summary.record_count,
        distinct_events = summary.event_frequencies.len(),
        "log summarized"
    );
    summary
}
