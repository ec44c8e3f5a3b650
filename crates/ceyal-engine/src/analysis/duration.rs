use ceyal_types::EventLogRecord;
use chrono::TimeDelta;

/// Average wall-clock gap between consecutive records, in seconds.
///
/// Gaps are taken in sequence order, not timestamp order: an out-of-order
/// pair contributes a negative gap. Logs with fewer than two records yield
/// `0.0`.
pub fn average_inter_event_duration(log: &[EventLogRecord]) -> f64 {
    if log.len() < 2 {
        return 0.0;
    }

    let total = log
        .windows(2)
        .fold(TimeDelta::zero(), |acc, pair| {
            acc + (pair[1].timestamp() - pair[0].timestamp())
        });

    let gaps = (log.len() - 1) as f64;
    let average = total.num_milliseconds() as f64 / gaps / 1000.0;

    tracing::trace!(
        records = log.len(),
        total_ms = total.num_milliseconds(),
        average,
        "inter-event duration computed"
    );
    average
}

/// Sum of the records' own durations, in seconds
pub fn total_event_duration(log: &[EventLogRecord]) -> f64 {
    log.iter().map(EventLogRecord::duration_seconds).sum()
}

/// Stable sort by timestamp. Records sharing a timestamp keep their order.
pub fn sort_chronologically(log: &mut [EventLogRecord]) {
    log.sort_by_key(EventLogRecord::timestamp);
}
