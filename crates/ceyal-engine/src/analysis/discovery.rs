use ceyal_types::EventLogRecord;
use std::collections::BTreeMap;

/// Count occurrences of each distinct event name.
///
/// Keys are ordered by name so results render deterministically; the input
/// order has no influence on the result.
pub fn process_discovery(log: &[EventLogRecord]) -> BTreeMap<String, usize> {
    let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();

    for record in log {
        match frequencies.get_mut(record.event_name()) {
            Some(count) => *count += 1,
            None => {
                frequencies.insert(record.event_name().to_string(), 1);
            }
        }
    }

    tracing::trace!(
        records = log.len(),
        distinct = frequencies.len(),
        "process discovery complete"
    );
    frequencies
}
