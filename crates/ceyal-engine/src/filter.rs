use ceyal_types::EventLogRecord;

/// Records matching a free-text query, in log order.
///
/// Event name, resource and cost match case-insensitively; the duration
/// matches against its text as read (`12.50` stays `12.50`).
/// An empty query matches everything.
pub fn filter_records<'a>(log: &'a [EventLogRecord], query: &str) -> Vec<&'a EventLogRecord> {
    if query.is_empty() {
        return log.iter().collect();
    }

    let needle = query.to_lowercase();
    log.iter()
        .filter(|record| matches_query(record, query, &needle))
        .collect()
}

fn matches_query(record: &EventLogRecord, query: &str, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(record.event_name())
        || record.resource().is_some_and(contains)
        || record.cost().is_some_and(contains)
        || record.duration_text().contains(query)
}
