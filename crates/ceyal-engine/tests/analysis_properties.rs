use ceyal_engine::{
    average_inter_event_duration, conformance_check, process_discovery, sort_chronologically,
};
use ceyal_types::{EventLogRecord, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["Register", "Approve", "Ship", "Invoice"];

fn record(name_idx: usize, offset_secs: i64) -> EventLogRecord {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let ts = base + TimeDelta::seconds(offset_secs);
    EventLogRecord::new(NAMES[name_idx], &ts.format(TIMESTAMP_FORMAT).to_string()).unwrap()
}

fn arb_log(min_len: usize) -> impl Strategy<Value = Vec<EventLogRecord>> {
    prop::collection::vec((0..NAMES.len(), 0i64..10_000_000), min_len..40).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name_idx, offset)| record(name_idx, offset))
            .collect()
    })
}

proptest! {
    #[test]
    fn discovery_counts_sum_to_log_length(log in arb_log(0)) {
        let frequencies = process_discovery(&log);

        prop_assert_eq!(frequencies.values().sum::<usize>(), log.len());
        for name in frequencies.keys() {
            prop_assert!(log.iter().any(|r| r.event_name() == name));
        }
    }

    #[test]
    fn discovery_ignores_order(
        (log, shuffled) in arb_log(0).prop_flat_map(|log| (Just(log.clone()), Just(log).prop_shuffle()))
    ) {
        prop_assert_eq!(process_discovery(&log), process_discovery(&shuffled));
    }

    #[test]
    fn average_telescopes_to_last_minus_first(log in arb_log(2)) {
        let span = log[log.len() - 1].timestamp() - log[0].timestamp();
        let expected = span.num_milliseconds() as f64 / (log.len() - 1) as f64 / 1000.0;

        prop_assert_eq!(average_inter_event_duration(&log), expected);
    }

    #[test]
    fn sorted_logs_never_average_negative(mut log in arb_log(0)) {
        sort_chronologically(&mut log);
        prop_assert!(average_inter_event_duration(&log) >= 0.0);
    }

    #[test]
    fn conformance_stub_accepts_everything(log in arb_log(0), process in "[a-z-]{0,16}") {
        prop_assert!(conformance_check(&log, &process));
    }
}

#[test]
fn single_record_logs_average_zero() {
    assert_eq!(average_inter_event_duration(&[record(0, 42)]), 0.0);
}
