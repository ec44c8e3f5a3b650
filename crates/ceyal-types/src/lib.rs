pub mod error;
pub mod record;

pub use error::{Error, Result};
pub use record::{
    EventLogRecord, EventLogRecordBuilder, TIMESTAMP_FORMAT, parse_duration_seconds,
    parse_timestamp,
};
