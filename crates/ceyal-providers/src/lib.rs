// Error types
pub mod error;

// CSV event logs
pub mod csv_log;

pub use csv_log::{
    COLUMNS, CsvOptions, parse_event_log, read_event_log, read_event_log_with, write_event_log,
    write_frequencies,
};
pub use error::{Error, Result};
