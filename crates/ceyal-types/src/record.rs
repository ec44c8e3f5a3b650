use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed timestamp layout of event logs (`yyyy-MM-dd HH:mm:ss`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// NOTE: Record Design
//
// - One type covers both log shapes: the minimal (event, timestamp) pair and
//   the full five-column row. Secondary columns are optional.
// - Validation happens once, at construction. Fields are private so a record
//   that exists is a record that parsed.
// - Serde goes through the same constructor (`try_from`), so deserialized
//   records carry the same guarantees as ingested ones.

/// One logged process event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordRepr", into = "RecordRepr")]
pub struct EventLogRecord {
    event_name: String,
    timestamp: NaiveDateTime,
    resource: Option<String>,
    cost: Option<String>,
    duration_seconds: f64,
    duration_text: String,
}

impl EventLogRecord {
    /// Build the minimal record shape: no resource, no cost, zero duration.
    pub fn new(event_name: impl Into<String>, timestamp: &str) -> Result<Self> {
        Self::builder(event_name, timestamp).build()
    }

    pub fn builder(event_name: impl Into<String>, timestamp: &str) -> EventLogRecordBuilder {
        EventLogRecordBuilder {
            event_name: event_name.into(),
            timestamp: timestamp.to_string(),
            resource: None,
            cost: None,
            duration: DurationInput::Seconds(0.0),
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Timestamp rendered back in the canonical log layout
    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn cost(&self) -> Option<&str> {
        self.cost.as_deref()
    }

    /// The event's own duration, independent of gaps between events
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Duration as it was supplied (trimmed), or the decimal rendering of a
    /// numeric duration
    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }
}

#[derive(Debug, Clone)]
enum DurationInput {
    Seconds(f64),
    Text(String),
}

/// Builder for the full record shape.
///
/// Nothing is validated until [`EventLogRecordBuilder::build`].
#[derive(Debug, Clone)]
pub struct EventLogRecordBuilder {
    event_name: String,
    timestamp: String,
    resource: Option<String>,
    cost: Option<String>,
    duration: DurationInput,
}

impl EventLogRecordBuilder {
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    pub fn duration_seconds(mut self, seconds: f64) -> Self {
        self.duration = DurationInput::Seconds(seconds);
        self
    }

    /// Duration as decimal text, parsed by [`parse_duration_seconds`] on build
    pub fn duration_text(mut self, text: impl Into<String>) -> Self {
        self.duration = DurationInput::Text(text.into());
        self
    }

    pub fn build(self) -> Result<EventLogRecord> {
        if self.event_name.trim().is_empty() {
            return Err(Error::EmptyEventName);
        }

        let timestamp = parse_timestamp(&self.timestamp)?;
        let (duration_seconds, duration_text) = match self.duration {
            DurationInput::Seconds(seconds) => (
                validate_duration(seconds, || seconds.to_string())?,
                seconds.to_string(),
            ),
            DurationInput::Text(text) => (parse_duration_seconds(&text)?, text.trim().to_string()),
        };

        Ok(EventLogRecord {
            event_name: self.event_name,
            timestamp,
            resource: self.resource,
            cost: self.cost,
            duration_seconds,
            duration_text,
        })
    }
}

/// Parse a timestamp in the fixed `yyyy-MM-dd HH:mm:ss` layout.
///
/// The text must be exactly the canonical rendering of the parsed value:
/// zero-padded fields, single space separator, no sign, no leap second.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let malformed = || Error::MalformedTimestamp {
        input: text.to_string(),
    };

    let parsed = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|_| malformed())?;

    // chrono's parser tolerates unpadded fields, extra whitespace, a year sign and `:60`
    if parsed.nanosecond() >= 1_000_000_000 || parsed.format(TIMESTAMP_FORMAT).to_string() != text
    {
        return Err(malformed());
    }
    Ok(parsed)
}

/// Parse a decimal duration in seconds. Surrounding whitespace is ignored.
pub fn parse_duration_seconds(text: &str) -> Result<f64> {
    let seconds = text
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidDuration {
            input: text.to_string(),
        })?;
    validate_duration(seconds, || text.to_string())
}

fn validate_duration(seconds: f64, input: impl FnOnce() -> String) -> Result<f64> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(Error::InvalidDuration { input: input() })
    }
}

/// Wire shape: timestamp as canonical text, duration as a plain number
#[derive(Serialize, Deserialize)]
struct RecordRepr {
    event: String,
    timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cost: Option<String>,
    #[serde(default)]
    duration: f64,
}

impl TryFrom<RecordRepr> for EventLogRecord {
    type Error = Error;

    fn try_from(repr: RecordRepr) -> Result<Self> {
        let mut builder =
            EventLogRecord::builder(repr.event, &repr.timestamp).duration_seconds(repr.duration);
        if let Some(resource) = repr.resource {
            builder = builder.resource(resource);
        }
        if let Some(cost) = repr.cost {
            builder = builder.cost(cost);
        }
        builder.build()
    }
}

impl From<EventLogRecord> for RecordRepr {
    fn from(record: EventLogRecord) -> Self {
        RecordRepr {
            timestamp: record.timestamp_text(),
            event: record.event_name,
            resource: record.resource,
            cost: record.cost,
            duration: record.duration_seconds,
        }
    }
}
