use crate::error::{Error, Result};
use ceyal_types::EventLogRecord;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column layout of an event log, in file order
pub const COLUMNS: [&str; 5] = ["event", "timestamp", "resource", "cost", "duration"];

/// Reader settings for CSV event logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    /// Strip surrounding whitespace from every field
    pub trim: bool,
    /// First line is a header and is skipped without validation
    pub has_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            has_header: true,
        }
    }
}

/// Load an event log from a CSV file with default options
pub fn read_event_log(path: &Path) -> Result<Vec<EventLogRecord>> {
    read_event_log_with(path, &CsvOptions::default())
}

pub fn read_event_log_with(path: &Path, options: &CsvOptions) -> Result<Vec<EventLogRecord>> {
    tracing::debug!(path = %path.display(), "reading event log");
    let file = File::open(path)?;
    parse_event_log(file, options)
}

/// Parse CSV rows into records, in file order.
///
/// The first malformed row aborts the load: a row with a column count other
/// than five yields [`Error::FieldCount`], a row whose fields fail validation
/// yields [`Error::InvalidRecord`]. A blank line is a row with zero fields.
/// Empty resource/cost cells become `None`.
pub fn parse_event_log<R: Read>(
    mut reader: R,
    options: &CsvOptions,
) -> Result<Vec<EventLogRecord>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    // The csv reader silently skips empty lines
    if let Some(line) = first_blank_line(&content) {
        return Err(Error::FieldCount {
            line,
            expected: COLUMNS.len(),
            found: 0,
        });
    }

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .flexible(true)
        .from_reader(content.as_slice());

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();
        records.push(record_from_row(&row, line)?);
    }

    tracing::debug!(records = records.len(), "event log parsed");
    Ok(records)
}

/// 1-based number of the first empty line outside a quoted field.
///
/// The newline that ends the final row is not a blank line.
fn first_blank_line(content: &[u8]) -> Option<u64> {
    let mut line = 1;
    let mut line_len = 0usize;
    let mut in_quotes = false;

    for &byte in content {
        match byte {
            b'"' => {
                in_quotes = !in_quotes;
                line_len += 1;
            }
            b'\r' => {}
            b'\n' if in_quotes => line += 1,
            b'\n' => {
                if line_len == 0 {
                    return Some(line);
                }
                line += 1;
                line_len = 0;
            }
            _ => line_len += 1,
        }
    }
    None
}

fn record_from_row(row: &StringRecord, line: u64) -> Result<EventLogRecord> {
    if row.len() != COLUMNS.len() {
        return Err(Error::FieldCount {
            line,
            expected: COLUMNS.len(),
            found: row.len(),
        });
    }

    let mut builder = EventLogRecord::builder(&row[0], &row[1]).duration_text(&row[4]);
    if !row[2].is_empty() {
        builder = builder.resource(&row[2]);
    }
    if !row[3].is_empty() {
        builder = builder.cost(&row[3]);
    }

    builder
        .build()
        .map_err(|source| Error::InvalidRecord { line, source })
}

/// Write records back out in the five-column layout, header included
pub fn write_event_log<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a EventLogRecord>,
{
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(COLUMNS)?;

    for record in records {
        let timestamp = record.timestamp_text();
        wtr.write_record([
            record.event_name(),
            timestamp.as_str(),
            record.resource().unwrap_or_default(),
            record.cost().unwrap_or_default(),
            record.duration_text(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write an `event,count` table
pub fn write_frequencies<W: Write>(writer: W, frequencies: &BTreeMap<String, usize>) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(["event", "count"])?;

    for (event, count) in frequencies {
        let count = count.to_string();
        wtr.write_record([event.as_str(), count.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Vec<EventLogRecord>> {
        parse_event_log(content.as_bytes(), &CsvOptions::default())
    }

    #[test]
    fn test_parse_full_rows() {
        let content = "event,timestamp,resource,cost,duration\n\
                       Register,2024-01-01 09:00:00,Alice,10,30\n\
                       Approve,2024-01-01 09:10:00,Bob,5.5,12.25\n";

        let records = parse(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event_name(), "Register");
        assert_eq!(records[0].resource(), Some("Alice"));
        assert_eq!(records[1].cost(), Some("5.5"));
        assert_eq!(records[1].duration_seconds(), 12.25);
    }

    #[test]
    fn test_header_is_not_validated() {
        let content = "what,ever,the,header,says\nA,2024-01-01 00:00:00,,,0\n";
        assert_eq!(parse(content).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_optional_cells_are_none() {
        let records = parse("h1,h2,h3,h4,h5\nA,2024-01-01 00:00:00,,,1\n").unwrap();

        assert_eq!(records[0].resource(), None);
        assert_eq!(records[0].cost(), None);
    }

    #[test]
    fn test_wrong_field_count_aborts() {
        let content = "h1,h2,h3,h4,h5\n\
                       A,2024-01-01 00:00:00,r,c,1\n\
                       B,2024-01-01 00:00:01,r,c\n";

        let err = parse(content).unwrap_err();

        assert!(matches!(
            err,
            Error::FieldCount {
                line: 3,
                expected: 5,
                found: 4
            }
        ));
    }

    #[test]
    fn test_blank_row_aborts() {
        let content = "h1,h2,h3,h4,h5\n\
                       A,2024-01-01 00:00:00,r,c,1\n\
                       \n\
                       B,2024-01-01 00:00:01,r,c,1\n";

        let err = parse(content).unwrap_err();

        assert!(matches!(
            err,
            Error::FieldCount {
                line: 3,
                expected: 5,
                found: 0
            }
        ));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_blank_row_with_crlf_aborts() {
        let content = "h1,h2,h3,h4,h5\r\n\r\nA,2024-01-01 00:00:00,r,c,1\r\n";

        assert!(matches!(
            parse(content).unwrap_err(),
            Error::FieldCount { line: 2, found: 0, .. }
        ));
    }

    #[test]
    fn test_trailing_blank_line_aborts() {
        let content = "h1,h2,h3,h4,h5\nA,2024-01-01 00:00:00,r,c,1\n\n";

        assert!(matches!(
            parse(content).unwrap_err(),
            Error::FieldCount { line: 3, found: 0, .. }
        ));
    }

    #[test]
    fn test_final_newline_is_optional() {
        let with = "h1,h2,h3,h4,h5\nA,2024-01-01 00:00:00,r,c,1\n";
        let without = "h1,h2,h3,h4,h5\nA,2024-01-01 00:00:00,r,c,1";

        assert_eq!(parse(with).unwrap(), parse(without).unwrap());
    }

    #[test]
    fn test_empty_line_inside_quoted_field_is_kept() {
        let content = "h1,h2,h3,h4,h5\n\"Ship\n\nGoods\",2024-01-01 00:00:00,r,c,1\n";

        let records = parse(content).unwrap();

        assert_eq!(records[0].event_name(), "Ship\n\nGoods");
    }

    #[test]
    fn test_malformed_timestamp_aborts_with_line() {
        let content = "h1,h2,h3,h4,h5\nA,01/01/2024,r,c,1\n";

        let err = parse(content).unwrap_err();

        assert_eq!(err.line(), Some(2));
        assert!(matches!(
            err,
            Error::InvalidRecord {
                source: ceyal_types::Error::MalformedTimestamp { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_negative_duration_aborts() {
        let err = parse("h1,h2,h3,h4,h5\nA,2024-01-01 00:00:00,r,c,-2\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRecord {
                source: ceyal_types::Error::InvalidDuration { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_trim_disabled_keeps_whitespace() {
        let options = CsvOptions {
            trim: false,
            ..CsvOptions::default()
        };
        let content = "h1,h2,h3,h4,h5\nA,2024-01-01 00:00:00, Alice ,,1\n";

        let records = parse_event_log(content.as_bytes(), &options).unwrap();

        assert_eq!(records[0].resource(), Some(" Alice "));
    }

    #[test]
    fn test_semicolon_delimiter_without_header() {
        let options = CsvOptions {
            delimiter: b';',
            has_header: false,
            ..CsvOptions::default()
        };
        let content = "A;2024-01-01 00:00:00;r;c;1\n";

        let records = parse_event_log(content.as_bytes(), &options).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].resource(), Some("r"));
    }

    #[test]
    fn test_write_frequencies() {
        let mut frequencies = BTreeMap::new();
        frequencies.insert("B".to_string(), 2);
        frequencies.insert("A".to_string(), 3);

        let mut out = Vec::new();
        write_frequencies(&mut out, &frequencies).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "event,count\nA,3\nB,2\n");
    }

    #[test]
    fn test_write_event_log_uses_canonical_layout() {
        let record = EventLogRecord::builder("Ship", "2024-01-02 03:04:05")
            .cost("7")
            .duration_seconds(2.5)
            .build()
            .unwrap();

        let mut out = Vec::new();
        write_event_log(&mut out, [&record]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "event,timestamp,resource,cost,duration\nShip,2024-01-02 03:04:05,,7,2.5\n"
        );
    }

    #[test]
    fn test_write_event_log_keeps_duration_as_read() {
        let records = parse("h1,h2,h3,h4,h5\nA,2024-01-01 00:00:00,,,12.50\n").unwrap();

        let mut out = Vec::new();
        write_event_log(&mut out, &records).unwrap();

        assert!(String::from_utf8(out).unwrap().ends_with("A,2024-01-01 00:00:00,,,12.50\n"));
    }
}
