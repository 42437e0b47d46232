//! CSV parsing and writing using the csv crate
//!
//! RFC 4180 compliant parsing with support for quoted fields,
//! escaped quotes, and custom delimiters. The first record becomes the
//! header; ragged records are returned exactly as read.

use thiserror::Error;

use super::model::{CsvFormat, Delimiter, LineEnding, Table};

/// Error type for CSV reading and writing
///
/// Reading is `flexible` over in-memory text, so in practice only the
/// writer can fail, and only through its underlying buffer.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV write error: {0}")]
    Flush(String),
}

/// Parse CSV content into a header and data rows
///
/// Uses the csv crate for RFC 4180 compliant parsing. Blank lines are not
/// records, so empty input gives an empty `Table`.
pub fn parse_csv(content: &str, delimiter: Delimiter) -> Result<Table, CodecError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(|s| s.to_string()).collect());
    }

    let mut records = records.into_iter();
    let header = records.next().unwrap_or_default();
    Ok(Table::new(header, records.collect()))
}

/// Write a header and rows as CSV text
///
/// Fields are quoted only when they contain the delimiter, a quote or a line
/// break. Records are joined by the line ending, with none after the last.
///
/// A table with no columns writes as empty text. CSV has no way to spell a
/// zero-width record, so that text does not load back as the same table.
pub fn serialize_csv(
    header: &[String],
    rows: &[Vec<String>],
    format: CsvFormat,
) -> Result<String, CodecError> {
    // A zero-width table has no fields to write
    if header.is_empty() && rows.iter().all(Vec::is_empty) {
        return Ok(String::new());
    }

    let terminator = match format.line_ending {
        LineEnding::Lf => csv::Terminator::Any(b'\n'),
        LineEnding::CrLf => csv::Terminator::CRLF,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter.byte())
        .terminator(terminator)
        .quote_style(csv::QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CodecError::Flush(e.error().to_string()))?;
    // Every field went in as a `&str`
    let mut text = String::from_utf8(bytes).map_err(|e| CodecError::Flush(e.to_string()))?;

    let ending = format.line_ending.as_str();
    if text.ends_with(ending) {
        text.truncate(text.len() - ending.len());
    }

    Ok(text)
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}
