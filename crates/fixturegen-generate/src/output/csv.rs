use std::path::Path;

use serde::Serialize;

use crate::errors::GenerationError;
use crate::output::create_output;

/// Write records as CSV with a header row taken from the record fields.
///
/// Fields are quoted only when they contain the delimiter, a quote or a
/// line break. Records end in `\r\n`. `header` is written up front so an empty run still yields a
/// header-only file.
pub fn write_records_csv<T: Serialize>(
    path: &Path,
    header: &[&str],
    records: &[T],
) -> Result<u64, GenerationError> {
    let counting = create_output(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(counting);

    writer.write_record(header)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}
