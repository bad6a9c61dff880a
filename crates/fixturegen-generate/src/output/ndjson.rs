use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::errors::GenerationError;
use crate::output::create_output;

/// Write one compact JSON document per line.
pub fn write_ndjson<T: Serialize>(path: &Path, records: &[T]) -> Result<u64, GenerationError> {
    let mut writer = create_output(path)?;
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(writer.bytes_written())
}
