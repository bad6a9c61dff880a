use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::errors::GenerationError;
use crate::output::create_output;

const INDENT: &[u8] = b"    ";

/// Write `value` as JSON indented by four spaces.
pub fn write_json_pretty<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<u64, GenerationError> {
    let mut writer = create_output(path)?;
    to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(writer.bytes_written())
}

pub fn to_writer_pretty<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
) -> Result<(), serde_json::Error> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_output_uses_four_spaces() {
        let mut buffer = Vec::new();
        to_writer_pretty(&mut buffer, &serde_json::json!({"a": [1]})).expect("serialize");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
    }
}
