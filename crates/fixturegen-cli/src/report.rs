use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::CliError;

/// Write `value` as pretty JSON through a temp file and rename.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CliError> {
    let data = serde_json::to_vec_pretty(value)?;
    write_bytes_atomic(path, &data)?;
    Ok(())
}

pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "invalid path for atomic write")
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_json_and_leaves_no_temp_file() {
        let dir = std::env::temp_dir().join(format!("fixturegen_report_{}", uuid::Uuid::new_v4()));
        let path = dir.join("report.json");

        write_json_atomic(&path, &serde_json::json!({"ok": true})).expect("write report");

        let contents = std::fs::read_to_string(&path).expect("read report");
        assert_eq!(contents, "{\n  \"ok\": true\n}");
        assert!(!dir.join("report.json.tmp").exists());
    }

    #[test]
    fn unserializable_report_is_a_json_error() {
        let dir = std::env::temp_dir().join(format!("fixturegen_report_{}", uuid::Uuid::new_v4()));
        let path = dir.join("report.json");
        let mut value = std::collections::BTreeMap::new();
        value.insert(vec![1_u8, 2], "non-string key");

        let result = write_json_atomic(&path, &value);

        assert!(matches!(result, Err(CliError::Json(_))));
        assert!(!path.exists());
    }

    #[test]
    fn rejects_paths_without_file_name() {
        let result = write_bytes_atomic(Path::new("/"), b"{}");
        assert!(result.is_err());
    }
}
