pub mod csv;
pub mod json;
pub mod ndjson;

mod counting;

use std::fs::{File, create_dir_all};
use std::io::BufWriter;
use std::path::Path;

pub use counting::CountingWriter;

/// Open `path` for writing, creating missing parent directories.
pub(crate) fn create_output(path: &Path) -> std::io::Result<CountingWriter<BufWriter<File>>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    Ok(CountingWriter::new(BufWriter::new(File::create(path)?)))
}
