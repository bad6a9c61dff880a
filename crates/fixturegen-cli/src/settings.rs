use std::path::{Path, PathBuf};

use fixturegen_generate::GenerateOptions;
use thiserror::Error;

/// Settings file picked up from the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "fixturegen.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Resolve generation options from an explicit file, the default file, or
/// built-in defaults, in that order.
pub fn load_settings(path: Option<&Path>) -> SettingsResult<GenerateOptions> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(SettingsError::NotFound(path.to_path_buf()));
            }
            read_settings(path)
        }
        None => {
            let path = Path::new(DEFAULT_SETTINGS_FILE);
            if path.exists() {
                read_settings(path)
            } else {
                Ok(GenerateOptions::default())
            }
        }
    }
}

pub fn read_settings(path: &Path) -> SettingsResult<GenerateOptions> {
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> SettingsResult<GenerateOptions> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let options = parse_settings(
            r#"
seed = 42

[nested]
max_depth = 3

[nested.shape]
string_len = 8

[csv]
rows = 25
end = "2025-01-01T00:00:00"
"#,
        )
        .expect("parse settings");

        assert_eq!(options.seed, Some(42));
        assert_eq!(options.nested.max_depth, 3);
        assert_eq!(options.nested.num_keys, 30);
        assert_eq!(options.nested.shape.string_len, 8);
        assert_eq!(options.nested.shape.max_children, 5);
        assert_eq!(options.csv.rows, 25);
        assert!(options.csv.end.is_some());
        assert_eq!(options.ndjson.count, 1_000);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let options = parse_settings("").expect("parse settings");
        assert_eq!(options.seed, None);
        assert_eq!(options.array.count, 10_000);
    }

    #[test]
    fn unknown_types_are_rejected() {
        let result = parse_settings("[nested]\nmax_depth = \"deep\"\n");
        assert!(matches!(result, Err(SettingsError::TomlDecode(_))));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("fixturegen_{}.toml", uuid::Uuid::new_v4()));
        let result = load_settings(Some(&path));
        assert!(matches!(result, Err(SettingsError::NotFound(_))));
    }
}
