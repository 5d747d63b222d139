use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// A seed record is an opaque, ordered field map. The table's key schema is
/// whatever the deployment declared; nothing is validated client-side and
/// the record passes through to the write call unmodified.
pub type UserRecord = serde_json::Map<String, Value>;

pub const SEED_FILE_NAME: &str = "seed-data.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level JSON array in {0}")]
    NotAnArray(PathBuf),
    #[error("record at index {0} is not a JSON object")]
    NotAnObject(usize),
    #[error("cannot locate the directory containing the executable")]
    NoParentDir,
}

/// `seed-data.json` lives next to the installed binary.
pub fn default_seed_path() -> Result<PathBuf, LoadError> {
    let exe = std::env::current_exe().map_err(|source| LoadError::Io {
        path: PathBuf::from("<current-exe>"),
        source,
    })?;
    let dir = exe.parent().ok_or(LoadError::NoParentDir)?;
    Ok(dir.join(SEED_FILE_NAME))
}

/// Reads and parses the seed file. Any failure here aborts the run before a
/// single write is issued.
pub fn load(path: &Path) -> Result<Vec<UserRecord>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&raw)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(LoadError::NotAnArray(path.to_path_buf())),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(LoadError::NotAnObject(index)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_seed_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn loads_records_in_file_order() {
        let file = write_seed_file(
            r#"[
                {"username": "alice", "email": "a@x.com", "id": "1"},
                {"username": "bob", "email": "b@x.com", "id": "2"}
            ]"#,
        );

        let records = load(file.path()).expect("Failed to load seed file");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["username"], "alice");
        assert_eq!(records[1]["username"], "bob");
    }

    #[test]
    fn record_fields_pass_through_untouched() {
        let file = write_seed_file(
            r#"[{"userId": "7", "nested": {"roleName": "CLIENT"}, "isActive": true, "coupons": []}]"#,
        );

        let records = load(file.path()).expect("Failed to load seed file");

        assert_eq!(records[0]["userId"], "7");
        assert_eq!(records[0]["nested"]["roleName"], "CLIENT");
        assert_eq!(records[0]["isActive"], true);
        assert!(records[0]["coupons"].as_array().unwrap().is_empty());
    }

    #[test]
    fn empty_array_is_a_valid_seed_file() {
        let file = write_seed_file("[]");
        let records = load(file.path()).expect("Failed to load seed file");
        assert!(records.is_empty());
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load(Path::new("/nonexistent/seed-data.json"))
            .expect_err("expected a read failure");
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let file = write_seed_file("{not json");
        let err = load(file.path()).expect_err("expected a parse failure");
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn top_level_object_is_rejected() {
        let file = write_seed_file(r#"{"username": "alice"}"#);
        let err = load(file.path()).expect_err("expected a shape failure");
        assert!(matches!(err, LoadError::NotAnArray(_)));
    }

    #[test]
    fn non_object_element_is_rejected() {
        let file = write_seed_file(r#"[{"username": "alice"}, 42]"#);
        let err = load(file.path()).expect_err("expected a shape failure");
        assert!(matches!(err, LoadError::NotAnObject(1)));
    }
}
