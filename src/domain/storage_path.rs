use std::fmt;
use std::path::Path;

use uuid::Uuid;

use super::document::DEFAULT_FILENAME;

/// Location of a stored upload, relative to the upload store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// A fresh `<uuid-hex><ext>` name. Only the last component of `filename`
    /// is looked at; the extension defaults to `.pdf`.
    pub fn for_upload(filename: &str) -> Self {
        let safe_name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_FILENAME);

        let extension = Path::new(safe_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .unwrap_or("pdf");

        Self(format!("{}.{}", Uuid::new_v4().simple(), extension))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
