use crate::error::ContextError;
use serde::{Deserialize, Serialize};

/// What ends up in the document under a file's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// The complete, strictly decoded UTF-8 text of the file.
    Text(String),
    /// The file could not be read. Holds the failure description.
    Unreadable(String),
}

impl FileContent {
    /// Turns the outcome of a read into document content, keeping failures
    /// local to the file.
    pub fn from_read(result: Result<String, ContextError>) -> Self {
        match result {
            Ok(text) => FileContent::Text(text),
            Err(e) => FileContent::Unreadable(e.to_string()),
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileContent::Unreadable(_))
    }

    /// The text written to the document: the file content verbatim, or an
    /// `Error reading file: ...` placeholder.
    pub fn render(&self) -> String {
        match self {
            FileContent::Text(text) => text.clone(),
            FileContent::Unreadable(message) => format!("Error reading file: {}", message),
        }
    }
}

/// Counters describing one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSummary {
    /// Files that received a header block, readable or not.
    pub files_written: usize,
    /// Files whose block holds an error placeholder.
    pub read_failures: usize,
    /// Files skipped by the exclusion policy inside visited directories.
    pub files_excluded: usize,
}
