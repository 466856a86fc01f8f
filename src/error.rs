use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error("Failed to write context document: {0}")]
    Write(#[source] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid root: {0} is not a readable directory")]
    InvalidRoot(PathBuf),
}
impl ContextError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContextError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn decode(path: impl Into<PathBuf>, source: FromUtf8Error) -> Self {
        ContextError::Decode {
            path: path.into(),
            source,
        }
    }
}
