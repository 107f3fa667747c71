use std::fmt;
use std::io;

/// Recoverable failures of board and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    InvalidSize,
    OutOfBounds,
    OccupiedCell,
    NoBranch,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::InvalidSize => write!(f, "invalid board size"),
            GoError::OutOfBounds => write!(f, "out of bounds"),
            GoError::OccupiedCell => write!(f, "occupied cell"),
            GoError::NoBranch => write!(f, "no branch"),
        }
    }
}

impl std::error::Error for GoError {}

/// Failures while saving or loading a session.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
    UnsupportedVersion(u32),
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Json(e) => write!(f, "JSON error: {e}"),
            StoreError::UnsupportedVersion(v) => write!(f, "unsupported save format version {v}"),
            StoreError::Corrupt(msg) => write!(f, "corrupt save file: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}
