use std::fmt;

/// CLI-boundary errors. The classification core itself never fails;
/// these cover the harness around it.
#[derive(Debug)]
pub enum DetectError {
    /// Snapshot file could not be read
    SnapshotRead { path: String, source: std::io::Error },

    /// Snapshot file held malformed JSON
    SnapshotParse { path: String, source: serde_json::Error },

    /// Unknown report format name
    UnknownFormat(String),
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::SnapshotRead { path, source } => {
                write!(f, "Failed to read snapshot '{}': {}", path, source)
            }
            DetectError::SnapshotParse { path, source } => {
                write!(f, "Malformed snapshot JSON in '{}': {}", path, source)
            }
            DetectError::UnknownFormat(name) => {
                write!(f, "Unknown output format '{}' (expected console or json)", name)
            }
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectError::SnapshotRead { source, .. } => Some(source),
            DetectError::SnapshotParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
