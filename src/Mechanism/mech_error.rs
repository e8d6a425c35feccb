use std::path::PathBuf;
use thiserror::Error;

/// error types for loading, saving and resolving mechanisms
#[derive(Debug, Error)]
pub enum MechanismError {
    #[error("File '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to access file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing mechanism '{}' at line {line}, column {column}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize mechanism: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("No reference mechanism configured")]
    NoReferenceConfigured,
}
