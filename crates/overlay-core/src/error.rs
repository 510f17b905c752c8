use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read preferences from {path}")]
    ReadPreferences {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write preferences to {path}")]
    WritePreferences {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed preferences: {0}")]
    Format(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
