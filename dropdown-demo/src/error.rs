use std::io;
use std::path::PathBuf;

use dropdown::DropdownError;

/// Errors that end the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid data file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Dropdown(#[from] DropdownError),
}
