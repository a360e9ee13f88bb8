//! Error types for tinct-engine.

use std::path::PathBuf;

use thiserror::Error;
use tinct_locate::LocateError;
use tinct_theme::ThemeError;

/// All errors that can arise inside an engine operation. Public entry
/// points normalize these into `UpdateOutcome::failed`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An error from reading located theme sources.
    #[error("location error: {0}")]
    Locate(#[from] LocateError),

    /// An error from the theme mutator or parser.
    #[error("{0}")]
    Theme(#[from] ThemeError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `add` was invoked without a color value.
    #[error("a color value is required to add a color")]
    MissingColorValue,
}

/// Convenience constructor for [`EngineError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> EngineError {
    EngineError::Io {
        path: path.into(),
        source,
    }
}
