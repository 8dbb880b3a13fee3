//! Error types for launchq.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{token} not found in things or aliases")]
    NotFound { token: String },

    #[error("failed to open {target}: {cause}")]
    Launch { target: String, cause: String },

    #[error("no open launcher for platform {0}")]
    UnsupportedPlatform(String),

    #[error("launcher {launcher} not found on PATH")]
    LauncherNotFound { launcher: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// The open mechanism itself is unusable, so every remaining job would
    /// fail the same way.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedPlatform(_) | Error::LauncherNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
