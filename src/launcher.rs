//! The platform "open" launcher: `open` on macOS, `xdg-open` on Linux and
//! the BSDs.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Name of the default open launcher for the platform this binary targets.
pub fn platform_launcher() -> Result<&'static str> {
    if cfg!(target_os = "macos") {
        Ok("open")
    } else if cfg!(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    )) {
        Ok("xdg-open")
    } else {
        Err(Error::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }
}

/// A launcher executable verified to exist on PATH.
#[derive(Debug, Clone)]
pub struct Launcher {
    name: String,
    path: PathBuf,
}

impl Launcher {
    /// Detect the platform launcher and check that it is installed.
    pub fn detect() -> Result<Self> {
        Self::from_program(platform_launcher()?)
    }

    /// Use `program` (a name searched on PATH, or a path) as the launcher.
    pub fn from_program(program: &str) -> Result<Self> {
        let path = which::which(program).map_err(|e| {
            debug!(program, error = %e, "launcher lookup failed");
            Error::LauncherNotFound {
                launcher: program.to_string(),
            }
        })?;
        Ok(Self {
            name: program.to_string(),
            path,
        })
    }

    /// Skip the PATH check. Spawn failures then surface from [`Launcher::open`].
    #[cfg(test)]
    pub(crate) fn unchecked(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `<launcher> <uri>` and wait for it to exit.
    ///
    /// A launcher that has disappeared since detection is fatal; any other
    /// spawn failure, a non-zero exit or a signal is a per-target
    /// [`Error::Launch`].
    pub async fn open(&self, uri: &str) -> Result<()> {
        debug!(launcher = %self.path.display(), uri, "spawning launcher");

        let status = Command::new(&self.path)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::LauncherNotFound {
                    launcher: self.name.clone(),
                },
                _ => Error::Launch {
                    target: uri.to_string(),
                    cause: e.to_string(),
                },
            })?;

        if status.success() {
            return Ok(());
        }

        let cause = match status.code() {
            Some(code) => format!("{} exited with status {code}", self.name),
            None => format!("{} terminated by signal", self.name),
        };
        Err(Error::Launch {
            target: uri.to_string(),
            cause,
        })
    }
}
