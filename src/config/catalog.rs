//! The catalog: a read-only snapshot of the user's things and aliases.
//!
//! ```toml
//! [open.things]
//! github = "https://github.com"
//!
//! [open.aliases]
//! gh = "github"
//! ```
//!
//! Missing tables are empty mappings, not errors.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Short name → another short name or a canonical thing key.
pub type AliasTable = HashMap<String, String>;

/// Canonical thing key → URI or path.
pub type ThingTable = HashMap<String, String>;

/// Written on first run when the default catalog does not exist yet.
pub const DEFAULT_CATALOG: &str = r#"# launchq catalog
[open.things]
docs = "https://docs.rs"

[open.aliases]
d = "docs"
"#;

/// One line of a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub name: &'a str,
    /// The resolved URI or path, or the raw alias value if it does not resolve.
    pub target: &'a str,
    pub resolved: bool,
}

/// Top-level TOML wrapper.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    open: Catalog,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    aliases: AliasTable,
    #[serde(default)]
    things: ThingTable,
}

impl Catalog {
    pub fn new(aliases: AliasTable, things: ThingTable) -> Self {
        Self { aliases, things }
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read catalog {}: {e}", path.display())))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Like [`Catalog::load`], but first creates the file with
    /// [`DEFAULT_CATALOG`] (and its parent directory) if it is missing.
    /// An existing file is never overwritten.
    pub fn load_or_seed(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    Error::Config(format!("cannot create {}: {e}", dir.display()))
                })?;
            }
            std::fs::write(path, DEFAULT_CATALOG).map_err(|e| {
                Error::Config(format!("cannot write catalog {}: {e}", path.display()))
            })?;
            info!(path = %path.display(), "created default catalog");
        }
        Self::load(path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| Error::Config(format!("bad catalog: {e}")))?;
        Ok(file.open)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn things(&self) -> &ThingTable {
        &self.things
    }

    /// Resolve a token against this snapshot. See [`crate::resolve::resolve`].
    pub fn resolve(&self, token: &str) -> Result<&str> {
        crate::resolve::resolve(token, &self.aliases, &self.things)
    }

    /// Every thing and alias, sorted by name, one entry per name.
    ///
    /// Aliases that do not resolve are kept with `resolved: false` and their
    /// raw value as the target.
    pub fn entries(&self) -> Vec<Entry<'_>> {
        let mut entries: Vec<Entry<'_>> = self
            .things
            .keys()
            .chain(self.aliases.keys())
            .map(|name| match self.resolve(name) {
                Ok(target) => Entry {
                    name: name.as_str(),
                    target,
                    resolved: true,
                },
                Err(_) => Entry {
                    name: name.as_str(),
                    target: self.aliases.get(name).map(String::as_str).unwrap_or_default(),
                    resolved: false,
                },
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.name.cmp(b.name));
        entries.dedup_by(|a, b| a.name == b.name);
        entries
    }
}
