//! Configuration file support.
//!
//! Loads `schemats.toml` from the current directory, or the file given with
//! `--config`. Command-line flags override what the file sets.
//!
//! Example `schemats.toml`:
//! ```toml
//! [typegen]
//! naming_prefix = "Api"
//! inline_ref = false
//! export = true
//! typed_aliases = true
//! ```

use anyhow::{Context, Result};
use schemats_typegen::TypegenOptions;
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchematsConfig {
    pub typegen: TypegenOptions,
}

impl SchematsConfig {
    /// Config file picked up from the working directory.
    pub const FILE_NAME: &'static str = "schemats.toml";

    /// Load an explicit config file, or `schemats.toml` in `dir` when present.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let path = dir.join(Self::FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "using config file");
            Self::load_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a file path.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}
