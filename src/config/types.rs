use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INDENT: usize = 4;
pub const MAX_INDENT: usize = 16;

/// Settings for one [`crate::store::AssetStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub asset_file: PathBuf,
    /// Write through a sibling temp file and rename it over the document.
    pub atomic_writes: bool,
    /// Spaces per indentation level when the document is rewritten.
    pub indent: usize,
}

impl StoreConfig {
    pub fn new(asset_file: impl Into<PathBuf>) -> Self {
        Self {
            asset_file: asset_file.into(),
            atomic_writes: true,
            indent: DEFAULT_INDENT,
        }
    }

    /// Layer a settings file over the defaults. `asset_file` falls back to `default_path`.
    pub fn from_settings(settings: &FileSettings, default_path: &Path) -> Self {
        let asset_file = settings
            .asset_file
            .clone()
            .unwrap_or_else(|| default_path.to_path_buf());
        Self {
            asset_file,
            atomic_writes: settings.atomic_writes.unwrap_or(true),
            indent: settings.indent.unwrap_or(DEFAULT_INDENT),
        }
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Contents of the optional YAML settings file.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub asset_file: Option<PathBuf>,
    pub atomic_writes: Option<bool>,
    pub indent: Option<usize>,
}
