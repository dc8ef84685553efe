use std::path::Path;
use crate::errors::AssetError;
use super::types::{FileSettings, MAX_INDENT};
use tracing::debug;

const MAX_SETTINGS_BYTES: u64 = 1_048_576;

pub fn parse_config(path: &Path) -> Result<FileSettings, AssetError> {
    if !path.exists() {
        return Err(AssetError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_SETTINGS_BYTES {
        return Err(AssetError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = std::fs::read_to_string(path)?;
    let settings = parse_settings_str(&content)?;
    debug!(path = %path.display(), "Loaded settings file");
    Ok(settings)
}

fn parse_settings_str(content: &str) -> Result<FileSettings, AssetError> {
    // An empty file deserializes to YAML null.
    if content.trim().is_empty() {
        return Ok(FileSettings::default());
    }

    let settings: FileSettings = serde_yaml::from_str(content)?;
    validate_settings(&settings)?;
    Ok(settings)
}

fn validate_settings(settings: &FileSettings) -> Result<(), AssetError> {
    if let Some(indent) = settings.indent {
        if indent > MAX_INDENT {
            return Err(AssetError::Config(format!(
                "indent must be between 0 and {}, got {}",
                MAX_INDENT, indent
            )));
        }
    }

    if let Some(path) = &settings.asset_file {
        if path.as_os_str().is_empty() {
            return Err(AssetError::Config("asset_file must not be empty".into()));
        }
    }

    Ok(())
}
