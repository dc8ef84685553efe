use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::document::{self, json_kind, AssetDocument};
use super::models::{
    AssetType, Credential, KEY_CONNECTION_FIELDS, KEY_PASSWORD, KEY_USERNAME, KEY_VALUE,
};
use crate::config::StoreConfig;
use crate::errors::{AssetError, Result};

/// Reads and updates assets in one JSON document.
///
/// Holds no document state: every call reads the file fresh, and every update
/// rewrites it in full before returning.
#[derive(Debug, Clone)]
pub struct AssetStore {
    config: StoreConfig,
}

impl AssetStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// A store over `path` with default write settings.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::new(path))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.asset_file
    }

    pub fn load(&self) -> Result<AssetDocument> {
        AssetDocument::load(&self.config.asset_file)
    }

    /// The first record of `asset_type` named `asset_name`.
    pub fn find(&self, asset_type: AssetType, asset_name: &str) -> Result<Map<String, Value>> {
        let document = self.load()?;
        match document.find(asset_type, asset_name)? {
            Some(record) => {
                debug!(asset_type = %asset_type, name = %asset_name, "Found asset");
                Ok(record.clone())
            }
            None => {
                debug!(asset_type = %asset_type, name = %asset_name, "Asset not found");
                Err(AssetError::NotFound(asset_name.to_string()))
            }
        }
    }

    /// Set `Value` on the first matching record and rewrite the document.
    /// The file is left untouched when no record matches.
    pub fn update(&self, asset_type: AssetType, asset_name: &str, value: Value) -> Result<()> {
        document::modify(&self.config, |doc| {
            let record = doc
                .find_mut(asset_type, asset_name)?
                .ok_or_else(|| AssetError::NotFound(asset_name.to_string()))?;
            record.insert(KEY_VALUE.to_string(), value);
            Ok(())
        })?;
        info!(asset_type = %asset_type, name = %asset_name, path = %self.path().display(), "Updated asset");
        Ok(())
    }

    /// Names under `asset_type` in document order.
    pub fn list(&self, asset_type: AssetType) -> Result<Vec<String>> {
        self.load()?.names(asset_type)
    }

    pub fn get_variable(&self, name: &str) -> Result<Value> {
        let record = self.find(AssetType::Variable, name)?;
        required_field(&record, AssetType::Variable, name, KEY_VALUE).cloned()
    }

    pub fn set_variable(&self, name: &str, value: Value) -> Result<()> {
        self.update(AssetType::Variable, name, value)
    }

    pub fn get_credential(&self, name: &str) -> Result<Credential> {
        let record = self.find(AssetType::Credential, name)?;
        Ok(Credential {
            username: required_field(&record, AssetType::Credential, name, KEY_USERNAME)?.clone(),
            password: required_field(&record, AssetType::Credential, name, KEY_PASSWORD)?.clone(),
        })
    }

    /// The connection's `ValueFields`, as stored.
    pub fn get_connection(&self, name: &str) -> Result<Value> {
        let record = self.find(AssetType::Connection, name)?;
        required_field(&record, AssetType::Connection, name, KEY_CONNECTION_FIELDS).cloned()
    }
}

pub(crate) fn required_field<'a>(
    record: &'a Map<String, Value>,
    asset_type: AssetType,
    name: &str,
    key: &str,
) -> Result<&'a Value> {
    record.get(key).ok_or_else(|| {
        AssetError::Malformed(format!("{} '{}' has no '{}' field", asset_type, name, key))
    })
}

pub(crate) fn required_str<'a>(
    record: &'a Map<String, Value>,
    asset_type: AssetType,
    name: &str,
    key: &str,
) -> Result<&'a str> {
    let value = required_field(record, asset_type, name, key)?;
    value.as_str().ok_or_else(|| {
        AssetError::Malformed(format!(
            "{} '{}' field '{}' must be a string, found {}",
            asset_type,
            name,
            key,
            json_kind(value)
        ))
    })
}
