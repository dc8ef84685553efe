use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use super::models::{AssetType, KEY_NAME};
use crate::config::StoreConfig;
use crate::errors::{AssetError, Result};
use crate::utils::fs::{atomic_write, overwrite};

/// A parsed asset document. Key order is kept as found on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDocument {
    assets: Map<String, Value>,
}

impl AssetDocument {
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(assets) => Ok(Self { assets }),
            other => Err(AssetError::Malformed(format!(
                "top level must be an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let document = Self::parse(&content)?;
        debug!(path = %path.display(), types = document.assets.len(), "Loaded asset document");
        Ok(document)
    }

    /// Render with `indent` spaces per level and no trailing newline.
    pub fn to_pretty_string(&self, indent: usize) -> Result<String> {
        let indent = vec![b' '; indent];
        let mut serializer = Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(&indent));
        self.assets.serialize(&mut serializer)?;
        String::from_utf8(serializer.into_inner()).map_err(|e| AssetError::Malformed(e.to_string()))
    }

    pub fn save(&self, config: &StoreConfig) -> Result<()> {
        let rendered = self.to_pretty_string(config.indent)?;
        if config.atomic_writes {
            atomic_write(&config.asset_file, rendered.as_bytes())?;
        } else {
            overwrite(&config.asset_file, rendered.as_bytes())?;
        }
        debug!(path = %config.asset_file.display(), bytes = rendered.len(), "Wrote asset document");
        Ok(())
    }

    /// Records stored under `asset_type`. A missing key is an empty sequence.
    pub fn records(&self, asset_type: AssetType) -> Result<&[Value]> {
        match self.assets.get(asset_type.as_str()) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(not_an_array(asset_type, other)),
        }
    }

    /// First record of `asset_type` whose `Name` equals `name`.
    pub fn find(&self, asset_type: AssetType, name: &str) -> Result<Option<&Map<String, Value>>> {
        for record in self.records(asset_type)? {
            if name_matches(record, asset_type, name)? {
                return Ok(record.as_object());
            }
        }
        Ok(None)
    }

    pub fn find_mut(
        &mut self,
        asset_type: AssetType,
        name: &str,
    ) -> Result<Option<&mut Map<String, Value>>> {
        let records = match self.assets.get_mut(asset_type.as_str()) {
            None => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(not_an_array(asset_type, other)),
        };
        for record in records.iter_mut() {
            if name_matches(record, asset_type, name)? {
                return Ok(record.as_object_mut());
            }
        }
        Ok(None)
    }

    /// `Name` of every record under `asset_type`, in document order.
    pub fn names(&self, asset_type: AssetType) -> Result<Vec<String>> {
        self.records(asset_type)?
            .iter()
            .map(|record| -> Result<String> {
                let name = record_name(record, asset_type)?;
                Ok(match name {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
            })
            .collect()
    }
}

/// Load the document, apply `mutate`, and write the whole document back.
/// Nothing is written when `mutate` fails.
pub fn modify<T, F>(config: &StoreConfig, mutate: F) -> Result<T>
where
    F: FnOnce(&mut AssetDocument) -> Result<T>,
{
    let mut document = AssetDocument::load(&config.asset_file)?;
    let output = mutate(&mut document)?;
    document.save(config)?;
    Ok(output)
}

fn record_name(record: &Value, asset_type: AssetType) -> Result<&Value> {
    let fields = record.as_object().ok_or_else(|| {
        AssetError::Malformed(format!(
            "{} entries must be objects, found {}",
            asset_type,
            json_kind(record)
        ))
    })?;
    fields.get(KEY_NAME).ok_or_else(|| {
        AssetError::Malformed(format!("{} entry without a '{}' field", asset_type, KEY_NAME))
    })
}

// A non-string Name is never equal to a requested name.
fn name_matches(record: &Value, asset_type: AssetType, name: &str) -> Result<bool> {
    Ok(record_name(record, asset_type)?.as_str() == Some(name))
}

fn not_an_array(asset_type: AssetType, found: &Value) -> AssetError {
    AssetError::Malformed(format!(
        "'{}' must hold an array, found {}",
        asset_type,
        json_kind(found)
    ))
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
