use std::io::Write;
use serde_json::Value;

use crate::cli::commands::SetVariableArgs;
use crate::errors::AssetError;
use crate::store::AssetStore;

pub fn handle_set_variable(store: &AssetStore, args: &SetVariableArgs, out: &mut impl Write) -> Result<(), AssetError> {
    let value = parse_value(&args.value);
    store.set_variable(&args.name, value)?;
    writeln!(out, "Updated variable {}", args.name)?;
    Ok(())
}

/// JSON when it parses, otherwise the raw text as a string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
