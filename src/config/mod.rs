pub mod credentials;
pub mod parser;
pub mod types;

use std::ffi::OsString;
use std::path::PathBuf;

pub use parser::parse_config;
pub use types::*;

/// Environment variable that overrides the asset document location.
pub const ASSET_FILE_ENV: &str = "AUTOMATION_ASSET_FILE";

/// File name of the document shipped at the crate root.
pub const DEFAULT_ASSET_FILE_NAME: &str = "localassets.json";

/// The document shipped alongside the crate.
///
/// The crate directory is fixed at compile time, so an installed binary still
/// looks in the checkout it was built from; set `AUTOMATION_ASSET_FILE` or
/// pass an explicit path when running elsewhere.
pub fn default_document_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ASSET_FILE_NAME)
}

/// Resolve the asset document path from `AUTOMATION_ASSET_FILE`, falling back
/// to the shipped default. The file is not required to exist.
pub fn resolve_document_path() -> PathBuf {
    document_path_from(std::env::var_os(ASSET_FILE_ENV))
}

/// Same as [`resolve_document_path`] with the environment value supplied by the caller.
/// Any set value wins, even an empty one.
pub fn document_path_from(env_value: Option<OsString>) -> PathBuf {
    match env_value {
        Some(value) => PathBuf::from(value),
        None => default_document_path(),
    }
}
