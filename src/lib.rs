//! Offline automation asset store.
//!
//! Variables, credentials, connections, and certificates are read from and
//! written to a local JSON document so runbook code can run without the
//! hosted asset service.

pub mod cli;
pub mod config;
pub mod errors;
pub mod store;
pub mod utils;

pub use config::{resolve_document_path, StoreConfig};
pub use errors::{AssetError, Result};
pub use store::{AssetStore, AssetType, Credential};
