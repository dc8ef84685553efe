// Asset store: typed records in a single JSON document, read fresh on every
// call and rewritten in full on every update.

mod accessor;
mod certificate;
pub mod document;
mod models;

pub use accessor::AssetStore;
pub use certificate::{reexport_pkcs12, EXPORT_PASSPHRASE};
pub use document::AssetDocument;
pub use models::{
    AssetType, Credential, KEY_CERT_PATH, KEY_CONNECTION_FIELDS, KEY_NAME, KEY_PASSWORD,
    KEY_USERNAME, KEY_VALUE,
};
