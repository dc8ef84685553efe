pub mod types;
pub mod classification;

pub use types::{AssetError, Result};
pub use classification::ErrorClassification;
