use super::types::AssetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl AssetError {
    /// Classify this error by name and the process exit code the CLI reports for it.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            AssetError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                exit_code: 3,
            },
            AssetError::Certificate(_) => ErrorClassification {
                error_type: "CertificateError",
                exit_code: 4,
            },

            // Settings problems
            AssetError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            AssetError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 2,
            },

            // Document and filesystem failures
            AssetError::Malformed(_) => ErrorClassification {
                error_type: "MalformedDocumentError",
                exit_code: 1,
            },
            AssetError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            AssetError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound(_))
    }
}
