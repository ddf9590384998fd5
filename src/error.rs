//! Error types for jarbundle operations.
//!
//! This module defines the top-level error type with actionable error
//! messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jarbundle operations
pub type Result<T> = std::result::Result<T, JarBundleError>;

/// Main error type for all jarbundle operations
#[derive(Error, Debug)]
pub enum JarBundleError {
    /// Bundle descriptor errors
    #[error("Descriptor error: {0}")]
    Manifest(#[from] ManifestError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// Bundle descriptor errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Descriptor file could not be read
    #[error("Failed to read descriptor {path}: {source}")]
    ReadFailed {
        /// Descriptor path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Descriptor is not valid TOML or has unexpected attributes
    #[error("Failed to parse descriptor {path}: {source}")]
    ParseFailed {
        /// Descriptor path
        path: PathBuf,
        /// Parsing error
        #[source]
        source: toml::de::Error,
    },

    /// A Cargo.toml without a jarbundle table
    #[error("No [package.metadata.jarbundle] table in {path}")]
    MissingTable {
        /// Path to Cargo.toml
        path: PathBuf,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl JarBundleError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as BundlerError;

        match self {
            JarBundleError::Manifest(ManifestError::ReadFailed { path, .. }) => vec![
                format!("Check that {} exists and is readable", path.display()),
            ],
            JarBundleError::Manifest(ManifestError::ParseFailed { .. }) => vec![
                "Check the descriptor for TOML syntax errors".to_string(),
                "Attribute names are lowercase, e.g. 'mainclass' or 'jvmversion'".to_string(),
            ],
            JarBundleError::Manifest(ManifestError::MissingTable { .. }) => vec![
                "Add a [package.metadata.jarbundle] table to Cargo.toml".to_string(),
                "Or pass a standalone descriptor file instead".to_string(),
            ],
            JarBundleError::Bundler(BundlerError::MissingAttribute(attribute)) => vec![
                format!("Set '{attribute}' in the bundle descriptor"),
            ],
            JarBundleError::Bundler(BundlerError::InvalidAttribute { attribute, .. }) => vec![
                format!("Fix the value of '{attribute}' in the bundle descriptor"),
            ],
            JarBundleError::Bundler(BundlerError::InvalidDocumentType { .. }) => vec![
                "Give every [[documenttype]] a 'name' and a 'role'".to_string(),
                "Add at least one of 'extensions', 'ostypes' or 'mimetypes'".to_string(),
            ],
            JarBundleError::Bundler(BundlerError::InvalidService { .. }) => vec![
                "Give every [[service]] a 'message' and a unique 'menuitem'".to_string(),
                "Add 'sendtypes' or 'returntypes'".to_string(),
            ],
            JarBundleError::Bundler(BundlerError::InvalidHelpBook { .. }) => vec![
                "Set 'foldername' and 'name' on the [[helpbook]]".to_string(),
                "Or set 'helpbookfolder' and 'helpbookname' on the bundle".to_string(),
            ],
            JarBundleError::Bundler(BundlerError::Fs { path, .. }) => vec![
                format!("Check that {} is writable", path.display()),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundler_errors_have_specific_suggestions() {
        let err = JarBundleError::from(crate::bundler::Error::MissingAttribute("mainclass"));
        assert_eq!(
            err.recovery_suggestions(),
            vec!["Set 'mainclass' in the bundle descriptor".to_string()]
        );
    }

    #[test]
    fn test_missing_table_names_metadata_section() {
        let err = JarBundleError::from(ManifestError::MissingTable {
            path: "Cargo.toml".into(),
        });
        assert!(err.to_string().contains("[package.metadata.jarbundle]"));
    }
}
