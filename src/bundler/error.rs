//! Error types for bundler operations.
//!
//! Provides error handling with contextual error chaining,
//! filesystem-specific errors, and configuration-validation variants.
//!
//! # Features
//!
//! - **Context trait**: Add context to errors similar to anyhow
//! - **ErrorExt trait**: Filesystem operations with automatic path context
//! - **bail! macro**: Early return with formatted error messages
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_jarbundle::bundler::{ErrorExt, Result};
//! use std::path::Path;
//!
//! fn read_descriptor(path: &Path) -> Result<String> {
//!     let contents = std::fs::read_to_string(path)
//!         .fs_context("reading bundle descriptor", path)?;
//!     Ok(contents)
//! }
//! ```

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Errors returned by the bundler.
///
/// Covers I/O failures while writing bundle metadata, plist encoding
/// failures, and the configuration errors raised while a
/// [`SettingsBuilder`](super::SettingsBuilder) validates its input.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "writing Info.plist")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Generic I/O error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Regular expression error (attribute format validation).
    #[error("{0}")]
    RegexError(#[from] regex::Error),

    /// Property list (plist) encoding error.
    #[error("{0}")]
    Plist(#[from] plist::Error),

    /// A required bundle attribute was never set.
    #[error("required attribute \"{0}\" is not set")]
    MissingAttribute(&'static str),

    /// A bundle attribute was set to a malformed value.
    #[error("invalid \"{attribute}\" attribute: {reason}")]
    InvalidAttribute {
        /// Attribute name as it appears in the descriptor
        attribute: &'static str,
        /// What is wrong with the value
        reason: String,
    },

    /// A nested element that needs both a name and a value lacks one.
    #[error("'<{0}>' must have both 'name' and 'value' attributes")]
    IncompletePair(&'static str),

    /// Document type registration rejected.
    #[error("'<documenttype>' {reason}")]
    InvalidDocumentType {
        /// Why the document type was rejected
        reason: String,
    },

    /// Service registration rejected.
    #[error("'<service>' {reason}")]
    InvalidService {
        /// Why the service was rejected
        reason: String,
    },

    /// Help book registration rejected.
    #[error("'<helpbook>' {reason}")]
    InvalidHelpBook {
        /// Why the help book was rejected
        reason: String,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with bundler's Error type.
/// Works with both `Result<T, E>` and `Option<T>`.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Extension trait for filesystem operations with automatic path context.
///
/// Wraps I/O errors with the path that caused them for better diagnostics.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "writing file", "creating directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Macro for early return with error.
///
/// Converts the message into a [`Error::GenericError`] and returns immediately.
///
/// # Examples
///
/// ```ignore
/// bail!("operation failed");
/// bail!("invalid value: {}", value);
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError($msg.into()))
    };
    ($err:expr $(,)?) => {
        return Err($crate::bundler::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
