//! # kodegen_bundler_jarbundle
//!
//! Bundle metadata for Java applications packaged as macOS `.app` bundles.
//!
//! This crate renders the `Info.plist` and `PkgInfo` files the macOS launcher
//! reads from a Java application bundle, from a TOML bundle descriptor or a
//! programmatically built configuration.
//!
//! ## Features
//!
//! - **Validated configuration**: [`bundler::SettingsBuilder`] rejects malformed
//!   document types, services and attribute values before anything is written
//! - **Fixed key order**: the plist is emitted in one pass with a stable layout
//! - **Java launch dictionary**: classpath, JVM options and properties under
//!   `Java` or `JavaX`, with `com.apple.` properties dropped for 1.4+ JVMs
//! - **Localized help books**: `InfoPlist.strings` per localization
//!
//! ## Usage
//!
//! ```bash
//! kodegen_bundler_jarbundle check bundle.toml
//! kodegen_bundler_jarbundle plist Cargo.toml
//! kodegen_bundler_jarbundle write bundle.toml --contents-dir Bar.app/Contents
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod bundler;
pub mod cli;
pub mod error;
pub mod manifest;

// Re-export main types for public API
pub use bundler::{BundleSettings, InfoPlist, Notice, SettingsBuilder};
pub use cli::Args;
pub use error::{CliError, JarBundleError, ManifestError, Result};
pub use manifest::{BundleDescriptor, load_descriptor};
