//! Bundle metadata for Java macOS application bundles.
//!
//! This module turns a bundle configuration into the metadata files the
//! macOS launcher reads from a Java `.app` bundle:
//!
//! - `Contents/Info.plist` describing identity, launch behavior, document
//!   types, services and the `Java` launch dictionary
//! - `Contents/PkgInfo`
//! - `Contents/Resources/<locale>.lproj/InfoPlist.strings` for localized
//!   help books
//!
//! # Integration
//!
//! ```no_run
//! use kodegen_bundler_jarbundle::bundler::{SettingsBuilder, write_bundle_metadata};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SettingsBuilder::new()
//!     .name("Bar Project")
//!     .main_class("org.bar.Main")
//!     .jar("build/bar.jar")
//!     .build()?;
//!
//! let written = write_bundle_metadata(Path::new("Bar.app/Contents"), &settings).await?;
//! for notice in &written.notices {
//!     eprintln!("{notice}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Copying jars, stubs and resources into the bundle is left to the caller.

#![warn(missing_docs)]

mod app;
mod error;
mod info_plist;
mod notice;
mod pkg_info;
mod settings;
mod strings;
mod utils;

// Public re-exports
pub use app::{BundleMetadata, write_bundle_metadata};
pub use error::{Context, Error, ErrorExt, Result};
pub use info_plist::{InfoPlist, parse_jvm_version, write_info_plist};
pub use notice::{Notice, SHORT_NAME_LIMIT};
pub use pkg_info::{pkg_info, write_pkg_info};
pub use settings::{
    BundleSettings,
    // Defaults and constants
    DEFAULT_DEVELOPMENT_REGION,
    DEFAULT_EXECUTABLE,
    DEFAULT_JVM_VERSION,
    DEFAULT_SHORT_VERSION,
    DEFAULT_SIGNATURE,
    INFO_DICTIONARY_VERSION,
    JAVA_ROOT,
    PACKAGE_TYPE,
    // Nested elements
    DocumentType,
    HelpBook,
    Service,
    SettingsBuilder,
    split_list,
};
pub use strings::{INFO_PLIST_STRINGS, info_plist_strings, lproj_dir, write_info_plist_strings};
