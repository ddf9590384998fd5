//! Plist command implementation.
//!
//! Renders the Info.plist of a descriptor to stdout. Notices are printed as
//! warnings on stderr so stdout carries only the document.

use std::path::Path;

use super::helpers::{load_settings, report_notices};
use crate::bundler::InfoPlist;
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Execute plist command
pub(super) async fn execute_plist(descriptor: &Path, config: &RuntimeConfig) -> Result<i32> {
    let (settings, mut notices) = load_settings(descriptor, config).await?;

    let plist = InfoPlist::render(&settings);
    let xml = plist.to_xml()?;
    notices.extend(plist.into_notices());

    config.output().document(&xml)?;
    report_notices(&notices, config);

    Ok(0)
}
