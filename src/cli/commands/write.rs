//! Write command implementation.
//!
//! Writes Info.plist, PkgInfo and localized help book strings into the
//! Contents directory of an existing bundle.

use std::path::Path;

use super::helpers::{load_settings, report_notices};
use crate::bundler::write_bundle_metadata;
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Execute write command
pub(super) async fn execute_write(
    descriptor: &Path,
    contents_dir: &Path,
    show_plist: bool,
    config: &RuntimeConfig,
) -> Result<i32> {
    let (settings, mut notices) = load_settings(descriptor, config).await?;

    let _ = config.output().info(&format!(
        "Writing bundle metadata to {}",
        contents_dir.display()
    ));
    let written = write_bundle_metadata(contents_dir, &settings).await?;
    notices.extend(written.notices.iter().cloned());

    for path in written.paths() {
        config.verbose_println(&format!("Wrote {}", path.display()));
    }

    if show_plist {
        let xml = tokio::fs::read_to_string(&written.info_plist).await?;
        config.println("");
        for line in xml.lines() {
            log::info!("{line}");
            config.indent(line);
        }
        config.println("");
    }

    report_notices(&notices, config);
    config.success_println(&format!(
        "Wrote bundle metadata for {} to {}",
        settings.bundle_name().unwrap_or("bundle"),
        contents_dir.display()
    ));

    Ok(0)
}
