//! Shared helpers for command implementations.

use std::path::Path;

use crate::bundler::{BundleSettings, Notice};
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::manifest::load_descriptor;

/// Loads `descriptor` and builds validated settings.
///
/// Returns the notices from both the descriptor and the settings builder.
pub(super) async fn load_settings(
    descriptor: &Path,
    config: &RuntimeConfig,
) -> Result<(BundleSettings, Vec<Notice>)> {
    config.verbose_println(&format!("Reading {}", descriptor.display()));

    let (builder, mut notices) = load_descriptor(descriptor).await?.into_builder()?;
    let (settings, build_notices) = builder.build_with_notices()?;
    notices.extend(build_notices);

    Ok((settings, notices))
}

/// Prints notices as warnings.
pub(super) fn report_notices(notices: &[Notice], config: &RuntimeConfig) {
    for notice in notices {
        config.warning_println(&notice.to_string());
    }
}
