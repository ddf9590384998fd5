//! `PkgInfo`: the package type immediately followed by the signature.

use std::io::Write;
use std::path::Path;

use crate::bundler::error::{Context, Result};
use crate::bundler::settings::BundleSettings;
use crate::bundler::utils::fs;

/// Contents of the `PkgInfo` file, e.g. `"APPL????\n"`.
pub fn pkg_info(settings: &BundleSettings) -> String {
    format!("{}{}\n", settings.package_type(), settings.signature)
}

/// Writes `PkgInfo` to `path`.
pub fn write_pkg_info(settings: &BundleSettings, path: &Path) -> Result<()> {
    log::info!("Writing {}", path.display());
    let contents = pkg_info(settings);
    fs::write_file(path, |writer| Ok(writer.write_all(contents.as_bytes())?))
        .with_context(|| format!("failed to write PkgInfo to {}", path.display()))
}
