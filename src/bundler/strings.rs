//! Localized `InfoPlist.strings` for help books.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::bundler::error::{Context, Result};
use crate::bundler::settings::{BundleSettings, HelpBook};
use crate::bundler::utils::fs;

/// File name of the localized strings table.
pub const INFO_PLIST_STRINGS: &str = "InfoPlist.strings";

/// Directory of a localization below `Resources`, e.g. `German.lproj`.
pub fn lproj_dir(locale: &str) -> PathBuf {
    PathBuf::from(format!("{locale}.lproj"))
}

/// Renders the strings table announcing `book` in its localization.
pub fn info_plist_strings(settings: &BundleSettings, book: &HelpBook) -> String {
    let mut out = String::new();
    let entries = [
        ("CFBundleHelpBookFolder", book.folder_name.as_deref()),
        ("CFBundleHelpBookName", book.name.as_deref()),
        ("CFBundleName", settings.bundle_name()),
    ];
    for (key, value) in entries {
        if let Some(value) = value {
            out.push_str(&format!("{key} = \"{}\";\n", escape(value)));
        }
    }
    out
}

/// Writes the strings table for `book` to `path`.
pub fn write_info_plist_strings(
    settings: &BundleSettings,
    book: &HelpBook,
    path: &Path,
) -> Result<()> {
    log::info!("Writing {}", path.display());
    let contents = info_plist_strings(settings, book);
    fs::write_file(path, |writer| Ok(writer.write_all(contents.as_bytes())?))
        .with_context(|| format!("failed to write {INFO_PLIST_STRINGS} to {}", path.display()))
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
