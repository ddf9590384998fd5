//! Bundle metadata for a Java `.app` bundle.

use std::path::{Path, PathBuf};

use tokio::fs as tokio_fs;

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    info_plist::InfoPlist,
    notice::Notice,
    pkg_info::write_pkg_info,
    settings::BundleSettings,
    strings::{INFO_PLIST_STRINGS, lproj_dir, write_info_plist_strings},
    utils::fs,
};

/// Files written by [`write_bundle_metadata`].
#[derive(Clone, Debug, Default)]
pub struct BundleMetadata {
    /// Path of the written `Info.plist`.
    pub info_plist: PathBuf,
    /// Path of the written `PkgInfo`.
    pub pkg_info: PathBuf,
    /// One `InfoPlist.strings` per localized help book.
    pub localized_strings: Vec<PathBuf>,
    /// Non-fatal conditions raised while rendering.
    pub notices: Vec<Notice>,
}

impl BundleMetadata {
    /// All written paths, `Info.plist` first.
    pub fn paths(&self) -> Vec<&Path> {
        [self.info_plist.as_path(), self.pkg_info.as_path()]
            .into_iter()
            .chain(self.localized_strings.iter().map(PathBuf::as_path))
            .collect()
    }
}

/// Writes `Info.plist`, `PkgInfo` and localized help book strings into an
/// existing `Contents` directory.
///
/// Only the `Resources/<locale>.lproj` directories needed for localized help
/// books are created.
pub async fn write_bundle_metadata(
    contents_dir: &Path,
    settings: &BundleSettings,
) -> Result<BundleMetadata> {
    let metadata = tokio_fs::metadata(contents_dir)
        .await
        .fs_context("failed to read bundle contents directory", contents_dir)?;
    if !metadata.is_dir() {
        crate::bail!("{} is not a directory", contents_dir.display());
    }

    log::info!(
        "Writing bundle metadata for {} to {}",
        settings.bundle_name().unwrap_or("<unnamed>"),
        contents_dir.display()
    );

    let mut localized = Vec::new();
    for book in settings.help_books() {
        let Some(locale) = &book.locale else {
            continue;
        };
        let dir = contents_dir.join("Resources").join(lproj_dir(locale));
        fs::create_dir_all(&dir).await?;
        localized.push((book.clone(), dir.join(INFO_PLIST_STRINGS)));
    }

    let plist = InfoPlist::render(settings);
    let info_plist = contents_dir.join("Info.plist");
    let pkg_info = contents_dir.join("PkgInfo");
    let localized_strings = localized.iter().map(|(_, path)| path.clone()).collect();

    // The serializers write through std::fs, so keep them off the runtime.
    let settings = settings.clone();
    let written = BundleMetadata {
        info_plist,
        pkg_info,
        localized_strings,
        notices: plist.notices().to_vec(),
    };
    let paths = written.clone();
    tokio::task::spawn_blocking(move || -> Result<()> {
        plist.write(&paths.info_plist)?;
        write_pkg_info(&settings, &paths.pkg_info)?;
        for (book, path) in &localized {
            write_info_plist_strings(&settings, book, path)?;
        }
        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("bundle metadata task failed: {e}")))??;

    Ok(written)
}
