//! Document type associations (`CFBundleDocumentTypes`).

use std::path::PathBuf;

use super::split_list;

/// One file association of the bundle.
///
/// The four list fields default to empty and are usually filled from a
/// delimited descriptor value through the `set_*` helpers.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_jarbundle::bundler::DocumentType;
///
/// let mut doc = DocumentType::new("Scan Project", "Editor");
/// doc.set_extensions("scansort scanproj");
/// assert_eq!(doc.extensions, vec!["scansort", "scanproj"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentType {
    /// `CFBundleTypeName`.
    pub name: Option<String>,
    /// `CFBundleTypeRole`: Editor, Viewer, Shell or None. Not checked.
    pub role: Option<String>,
    /// Icon for documents of this type; only the file name is written.
    pub icon_file: Option<PathBuf>,
    /// `LSTypeIsPackage`: documents are directories presented as files.
    pub is_bundle: bool,
    /// `CFBundleTypeExtensions`.
    pub extensions: Vec<String>,
    /// `CFBundleTypeOSTypes`: four-letter type codes.
    pub os_types: Vec<String>,
    /// `CFBundleTypeMIMETypes`.
    pub mime_types: Vec<String>,
    /// `LSItemContentTypes`: Uniform Type Identifiers.
    pub utis: Vec<String>,
}

impl DocumentType {
    /// Creates a document type with a name and role.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            role: Some(role.into()),
            ..Default::default()
        }
    }

    /// Replaces the extensions with the tokens of a delimited string.
    pub fn set_extensions(&mut self, value: &str) {
        self.extensions = split_list(value);
    }

    /// Replaces the OS type codes with the tokens of a delimited string.
    pub fn set_os_types(&mut self, value: &str) {
        self.os_types = split_list(value);
    }

    /// Replaces the MIME types with the tokens of a delimited string.
    pub fn set_mime_types(&mut self, value: &str) {
        self.mime_types = split_list(value);
    }

    /// Replaces the UTIs with the tokens of a delimited string.
    pub fn set_utis(&mut self, value: &str) {
        self.utis = split_list(value);
    }

    /// File name of the icon, as written to `CFBundleTypeIconFile`.
    pub fn icon_file_name(&self) -> Option<String> {
        self.icon_file
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// True when at least one of OS types, extensions or MIME types is set.
    pub fn has_type_designator(&self) -> bool {
        !(self.os_types.is_empty() && self.extensions.is_empty() && self.mime_types.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_file_name_strips_directories() {
        let mut doc = DocumentType::new("Image", "Viewer");
        doc.icon_file = Some(PathBuf::from("assets/icons/image.icns"));
        assert_eq!(doc.icon_file_name().as_deref(), Some("image.icns"));
    }

    #[test]
    fn test_type_designator() {
        let mut doc = DocumentType::new("Image", "Viewer");
        assert!(!doc.has_type_designator());

        doc.set_utis("public.png");
        assert!(!doc.has_type_designator());

        doc.set_mime_types("image/png");
        assert!(doc.has_type_designator());
    }
}
