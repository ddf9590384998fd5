//! Help book registration.

/// A help book shipped in the bundle's resources.
///
/// Without a locale the book lives at `Resources/<folder>` and becomes the
/// bundle-level help book. With a locale it lives at
/// `Resources/<locale>.lproj/<folder>` and is announced through that
/// localization's `InfoPlist.strings`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelpBook {
    /// Folder containing the book.
    pub folder_name: Option<String>,
    /// Book title.
    pub name: Option<String>,
    /// Localization, e.g. "German" or "de".
    pub locale: Option<String>,
}

impl HelpBook {
    /// Creates an unlocalized help book.
    pub fn new(folder_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            folder_name: Some(folder_name.into()),
            name: Some(name.into()),
            locale: None,
        }
    }

    /// Returns this book localized for `locale`.
    pub fn localized(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
