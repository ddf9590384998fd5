//! Configuration structures for Java application bundles.
//!
//! This module holds the in-memory model of everything that ends up in a
//! bundle's `Info.plist`: the [`BundleSettings`] root, its nested
//! [`DocumentType`], [`Service`] and [`HelpBook`] entries, and the
//! [`SettingsBuilder`] that validates descriptor input before a
//! [`BundleSettings`] value is handed to the serializer.

mod builder;
mod core;
mod document;
mod help_book;
mod service;

pub use self::builder::SettingsBuilder;
pub use self::core::{
    BundleSettings, DEFAULT_DEVELOPMENT_REGION, DEFAULT_EXECUTABLE, DEFAULT_JVM_VERSION,
    DEFAULT_SHORT_VERSION, DEFAULT_SIGNATURE, INFO_DICTIONARY_VERSION, JAVA_ROOT, PACKAGE_TYPE,
};
pub use self::document::DocumentType;
pub use self::help_book::HelpBook;
pub use self::service::Service;

/// Splits a whitespace- or comma-delimited attribute value into tokens.
///
/// Runs of delimiters are treated as one separator and leading or trailing
/// delimiters never produce empty tokens, so `" a,, b "` yields `["a", "b"]`.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_jarbundle::bundler::split_list;
///
/// assert_eq!(split_list("scansort scanproj"), vec!["scansort", "scanproj"]);
/// assert_eq!(split_list("i386,x86_64 ppc"), vec!["i386", "x86_64", "ppc"]);
/// assert!(split_list("  ").is_empty());
/// ```
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_spaces() {
        assert_eq!(split_list("scansort scanproj"), vec!["scansort", "scanproj"]);
    }

    #[test]
    fn test_split_list_mixed_delimiters() {
        assert_eq!(
            split_list("public.jpeg,\tpublic.png  public.tiff"),
            vec!["public.jpeg", "public.png", "public.tiff"]
        );
    }

    #[test]
    fn test_split_list_leading_delimiter() {
        assert_eq!(split_list(",ppc"), vec!["ppc"]);
        assert_eq!(split_list(" i386 "), vec!["i386"]);
    }

    #[test]
    fn test_split_list_empty() {
        assert!(split_list("").is_empty());
        assert!(split_list(", ,").is_empty());
    }
}
