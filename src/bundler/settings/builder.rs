//! Builder that validates bundle attributes into [`BundleSettings`].

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use super::{BundleSettings, DocumentType, HelpBook, Service, split_list};
use crate::bundler::error::{Error, Result};
use crate::bundler::notice::Notice;

/// `NSPreferencesContentSize` must be two decimal integers.
const CONTENT_SIZE_PATTERN: &str = r"^[0-9]+,[0-9]+$";

/// Deprecated boolean attributes and the Java properties that replace them.
const DEPRECATED_FLAGS: [(&str, &str); 4] = [
    ("antialiasedgraphics", "apple.awt.antialiasing"),
    ("antialiasedtext", "apple.awt.textantialiasing"),
    ("screenmenu", "apple.laf.useScreenMenuBar"),
    ("growbox", "apple.awt.showGrowBox"),
];

/// Builder for constructing [`BundleSettings`].
///
/// Collects bundle attributes and nested elements, then checks them in
/// [`build`](Self::build). All checks that reject malformed input live
/// here; the serializer trusts whatever this builder produced.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_jarbundle::bundler::{Service, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_jarbundle::bundler::Result<()> {
/// let mut service = Service::new("lookUp", "Look Up in Bar");
/// service.set_send_types("NSStringPboardType");
///
/// let settings = SettingsBuilder::new()
///     .name("Bar Project")
///     .main_class("org.bar.Main")
///     .jar("build/bar.jar")
///     .service(service)
///     .build()?;
///
/// assert_eq!(settings.class_path(), vec!["$JAVAROOT/bar.jar"]);
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`BundleSettings`] - The built settings struct
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    settings: BundleSettings,
    short_name: Option<String>,
    content_size: Option<String>,
    document_types: Vec<DocumentType>,
    services: Vec<Service>,
    help_books: Vec<HelpBook>,
    deprecated_flags: [Option<bool>; 4],
}

impl SettingsBuilder {
    /// Creates a new settings builder with every field at its default.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the application name.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.settings.application_name = Some(name.into());
        self
    }

    /// Sets the fully qualified main class.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn main_class(mut self, main_class: impl Into<String>) -> Self {
        self.settings.main_class = Some(main_class.into());
        self
    }

    /// Sets the short name shown in the menu bar.
    ///
    /// Names over 16 characters are accepted with a notice.
    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// Sets the Finder version label.
    ///
    /// Default: "1.0"
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.settings.short_version = version.into();
        self
    }

    /// Sets the build number.
    pub fn build_version(mut self, build: impl Into<String>) -> Self {
        self.settings.build_version = Some(build.into());
        self
    }

    /// Sets the four-letter creator code.
    ///
    /// Default: "????"
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.settings.signature = signature.into();
        self
    }

    /// Accepted for compatibility; the package type is always `"APPL"`.
    pub fn package_type(self, _package_type: impl Into<String>) -> Self {
        self
    }

    /// Accepted for compatibility; the dictionary version is always `"6.0"`.
    pub fn info_dictionary_version(self, _version: impl Into<String>) -> Self {
        self
    }

    /// Sets the launcher stub name.
    ///
    /// Default: "JavaApplicationStub"
    pub fn executable(mut self, executable: impl Into<String>) -> Self {
        self.settings.executable = executable.into();
        self
    }

    /// Sets the development region.
    ///
    /// Default: "English"
    pub fn development_region(mut self, region: impl Into<String>) -> Self {
        self.settings.development_region = region.into();
        self
    }

    /// Sets the application icon. Only the file name is recorded.
    pub fn icon(mut self, icon: impl AsRef<Path>) -> Self {
        self.settings.icon_file = file_name(icon.as_ref());
        self
    }

    /// Sets the splash image passed to the Java launcher.
    pub fn splash_file(mut self, splash: impl Into<String>) -> Self {
        self.settings.splash_file = Some(splash.into());
        self
    }

    /// Sets the bundle identifier.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.settings.identifier = Some(identifier.into());
        self
    }

    /// Sets the copyright notice.
    pub fn copyright(mut self, copyright: impl Into<String>) -> Self {
        self.settings.copyright = Some(copyright.into());
        self
    }

    /// Sets the bundle-level help book folder.
    pub fn help_book_folder(mut self, folder: impl Into<String>) -> Self {
        self.settings.help_book_folder = Some(folder.into());
        self
    }

    /// Sets the bundle-level help book name.
    pub fn help_book_name(mut self, name: impl Into<String>) -> Self {
        self.settings.help_book_name = Some(name.into());
        self
    }

    /// Sets the preferred content size as `"width,height"`.
    ///
    /// Checked against `^[0-9]+,[0-9]+$` when building.
    pub fn content_size(mut self, size: impl Into<String>) -> Self {
        self.content_size = Some(size.into());
        self
    }

    /// Sets the App Store category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.settings.category = Some(category.into());
        self
    }

    /// Allows mixed localizations.
    pub fn allow_mixed_localizations(mut self, allow: bool) -> Self {
        self.settings.allow_mixed_localizations = allow;
        self
    }

    /// Declares Retina support.
    pub fn high_resolution_capable(mut self, capable: bool) -> Self {
        self.settings.high_resolution_capable = capable;
        self
    }

    /// Declares support for automatic graphics switching.
    ///
    /// Default: true
    pub fn automatic_graphics_switching(mut self, supported: bool) -> Self {
        self.settings.automatic_graphics_switching = supported;
        self
    }

    /// Marks the application as an agent (`LSUIElement`).
    pub fn is_agent(mut self, agent: bool) -> Self {
        self.settings.ui_element = Some(agent);
        self
    }

    /// Starts the Java main class on the first thread.
    pub fn start_on_main_thread(mut self, main_thread: bool) -> Self {
        self.settings.start_on_main_thread = Some(main_thread);
        self
    }

    /// Writes the launch dictionary under `JavaX` instead of `Java`.
    pub fn use_javax_key(mut self, javax: bool) -> Self {
        self.settings.use_javax_key = javax;
        self
    }

    /// Sets the required JVM version.
    ///
    /// Default: "1.3+"
    pub fn jvm_version(mut self, version: impl Into<String>) -> Self {
        self.settings.jvm_version = Some(version.into());
        self
    }

    /// Appends the tokens of a delimited list to the supported JVM architectures.
    pub fn jvm_archs(mut self, archs: &str) -> Self {
        self.settings.jvm_archs.extend(split_list(archs));
        self
    }

    /// Appends the tokens of a delimited list to the architecture priority.
    pub fn architecture_priority(mut self, archs: &str) -> Self {
        self.settings.architecture_priority.extend(split_list(archs));
        self
    }

    /// Sets JVM options.
    pub fn vm_options(mut self, options: impl Into<String>) -> Self {
        self.settings.vm_options = Some(options.into());
        self
    }

    /// Sets the JVM working directory.
    pub fn working_directory(mut self, dir: impl Into<String>) -> Self {
        self.settings.working_directory = Some(dir.into());
        self
    }

    /// Sets the main class arguments.
    pub fn arguments(mut self, arguments: impl Into<String>) -> Self {
        self.settings.arguments = Some(arguments.into());
        self
    }

    /// Sets the Sparkle feed URL.
    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.settings.feed_url = Some(url.into());
        self
    }

    /// Sets the Sparkle public DSA key file.
    pub fn public_dsa_key_file(mut self, file: impl Into<String>) -> Self {
        self.settings.public_dsa_key_file = Some(file.into());
        self
    }

    /// Adds a jar copied into the Java root. Its file name becomes a
    /// `$JAVAROOT/` classpath entry.
    pub fn jar(mut self, jar: impl AsRef<Path>) -> Self {
        if let Some(name) = file_name(jar.as_ref()) {
            self.settings.add_class_path_entry(name);
        }
        self
    }

    /// Adds a classpath entry relative to the Java root.
    pub fn class_path_entry(mut self, entry: impl AsRef<str>) -> Self {
        self.settings.add_class_path_entry(entry);
        self
    }

    /// Adds an external classpath entry, kept verbatim.
    pub fn extra_class_path(mut self, entry: impl Into<String>) -> Self {
        self.settings.add_extra_class_path_entry(entry);
        self
    }

    /// Adds a Java system property.
    pub fn java_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.add_java_property(name, value);
        self
    }

    /// Adds a launch environment variable. Name and value are trimmed.
    pub fn environment_variable(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.settings
            .add_environment_variable(name.as_ref().trim(), value.as_ref().trim());
        self
    }

    /// Adds a document type.
    pub fn document_type(mut self, document_type: DocumentType) -> Self {
        self.document_types.push(document_type);
        self
    }

    /// Adds a Services menu entry.
    pub fn service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Adds a help book.
    pub fn help_book(mut self, help_book: HelpBook) -> Self {
        self.help_books.push(help_book);
        self
    }

    /// Deprecated: sets `apple.awt.antialiasing`.
    pub fn antialiased_graphics(mut self, enabled: bool) -> Self {
        self.deprecated_flags[0] = Some(enabled);
        self
    }

    /// Deprecated: sets `apple.awt.textantialiasing`.
    pub fn antialiased_text(mut self, enabled: bool) -> Self {
        self.deprecated_flags[1] = Some(enabled);
        self
    }

    /// Deprecated: sets `apple.laf.useScreenMenuBar`.
    pub fn screen_menu(mut self, enabled: bool) -> Self {
        self.deprecated_flags[2] = Some(enabled);
        self
    }

    /// Deprecated: sets `apple.awt.showGrowBox`.
    pub fn grow_box(mut self, enabled: bool) -> Self {
        self.deprecated_flags[3] = Some(enabled);
        self
    }

    /// Builds the settings, dropping the notices.
    ///
    /// Notices are logged where they are raised.
    ///
    /// # Errors
    ///
    /// See [`build_with_notices`](Self::build_with_notices).
    pub fn build(self) -> Result<BundleSettings> {
        self.build_with_notices().map(|(settings, _)| settings)
    }

    /// Builds the settings and returns the non-fatal notices raised on the way.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingAttribute`] if the name or main class is unset
    /// - [`Error::InvalidAttribute`] for a malformed content size
    /// - [`Error::InvalidDocumentType`], [`Error::InvalidService`] or
    ///   [`Error::InvalidHelpBook`] for a rejected nested element
    pub fn build_with_notices(self) -> Result<(BundleSettings, Vec<Notice>)> {
        let mut settings = self.settings;
        let mut notices = Vec::new();

        if settings.application_name.is_none() {
            return Err(Error::MissingAttribute("name"));
        }
        if settings.main_class.is_none() {
            return Err(Error::MissingAttribute("mainclass"));
        }

        if let Some(short_name) = self.short_name {
            notices.extend(settings.set_short_name(short_name));
        }

        if let Some(size) = self.content_size {
            if !Regex::new(CONTENT_SIZE_PATTERN)?.is_match(&size) {
                return Err(Error::InvalidAttribute {
                    attribute: "contentsize",
                    reason: format!("\"{size}\" is not in the format 'width,height'"),
                });
            }
            settings.content_size = Some(size);
        }

        for document_type in self.document_types {
            validate_document_type(&document_type)?;
            settings.add_document_type(document_type);
        }

        let mut menu_items = HashSet::new();
        for service in self.services {
            validate_service(&service, &mut menu_items)?;
            settings.add_service(service);
        }

        for mut help_book in self.help_books {
            if help_book.folder_name.is_none() {
                help_book.folder_name = Some(settings.help_book_folder.clone().ok_or_else(|| {
                    Error::InvalidHelpBook {
                        reason: "needs a 'foldername' or a bundle-level 'helpbookfolder'".into(),
                    }
                })?);
            }
            if help_book.name.is_none() {
                help_book.name = Some(settings.help_book_name.clone().ok_or_else(|| {
                    Error::InvalidHelpBook {
                        reason: "needs a 'name' or a bundle-level 'helpbookname'".into(),
                    }
                })?);
            }
            settings.add_help_book(help_book);
        }

        for ((attribute, property), flag) in DEPRECATED_FLAGS.iter().zip(self.deprecated_flags) {
            if let Some(enabled) = flag {
                settings.add_java_property(*property, enabled.to_string());
                let notice = Notice::DeprecatedAttribute {
                    attribute: attribute.to_string(),
                    replacement: property.to_string(),
                };
                log::warn!("{notice}");
                notices.push(notice);
            }
        }

        Ok((settings, notices))
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

fn validate_document_type(document_type: &DocumentType) -> Result<()> {
    let Some(name) = document_type.name.as_deref() else {
        return Err(Error::InvalidDocumentType {
            reason: "must have both a 'name' and a 'role' attribute".into(),
        });
    };
    if document_type.role.is_none() {
        return Err(Error::InvalidDocumentType {
            reason: "must have both a 'name' and a 'role' attribute".into(),
        });
    }
    if !document_type.has_type_designator() {
        return Err(Error::InvalidDocumentType {
            reason: format!("of \"{name}\" must have 'osTypes' or 'extensions' or 'mimeTypes'"),
        });
    }
    Ok(())
}

fn validate_service(service: &Service, menu_items: &mut HashSet<String>) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidService {
        reason: reason.to_string(),
    };

    if service.message.is_none() {
        return Err(invalid("must have a \"message\" attribute"));
    }
    let Some(menu_item) = service.menu_item.as_deref() else {
        return Err(invalid("must have a \"menuItem\" attribute"));
    };
    if !menu_items.insert(menu_item.to_string()) {
        return Err(Error::InvalidService {
            reason: format!("\"menuItem\" value \"{menu_item}\" must be unique"),
        });
    }
    if service.send_types.is_empty() && service.return_types.is_empty() {
        return Err(invalid(
            "must have either a \"sendTypes\" attribute, a \"returnTypes\" attribute or both",
        ));
    }
    if let Some(key) = service.key_equivalent.as_deref()
        && key.chars().count() != 1
    {
        return Err(invalid("\"keyEquivalent\" must be one character if present"));
    }
    if let Some(timeout) = service.timeout.as_deref() {
        let timeout: i64 = timeout
            .parse()
            .map_err(|_| invalid("\"timeout\" must be a positive integral number"))?;
        if timeout < 0 {
            return Err(invalid("\"timeout\" must not be negative"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SettingsBuilder {
        SettingsBuilder::new().name("Bar Project").main_class("org.bar.Main")
    }

    fn text_service(menu_item: &str) -> Service {
        let mut service = Service::new("lookUp", menu_item);
        service.set_send_types("NSStringPboardType");
        service
    }

    #[test]
    fn test_missing_required_attributes() {
        let err = SettingsBuilder::new().main_class("org.bar.Main").build().unwrap_err();
        assert!(matches!(err, Error::MissingAttribute("name")));

        let err = SettingsBuilder::new().name("Bar").build().unwrap_err();
        assert!(matches!(err, Error::MissingAttribute("mainclass")));
    }

    #[test]
    fn test_content_size_pattern() {
        let settings = base().content_size("640,480").build().unwrap();
        assert_eq!(settings.content_size.as_deref(), Some("640,480"));

        for bad in ["640x480", "640,", ",480", "640, 480", "-1,2"] {
            let err = base().content_size(bad).build().unwrap_err();
            assert!(
                matches!(err, Error::InvalidAttribute { attribute: "contentsize", .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_document_type_requires_designator() {
        let err = base()
            .document_type(DocumentType::new("Scan", "Editor"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must have 'osTypes' or 'extensions' or 'mimeTypes'"));

        let mut doc = DocumentType::new("Scan", "Editor");
        doc.set_os_types("SCAN");
        let settings = base().document_type(doc).build().unwrap();
        assert_eq!(settings.document_types().len(), 1);
    }

    #[test]
    fn test_document_type_requires_role() {
        let doc = DocumentType {
            name: Some("Scan".into()),
            extensions: vec!["scan".into()],
            ..Default::default()
        };
        assert!(matches!(
            base().document_type(doc).build(),
            Err(Error::InvalidDocumentType { .. })
        ));
    }

    #[test]
    fn test_service_key_equivalent_must_be_one_character() {
        let mut service = text_service("Foo");
        service.key_equivalent = Some("FF".into());

        let err = base().service(service).build().unwrap_err();
        assert!(matches!(err, Error::InvalidService { .. }));
        assert!(err.to_string().contains("keyEquivalent"));
    }

    #[test]
    fn test_service_menu_items_unique_per_build() {
        let err = base()
            .service(text_service("Foo"))
            .service(text_service("Foo"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must be unique"));

        // A separate build does not see the menu items of the first one.
        assert!(base().service(text_service("Foo")).build().is_ok());
        assert!(base().service(text_service("Foo")).build().is_ok());
    }

    #[test]
    fn test_service_needs_send_or_return_types() {
        let err = base()
            .service(Service::new("lookUp", "Foo"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("sendTypes"));

        let mut service = Service::new("lookUp", "Foo");
        service.set_return_types("NSStringPboardType");
        assert!(base().service(service).build().is_ok());
    }

    #[test]
    fn test_service_timeout() {
        let mut service = text_service("Foo");
        service.timeout = Some("abc".into());
        assert!(base().service(service.clone()).build().is_err());

        service.timeout = Some("-5".into());
        let err = base().service(service.clone()).build().unwrap_err();
        assert!(err.to_string().contains("must not be negative"));

        service.timeout = Some("500".into());
        assert!(base().service(service).build().is_ok());
    }

    #[test]
    fn test_help_book_falls_back_to_bundle_keys() {
        let err = base()
            .help_book(HelpBook::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHelpBook { .. }));

        let settings = base()
            .help_book_folder("Help")
            .help_book_name("Bar Help")
            .help_book(HelpBook::default().localized("German"))
            .build()
            .unwrap();
        let book = &settings.help_books()[0];
        assert_eq!(book.folder_name.as_deref(), Some("Help"));
        assert_eq!(book.name.as_deref(), Some("Bar Help"));
    }

    #[test]
    fn test_deprecated_flags_become_java_properties() {
        let (settings, notices) = base()
            .antialiased_text(true)
            .grow_box(false)
            .build_with_notices()
            .unwrap();

        assert_eq!(
            settings.java_properties().get("apple.awt.textantialiasing").map(String::as_str),
            Some("true")
        );
        assert_eq!(
            settings.java_properties().get("apple.awt.showGrowBox").map(String::as_str),
            Some("false")
        );
        assert!(!settings.java_properties().contains_key("apple.awt.antialiasing"));
        assert_eq!(notices.len(), 2);
    }

    #[test]
    fn test_long_short_name_is_a_notice() {
        let (settings, notices) = base()
            .short_name("An Extremely Long Name")
            .build_with_notices()
            .unwrap();
        assert_eq!(settings.bundle_name(), Some("An Extremely Long Name"));
        assert!(matches!(notices.as_slice(), [Notice::ShortNameTooLong { .. }]));
    }

    #[test]
    fn test_build_keeps_long_short_name() {
        let settings = base().short_name("An Extremely Long Name").build().unwrap();
        assert_eq!(settings.short_name.as_deref(), Some("An Extremely Long Name"));
    }

    #[test]
    fn test_inert_setters_keep_constants() {
        let settings = base()
            .package_type("BNDL")
            .info_dictionary_version("7.0")
            .build()
            .unwrap();
        assert_eq!(settings.package_type(), "APPL");
        assert_eq!(settings.info_dictionary_version(), "6.0");
    }

    #[test]
    fn test_jar_uses_file_name() {
        let settings = base()
            .jar("build/libs/bar.jar")
            .class_path_entry("lib/dep.jar")
            .extra_class_path("/System/Library/Java")
            .build()
            .unwrap();
        assert_eq!(
            settings.class_path(),
            vec!["$JAVAROOT/bar.jar", "$JAVAROOT/lib/dep.jar", "/System/Library/Java"]
        );
    }

    #[test]
    fn test_environment_is_trimmed() {
        let settings = base()
            .environment_variable(" JAVA_HOME ", " /opt/jdk ")
            .build()
            .unwrap();
        assert_eq!(
            settings.environment().get("JAVA_HOME").map(String::as_str),
            Some("/opt/jdk")
        );
    }

    #[test]
    fn test_architecture_lists_are_split() {
        let settings = base()
            .jvm_archs("x86_64 arm64")
            .architecture_priority("arm64,x86_64")
            .build()
            .unwrap();
        assert_eq!(settings.jvm_archs, vec!["x86_64", "arm64"]);
        assert_eq!(settings.architecture_priority, vec!["arm64", "x86_64"]);
    }
}
