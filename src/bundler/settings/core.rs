//! The root bundle configuration.

use std::collections::BTreeMap;

use super::{DocumentType, HelpBook, Service};
use crate::bundler::notice::{Notice, SHORT_NAME_LIMIT};

/// Root-variable prefix the launcher stub expands to `Contents/Resources/Java`.
pub const JAVA_ROOT: &str = "$JAVAROOT";

/// Default `CFBundleShortVersionString`.
pub const DEFAULT_SHORT_VERSION: &str = "1.0";

/// Default `CFBundleSignature`.
pub const DEFAULT_SIGNATURE: &str = "????";

/// Default `CFBundleExecutable`.
pub const DEFAULT_EXECUTABLE: &str = "JavaApplicationStub";

/// Default `CFBundleDevelopmentRegion`.
pub const DEFAULT_DEVELOPMENT_REGION: &str = "English";

/// Default `JVMVersion` requirement.
pub const DEFAULT_JVM_VERSION: &str = "1.3+";

/// `CFBundlePackageType` of every application bundle.
pub const PACKAGE_TYPE: &str = "APPL";

/// `CFBundleInfoDictionaryVersion` written to every bundle.
pub const INFO_DICTIONARY_VERSION: &str = "6.0";

/// Bundle configuration for a Java application.
///
/// Holds every value that is serialized into `Info.plist` and `PkgInfo`.
/// The model performs no validation: unset required fields are simply
/// omitted by the serializer. Use [`SettingsBuilder`](super::SettingsBuilder)
/// to obtain a validated instance.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_jarbundle::bundler::BundleSettings;
///
/// let mut settings = BundleSettings::new("Bar Project", "org.bar.Main");
/// settings.add_class_path_entry("bar.jar");
/// settings.add_extra_class_path_entry("/Library/Java/Extensions/baz.jar");
///
/// assert_eq!(settings.bundle_name(), Some("Bar Project"));
/// assert_eq!(
///     settings.class_path(),
///     vec!["$JAVAROOT/bar.jar", "/Library/Java/Extensions/baz.jar"]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct BundleSettings {
    /// Application name, used for the `.app` directory.
    ///
    /// Required.
    pub application_name: Option<String>,

    /// Fully qualified Java main class.
    ///
    /// Required.
    pub main_class: Option<String>,

    /// Short name shown in the menu bar (`CFBundleName`).
    ///
    /// Falls back to [`application_name`](Self::application_name) when unset.
    ///
    /// Default: None
    pub short_name: Option<String>,

    /// Finder version label (`CFBundleShortVersionString`).
    ///
    /// Default: "1.0"
    pub short_version: String,

    /// Build number (`CFBundleVersion`).
    ///
    /// Default: None
    pub build_version: Option<String>,

    /// Four-letter creator code (`CFBundleSignature`).
    ///
    /// Default: "????"
    pub signature: String,

    /// Launcher stub name inside `Contents/MacOS` (`CFBundleExecutable`).
    ///
    /// Default: "JavaApplicationStub"
    pub executable: String,

    /// Native development region (`CFBundleDevelopmentRegion`).
    ///
    /// Default: "English"
    pub development_region: String,

    /// Icon file name inside `Contents/Resources` (`CFBundleIconFile`).
    ///
    /// Default: None
    pub icon_file: Option<String>,

    /// Splash image for the Java launcher (`SplashFile`).
    ///
    /// Default: None
    pub splash_file: Option<String>,

    /// Reverse-DNS bundle identifier (`CFBundleIdentifier`).
    ///
    /// Default: None
    pub identifier: Option<String>,

    /// Copyright notice (`NSHumanReadableCopyright`).
    ///
    /// Default: None
    pub copyright: Option<String>,

    /// Help book folder (`CFBundleHelpBookFolder`).
    ///
    /// Default: None
    pub help_book_folder: Option<String>,

    /// Help book name (`CFBundleHelpBookName`).
    ///
    /// Default: None
    pub help_book_name: Option<String>,

    /// Preferred window content size as `"width,height"`
    /// (`NSPreferencesContentSize`).
    ///
    /// Default: None
    pub content_size: Option<String>,

    /// App Store category (`LSApplicationCategoryType`).
    ///
    /// Example: "public.app-category.music"
    ///
    /// Default: None
    pub category: Option<String>,

    /// `CFBundleAllowMixedLocalizations`.
    ///
    /// Default: false
    pub allow_mixed_localizations: bool,

    /// `NSHighResolutionCapable`. Written only when true.
    ///
    /// Default: false
    pub high_resolution_capable: bool,

    /// `NSSupportsAutomaticGraphicsSwitching`. Written only when true.
    ///
    /// Default: true
    pub automatic_graphics_switching: bool,

    /// `LSUIElement`: run as an agent without a Dock icon.
    ///
    /// `None` omits the key; `Some(false)` writes `<false/>`.
    ///
    /// Default: None
    pub ui_element: Option<bool>,

    /// `StartOnMainThread` inside the Java dictionary.
    ///
    /// `None` omits the key.
    ///
    /// Default: None
    pub start_on_main_thread: Option<bool>,

    /// Write the launch dictionary under `JavaX` instead of `Java`.
    ///
    /// Used by launcher stubs that support newer JVMs.
    ///
    /// Default: false
    pub use_javax_key: bool,

    /// JVM version requirement (`JVMVersion`).
    ///
    /// Default: "1.3+"
    pub jvm_version: Option<String>,

    /// Supported JVM architectures (`JVMArchs`), in order.
    ///
    /// Default: Empty
    pub jvm_archs: Vec<String>,

    /// Architecture priority list (`LSArchitecturePriority`), in order.
    ///
    /// Default: Empty
    pub architecture_priority: Vec<String>,

    /// Options passed to the JVM (`VMOptions`).
    ///
    /// Default: None
    pub vm_options: Option<String>,

    /// JVM working directory (`WorkingDirectory`).
    ///
    /// Default: None
    pub working_directory: Option<String>,

    /// Command-line arguments for the main class (`Arguments`).
    ///
    /// Default: None
    pub arguments: Option<String>,

    /// Sparkle update feed (`SUFeedURL`).
    ///
    /// Default: None
    pub feed_url: Option<String>,

    /// Sparkle public DSA key file (`SUPublicDSAKeyFile`).
    ///
    /// Default: None
    pub public_dsa_key_file: Option<String>,

    class_path: Vec<String>,
    extra_class_path: Vec<String>,
    java_properties: BTreeMap<String, String>,
    environment: BTreeMap<String, String>,
    document_types: Vec<DocumentType>,
    services: Vec<Service>,
    help_books: Vec<HelpBook>,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            application_name: None,
            main_class: None,
            short_name: None,
            short_version: DEFAULT_SHORT_VERSION.to_string(),
            build_version: None,
            signature: DEFAULT_SIGNATURE.to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
            development_region: DEFAULT_DEVELOPMENT_REGION.to_string(),
            icon_file: None,
            splash_file: None,
            identifier: None,
            copyright: None,
            help_book_folder: None,
            help_book_name: None,
            content_size: None,
            category: None,
            allow_mixed_localizations: false,
            high_resolution_capable: false,
            automatic_graphics_switching: true,
            ui_element: None,
            start_on_main_thread: None,
            use_javax_key: false,
            jvm_version: Some(DEFAULT_JVM_VERSION.to_string()),
            jvm_archs: Vec::new(),
            architecture_priority: Vec::new(),
            vm_options: None,
            working_directory: None,
            arguments: None,
            feed_url: None,
            public_dsa_key_file: None,
            class_path: Vec::new(),
            extra_class_path: Vec::new(),
            java_properties: BTreeMap::new(),
            environment: BTreeMap::new(),
            document_types: Vec::new(),
            services: Vec::new(),
            help_books: Vec::new(),
        }
    }
}

impl BundleSettings {
    /// Creates settings with the two required fields set and every other
    /// field at its default.
    pub fn new(application_name: impl Into<String>, main_class: impl Into<String>) -> Self {
        Self {
            application_name: Some(application_name.into()),
            main_class: Some(main_class.into()),
            ..Default::default()
        }
    }

    /// Returns the name written as `CFBundleName`: the short name if set,
    /// otherwise the application name.
    pub fn bundle_name(&self) -> Option<&str> {
        self.short_name
            .as_deref()
            .or(self.application_name.as_deref())
    }

    /// Sets the short bundle name.
    ///
    /// Names longer than 16 characters are stored unmodified; a
    /// [`Notice::ShortNameTooLong`] is returned so the caller can report it.
    pub fn set_short_name(&mut self, name: impl Into<String>) -> Option<Notice> {
        let name = name.into();
        let notice = (name.chars().count() > SHORT_NAME_LIMIT).then(|| {
            let notice = Notice::ShortNameTooLong { name: name.clone() };
            log::warn!("{notice}");
            notice
        });
        self.short_name = Some(name);
        notice
    }

    /// Always `"APPL"`.
    pub fn package_type(&self) -> &'static str {
        PACKAGE_TYPE
    }

    /// Always `"6.0"`.
    pub fn info_dictionary_version(&self) -> &'static str {
        INFO_DICTIONARY_VERSION
    }

    /// Adds a jar bundled under the Java root, recorded as `$JAVAROOT/<path>`.
    pub fn add_class_path_entry(&mut self, path: impl AsRef<str>) {
        self.class_path
            .push(format!("{JAVA_ROOT}/{}", path.as_ref()));
    }

    /// Adds an external classpath entry, recorded verbatim.
    pub fn add_extra_class_path_entry(&mut self, path: impl Into<String>) {
        self.extra_class_path.push(path.into());
    }

    /// Classpath entries bundled under the Java root, in insertion order.
    pub fn internal_class_path(&self) -> &[String] {
        &self.class_path
    }

    /// External classpath entries, in insertion order.
    pub fn extra_class_path(&self) -> &[String] {
        &self.extra_class_path
    }

    /// The combined classpath: internal entries followed by extra entries.
    ///
    /// Returns a fresh vector; neither stored list is modified.
    pub fn class_path(&self) -> Vec<String> {
        self.class_path
            .iter()
            .chain(&self.extra_class_path)
            .cloned()
            .collect()
    }

    /// Adds a Java system property passed to the launcher. A repeated key
    /// replaces the earlier value.
    pub fn add_java_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.java_properties.insert(key.into(), value.into());
    }

    /// Java system properties, sorted by key.
    pub fn java_properties(&self) -> &BTreeMap<String, String> {
        &self.java_properties
    }

    /// Adds an environment variable injected at launch (`LSEnvironment`).
    pub fn add_environment_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.environment.insert(key.into(), value.into());
    }

    /// Launch environment variables, sorted by key.
    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }

    /// Registers a document type.
    pub fn add_document_type(&mut self, document_type: DocumentType) {
        self.document_types.push(document_type);
    }

    /// Registered document types, in registration order.
    pub fn document_types(&self) -> &[DocumentType] {
        &self.document_types
    }

    /// Registers a Services menu entry.
    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }

    /// Registered services, in registration order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Registers a help book.
    ///
    /// A help book without a locale also becomes the bundle-level
    /// help book, setting [`help_book_folder`](Self::help_book_folder)
    /// and [`help_book_name`](Self::help_book_name).
    pub fn add_help_book(&mut self, help_book: HelpBook) {
        if help_book.locale.is_none() {
            if let Some(folder) = &help_book.folder_name {
                self.help_book_folder = Some(folder.clone());
            }
            if let Some(name) = &help_book.name {
                self.help_book_name = Some(name.clone());
            }
        }
        self.help_books.push(help_book);
    }

    /// Registered help books, in registration order.
    pub fn help_books(&self) -> &[HelpBook] {
        &self.help_books
    }
}
