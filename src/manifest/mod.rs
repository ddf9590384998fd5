//! Bundle descriptors.
//!
//! A descriptor is TOML, either a standalone file whose top level holds the
//! bundle attributes or a `Cargo.toml` carrying them under
//! `[package.metadata.jarbundle]`:
//!
//! ```toml
//! name = "Bar Project"
//! mainclass = "org.bar.Main"
//! jars = ["build/bar.jar"]
//! jvmversion = "1.8+"
//!
//! [[documenttype]]
//! name = "Bar Document"
//! role = "Editor"
//! extensions = "bar"
//!
//! [[javaproperty]]
//! name = "apple.laf.useScreenMenuBar"
//! value = "true"
//! ```
//!
//! Attribute names follow the lowercase Ant attribute names. Delimited
//! lists (`jvmarchs`, `extensions`, `sendtypes`, ...) are single strings
//! split on whitespace and commas.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bundler::{
    self, DocumentType, HelpBook, INFO_DICTIONARY_VERSION, Notice, PACKAGE_TYPE, Service,
    SettingsBuilder,
};
use crate::error::{ManifestError, Result};

/// Attributes of one bundle, as written in a descriptor.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleDescriptor {
    /// Application name.
    pub name: Option<String>,
    /// Name shown in the menu bar.
    #[serde(rename = "shortname")]
    pub short_name: Option<String>,
    /// Fully qualified main class.
    #[serde(rename = "mainclass")]
    pub main_class: Option<String>,
    /// `CFBundleShortVersionString`.
    pub version: Option<String>,
    /// `CFBundleVersion`.
    pub build: Option<String>,
    /// Required JVM version, e.g. `"1.8+"`.
    #[serde(rename = "jvmversion")]
    pub jvm_version: Option<String>,
    /// Delimited list of supported JVM architectures.
    #[serde(rename = "jvmarchs")]
    pub jvm_archs: Option<String>,
    /// Delimited list of preferred architectures.
    #[serde(rename = "lsarchitecturepriority")]
    pub architecture_priority: Option<String>,
    /// JVM options.
    #[serde(rename = "vmoptions")]
    pub vm_options: Option<String>,
    /// Arguments passed to the main class.
    pub arguments: Option<String>,
    /// JVM working directory.
    #[serde(rename = "workingdirectory")]
    pub working_directory: Option<String>,
    /// Application icon; only the file name is recorded.
    pub icon: Option<PathBuf>,
    /// Splash image.
    #[serde(rename = "splashfile")]
    pub splash_file: Option<String>,
    /// `CFBundleIdentifier`.
    #[serde(rename = "bundleid")]
    pub bundle_id: Option<String>,
    /// `CFBundleDevelopmentRegion`.
    #[serde(rename = "developmentregion")]
    pub development_region: Option<String>,
    /// `CFBundleAllowMixedLocalizations`.
    #[serde(rename = "allowmixedlocalizations")]
    pub allow_mixed_localizations: Option<bool>,
    /// `NSHumanReadableCopyright`.
    pub copyright: Option<String>,
    /// `NSHighResolutionCapable`.
    #[serde(rename = "highresolutioncapable")]
    pub high_resolution_capable: Option<bool>,
    /// `NSSupportsAutomaticGraphicsSwitching`.
    #[serde(rename = "supportsautomaticgraphicsswitching")]
    pub automatic_graphics_switching: Option<bool>,
    /// Preferred content size, `"width,height"`.
    #[serde(rename = "contentsize")]
    pub content_size: Option<String>,
    /// Use `JavaX` as the launch dictionary key.
    #[serde(rename = "usejavaxkey")]
    pub use_javax_key: Option<bool>,
    /// Four-letter creator code.
    pub signature: Option<String>,
    /// Accepted and ignored; the package type is always `APPL`.
    #[serde(rename = "type")]
    pub package_type: Option<String>,
    /// Accepted and ignored; the dictionary version is always `6.0`.
    #[serde(rename = "infodictionaryversion")]
    pub info_dictionary_version: Option<String>,
    /// Launcher stub; its file name becomes `CFBundleExecutable`.
    #[serde(rename = "stubfile")]
    pub stub_file: Option<PathBuf>,
    /// Start the main class on the first thread.
    #[serde(rename = "startonmainthread")]
    pub start_on_main_thread: Option<bool>,
    /// `LSUIElement`.
    #[serde(rename = "isagent")]
    pub is_agent: Option<bool>,
    /// `CFBundleHelpBookFolder`.
    #[serde(rename = "helpbookfolder")]
    pub help_book_folder: Option<String>,
    /// `CFBundleHelpBookName`.
    #[serde(rename = "helpbookname")]
    pub help_book_name: Option<String>,
    /// `LSApplicationCategoryType`.
    #[serde(rename = "lsapplicationcategorytype")]
    pub category: Option<String>,
    /// Sparkle feed URL.
    #[serde(rename = "sufeedurl")]
    pub feed_url: Option<String>,
    /// Sparkle public DSA key file.
    #[serde(rename = "supublicdsakeyfile")]
    pub public_dsa_key_file: Option<String>,
    /// Jars copied into the Java root.
    #[serde(default)]
    pub jars: Vec<PathBuf>,
    /// Classpath entries outside the bundle.
    #[serde(default, rename = "extraclasspath")]
    pub extra_class_path: Vec<String>,

    /// Deprecated: `apple.awt.antialiasing`.
    #[serde(rename = "antialiasedgraphics")]
    pub antialiased_graphics: Option<bool>,
    /// Deprecated: `apple.awt.textantialiasing`.
    #[serde(rename = "antialiasedtext")]
    pub antialiased_text: Option<bool>,
    /// Deprecated: `apple.laf.useScreenMenuBar`.
    #[serde(rename = "screenmenu")]
    pub screen_menu: Option<bool>,
    /// Deprecated: `apple.awt.showGrowBox`.
    #[serde(rename = "growbox")]
    pub grow_box: Option<bool>,

    /// `[[documenttype]]` tables.
    #[serde(default, rename = "documenttype")]
    pub document_types: Vec<DocumentTypeEntry>,
    /// `[[service]]` tables.
    #[serde(default, rename = "service")]
    pub services: Vec<ServiceEntry>,
    /// `[[javaproperty]]` tables.
    #[serde(default, rename = "javaproperty")]
    pub java_properties: Vec<PairEntry>,
    /// `[[lsenvironment]]` tables.
    #[serde(default, rename = "lsenvironment")]
    pub environment: Vec<PairEntry>,
    /// `[[helpbook]]` tables.
    #[serde(default, rename = "helpbook")]
    pub help_books: Vec<HelpBookEntry>,
}

/// A `[[documenttype]]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentTypeEntry {
    /// `CFBundleTypeName`.
    pub name: Option<String>,
    /// `CFBundleTypeRole`.
    pub role: Option<String>,
    /// Document icon.
    #[serde(rename = "iconfile", alias = "iconFile")]
    pub icon_file: Option<PathBuf>,
    /// Documents are packages.
    #[serde(default)]
    pub bundle: bool,
    /// Delimited file extensions.
    pub extensions: Option<String>,
    /// Delimited OS type codes.
    #[serde(rename = "ostypes", alias = "osTypes")]
    pub os_types: Option<String>,
    /// Delimited MIME types.
    #[serde(rename = "mimetypes", alias = "mimeTypes")]
    pub mime_types: Option<String>,
    /// Delimited Uniform Type Identifiers.
    #[serde(alias = "UTIs")]
    pub utis: Option<String>,
}

/// A `[[service]]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    /// `NSPortName`; defaults to the bundle name.
    #[serde(rename = "portname", alias = "portName")]
    pub port_name: Option<String>,
    /// `NSMessage`.
    pub message: Option<String>,
    /// Menu label.
    #[serde(rename = "menuitem", alias = "menuItem")]
    pub menu_item: Option<String>,
    /// Delimited pasteboard send types.
    #[serde(rename = "sendtypes", alias = "sendTypes")]
    pub send_types: Option<String>,
    /// Delimited pasteboard return types.
    #[serde(rename = "returntypes", alias = "returnTypes")]
    pub return_types: Option<String>,
    /// Single-character key equivalent.
    #[serde(rename = "keyequivalent", alias = "keyEquivalent")]
    pub key_equivalent: Option<String>,
    /// `NSUserData`.
    #[serde(rename = "userdata", alias = "userData")]
    pub user_data: Option<String>,
    /// Milliseconds, as an integer or a string.
    pub timeout: Option<Scalar>,
}

/// A `[[javaproperty]]` or `[[lsenvironment]]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairEntry {
    /// Key.
    pub name: Option<String>,
    /// Value.
    pub value: Option<String>,
}

/// A `[[helpbook]]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpBookEntry {
    /// Folder holding the book.
    #[serde(rename = "foldername", alias = "folderName")]
    pub folder_name: Option<String>,
    /// Book title.
    pub name: Option<String>,
    /// Localization.
    pub locale: Option<String>,
}

/// A value TOML may spell as an integer or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Integer spelling.
    Integer(i64),
    /// String spelling.
    Text(String),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Integer(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

impl BundleDescriptor {
    /// Parses a descriptor from TOML text.
    ///
    /// A document with a `[package]` table is read as a `Cargo.toml`; its
    /// `package.name` and `package.version` fill in `name` and `version`
    /// when the jarbundle table leaves them out.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        let parse_failed = |source| ManifestError::ParseFailed {
            path: path.to_path_buf(),
            source,
        };
        let document: toml::Table = toml::from_str(text).map_err(parse_failed)?;

        let Some(package) = document.get("package").and_then(toml::Value::as_table) else {
            return Ok(toml::Value::Table(document)
                .try_into()
                .map_err(parse_failed)?);
        };

        let table = package
            .get("metadata")
            .and_then(|metadata| metadata.get("jarbundle"))
            .cloned()
            .ok_or_else(|| ManifestError::MissingTable {
                path: path.to_path_buf(),
            })?;
        let mut descriptor: Self = table.try_into().map_err(parse_failed)?;

        if descriptor.name.is_none() {
            descriptor.name = package
                .get("name")
                .and_then(toml::Value::as_str)
                .map(String::from);
        }
        if descriptor.version.is_none() {
            descriptor.version = package
                .get("version")
                .and_then(toml::Value::as_str)
                .map(String::from);
        }
        Ok(descriptor)
    }

    /// Converts the descriptor into a settings builder.
    ///
    /// Returns notices for attributes that are accepted but have no effect.
    pub fn into_builder(self) -> bundler::Result<(SettingsBuilder, Vec<Notice>)> {
        let descriptor = self;
        let mut builder = SettingsBuilder::new();
        let mut notices = Vec::new();

        macro_rules! apply {
            ($src:ident, $dst:ident; $($field:ident => $setter:ident),* $(,)?) => {
                $(
                    if let Some(value) = $src.$field {
                        $dst = $dst.$setter(value);
                    }
                )*
            };
        }

        apply!(
            descriptor, builder;
            name => name,
            main_class => main_class,
            short_name => short_name,
            version => version,
            build => build_version,
            signature => signature,
            development_region => development_region,
            icon => icon,
            splash_file => splash_file,
            bundle_id => identifier,
            copyright => copyright,
            help_book_folder => help_book_folder,
            help_book_name => help_book_name,
            content_size => content_size,
            category => category,
            allow_mixed_localizations => allow_mixed_localizations,
            high_resolution_capable => high_resolution_capable,
            automatic_graphics_switching => automatic_graphics_switching,
            is_agent => is_agent,
            start_on_main_thread => start_on_main_thread,
            use_javax_key => use_javax_key,
            jvm_version => jvm_version,
            vm_options => vm_options,
            working_directory => working_directory,
            arguments => arguments,
            feed_url => feed_url,
            public_dsa_key_file => public_dsa_key_file,
            antialiased_graphics => antialiased_graphics,
            antialiased_text => antialiased_text,
            screen_menu => screen_menu,
            grow_box => grow_box,
        );

        if let Some(archs) = &descriptor.jvm_archs {
            builder = builder.jvm_archs(archs);
        }
        if let Some(archs) = &descriptor.architecture_priority {
            builder = builder.architecture_priority(archs);
        }
        if let Some(stub) = descriptor.stub_file.as_deref().and_then(Path::file_name) {
            builder = builder.executable(stub.to_string_lossy());
        }

        if let Some(value) = descriptor.package_type {
            builder = builder.package_type(value.clone());
            notices.push(ignored("type", &value, PACKAGE_TYPE));
        }
        if let Some(value) = descriptor.info_dictionary_version {
            builder = builder.info_dictionary_version(value.clone());
            notices.push(ignored("infodictionaryversion", &value, INFO_DICTIONARY_VERSION));
        }

        for jar in &descriptor.jars {
            builder = builder.jar(jar);
        }
        for entry in descriptor.extra_class_path {
            builder = builder.extra_class_path(entry);
        }

        for property in descriptor.java_properties {
            let (name, value) = property.into_pair("javaproperty")?;
            builder = builder.java_property(name, value);
        }
        for variable in descriptor.environment {
            let (name, value) = variable.into_pair("lsenvironment")?;
            builder = builder.environment_variable(name, value);
        }

        for entry in descriptor.document_types {
            builder = builder.document_type(entry.into_document_type());
        }
        for entry in descriptor.services {
            builder = builder.service(entry.into_service());
        }
        for entry in descriptor.help_books {
            builder = builder.help_book(HelpBook {
                folder_name: entry.folder_name,
                name: entry.name,
                locale: entry.locale,
            });
        }

        Ok((builder, notices))
    }
}

fn ignored(attribute: &str, value: &str, fixed: &str) -> Notice {
    log::debug!("ignoring '{attribute}' = {value:?}");
    Notice::IgnoredAttribute {
        attribute: attribute.to_string(),
        fixed_value: fixed.to_string(),
    }
}

impl PairEntry {
    fn into_pair(self, element: &'static str) -> bundler::Result<(String, String)> {
        match (self.name, self.value) {
            (Some(name), Some(value)) => Ok((name, value)),
            _ => Err(bundler::Error::IncompletePair(element)),
        }
    }
}

impl DocumentTypeEntry {
    fn into_document_type(self) -> DocumentType {
        let mut doc = DocumentType {
            name: self.name,
            role: self.role,
            icon_file: self.icon_file,
            is_bundle: self.bundle,
            ..Default::default()
        };
        if let Some(value) = &self.extensions {
            doc.set_extensions(value);
        }
        if let Some(value) = &self.os_types {
            doc.set_os_types(value);
        }
        if let Some(value) = &self.mime_types {
            doc.set_mime_types(value);
        }
        if let Some(value) = &self.utis {
            doc.set_utis(value);
        }
        doc
    }
}

impl ServiceEntry {
    fn into_service(self) -> Service {
        let mut service = Service {
            port_name: self.port_name,
            message: self.message,
            menu_item: self.menu_item,
            key_equivalent: self.key_equivalent,
            user_data: self.user_data,
            timeout: self.timeout.map(Scalar::into_string),
            ..Default::default()
        };
        if let Some(value) = &self.send_types {
            service.set_send_types(value);
        }
        if let Some(value) = &self.return_types {
            service.set_return_types(value);
        }
        service
    }
}

/// Reads and parses the descriptor at `path`.
pub async fn load_descriptor(path: &Path) -> Result<BundleDescriptor> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ManifestError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
    BundleDescriptor::from_toml(&text, path)
}
