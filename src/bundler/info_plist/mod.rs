//! `Info.plist` generation.
//!
//! [`InfoPlist::render`] walks a [`BundleSettings`] once, top to bottom, and
//! builds the property list in a fixed key order:
//!
//! 1. bundle scalars that are always present
//! 2. optional bundle scalars, then the display flags and content size
//! 3. `LSUIElement`, `LSApplicationCategoryType`, `LSEnvironment`
//! 4. `CFBundleDocumentTypes`
//! 5. the `Java` (or `JavaX`) launch dictionary
//! 6. the Sparkle update keys, then `NSServices`
//!
//! Absent optional values and empty collections are omitted. The settings are
//! assumed to be validated already (see [`SettingsBuilder`](super::SettingsBuilder));
//! nothing here rejects input.

mod collections;
mod java;

use std::path::Path;

use plist::{Dictionary, Value, XmlWriteOptions};

use crate::bundler::error::{Context, Result};
use crate::bundler::notice::Notice;
use crate::bundler::settings::BundleSettings;
use crate::bundler::utils::fs;

pub use java::parse_jvm_version;

/// A rendered `Info.plist` and the notices raised while rendering it.
#[derive(Clone, Debug)]
pub struct InfoPlist {
    root: Dictionary,
    notices: Vec<Notice>,
}

impl InfoPlist {
    /// Renders the property list for `settings`.
    pub fn render(settings: &BundleSettings) -> Self {
        let mut root = Dictionary::new();
        let mut notices = Vec::new();

        if let Some(name) = settings.bundle_name() {
            root.insert("CFBundleName".into(), name.into());
        }
        root.insert(
            "CFBundleShortVersionString".into(),
            settings.short_version.clone().into(),
        );
        root.insert(
            "CFBundleAllowMixedLocalizations".into(),
            settings.allow_mixed_localizations.to_string().into(),
        );
        root.insert(
            "CFBundleInfoDictionaryVersion".into(),
            settings.info_dictionary_version().into(),
        );
        root.insert("CFBundleExecutable".into(), settings.executable.clone().into());
        root.insert(
            "CFBundleDevelopmentRegion".into(),
            settings.development_region.clone().into(),
        );
        root.insert("CFBundlePackageType".into(), settings.package_type().into());
        root.insert("CFBundleSignature".into(), settings.signature.clone().into());

        let optional = [
            ("CFBundleVersion", &settings.build_version),
            ("CFBundleIconFile", &settings.icon_file),
            ("CFBundleIdentifier", &settings.identifier),
            ("CFBundleHelpBookFolder", &settings.help_book_folder),
            ("CFBundleHelpBookName", &settings.help_book_name),
            ("NSHumanReadableCopyright", &settings.copyright),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                root.insert(key.into(), value.clone().into());
            }
        }

        if settings.high_resolution_capable {
            root.insert("NSHighResolutionCapable".into(), true.into());
        }
        if settings.automatic_graphics_switching {
            root.insert("NSSupportsAutomaticGraphicsSwitching".into(), true.into());
        }
        if let Some(size) = &settings.content_size {
            root.insert("NSPreferencesContentSize".into(), format!("{{{size}}}").into());
        }
        if let Some(agent) = settings.ui_element {
            root.insert("LSUIElement".into(), agent.into());
        }
        if let Some(category) = &settings.category {
            root.insert("LSApplicationCategoryType".into(), category.clone().into());
        }

        if !settings.environment().is_empty() {
            let env = settings
                .environment()
                .iter()
                .map(|(key, value)| (key.clone(), Value::from(value.clone())))
                .collect();
            root.insert("LSEnvironment".into(), Value::Dictionary(env));
        }

        if !settings.document_types().is_empty() {
            let docs = settings
                .document_types()
                .iter()
                .map(collections::document_type)
                .collect();
            root.insert("CFBundleDocumentTypes".into(), Value::Array(docs));
        }

        let (launch, launch_notices) = java::launch_dictionary(settings);
        root.insert(java::launch_key(settings).into(), Value::Dictionary(launch));
        notices.extend(launch_notices);

        if let Some(url) = &settings.feed_url {
            root.insert("SUFeedURL".into(), url.clone().into());
        }
        if let Some(key_file) = &settings.public_dsa_key_file {
            root.insert("SUPublicDSAKeyFile".into(), key_file.clone().into());
        }

        if !settings.services().is_empty() {
            let services = settings
                .services()
                .iter()
                .map(|s| collections::service(s, settings.bundle_name()))
                .collect();
            root.insert("NSServices".into(), Value::Array(services));
        }

        Self { root, notices }
    }

    /// The top-level dictionary, in output order.
    pub fn dictionary(&self) -> &Dictionary {
        &self.root
    }

    /// Notices raised while rendering, such as dropped deprecated properties.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Consumes the rendered plist, returning its notices.
    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }

    /// Serializes to XML with a 2-space indent.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_xml(&mut buf)?;
        Ok(buf)
    }

    /// Writes the XML document to `path`, replacing any existing file.
    ///
    /// A failure part way through may leave a partial file behind; it must
    /// not be used.
    pub fn write(&self, path: &Path) -> Result<()> {
        log::info!("Writing {}", path.display());
        fs::write_file(path, |writer| self.write_xml(writer))
            .with_context(|| format!("failed to write Info.plist to {}", path.display()))
    }

    fn write_xml<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let options = XmlWriteOptions::default().indent(b' ', 2);
        Value::Dictionary(self.root.clone()).to_writer_xml_with_options(writer, &options)?;
        Ok(())
    }
}

/// Renders `settings` and writes the result to `path`.
///
/// Returns the notices raised while rendering.
pub fn write_info_plist(settings: &BundleSettings, path: &Path) -> Result<Vec<Notice>> {
    let plist = InfoPlist::render(settings);
    plist.write(path)?;
    Ok(plist.into_notices())
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::{DocumentType, Service};

    fn keys(plist: &InfoPlist) -> Vec<&str> {
        plist.dictionary().keys().map(String::as_str).collect()
    }

    #[test]
    fn test_minimal_key_order() {
        let settings = BundleSettings::new("Bar Project", "org.bar.Main");
        let plist = InfoPlist::render(&settings);

        assert_eq!(
            keys(&plist),
            [
                "CFBundleName",
                "CFBundleShortVersionString",
                "CFBundleAllowMixedLocalizations",
                "CFBundleInfoDictionaryVersion",
                "CFBundleExecutable",
                "CFBundleDevelopmentRegion",
                "CFBundlePackageType",
                "CFBundleSignature",
                "NSSupportsAutomaticGraphicsSwitching",
                "Java",
            ]
        );
        let dict = plist.dictionary();
        assert_eq!(
            dict.get("CFBundleAllowMixedLocalizations").and_then(Value::as_string),
            Some("false")
        );
        assert_eq!(
            dict.get("CFBundleExecutable").and_then(Value::as_string),
            Some("JavaApplicationStub")
        );
    }

    #[test]
    fn test_full_key_order() {
        let mut settings = BundleSettings::new("Bar Project", "org.bar.Main");
        settings.build_version = Some("42".into());
        settings.icon_file = Some("bar.icns".into());
        settings.identifier = Some("org.bar".into());
        settings.help_book_folder = Some("Help".into());
        settings.help_book_name = Some("Bar Help".into());
        settings.copyright = Some("(c) Bar".into());
        settings.high_resolution_capable = true;
        settings.content_size = Some("640,480".into());
        settings.ui_element = Some(false);
        settings.category = Some("public.app-category.developer-tools".into());
        settings.add_environment_variable("JAVA_HOME", "/opt/jdk");
        let mut doc = DocumentType::new("Scan", "Editor");
        doc.set_extensions("scan");
        settings.add_document_type(doc);
        settings.feed_url = Some("https://bar.org/feed".into());
        settings.public_dsa_key_file = Some("dsa_pub.pem".into());
        let mut service = Service::new("lookUp", "Look Up");
        service.set_send_types("NSStringPboardType");
        settings.add_service(service);

        let plist = InfoPlist::render(&settings);
        assert_eq!(
            keys(&plist)[8..],
            [
                "CFBundleVersion",
                "CFBundleIconFile",
                "CFBundleIdentifier",
                "CFBundleHelpBookFolder",
                "CFBundleHelpBookName",
                "NSHumanReadableCopyright",
                "NSHighResolutionCapable",
                "NSSupportsAutomaticGraphicsSwitching",
                "NSPreferencesContentSize",
                "LSUIElement",
                "LSApplicationCategoryType",
                "LSEnvironment",
                "CFBundleDocumentTypes",
                "Java",
                "SUFeedURL",
                "SUPublicDSAKeyFile",
                "NSServices",
            ]
        );

        let dict = plist.dictionary();
        assert_eq!(
            dict.get("NSPreferencesContentSize").and_then(Value::as_string),
            Some("{640,480}")
        );
        assert_eq!(dict.get("LSUIElement"), Some(&Value::Boolean(false)));
    }

    #[test]
    fn test_disabled_flags_are_omitted() {
        let mut settings = BundleSettings::new("Bar", "org.bar.Main");
        settings.automatic_graphics_switching = false;
        let plist = InfoPlist::render(&settings);

        assert!(!plist.dictionary().contains_key("NSHighResolutionCapable"));
        assert!(!plist.dictionary().contains_key("NSSupportsAutomaticGraphicsSwitching"));
        assert!(!plist.dictionary().contains_key("LSUIElement"));
    }

    #[test]
    fn test_javax_key_replaces_java() {
        let mut settings = BundleSettings::new("Bar", "org.bar.Main");
        settings.use_javax_key = true;
        let plist = InfoPlist::render(&settings);

        assert!(plist.dictionary().contains_key("JavaX"));
        assert!(!plist.dictionary().contains_key("Java"));
    }

    #[test]
    fn test_short_name_is_bundle_name() {
        let mut settings = BundleSettings::new("Bar Project", "org.bar.Main");
        settings.set_short_name("Bar");
        let plist = InfoPlist::render(&settings);

        assert_eq!(
            plist.dictionary().get("CFBundleName").and_then(Value::as_string),
            Some("Bar")
        );
    }

    #[test]
    fn test_incomplete_settings_still_render() {
        let settings = BundleSettings::default();
        let plist = InfoPlist::render(&settings);

        assert!(!plist.dictionary().contains_key("CFBundleName"));
        let java = plist.dictionary().get("Java").and_then(Value::as_dictionary).unwrap();
        assert!(!java.contains_key("MainClass"));
    }

    #[test]
    fn test_xml_header_and_indent() {
        let settings = BundleSettings::new("Bar", "org.bar.Main");
        let xml = String::from_utf8(InfoPlist::render(&settings).to_xml().unwrap()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\""));
        assert!(xml.contains("<plist version=\"1.0\">"));
        assert!(xml.contains("\n  <key>CFBundleName</key>"));
        assert!(xml.contains("\n    <key>MainClass</key>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut settings = BundleSettings::new("Bar", "org.bar.Main");
        settings.add_java_property("b.prop", "2");
        settings.add_java_property("a.prop", "1");
        settings.add_environment_variable("Z", "1");
        settings.add_environment_variable("A", "2");

        let first = InfoPlist::render(&settings).to_xml().unwrap();
        let second = InfoPlist::render(&settings).to_xml().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_info_plist_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Info.plist");
        let settings = BundleSettings::new("Bar", "org.bar.Main");

        let notices = write_info_plist(&settings, &path).unwrap();
        assert!(notices.is_empty());

        let value = Value::from_file(&path).unwrap();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.get("CFBundleName").and_then(Value::as_string), Some("Bar"));
    }
}
