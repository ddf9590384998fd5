//! The `Java` / `JavaX` launch dictionary.

use plist::{Dictionary, Value};

use super::string_array;
use crate::bundler::notice::Notice;
use crate::bundler::settings::BundleSettings;

/// Properties in this namespace are ignored by 1.4 and later JVMs.
const APPLE_PROPERTY_PREFIX: &str = "com.apple.";

/// Version assumed when the requirement is absent or unreadable.
const FALLBACK_JVM_VERSION: f64 = 1.4;

/// Top-level key holding the launch dictionary.
pub(super) fn launch_key(settings: &BundleSettings) -> &'static str {
    if settings.use_javax_key { "JavaX" } else { "Java" }
}

/// Builds the launch dictionary, returning any properties that were dropped
/// as deprecated.
pub(super) fn launch_dictionary(settings: &BundleSettings) -> (Dictionary, Vec<Notice>) {
    let mut dict = Dictionary::new();
    let mut notices = Vec::new();

    if let Some(main_class) = &settings.main_class {
        dict.insert("MainClass".into(), main_class.clone().into());
    }
    if let Some(version) = &settings.jvm_version {
        dict.insert("JVMVersion".into(), version.clone().into());
    }
    if !settings.jvm_archs.is_empty() {
        dict.insert("JVMArchs".into(), string_array(&settings.jvm_archs));
    }
    if !settings.architecture_priority.is_empty() {
        dict.insert(
            "LSArchitecturePriority".into(),
            string_array(&settings.architecture_priority),
        );
    }

    let class_path = settings.class_path();
    if !class_path.is_empty() {
        dict.insert("ClassPath".into(), string_array(&class_path));
    }

    if let Some(options) = &settings.vm_options {
        dict.insert("VMOptions".into(), options.clone().into());
    }
    if let Some(dir) = &settings.working_directory {
        dict.insert("WorkingDirectory".into(), dir.clone().into());
    }
    if let Some(main_thread) = settings.start_on_main_thread {
        dict.insert("StartOnMainThread".into(), main_thread.into());
    }
    if let Some(splash) = &settings.splash_file {
        dict.insert("SplashFile".into(), splash.clone().into());
    }
    if let Some(arguments) = &settings.arguments {
        dict.insert("Arguments".into(), arguments.clone().into());
    }

    if !settings.java_properties().is_empty() {
        let filter_apple = parse_jvm_version(settings.jvm_version.as_deref()) >= 1.4;
        let mut properties = Dictionary::new();
        for (key, value) in settings.java_properties() {
            if filter_apple && key.starts_with(APPLE_PROPERTY_PREFIX) {
                let notice = Notice::DeprecatedProperty { key: key.clone() };
                log::warn!("{notice}");
                notices.push(notice);
                continue;
            }
            properties.insert(key.clone(), value.clone().into());
        }
        dict.insert("Properties".into(), Value::Dictionary(properties));
    }

    (dict, notices)
}

/// Reads the major.minor part of a JVM version requirement.
///
/// Only the first three characters are considered ("1.3+" reads as 1.3,
/// "17+" as 17). Anything unreadable falls back to 1.4.
pub fn parse_jvm_version(version: Option<&str>) -> f64 {
    let Some(version) = version else {
        return FALLBACK_JVM_VERSION;
    };
    let head: String = version.chars().take(3).collect();
    let numeric_len = head
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    head[..numeric_len]
        .trim_end_matches('.')
        .parse()
        .unwrap_or_else(|_| {
            log::debug!("unreadable JVM version {version:?}, assuming {FALLBACK_JVM_VERSION}");
            FALLBACK_JVM_VERSION
        })
}
