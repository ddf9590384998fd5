//! Encoding of document types and services.

use plist::{Dictionary, Value};

use super::string_array;
use crate::bundler::settings::{DocumentType, Service};

/// One `CFBundleDocumentTypes` entry.
pub(super) fn document_type(doc: &DocumentType) -> Value {
    let mut dict = Dictionary::new();

    if let Some(name) = &doc.name {
        dict.insert("CFBundleTypeName".into(), name.clone().into());
    }
    if let Some(role) = &doc.role {
        dict.insert("CFBundleTypeRole".into(), role.clone().into());
    }
    if let Some(icon) = doc.icon_file_name() {
        dict.insert("CFBundleTypeIconFile".into(), icon.into());
    }

    let lists = [
        ("CFBundleTypeExtensions", &doc.extensions),
        ("CFBundleTypeOSTypes", &doc.os_types),
        ("CFBundleTypeMIMETypes", &doc.mime_types),
        ("LSItemContentTypes", &doc.utis),
    ];
    for (key, items) in lists {
        if !items.is_empty() {
            dict.insert(key.into(), string_array(items));
        }
    }

    // Written as a string, as the Java launcher reads it.
    if doc.is_bundle {
        dict.insert("LSTypeIsPackage".into(), "true".into());
    }

    Value::Dictionary(dict)
}

/// One `NSServices` entry. `bundle_name` stands in for a missing port name.
pub(super) fn service(service: &Service, bundle_name: Option<&str>) -> Value {
    let mut dict = Dictionary::new();

    if let Some(port) = service.port_name.as_deref().or(bundle_name) {
        dict.insert("NSPortName".into(), port.into());
    }
    if let Some(message) = &service.message {
        dict.insert("NSMessage".into(), message.clone().into());
    }
    if !service.send_types.is_empty() {
        dict.insert("NSSendTypes".into(), string_array(&service.send_types));
    }
    if !service.return_types.is_empty() {
        dict.insert("NSReturnTypes".into(), string_array(&service.return_types));
    }
    if let Some(menu_item) = &service.menu_item {
        dict.insert("NSMenuItem".into(), default_entry(menu_item));
    }
    if let Some(key) = &service.key_equivalent {
        dict.insert("NSKeyEquivalent".into(), default_entry(key));
    }
    if let Some(user_data) = &service.user_data {
        dict.insert("NSUserData".into(), user_data.clone().into());
    }
    if let Some(timeout) = &service.timeout {
        dict.insert("NSTimeout".into(), timeout.clone().into());
    }

    Value::Dictionary(dict)
}

fn default_entry(value: &str) -> Value {
    let mut dict = Dictionary::new();
    dict.insert("default".into(), value.into());
    Value::Dictionary(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_dictionary()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_document_type_omits_empty_lists() {
        let mut doc = DocumentType::new("Scan Project", "Editor");
        doc.set_extensions("scansort");
        doc.icon_file = Some("icons/scan.icns".into());

        let value = document_type(&doc);
        assert_eq!(
            keys(&value),
            ["CFBundleTypeName", "CFBundleTypeRole", "CFBundleTypeIconFile", "CFBundleTypeExtensions"]
        );
        let dict = value.as_dictionary().unwrap();
        assert_eq!(
            dict.get("CFBundleTypeIconFile").and_then(Value::as_string),
            Some("scan.icns")
        );
    }

    #[test]
    fn test_document_type_package_flag() {
        let mut doc = DocumentType::new("Bundle Doc", "Viewer");
        doc.set_os_types("BNDL");
        doc.set_utis("org.bar.bundle");
        doc.is_bundle = true;

        let value = document_type(&doc);
        let dict = value.as_dictionary().unwrap();
        assert_eq!(
            dict.get("LSTypeIsPackage").and_then(Value::as_string),
            Some("true")
        );
        assert_eq!(
            dict.get("LSItemContentTypes").and_then(Value::as_array).map(Vec::len),
            Some(1)
        );
    }

    #[test]
    fn test_service_port_name_falls_back() {
        let mut svc = Service::new("lookUp", "Look Up");
        svc.set_send_types("NSStringPboardType");

        let value = service(&svc, Some("Bar"));
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.get("NSPortName").and_then(Value::as_string), Some("Bar"));

        svc.port_name = Some("BarPort".into());
        let value = service(&svc, Some("Bar"));
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.get("NSPortName").and_then(Value::as_string), Some("BarPort"));
    }

    #[test]
    fn test_service_key_order_and_nesting() {
        let mut svc = Service::new("lookUp", "Look Up");
        svc.set_send_types("NSStringPboardType");
        svc.set_return_types("NSStringPboardType");
        svc.key_equivalent = Some("L".into());
        svc.user_data = Some("extra".into());
        svc.timeout = Some("500".into());

        let value = service(&svc, Some("Bar"));
        assert_eq!(
            keys(&value),
            [
                "NSPortName",
                "NSMessage",
                "NSSendTypes",
                "NSReturnTypes",
                "NSMenuItem",
                "NSKeyEquivalent",
                "NSUserData",
                "NSTimeout"
            ]
        );
        let dict = value.as_dictionary().unwrap();
        let menu = dict.get("NSMenuItem").and_then(Value::as_dictionary).unwrap();
        assert_eq!(menu.get("default").and_then(Value::as_string), Some("Look Up"));
        assert_eq!(dict.get("NSTimeout").and_then(Value::as_string), Some("500"));
    }
}
