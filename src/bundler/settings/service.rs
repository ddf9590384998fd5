//! Services menu entries (`NSServices`).

use super::split_list;

/// One entry the application contributes to the macOS Services menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Service {
    /// `NSPortName`. Falls back to the bundle name when unset.
    pub port_name: Option<String>,
    /// `NSMessage`: the selector invoked on the service provider.
    pub message: Option<String>,
    /// Menu label, written as `NSMenuItem.default`.
    pub menu_item: Option<String>,
    /// `NSSendTypes`.
    pub send_types: Vec<String>,
    /// `NSReturnTypes`.
    pub return_types: Vec<String>,
    /// Single-character shortcut, written as `NSKeyEquivalent.default`.
    pub key_equivalent: Option<String>,
    /// `NSUserData`.
    pub user_data: Option<String>,
    /// `NSTimeout` in milliseconds, kept as given.
    pub timeout: Option<String>,
}

impl Service {
    /// Creates a service with a message and menu label.
    pub fn new(message: impl Into<String>, menu_item: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            menu_item: Some(menu_item.into()),
            ..Default::default()
        }
    }

    /// Replaces the send types with the tokens of a delimited string.
    pub fn set_send_types(&mut self, value: &str) {
        self.send_types = split_list(value);
    }

    /// Replaces the return types with the tokens of a delimited string.
    pub fn set_return_types(&mut self, value: &str) {
        self.return_types = split_list(value);
    }
}
