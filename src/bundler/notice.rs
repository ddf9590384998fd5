//! Non-fatal conditions reported while configuring or serializing a bundle.

use serde::Serialize;
use std::fmt;

/// Recommended upper bound for `CFBundleName`.
pub const SHORT_NAME_LIMIT: usize = 16;

/// A non-fatal condition surfaced to the caller.
///
/// Notices never abort a build. They are logged through the `log` facade
/// when raised and are also handed back so callers can report them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The short bundle name exceeds [`SHORT_NAME_LIMIT`] characters.
    ///
    /// The value is stored unmodified.
    ShortNameTooLong {
        /// The name as given
        name: String,
    },

    /// A `com.apple.` Java property was left out of the `Properties`
    /// dictionary because the target JVM is 1.4 or newer.
    DeprecatedProperty {
        /// The filtered property key
        key: String,
    },

    /// A deprecated descriptor attribute was translated into a Java property.
    DeprecatedAttribute {
        /// Attribute name
        attribute: String,
        /// Java property now carrying its value
        replacement: String,
    },

    /// An attribute was accepted but has no effect.
    IgnoredAttribute {
        /// Attribute name
        attribute: String,
        /// Value the bundle uses instead
        fixed_value: String,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ShortNameTooLong { name } => write!(
                f,
                "'shortname' \"{name}\" is recommended to be no more than {SHORT_NAME_LIMIT} characters long"
            ),
            Notice::DeprecatedProperty { key } => write!(f, "Deprecated as of 1.4: {key}"),
            Notice::DeprecatedAttribute {
                attribute,
                replacement,
            } => write!(
                f,
                "the \"{attribute}\" attribute is deprecated, use the Java property \"{replacement}\" instead"
            ),
            Notice::IgnoredAttribute {
                attribute,
                fixed_value,
            } => write!(
                f,
                "the \"{attribute}\" attribute is ignored, the bundle always uses \"{fixed_value}\""
            ),
        }
    }
}
