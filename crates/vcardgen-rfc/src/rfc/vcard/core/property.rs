//! vCard property types (RFC 2426).

use super::parameter::VCardParameter;
use super::structured::StructuredName;

/// A vCard property value.
///
/// The variant decides how the value is encoded on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Text value; escaped on output.
    Text(String),
    /// Structured value; each component is escaped and components are
    /// joined with `;`.
    Structured(Vec<String>),
    /// URI value; emitted verbatim.
    Uri(String),
}

/// A vCard property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Property name, emitted verbatim.
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Property value.
    pub value: VCardValue,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            value: VCardValue::Text(value.into()),
        }
    }

    /// Creates a property with a structured value.
    #[must_use]
    pub fn structured<I, S>(name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: Vec::new(),
            value: VCardValue::Structured(components.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates an `N` property from a structured name.
    #[must_use]
    pub fn structured_name(name: &StructuredName) -> Self {
        Self::structured(names::N, name.components())
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            value: VCardValue::Uri(value.into()),
        }
    }

    /// Appends a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns whether any TYPE parameter carries the specified value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case("TYPE"))
            .any(|p| p.has_value(type_value))
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            VCardValue::Text(s) => Some(s),
            VCardValue::Structured(_) | VCardValue::Uri(_) => None,
        }
    }
}

/// Property names emitted by the generator.
pub mod names {
    // Framing
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
    pub const PRODID: &str = "PRODID";
    pub const CHARSET: &str = "CHARSET";

    // Identification
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const PHOTO: &str = "PHOTO";

    // Delivery addressing
    pub const ADR: &str = "ADR";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";

    // Organizational
    pub const TITLE: &str = "TITLE";
    pub const ORG: &str = "ORG";

    // Explanatory
    pub const URL: &str = "URL";

    // Extensions understood by common address books
    pub const X_ORGANIZATION: &str = "X-ORGANIZATION";
    pub const X_TITLE: &str = "X-TITLE";
    pub const X_SOCIALPROFILE: &str = "X-SOCIALPROFILE";
}
