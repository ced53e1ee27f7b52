//! vCard parameter types (RFC 2426 §4).

use crate::error::{RfcError, RfcResult};

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., `TYPE=WORK,VOICE`). The name is
/// kept exactly as given; consumers disagree on casing, so the caller decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name, emitted verbatim.
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Serializes as `;NAME=v1,v2`.
    ///
    /// Values containing `;`, `:` or `,` are wrapped in double quotes.
    ///
    /// ## Errors
    /// Returns an error if the name is not a valid token or a value contains
    /// a double quote or a control character, which no parameter syntax allows.
    pub(crate) fn write_to(&self, out: &mut String) -> RfcResult<()> {
        if !super::is_valid_name(&self.name) {
            return Err(RfcError::InvalidParameterName(self.name.clone()));
        }

        out.push(';');
        out.push_str(&self.name);
        out.push('=');

        for (i, value) in self.values.iter().enumerate() {
            if value.chars().any(|c| c == '"' || c.is_control()) {
                return Err(RfcError::InvalidParameterValue {
                    name: self.name.clone(),
                    value: value.clone(),
                });
            }
            if i > 0 {
                out.push(',');
            }
            if value.contains([';', ':', ',']) {
                out.push('"');
                out.push_str(value);
                out.push('"');
            } else {
                out.push_str(value);
            }
        }

        Ok(())
    }
}
