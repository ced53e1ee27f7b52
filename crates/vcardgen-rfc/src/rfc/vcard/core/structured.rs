//! Structured vCard types (RFC 2426).

/// Structured name (N property, RFC 2426 §3.1.2).
///
/// Components are stored unescaped; escaping happens on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family name (surname).
    pub family: String,
    /// Given name (first names).
    pub given: String,
    /// Additional names (middle names).
    pub additional: String,
    /// Honorific prefixes (e.g., "Dr.").
    pub prefixes: String,
    /// Honorific suffixes (e.g., "Jr.").
    pub suffixes: String,
}

impl StructuredName {
    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            ..Self::default()
        }
    }

    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }

    /// Returns the five components in wire order:
    /// family, given, additional, prefixes, suffixes.
    #[must_use]
    pub fn components(&self) -> [&str; 5] {
        [
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ]
    }
}
