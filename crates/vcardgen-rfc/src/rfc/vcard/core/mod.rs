//! Core vCard types.

mod parameter;
mod property;
mod structured;

pub use parameter::VCardParameter;
pub use property::{VCardProperty, VCardValue, names};
pub use structured::StructuredName;

/// Returns whether `name` is a valid property or parameter name
/// (`iana-token` / `x-name`: ASCII letters, digits and hyphens).
#[must_use]
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::is_valid_name;

    #[test]
    fn accepts_iana_and_x_names() {
        assert!(is_valid_name("FN"));
        assert!(is_valid_name("X-SOCIALPROFILE"));
        assert!(is_valid_name("x-user"));
    }

    #[test]
    fn rejects_structural_characters() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("TEL;TYPE"));
        assert!(!is_valid_name("FN:"));
        assert!(!is_valid_name("item 1"));
    }
}
