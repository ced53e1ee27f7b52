//! Deriving the structured `N` value from a full name.

use vcardgen_rfc::rfc::vcard::StructuredName;

/// Turns a sanitized full name into structured name components.
pub type NameSplitter = fn(&str) -> StructuredName;

/// ## Summary
/// Splits on whitespace: the last token is the family name and the remaining
/// tokens, joined by single spaces, are the given name.
///
/// This is a Western-order heuristic. Names such as "Ludwig van Beethoven"
/// or family-name-first orders come out wrong; swap the splitter in
/// `GeneratorOptions` where that matters.
#[must_use]
pub fn split_last_token(full_name: &str) -> StructuredName {
    let mut tokens: Vec<&str> = full_name.split_whitespace().collect();
    let family = tokens.pop().unwrap_or_default();
    StructuredName::simple(family, tokens.join(" "))
}
