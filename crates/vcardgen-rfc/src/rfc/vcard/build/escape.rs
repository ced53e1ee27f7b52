//! vCard text escaping.

/// Escapes a vCard text value.
///
/// Backslash becomes `\\`, a newline becomes the literal `\n`, a carriage
/// return is dropped, comma becomes `\,` and semicolon becomes `\;`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            _ => result.push(c),
        }
    }

    result
}
