//! vCard value decoding.

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value (N, ADR) into its components.
///
/// Components keep their escapes; run each through [`unescape_text`] to get
/// the text back.
#[must_use]
pub fn split_structured(value: &str) -> Vec<&str> {
    let mut components = Vec::new();
    let mut component_start = 0;
    // `;` and `\` are ASCII, so no byte of a multi-byte character matches.
    let mut bytes = value.bytes().enumerate();
    while let Some((i, byte)) = bytes.next() {
        match byte {
            b'\\' => {
                bytes.next();
            }
            b';' => {
                components.push(&value[component_start..i]);
                component_start = i + 1;
            }
            _ => {}
        }
    }
    components.push(&value[component_start..]);
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_sequences() {
        assert_eq!(unescape_text(r"a\,b\;c\nd\\e"), "a,b;c\nd\\e");
        assert_eq!(unescape_text("upper\\Nnewline"), "upper\nnewline");
    }

    #[test]
    fn unknown_escape_is_kept() {
        assert_eq!(unescape_text("a\\tb"), "a\\tb");
    }

    #[test]
    fn split_structured_name() {
        assert_eq!(
            split_structured("Public;Jane Q.;;;"),
            vec!["Public", "Jane Q.", "", "", ""]
        );
        assert_eq!(split_structured("Müller;Jörg"), vec!["Müller", "Jörg"]);
    }

    #[test]
    fn split_structured_respects_escapes() {
        assert_eq!(
            split_structured(r";;1 Main St\; Apt 2"),
            vec!["", "", r"1 Main St\; Apt 2"]
        );
        // An escaped backslash does not escape the following separator.
        assert_eq!(split_structured(r"a\\;b"), vec![r"a\\", "b"]);
    }
}
