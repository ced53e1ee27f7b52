//! vCard line folding.

/// Default maximum line length in octets.
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line so no physical line carries more than `limit`
/// octets of content.
///
/// Each fold emits CRLF followed by a single space. Lengths are measured in
/// UTF-8 octets, and a fold never splits a character: the slice is shortened
/// to the previous character boundary instead. A trailing CRLF is treated as
/// the line terminator, so it is neither counted nor split.
#[must_use]
pub fn fold_line(line: &str, limit: usize) -> String {
    let (content, terminator) = match line.strip_suffix("\r\n") {
        Some(content) => (content, "\r\n"),
        None => (line, ""),
    };

    if content.len() <= limit {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / limit.max(1) * 3);
    let mut rest = content;

    while rest.len() > limit {
        let mut cut = limit;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        if cut == 0 {
            // Limit narrower than the next character; emit it whole.
            cut = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }

        let (head, tail) = rest.split_at(cut);
        result.push_str(head);
        rest = tail;
        if rest.is_empty() {
            break;
        }
        result.push_str("\r\n ");
    }

    result.push_str(rest);
    result.push_str(terminator);
    result
}
