//! Line unfolding.

/// Removes line continuations (CRLF followed by a single space or tab).
///
/// Line terminators that are not followed by whitespace are kept as-is, so
/// unfolding a folded line gives back exactly the line that was folded.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find("\r\n") {
        let (head, tail) = rest.split_at(pos);
        result.push_str(head);

        let after = &tail[2..];
        if after.starts_with([' ', '\t']) {
            rest = &after[1..];
        } else {
            result.push_str("\r\n");
            rest = after;
        }
    }

    result.push_str(rest);
    result
}

/// Splits a document into unfolded logical lines without terminators.
#[must_use]
pub fn logical_lines(input: &str) -> Vec<String> {
    unfold(input)
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
