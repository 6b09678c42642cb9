pub mod collections;
pub mod items;
pub mod menus;
pub mod shops;
pub mod variants;

/// Maximum length allowed for any display name.
pub(crate) const NAME_MAX_LEN: u64 = 128;

/// Maximum length allowed for any description.
pub(crate) const DESCRIPTION_MAX_LEN: u64 = 2048;

/// Trim, collapse inner whitespace and strip control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize every line and squash runs of blank lines into one.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut result: Vec<String> = Vec::new();

    for line in input.lines().map(sanitize_inline_text) {
        let after_blank = result.last().is_none_or(|last| last.is_empty());
        if line.is_empty() && after_blank {
            continue;
        }
        result.push(line);
    }

    while matches!(result.last(), Some(line) if line.is_empty()) {
        result.pop();
    }

    result.join("\n")
}

/// Sanitized optional text; blank input becomes `None`.
pub(crate) fn optional_inline_text(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty())
}

/// Sanitized optional multi-line text; blank input becomes `None`.
pub(crate) fn optional_multiline_text(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_multiline_text)
        .filter(|value| !value.is_empty())
}
