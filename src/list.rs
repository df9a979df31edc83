//! Delimited-list splitting shared by enum strings and enum values.
//!
//! Enum fields are authored as a single comma-separated string so that
//! translators see the whole list in one unit. A backslash escapes a
//! literal comma inside a token.

/// Split a comma-delimited, possibly-localized list into ordered tokens.
///
/// An empty input yields no tokens. `\,` produces a literal comma
/// inside a token; a trailing backslash is kept verbatim.
#[must_use]
pub fn split_translated_list(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    if raw.is_empty() {
        return tokens;
    }

    let mut current = String::new();
    let mut escaped = false;
    for ch in raw.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == ',' {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    if escaped {
        current.push('\\');
    }
    tokens.push(current);

    tokens
}
