use std::borrow::Cow;

/// Marker appended to text cut by [`truncate`]
pub const TRUNCATION_MARKER: &str = "...";

/// Shortens `text` to at most `limit` characters, appending `...` when anything was cut
///
/// Lengths are measured in Unicode scalar values, so a cut never splits a code point.
/// Text at or below the limit is returned unchanged without allocating.
///
/// # Examples
///
/// ```
/// use transcript_extractor::truncate;
///
/// assert_eq!(truncate("hello", 5), "hello");
/// assert_eq!(truncate("hello world", 5), "hello...");
/// ```
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], TRUNCATION_MARKER)),
    }
}

/// Strips leading and trailing whitespace, counting the ASCII separators
/// U+001C..=U+001F as whitespace alongside Unicode `White_Space`
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_strippable)
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// First `limit` characters of `text`, without any marker
pub fn char_prefix(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        None => text,
        Some((cut, _)) => &text[..cut],
    }
}
