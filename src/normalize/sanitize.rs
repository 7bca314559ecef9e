use regex::Regex;

/// Hard cap on plain-text preview length, in characters.
pub const CONTENT_TEXT_MAX: usize = 300;

/// Strip markup and produce a short plain-text preview.
///
/// Tags are removed with a single regex pass, a fixed set of entities is
/// decoded, the result is trimmed and cut at `CONTENT_TEXT_MAX` characters.
/// Lossy by design; malformed markup is handled best-effort.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let tag_regex = Regex::new(r"<[^>]*>").unwrap();
    let stripped = tag_regex.replace_all(html, "");

    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");

    decoded.trim().chars().take(CONTENT_TEXT_MAX).collect()
}
