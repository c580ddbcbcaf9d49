//! Escaping and whitespace helpers shared by text and attribute rendering.

use std::borrow::Cow;

/// Escape special HTML characters.
///
/// Escapes `&`, `<`, `>`, `"` and `'`, so the result is safe both as
/// element content and inside a double-quoted attribute value.
///
/// # Examples
///
/// ```
/// use tagtree_html::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#39;x&#39;&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    escape_html_into(s, &mut result);
    result
}

/// Escape `s` and append it to `out`.
pub(crate) fn escape_html_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Collapse whitespace runs to a single space.
///
/// Interior runs become one ASCII space. A leading or trailing run is kept
/// as exactly one space, so adjacent fragments can be concatenated without
/// doubling spaces or losing a significant boundary. The trailing edge is
/// only inspected when the input has more than one character.
pub(crate) fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Cow::Borrowed(s);
    };
    let starts_with_space = first.is_whitespace();
    let ends_with_space = chars.next_back().is_some_and(char::is_whitespace);

    let mut out = String::with_capacity(s.len());
    if starts_with_space {
        out.push(' ');
    }
    for (i, word) in s.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    if ends_with_space {
        out.push(' ');
    }

    if out == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&#34;quoted&#34;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html("héllo wörld"), "héllo wörld");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_collapse_empty() {
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_collapse_interior_runs() {
        assert_eq!(collapse_whitespace("hello \t\n world"), "hello world");
        assert_eq!(collapse_whitespace("a  b   c"), "a b c");
    }

    #[test]
    fn test_collapse_keeps_one_edge_space() {
        assert_eq!(collapse_whitespace(" hello  world "), " hello world ");
        assert_eq!(collapse_whitespace("\n\n  indented"), " indented");
        assert_eq!(collapse_whitespace("trailing\t\t"), "trailing ");
    }

    #[test]
    fn test_collapse_single_whitespace_char() {
        // A lone character is only checked as the leading edge.
        assert_eq!(collapse_whitespace(" "), " ");
        assert_eq!(collapse_whitespace("\n"), " ");
    }

    #[test]
    fn test_collapse_whitespace_only() {
        assert_eq!(collapse_whitespace("   "), "  ");
    }

    #[test]
    fn test_collapse_unicode_whitespace() {
        assert_eq!(collapse_whitespace("a\u{00A0}\u{2003}b"), "a b");
        assert_eq!(collapse_whitespace("\u{3000}x"), " x");
    }

    #[test]
    fn test_collapse_borrows_when_unchanged() {
        assert!(matches!(collapse_whitespace("no change"), Cow::Borrowed(_)));
        assert!(matches!(collapse_whitespace("two  spaces"), Cow::Owned(_)));
    }
}
