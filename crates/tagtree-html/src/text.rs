//! Text nodes.

use std::borrow::Cow;

use crate::error::RenderError;
use crate::node::Render;
use crate::util::{collapse_whitespace, escape_html_into};

/// Plain text content, rendered escaped with whitespace runs collapsed.
///
/// ```
/// use tagtree_html::{Render, Text};
///
/// assert_eq!(Text::new(" hello  world ").render().unwrap(), " hello world ");
/// assert_eq!(Text::new("a < b").render().unwrap(), "a &lt; b");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text(Cow<'static, str>);

impl Text {
    /// Create a text node from raw (unescaped) content.
    pub fn new(content: impl Into<Cow<'static, str>>) -> Self {
        Self(content.into())
    }

    /// The raw content, before normalization and escaping.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Render for Text {
    fn render_to(&self, out: &mut String) -> Result<(), RenderError> {
        escape_html_into(&collapse_whitespace(&self.0), out);
        Ok(())
    }
}

impl From<&'static str> for Text {
    fn from(content: &'static str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(s: &'static str) -> String {
        Text::new(s).render().unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_plain_ascii_unchanged() {
        for s in ["Hello", "Hello, World!", "x=1;y=2", "a-b_c.d"] {
            assert_eq!(render(s), s);
        }
    }

    #[test]
    fn test_collapses_and_keeps_edges() {
        assert_eq!(render(" hello  world "), " hello world ");
        assert_eq!(render("Hello\n\t World"), "Hello World");
        assert_eq!(render("  leading"), " leading");
        assert_eq!(render("trailing  "), "trailing ");
    }

    #[test]
    fn test_escapes_after_normalizing() {
        assert_eq!(render("  <b>bold</b>  &  more "), " &lt;b&gt;bold&lt;/b&gt; &amp; more ");
        assert_eq!(render(r#"say "hi" it's"#), "say &#34;hi&#34; it&#39;s");
    }

    #[test]
    fn test_adjacent_fragments_single_space() {
        let joined = format!("{}{}", render("Hello "), render("world"));
        assert_eq!(joined, "Hello world");
    }

    #[test]
    fn test_multiline_stylesheet() {
        let css = "\n\t\tbody {\n\t\t\tmargin: 0;\n\t\t}\n\t";
        assert_eq!(render(css), " body { margin: 0; } ");
    }

    #[test]
    fn test_owned_content() {
        let text = Text::from(format!("item {}", 3));
        assert_eq!(text.as_str(), "item 3");
        assert_eq!(text.render().unwrap(), "item 3");
    }
}
