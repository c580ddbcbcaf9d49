//! The node abstraction and the render entry points.

use std::borrow::Cow;
use std::io::Write;

use crate::element::Element;
use crate::error::RenderError;
use crate::text::Text;

/// Doctype emitted by [`to_document`].
const DOCTYPE: &str = "<!DOCTYPE html>";

/// Anything that can render itself to HTML.
pub trait Render {
    /// Append the rendered HTML to `out`.
    ///
    /// On error `out` may hold a partial rendering and must be discarded.
    fn render_to(&self, out: &mut String) -> Result<(), RenderError>;

    /// Render to a new string.
    fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_to(&mut out)?;
        Ok(out)
    }
}

/// A node of the document tree: a text leaf or an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Text(Text),
    Element(Element),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(Text::new(content))
    }

    /// An empty fragment, rendering nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::Element(Element::fragment())
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }
}

impl Render for Node {
    fn render_to(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            Self::Text(text) => text.render_to(out),
            Self::Element(el) => el.render_to(out),
        }
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render_to(&self, out: &mut String) -> Result<(), RenderError> {
        (**self).render_to(out)
    }
}

impl<T: Render> Render for [T] {
    fn render_to(&self, out: &mut String) -> Result<(), RenderError> {
        for node in self {
            node.render_to(out)?;
        }
        Ok(())
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&'static str> for Node {
    fn from(content: &'static str) -> Self {
        Self::text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Self::text(content)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::empty, Into::into)
    }
}

/// Render `node` and write the result to `sink`.
///
/// The whole tree is rendered in memory first: on a validation error
/// nothing is written. A sink failure is returned as
/// [`RenderError::Sink`] carrying the sink's own error.
///
/// ```
/// use tagtree_html::render;
/// use tagtree_html::tags::div;
///
/// let mut buf = Vec::new();
/// render(&mut buf, &div().child("Hello")).unwrap();
/// assert_eq!(buf, b"<div>Hello</div>");
/// ```
pub fn render<W, N>(sink: &mut W, node: &N) -> Result<(), RenderError>
where
    W: Write + ?Sized,
    N: Render + ?Sized,
{
    let html = node.render()?;
    sink.write_all(html.as_bytes())?;
    Ok(())
}

/// Like [`render`], prefixing the output with `<!DOCTYPE html>`.
pub fn render_document<W, N>(sink: &mut W, node: &N) -> Result<(), RenderError>
where
    W: Write + ?Sized,
    N: Render + ?Sized,
{
    let html = to_document(node)?;
    sink.write_all(html.as_bytes())?;
    Ok(())
}

/// Render `node` to a string starting with `<!DOCTYPE html>`.
pub fn to_document<N: Render + ?Sized>(node: &N) -> Result<String, RenderError> {
    let mut html = String::from(DOCTYPE);
    node.render_to(&mut html)?;
    Ok(html)
}
