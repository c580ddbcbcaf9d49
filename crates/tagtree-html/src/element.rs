//! Element nodes.

use std::borrow::Cow;

use crate::attr::{AttrValue, Attrs};
use crate::error::RenderError;
use crate::node::{Node, Render};
use crate::tags::is_void_tag;

/// An HTML element: tag name, void flag, attributes and ordered children.
///
/// An empty tag name makes the element a transparent wrapper (fragment):
/// it renders only its children. Void elements render their opening tag
/// only; children appended to them are dropped.
///
/// ```
/// use tagtree_html::{Element, Render};
///
/// let list = Element::new("ul", false)
///     .attr("class", "menu")
///     .child(Element::new("li", false).child("Home"));
/// assert_eq!(list.render().unwrap(), r#"<ul class="menu"><li>Home</li></ul>"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    void: bool,
    attrs: Attrs,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with an explicit void flag.
    ///
    /// This is the primitive every tag factory calls into.
    pub fn new(tag: impl Into<Cow<'static, str>>, void: bool) -> Self {
        Self {
            tag: tag.into(),
            void,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    /// Create an element, inferring the void flag from the tag name.
    ///
    /// Useful for custom or dynamically chosen tag names.
    pub fn void_aware(tag: impl Into<Cow<'static, str>>) -> Self {
        let tag = tag.into();
        let void = is_void_tag(&tag);
        Self::new(tag, void)
    }

    /// Create a tag-less wrapper that renders only its children.
    #[must_use]
    pub fn fragment() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value for the same key.
    #[must_use]
    pub fn attr(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    /// Merge an attribute map into this element.
    #[must_use]
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs.merge(attrs);
        self
    }

    /// Append a single child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    /// Append children in order.
    #[must_use]
    pub fn add<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        if self.void {
            self.log_dropped();
        } else {
            self.children.extend(children.into_iter().map(Into::into));
        }
        self
    }

    /// Append a child in place.
    pub fn push(&mut self, child: impl Into<Node>) -> &mut Self {
        if self.void {
            self.log_dropped();
        } else {
            self.children.push(child.into());
        }
        self
    }

    /// Tag name; empty for fragments.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        self.void
    }

    #[must_use]
    pub fn is_fragment(&self) -> bool {
        self.tag.is_empty()
    }

    #[must_use]
    pub fn attributes(&self) -> &Attrs {
        &self.attrs
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn log_dropped(&self) {
        tracing::debug!(tag = %self.tag, "Ignoring children appended to void element");
    }

    fn render_children(&self, out: &mut String) -> Result<(), RenderError> {
        for child in &self.children {
            child.render_to(out)?;
        }
        Ok(())
    }
}

impl Render for Element {
    fn render_to(&self, out: &mut String) -> Result<(), RenderError> {
        // Nothing is written before every attribute has been checked.
        self.attrs.validate()?;

        if self.is_fragment() {
            return self.render_children(out);
        }

        out.push('<');
        out.push_str(&self.tag);
        self.attrs.write_to(out);
        out.push('>');

        if self.void {
            return Ok(());
        }

        self.render_children(out)?;

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(())
    }
}
