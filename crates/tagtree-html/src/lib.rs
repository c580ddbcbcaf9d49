//! Programmatic HTML tree builder.
//!
//! Documents are built in memory as a tree of [`Node`]s using fluent
//! factory calls and rendered to a single HTML string in one synchronous
//! pass.
//!
//! # Architecture
//!
//! - [`Node`]: closed sum of [`Text`] and [`Element`], both implementing
//!   the [`Render`] trait
//! - [`Attrs`]: attribute map with a closed value type ([`AttrValue`]),
//!   rendered in ascending key order
//! - [`tags`]: one factory per standard HTML element
//! - [`helpers`]: conditional, repeat and map combinators
//!
//! Rendering is fail-fast: the first invalid attribute aborts the whole
//! render and nothing reaches the sink.
//!
//! # Example
//!
//! ```
//! use tagtree_html::tags::{div, p};
//! use tagtree_html::{Render, attrs};
//!
//! let page = div()
//!     .attrs(attrs! { "id" => "main", "hidden" => false })
//!     .child(p().child("Hello"));
//!
//! assert_eq!(page.render().unwrap(), r#"<div id="main"><p>Hello</p></div>"#);
//! ```

mod attr;
mod element;
mod error;
pub mod helpers;
mod node;
pub mod tags;
mod text;
mod util;

pub use attr::{AttrValue, Attrs};
pub use element::Element;
pub use error::RenderError;
pub use node::{Node, Render, render, render_document, to_document};
pub use tags::{VOID_ELEMENTS, is_void_tag};
pub use text::Text;
pub use util::escape_html;

/// Build an [`Attrs`] map from `key => value` pairs.
///
/// Values are anything convertible into [`AttrValue`] (string types and
/// `bool`).
///
/// ```
/// use tagtree_html::attrs;
///
/// let attrs = attrs! { "type" => "checkbox", "checked" => true };
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attrs::new();
        $(attrs.insert($key, $value);)+
        attrs
    }};
}

/// Build a `Vec<Node>` from heterogeneous node-like values.
///
/// ```
/// use tagtree_html::tags::{em, p};
/// use tagtree_html::{Render, nodes};
///
/// let para = p().add(nodes!["Hello ", em().child("there"), "!"]);
/// assert_eq!(para.render().unwrap(), "<p>Hello <em>there</em>!</p>");
/// ```
#[macro_export]
macro_rules! nodes {
    ($($node:expr),* $(,)?) => {
        ::std::vec![$($crate::Node::from($node)),*]
    };
}
