//! Combinators for conditional and repeated content.
//!
//! All of them build ordinary trees: absent content becomes an empty
//! fragment and collections are wrapped in a fragment, so results can be
//! passed anywhere a [`Node`] is accepted.

use crate::element::Element;
use crate::node::Node;

/// Return `result` when `condition` holds, otherwise `alternative`.
///
/// ```
/// use tagtree_html::helpers::if_else;
/// use tagtree_html::tags::div;
///
/// let active = true;
/// let el = div().attr("class", if_else(active, "active", "inactive"));
/// ```
pub fn if_else<T>(condition: bool, result: T, alternative: T) -> T {
    if condition { result } else { alternative }
}

/// Include `node` only when `condition` holds.
pub fn when(condition: bool, node: impl Into<Node>) -> Node {
    if condition { node.into() } else { Node::empty() }
}

/// Include the value if present.
pub fn maybe<T: Into<Node>>(value: Option<T>) -> Node {
    value.into()
}

/// Call `f` exactly `n` times and wrap the results in a fragment.
///
/// Each call produces a fresh node.
///
/// ```
/// use tagtree_html::Render;
/// use tagtree_html::helpers::repeat;
/// use tagtree_html::tags::{li, ul};
///
/// let list = ul().child(repeat(2, || li().child("item")));
/// assert_eq!(list.render().unwrap(), "<ul><li>item</li><li>item</li></ul>");
/// ```
pub fn repeat<N, F>(n: usize, mut f: F) -> Node
where
    N: Into<Node>,
    F: FnMut() -> N,
{
    Element::fragment().add((0..n).map(|_| f())).into()
}

/// Map each item to a node and wrap the results, in order, in a fragment.
///
/// ```
/// use tagtree_html::Render;
/// use tagtree_html::helpers::map;
/// use tagtree_html::tags::{li, ul};
///
/// let fruits = ["Apple", "Banana"];
/// let list = ul().child(map(fruits, |f| li().child(f)));
/// assert_eq!(list.render().unwrap(), "<ul><li>Apple</li><li>Banana</li></ul>");
/// ```
pub fn map<I, N, F>(items: I, f: F) -> Node
where
    I: IntoIterator,
    N: Into<Node>,
    F: FnMut(I::Item) -> N,
{
    Element::fragment().add(items.into_iter().map(f)).into()
}
