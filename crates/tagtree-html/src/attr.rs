//! Element attributes.
//!
//! Attribute values are a closed type: a string or a boolean. Typed
//! construction cannot produce anything else; dynamic maps coming from JSON
//! are checked when converted (see [`Attrs::from_json_map`]).

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map;

use serde_json::{Map, Value};

use crate::error::RenderError;
use crate::util::escape_html_into;

/// Attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `name="value"` (escaped), even when empty.
    Str(Cow<'static, str>),
    /// `true` renders the bare name, `false` omits the attribute.
    Bool(bool),
}

impl From<&'static str> for AttrValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(Cow::Owned(value.clone()))
    }
}

impl From<Cow<'static, str>> for AttrValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Attribute map, ordered by key.
///
/// Keys are compared byte-wise, which gives the deterministic ascending
/// order used for rendering. Keys are trimmed when rendered, not when
/// inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs(BTreeMap<Cow<'static, str>, AttrValue>);

impl Attrs {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by its exact (untrimmed) key.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Remove an attribute.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.remove(key)
    }

    /// Number of attributes, including `false` ones that will not render.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Merge `other` into `self`; keys present in both take `other`'s value.
    pub fn merge(&mut self, other: Attrs) {
        self.0.extend(other.0);
    }

    /// Build attributes from a dynamic JSON object.
    ///
    /// Entries are checked in ascending key order and the first bad one is
    /// reported: an empty trimmed key, a `null` value
    /// ([`RenderError::NilAttributeValue`]) or a value that is neither a
    /// string nor a boolean ([`RenderError::InvalidAttributeType`]).
    ///
    /// ```
    /// use serde_json::json;
    /// use tagtree_html::{Attrs, RenderError};
    ///
    /// let Ok(attrs) = Attrs::try_from(json!({"class": "x", "hidden": true})) else {
    ///     panic!("valid attributes");
    /// };
    /// assert_eq!(attrs.len(), 2);
    ///
    /// let err = Attrs::try_from(json!({"tabindex": 3})).unwrap_err();
    /// assert!(matches!(err, RenderError::InvalidAttributeType { .. }));
    /// ```
    pub fn from_json_map(map: Map<String, Value>) -> Result<Self, RenderError> {
        let mut entries: Vec<(String, Value)> = map.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut attrs = Self::new();
        for (key, value) in entries {
            let trimmed = key.trim();
            if trimmed.is_empty() {
                return Err(RenderError::EmptyAttributeKey);
            }
            let value = match value {
                Value::String(s) => AttrValue::from(s),
                Value::Bool(b) => AttrValue::Bool(b),
                Value::Null => {
                    return Err(RenderError::NilAttributeValue {
                        key: trimmed.to_owned(),
                    });
                }
                other => {
                    return Err(RenderError::InvalidAttributeType {
                        key: trimmed.to_owned(),
                        found: json_type_name(&other),
                    });
                }
            };
            attrs.insert(key, value);
        }
        Ok(attrs)
    }

    /// Check every key, in render order.
    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        if self.0.keys().any(|key| key.trim().is_empty()) {
            return Err(RenderError::EmptyAttributeKey);
        }
        Ok(())
    }

    /// Append ` name="value"` / ` name` for each rendered attribute.
    ///
    /// Callers must [`validate`](Self::validate) first.
    pub(crate) fn write_to(&self, out: &mut String) {
        for (key, value) in &self.0 {
            let key = key.trim();
            match value {
                AttrValue::Str(s) => {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    escape_html_into(s, out);
                    out.push('"');
                }
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(key);
                }
                AttrValue::Bool(false) => {}
            }
        }
    }
}

impl TryFrom<Value> for Attrs {
    type Error = RenderError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Self::from_json_map(map),
            Value::Null => Ok(Self::new()),
            other => Err(RenderError::InvalidAttributeType {
                key: String::new(),
                found: json_type_name(&other),
            }),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<Cow<'static, str>>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for Attrs
where
    K: Into<Cow<'static, str>>,
    V: Into<AttrValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Attrs {
    type Item = (Cow<'static, str>, AttrValue);
    type IntoIter = btree_map::IntoIter<Cow<'static, str>, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
