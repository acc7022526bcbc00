use indexmap::IndexMap;
use serde_json::Value;

/// Key of an attribute entry.
///
/// HTML attribute names are always strings; `Index` exists so that
/// list-like inputs (e.g. built from a JSON array) are representable
/// and can be rejected by validation, and so `class` maps can carry
/// positional plain-token entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrKey {
	/// A named attribute key
	Name(String),
	/// A positional key (only meaningful inside a `class` map)
	Index(usize),
}

impl From<&str> for AttrKey {
	fn from(name: &str) -> Self {
		AttrKey::Name(name.to_string())
	}
}

impl From<String> for AttrKey {
	fn from(name: String) -> Self {
		AttrKey::Name(name)
	}
}

impl From<usize> for AttrKey {
	fn from(index: usize) -> Self {
		AttrKey::Index(index)
	}
}

/// One level of key/value mapping, permitted only under `class` and `style`.
pub type NestedMap = IndexMap<AttrKey, AttrValue>;

/// The value of a single attribute.
///
/// A closed sum over everything an attribute entry may hold. Nested maps
/// are only legal under the `class` and `style` keys; that rule is
/// enforced by validation, not by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// String value, escaped on output
	Str(String),
	/// Integer value, rendered as-is
	Int(i64),
	/// Float value, rendered as-is
	Float(f64),
	/// `true` renders the bare attribute name, `false` drops the entry
	Bool(bool),
	/// Dropped on output
	Null,
	/// One level of nesting for `class`/`style`
	Nested(NestedMap),
}

impl AttrValue {
	/// True when the value is exactly `Null` or `Bool(false)`.
	///
	/// These two are the only values that drop an attribute; empty
	/// strings, `0` and `"0"` all render.
	pub fn is_null_or_false(&self) -> bool {
		matches!(self, AttrValue::Null | AttrValue::Bool(false))
	}

	/// Text form of a scalar value, as spliced into style declarations.
	pub(crate) fn scalar_text(&self) -> String {
		match self {
			AttrValue::Str(s) => s.clone(),
			AttrValue::Int(i) => i.to_string(),
			AttrValue::Float(f) => f.to_string(),
			AttrValue::Bool(b) => b.to_string(),
			AttrValue::Null | AttrValue::Nested(_) => String::new(),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Str(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Str(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		AttrValue::Int(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		AttrValue::Int(value as i64)
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		AttrValue::Float(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl<T> From<Option<T>> for AttrValue
where
	T: Into<AttrValue>,
{
	fn from(value: Option<T>) -> Self {
		match value {
			Some(inner) => inner.into(),
			None => AttrValue::Null,
		}
	}
}

impl From<Value> for AttrValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => AttrValue::Null,
			Value::Bool(b) => AttrValue::Bool(b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => AttrValue::Int(i),
				None => AttrValue::Float(n.as_f64().unwrap_or_default()),
			},
			Value::String(s) => AttrValue::Str(s),
			Value::Array(items) => AttrValue::Nested(
				items
					.into_iter()
					.enumerate()
					.map(|(i, item)| (AttrKey::Index(i), AttrValue::from(item)))
					.collect(),
			),
			Value::Object(map) => AttrValue::Nested(
				map.into_iter()
					.map(|(key, item)| (AttrKey::Name(key), AttrValue::from(item)))
					.collect(),
			),
		}
	}
}

/// An insertion-ordered set of attributes.
///
/// Order is significant: the rendered output lists attributes exactly in
/// insertion order, through validation and normalization.
///
/// # Examples
///
/// ```
/// use html_attrs::{attr, AttrSet};
///
/// let mut attrs = AttrSet::new();
/// attrs.insert("type", "button");
/// attrs.insert("disabled", true);
///
/// assert_eq!(attr(&attrs).unwrap(), r#" type="button" disabled "#);
/// ```
///
/// Constructing from a JSON literal preserves order as well:
///
/// ```
/// use html_attrs::{attr, AttrSet};
/// use serde_json::json;
///
/// let attrs = AttrSet::from(json!({"class": "border", "data-id": 3}));
/// assert_eq!(attr(&attrs).unwrap(), r#" class="border" data-id="3" "#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrSet {
	entries: IndexMap<AttrKey, AttrValue>,
}

impl AttrSet {
	/// Create an empty attribute set
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert an attribute, replacing any previous value under the same
	/// key while keeping its original position.
	pub fn insert(&mut self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) {
		self.entries.insert(key.into(), value.into());
	}

	/// Look up a named attribute
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries.get(&AttrKey::Name(name.to_string()))
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Iterate entries in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&AttrKey, &AttrValue)> {
		self.entries.iter()
	}

	/// Iterate keys in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &AttrKey> {
		self.entries.keys()
	}
}

impl<K, V> FromIterator<(K, V)> for AttrSet
where
	K: Into<AttrKey>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

impl<K, V> Extend<(K, V)> for AttrSet
where
	K: Into<AttrKey>,
	V: Into<AttrValue>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.entries.insert(key.into(), value.into());
		}
	}
}

impl IntoIterator for AttrSet {
	type Item = (AttrKey, AttrValue);
	type IntoIter = indexmap::map::IntoIter<AttrKey, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a AttrSet {
	type Item = (&'a AttrKey, &'a AttrValue);
	type IntoIter = indexmap::map::Iter<'a, AttrKey, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl From<Value> for AttrSet {
	/// Convert a JSON value into an attribute set.
	///
	/// Objects map to named keys, arrays to positional keys (which
	/// validation later rejects at the top level). Any other JSON value
	/// produces an empty set.
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => Self {
				entries: map
					.into_iter()
					.map(|(key, item)| (AttrKey::Name(key), AttrValue::from(item)))
					.collect(),
			},
			Value::Array(items) => Self {
				entries: items
					.into_iter()
					.enumerate()
					.map(|(i, item)| (AttrKey::Index(i), AttrValue::from(item)))
					.collect(),
			},
			_ => Self::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_json_object_preserves_order() {
		let attrs = AttrSet::from(json!({"z": 1, "a": 2, "m": 3}));
		let keys: Vec<_> = attrs.keys().cloned().collect();
		assert_eq!(
			keys,
			vec![
				AttrKey::Name("z".to_string()),
				AttrKey::Name("a".to_string()),
				AttrKey::Name("m".to_string()),
			]
		);
	}

	#[test]
	fn test_json_array_becomes_index_keys() {
		let attrs = AttrSet::from(json!(["a", "b"]));
		let keys: Vec<_> = attrs.keys().cloned().collect();
		assert_eq!(keys, vec![AttrKey::Index(0), AttrKey::Index(1)]);
	}

	#[test]
	fn test_number_conversion() {
		assert_eq!(AttrValue::from(json!(3)), AttrValue::Int(3));
		assert_eq!(AttrValue::from(json!(1.3)), AttrValue::Float(1.3));
	}

	#[test]
	fn test_null_or_false() {
		assert!(AttrValue::Null.is_null_or_false());
		assert!(AttrValue::Bool(false).is_null_or_false());
		assert!(!AttrValue::Bool(true).is_null_or_false());
		assert!(!AttrValue::Str(String::new()).is_null_or_false());
		assert!(!AttrValue::Int(0).is_null_or_false());
	}

	#[test]
	fn test_insert_keeps_position_on_overwrite() {
		let mut attrs = AttrSet::new();
		attrs.insert("first", "1");
		attrs.insert("second", "2");
		attrs.insert("first", "updated");
		let keys: Vec<_> = attrs.keys().cloned().collect();
		assert_eq!(
			keys,
			vec![
				AttrKey::Name("first".to_string()),
				AttrKey::Name("second".to_string()),
			]
		);
		assert_eq!(
			attrs.get("first"),
			Some(&AttrValue::Str("updated".to_string()))
		);
	}
}
