//! JSON serialization for attribute embedding.

use serde::Serialize;
use serde_json::Value;

use crate::encode::encode_entities;
use crate::error::SerializationError;

/// Serialize a value to a JSON string safe for embedding inside an HTML
/// attribute.
///
/// Null, `false` and empty containers produce an empty string. The JSON
/// text keeps unicode characters and forward slashes unescaped, then
/// every special character is replaced by its entity. Unlike
/// [`escape`](crate::escape), no double-encode protection applies here:
/// JSON payloads are data, not pre-escaped markup.
///
/// # Examples
///
/// ```
/// use html_attrs::json_attr;
/// use serde_json::json;
///
/// let payload = json_attr(&json!({"xss": "<script>"})).unwrap();
/// assert_eq!(payload, "{&quot;xss&quot;:&quot;&lt;script&gt;&quot;}");
///
/// assert_eq!(json_attr(&json!(null)).unwrap(), "");
/// assert_eq!(json_attr(&json!(false)).unwrap(), "");
/// assert_eq!(json_attr(&json!([])).unwrap(), "");
/// ```
pub fn json_attr<T>(value: &T) -> Result<String, SerializationError>
where
	T: Serialize + ?Sized,
{
	let value = serde_json::to_value(value)?;

	let empty = match &value {
		Value::Null => true,
		Value::Bool(b) => !b,
		Value::Array(items) => items.is_empty(),
		Value::Object(map) => map.is_empty(),
		_ => false,
	};
	if empty {
		return Ok(String::new());
	}

	let json = serde_json::to_string(&value)?;
	Ok(encode_entities(&json))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_serializes_and_escapes_object() {
		let rendered = json_attr(&json!({"foo": "bar", "int": 2})).unwrap();
		assert_eq!(rendered, "{&quot;foo&quot;:&quot;bar&quot;,&quot;int&quot;:2}");
	}

	#[test]
	fn test_keeps_unicode_unescaped() {
		let rendered = json_attr(&json!({"name": "caf\u{e9}"})).unwrap();
		assert!(rendered.contains("caf\u{e9}"));
	}

	#[test]
	fn test_keeps_slashes_unescaped() {
		let rendered = json_attr(&json!({"url": "https://example.com/a"})).unwrap();
		assert!(rendered.contains("https://example.com/a"));
	}

	#[test]
	fn test_empty_inputs_render_empty_string() {
		assert_eq!(json_attr(&json!(null)).unwrap(), "");
		assert_eq!(json_attr(&json!(false)).unwrap(), "");
		assert_eq!(json_attr(&json!([])).unwrap(), "");
		assert_eq!(json_attr(&json!({})).unwrap(), "");
	}

	#[test]
	fn test_no_raw_angle_brackets() {
		let rendered = json_attr(&json!({"xss": "<script>alert(\"x\")</script>"})).unwrap();
		assert!(!rendered.contains('<'));
		assert!(!rendered.contains('>'));
		assert!(!rendered.contains('"'));
	}
}
