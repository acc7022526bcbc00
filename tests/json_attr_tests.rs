//! Tests for JSON attribute serialization.

use rstest::rstest;
use serde::Serialize;
use serde_json::json;

use html_attrs::json_attr;

#[rstest]
fn test_generates_a_valid_json_attribute_from_a_map() {
	let rendered = json_attr(&json!({
		"foo": "bar",
		"bool": true,
		"int": 2,
		"float": 1.2,
		"numeric": "2.5",
		"xss": "<script>alert(\"test\")</script>",
		"amp": "a & b",
	}))
	.unwrap();

	assert_eq!(
		rendered,
		"{&quot;foo&quot;:&quot;bar&quot;,&quot;bool&quot;:true,&quot;int&quot;:2,\
		 &quot;float&quot;:1.2,&quot;numeric&quot;:&quot;2.5&quot;,\
		 &quot;xss&quot;:&quot;&lt;script&gt;alert(\\&quot;test\\&quot;)&lt;/script&gt;&quot;,\
		 &quot;amp&quot;:&quot;a &amp; b&quot;}"
	);
}

#[rstest]
fn test_generates_a_valid_json_attribute_from_a_struct() {
	#[derive(Serialize)]
	struct Payload {
		open: bool,
		count: u32,
	}

	let rendered = json_attr(&Payload {
		open: true,
		count: 3,
	})
	.unwrap();
	assert_eq!(rendered, "{&quot;open&quot;:true,&quot;count&quot;:3}");
}

#[rstest]
fn test_returns_empty_string_for_empty_values() {
	assert_eq!(json_attr(&json!([])).unwrap(), "");
	assert_eq!(json_attr(&json!({})).unwrap(), "");
	assert_eq!(json_attr(&json!(null)).unwrap(), "");
	assert_eq!(json_attr(&json!(false)).unwrap(), "");
	assert_eq!(json_attr(&None::<u32>).unwrap(), "");
}

#[rstest]
fn test_escapes_single_quotes() {
	let rendered = json_attr(&json!({"apos": "it's"})).unwrap();
	assert_eq!(rendered, "{&quot;apos&quot;:&quot;it&#039;s&quot;}");
}

#[rstest]
fn test_output_contains_no_raw_specials() {
	let rendered = json_attr(&json!({"xss": "<script>"})).unwrap();
	assert!(!rendered.contains('<'));
	assert!(!rendered.contains('>'));
	assert!(!rendered.contains('"'));
	assert!(!rendered.contains('\''));
}

#[rstest]
fn test_map_with_non_string_keys_fails() {
	use std::collections::BTreeMap;

	let mut map = BTreeMap::new();
	map.insert(vec![1u8], "value");
	assert!(json_attr(&map).is_err());
}
