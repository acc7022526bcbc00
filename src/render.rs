//! Final assembly of the attribute string.

use indexmap::IndexMap;

use crate::normalize::Normalized;

/// Join normalized entries into the final attribute string.
///
/// Flags render as the bare key, everything else as `key="value"`.
/// A non-empty result carries exactly one leading and one trailing
/// space so callers can splice it directly between a tag name and `>`.
pub(crate) fn render(normalized: &IndexMap<String, Normalized>) -> String {
	let parts: Vec<String> = normalized
		.iter()
		.map(|(key, value)| match value {
			Normalized::Flag => key.clone(),
			Normalized::Text(text) => format!("{key}=\"{text}\""),
		})
		.collect();

	if parts.is_empty() {
		String::new()
	} else {
		format!(" {} ", parts.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_input_renders_empty_string() {
		assert_eq!(render(&IndexMap::new()), "");
	}

	#[test]
	fn test_surrounding_spaces_and_flags() {
		let mut normalized = IndexMap::new();
		normalized.insert(
			"type".to_string(),
			Normalized::Text("button".to_string()),
		);
		normalized.insert("disabled".to_string(), Normalized::Flag);
		assert_eq!(render(&normalized), r#" type="button" disabled "#);
	}
}
