//! Per-attribute value normalization.
//!
//! Assumes validated input; converts every entry into either escaped
//! text or a bare flag, dropping entries whose value is exactly null or
//! false. Empty `class`/`style` results are omitted entirely.

use indexmap::{IndexMap, IndexSet};

use crate::encode::escape;
use crate::value::{AttrKey, AttrSet, AttrValue, NestedMap};

/// An attribute value after normalization.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Normalized {
	/// Escaped text, rendered as `key="text"`
	Text(String),
	/// Boolean-true attribute, rendered as the bare key
	Flag,
}

/// Normalize a validated attribute set into renderable entries,
/// preserving insertion order.
pub(crate) fn normalize(attrs: &AttrSet) -> IndexMap<String, Normalized> {
	let mut out = IndexMap::new();

	for (key, value) in attrs.iter() {
		let AttrKey::Name(name) = key else {
			continue;
		};

		let normalized = match value {
			AttrValue::Nested(map) if name == "style" => style_string(map).map(Normalized::Text),
			AttrValue::Nested(map) if name == "class" => class_list(map).map(Normalized::Text),
			AttrValue::Str(s) => Some(Normalized::Text(escape(s))),
			AttrValue::Int(i) => Some(Normalized::Text(i.to_string())),
			AttrValue::Float(f) => Some(Normalized::Text(f.to_string())),
			AttrValue::Bool(true) => Some(Normalized::Flag),
			AttrValue::Bool(false) | AttrValue::Null => None,
			// rejected by validation
			AttrValue::Nested(_) => None,
		};

		if let Some(entry) = normalized {
			out.insert(name.clone(), entry);
		}
	}

	out
}

/// Flatten a `class` map into an escaped, space-joined token list.
///
/// Index-keyed entries contribute their string value, name-keyed entries
/// contribute their key when the value is truthy. Duplicate entries keep
/// their first-seen position. Returns `None` when nothing survives.
fn class_list(map: &NestedMap) -> Option<String> {
	let mut tokens: IndexSet<String> = IndexSet::new();

	for (key, value) in map {
		match key {
			AttrKey::Index(_) => {
				if let AttrValue::Str(token) = value {
					tokens.insert(token.clone());
				}
			}
			AttrKey::Name(name) => {
				if !value.is_null_or_false() {
					tokens.insert(name.clone());
				}
			}
		}
	}

	if tokens.is_empty() {
		return None;
	}

	let joined = tokens.iter().cloned().collect::<Vec<_>>().join(" ");
	Some(escape(joined.trim()))
}

/// Flatten a `style` map into `property: value` declarations joined by
/// `"; "`, each escaped individually. Null and false entries are
/// dropped; no trailing delimiter is emitted. Returns `None` when
/// nothing survives.
fn style_string(map: &NestedMap) -> Option<String> {
	let mut declarations = Vec::new();

	for (key, value) in map {
		if value.is_null_or_false() {
			continue;
		}
		let AttrKey::Name(property) = key else {
			continue;
		};
		declarations.push(escape(&format!("{}: {}", property, value.scalar_text())));
	}

	if declarations.is_empty() {
		None
	} else {
		Some(declarations.join("; "))
	}
}
