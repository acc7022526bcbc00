//! Shape validation for attribute sets.
//!
//! Runs before any transformation and is side-effect-free. The key-shape
//! check scans the whole map first; the remaining rules fail fast on the
//! first violating entry in insertion order.

use crate::error::ValidationError;
use crate::value::{AttrKey, AttrSet, AttrValue, NestedMap};

/// Check an attribute set against the shape rules.
///
/// Rejects non-string top-level keys, nested maps under any key other
/// than `class`/`style`, malformed `class`/`style` entries, and nesting
/// deeper than one level.
pub fn validate(attrs: &AttrSet) -> Result<(), ValidationError> {
	if attrs
		.keys()
		.any(|key| matches!(key, AttrKey::Index(_)))
	{
		return Err(ValidationError::NonStringKey);
	}

	for (key, value) in attrs.iter() {
		let AttrValue::Nested(map) = value else {
			continue;
		};
		let AttrKey::Name(name) = key else {
			continue;
		};

		if name != "class" && name != "style" {
			return Err(ValidationError::NestedNotAllowed { key: name.clone() });
		}

		if name == "style" {
			validate_style(map)?;
		}

		if name == "class" {
			validate_class(map)?;
		}

		if map
			.values()
			.any(|nested| matches!(nested, AttrValue::Nested(_)))
		{
			return Err(ValidationError::DoublyNested { key: name.clone() });
		}
	}

	Ok(())
}

fn validate_style(map: &NestedMap) -> Result<(), ValidationError> {
	if map.keys().any(|key| matches!(key, AttrKey::Index(_))) {
		return Err(ValidationError::StyleKeyNotString);
	}

	for (key, value) in map {
		if *value == AttrValue::Bool(true) {
			let property = match key {
				AttrKey::Name(name) => name.clone(),
				AttrKey::Index(index) => index.to_string(),
			};
			return Err(ValidationError::StyleValueTrue { property });
		}
	}

	Ok(())
}

fn validate_class(map: &NestedMap) -> Result<(), ValidationError> {
	for (key, value) in map {
		if let AttrKey::Name(name) = key
			&& matches!(value, AttrValue::Str(_))
		{
			return Err(ValidationError::ClassValueString { key: name.clone() });
		}
	}

	for (key, value) in map {
		if let AttrKey::Index(index) = key
			&& !matches!(value, AttrValue::Str(_))
		{
			return Err(ValidationError::ClassIndexedNonString { index: *index });
		}
	}

	Ok(())
}
