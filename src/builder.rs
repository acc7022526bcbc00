//! Fluent accumulation of attributes.

use indexmap::{IndexMap, IndexSet};

use crate::error::AttrResult;
use crate::value::{AttrKey, AttrSet, AttrValue};

/// Fluent builder for HTML attributes.
///
/// Accumulates attributes, classes, styles and ARIA attributes across
/// chained calls, then merges everything into one [`AttrSet`] and runs
/// it through the same validate/normalize/render pipeline as
/// [`attr`](crate::attr).
///
/// One builder instance per logical render; the builder mutates its own
/// state and is not meant for concurrent use without external
/// synchronization.
///
/// # Examples
///
/// ```
/// use html_attrs::AttrBuilder;
///
/// let is_active = true;
/// let rendered = AttrBuilder::new()
///     .set("type", "button")
///     .class("btn")
///     .class_if("active", is_active)
///     .render()
///     .unwrap();
///
/// assert_eq!(rendered, r#" type="button" class="btn active" "#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttrBuilder {
	/// Attributes from `merge`, validated only at render time
	raw: AttrSet,
	/// Attributes from `set`/`aria`
	direct: IndexMap<String, AttrValue>,
	/// Class tokens, first-seen order
	classes: IndexSet<String>,
	/// Style declarations, last write per property wins
	styles: IndexMap<String, AttrValue>,
}

impl AttrBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set any attribute. Null and false values are skipped.
	///
	/// ```
	/// use html_attrs::AttrBuilder;
	///
	/// let rendered = AttrBuilder::new()
	///     .set("type", "button")
	///     .set("disabled", true)
	///     .set("data-id", 123)
	///     .set("data-gone", None::<&str>)
	///     .render()
	///     .unwrap();
	///
	/// assert_eq!(rendered, r#" type="button" disabled data-id="123" "#);
	/// ```
	pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		let value = value.into();
		if !value.is_null_or_false() {
			self.direct.insert(name.into(), value);
		}
		self
	}

	/// Set an `aria-` prefixed attribute. Whitespace-only values are
	/// skipped.
	pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
		self.aria_if(name, value, true)
	}

	/// Conditionally set an `aria-` prefixed attribute.
	pub fn aria_if(mut self, name: &str, value: impl Into<String>, when: bool) -> Self {
		let value = value.into();
		if when && !value.trim().is_empty() {
			self.direct.insert(format!("aria-{name}"), AttrValue::Str(value));
		}
		self
	}

	/// Add one or more class tokens, split on whitespace. Tokens already
	/// present keep their original position.
	pub fn class(self, text: &str) -> Self {
		self.class_if(text, true)
	}

	/// Conditionally add class tokens.
	///
	/// ```
	/// use html_attrs::AttrBuilder;
	///
	/// let rendered = AttrBuilder::new()
	///     .class("base")
	///     .class_if("active", true)
	///     .class_if("hidden", false)
	///     .render()
	///     .unwrap();
	///
	/// assert_eq!(rendered, r#" class="base active" "#);
	/// ```
	pub fn class_if(mut self, text: &str, when: bool) -> Self {
		if when {
			for token in text.split_whitespace() {
				self.classes.insert(token.to_string());
			}
		}
		self
	}

	/// Add a style declaration. Null and false values are skipped;
	/// repeating a property overwrites its value.
	///
	/// ```
	/// use html_attrs::AttrBuilder;
	///
	/// let rendered = AttrBuilder::new()
	///     .style("--primary-color", "#ff0000")
	///     .style("opacity", 0.5)
	///     .style("border", None::<&str>)
	///     .render()
	///     .unwrap();
	///
	/// assert_eq!(rendered, r#" style="--primary-color: #ff0000; opacity: 0.5" "#);
	/// ```
	pub fn style(mut self, property: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		let value = value.into();
		if !value.is_null_or_false() {
			self.styles.insert(property.into(), value);
		}
		self
	}

	/// Merge in a pre-built attribute set, later keys overwriting
	/// earlier ones. The merged entries are kept raw and validated by
	/// [`render`](Self::render).
	pub fn merge(mut self, attrs: impl Into<AttrSet>) -> Self {
		let attrs: AttrSet = attrs.into();
		for (key, value) in attrs {
			self.raw.insert(key, value);
		}
		self
	}

	/// Build the final attribute set.
	///
	/// Starts from the raw merged attributes, overlays directly-set
	/// ones, then folds the accumulated class tokens and style
	/// declarations into any existing `class`/`style` entry, whatever
	/// shape it has (absent, string, or nested map).
	pub fn to_attrs(&self) -> AttrSet {
		let mut attrs = self.raw.clone();

		for (name, value) in &self.direct {
			attrs.insert(name.as_str(), value.clone());
		}

		if !self.classes.is_empty() {
			let fluent = self.classes.iter().cloned().collect::<Vec<_>>().join(" ");
			match attrs.get("class").cloned() {
				None => attrs.insert("class", fluent),
				Some(AttrValue::Str(existing)) => {
					let merged = format!("{existing} {fluent}").trim().to_string();
					attrs.insert("class", merged);
				}
				Some(AttrValue::Nested(mut existing)) => {
					for token in &self.classes {
						existing.insert(AttrKey::Name(token.clone()), AttrValue::Bool(true));
					}
					attrs.insert("class", AttrValue::Nested(existing));
				}
				// scalar class entries of other shapes win over fluent tokens
				Some(_) => {}
			}
		}

		if !self.styles.is_empty() {
			match attrs.get("style").cloned() {
				None => {
					let map = self
						.styles
						.iter()
						.map(|(property, value)| {
							(AttrKey::Name(property.clone()), value.clone())
						})
						.collect();
					attrs.insert("style", AttrValue::Nested(map));
				}
				Some(AttrValue::Str(existing)) => {
					let fragments = self
						.styles
						.iter()
						.map(|(property, value)| {
							format!("{}: {}", property, value.scalar_text())
						})
						.collect::<Vec<_>>()
						.join("; ");
					let trimmed = existing.trim_end_matches([';', ' ']);
					attrs.insert("style", format!("{trimmed}; {fragments}"));
				}
				Some(AttrValue::Nested(mut existing)) => {
					for (property, value) in &self.styles {
						existing.insert(AttrKey::Name(property.clone()), value.clone());
					}
					attrs.insert("style", AttrValue::Nested(existing));
				}
				Some(_) => {}
			}
		}

		attrs
	}

	/// Render the accumulated attributes as an HTML attribute string.
	pub fn render(&self) -> AttrResult<String> {
		crate::attr(&self.to_attrs())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_fluent_classes_append_to_merged_string() {
		let attrs = AttrBuilder::new()
			.merge(AttrSet::from(json!({"class": "a b"})))
			.class("c")
			.to_attrs();
		assert_eq!(attrs.get("class"), Some(&AttrValue::Str("a b c".to_string())));
	}

	#[test]
	fn test_fluent_classes_fold_into_nested_map() {
		let rendered = AttrBuilder::new()
			.merge(AttrSet::from(json!({"class": {"border": true, "hidden": false}})))
			.class("active")
			.render()
			.unwrap();
		assert_eq!(rendered, r#" class="border active" "#);
	}

	#[test]
	fn test_fluent_styles_append_to_string_with_trailing_delimiter() {
		let rendered = AttrBuilder::new()
			.merge(AttrSet::from(json!({"style": "color: black;"})))
			.style("background", "white")
			.render()
			.unwrap();
		assert_eq!(rendered, r#" style="color: black; background: white" "#);
	}

	#[test]
	fn test_fluent_styles_overlay_nested_map() {
		let rendered = AttrBuilder::new()
			.merge(AttrSet::from(json!({"style": {"color": "red"}})))
			.style("color", "blue")
			.style("border", "none")
			.render()
			.unwrap();
		assert_eq!(rendered, r#" style="color: blue; border: none" "#);
	}

	#[test]
	fn test_direct_attributes_override_raw() {
		let rendered = AttrBuilder::new()
			.merge(AttrSet::from(json!({"type": "submit", "id": "x"})))
			.set("type", "button")
			.render()
			.unwrap();
		assert_eq!(rendered, r#" type="button" id="x" "#);
	}
}
