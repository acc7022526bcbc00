//! Conditional HTML attribute rendering with safe escaping.
//!
//! This crate converts an ordered mapping of attribute names to values
//! into an escaped HTML attribute string ready to splice inside a start
//! tag, plus a companion function that serializes a value to JSON safe
//! for embedding in an attribute.
//!
//! Values drive conditional rendering: `true` renders a bare boolean
//! attribute, `null` and `false` drop the entry, and nested maps under
//! `class`/`style` express conditional class tokens and style
//! declarations. Everything else is escaped without double-encoding
//! already-encoded entities.
//!
//! ```
//! use html_attrs::{attr, AttrSet};
//! use serde_json::json;
//!
//! let attrs = AttrSet::from(json!({
//!     "class": {"border": true, "hidden": false},
//!     "style": {"color": "black", "outline": null},
//!     "data-current": true,
//!     "aria-label": null,
//! }));
//!
//! assert_eq!(
//!     attr(&attrs).unwrap(),
//!     r#" class="border" style="color: black" data-current "#,
//! );
//! ```
//!
//! The [`AttrBuilder`] composes the same pipeline incrementally:
//!
//! ```
//! use html_attrs::AttrBuilder;
//!
//! let rendered = AttrBuilder::new()
//!     .set("type", "button")
//!     .class("btn")
//!     .aria("label", "Close")
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(rendered, r#" type="button" aria-label="Close" class="btn" "#);
//! ```

pub mod builder;
pub mod encode;
pub mod error;
pub mod json;
mod normalize;
mod render;
pub mod validate;
pub mod value;

pub use builder::AttrBuilder;
pub use encode::escape;
pub use error::{AttrResult, SerializationError, ValidationError};
pub use json::json_attr;
pub use validate::validate;
pub use value::{AttrKey, AttrSet, AttrValue, NestedMap};

/// Convert an attribute set into a string of HTML element attributes.
///
/// Validates the set, normalizes every entry and joins the survivors.
/// A non-empty result carries one leading and one trailing space;
/// an empty set (or one whose entries all drop) yields `""`.
///
/// # Errors
///
/// Returns [`ValidationError`] when the input shape is malformed; no
/// partial output is produced.
///
/// # Examples
///
/// ```
/// use html_attrs::{attr, AttrSet};
/// use serde_json::json;
///
/// let attrs = AttrSet::from(json!({"value": "Tom & Jerry"}));
/// assert_eq!(attr(&attrs).unwrap(), r#" value="Tom &amp; Jerry" "#);
///
/// assert_eq!(attr(&AttrSet::new()).unwrap(), "");
///
/// // list-like input is rejected
/// let list = AttrSet::from(json!(["a", "b"]));
/// assert!(attr(&list).is_err());
/// ```
pub fn attr(attributes: &AttrSet) -> AttrResult<String> {
	validate::validate(attributes)?;
	Ok(render::render(&normalize::normalize(attributes)))
}
