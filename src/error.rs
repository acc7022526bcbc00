/// Rejection of a malformed attribute set.
///
/// Raised before any output is produced; no partial attribute string is
/// ever returned. Validation fails fast on the first violation in
/// iteration order, after a whole-map key-shape pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
	#[error("all attribute keys must be strings")]
	NonStringKey,
	#[error("only 'class' and 'style' may hold a nested map, found one under '{key}'")]
	NestedNotAllowed { key: String },
	#[error("style property names must be strings")]
	StyleKeyNotString,
	#[error("style property '{property}' must never be true")]
	StyleValueTrue { property: String },
	#[error("string-keyed 'class' entries may not have string values ('{key}')")]
	ClassValueString { key: String },
	#[error("index-keyed 'class' entries must have string values (index {index})")]
	ClassIndexedNonString { index: usize },
	#[error("nested map one level too deep under '{key}'")]
	DoublyNested { key: String },
}

/// JSON encoding failure in [`json_attr`](crate::json_attr).
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct SerializationError(#[from] serde_json::Error);

pub type AttrResult<T> = Result<T, ValidationError>;
