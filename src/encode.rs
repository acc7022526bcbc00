//! HTML entity escaping without double-encoding.

use regex::Regex;
use std::sync::OnceLock;

static PRE_ENCODED: OnceLock<Regex> = OnceLock::new();

/// Matches an `&amp;` that precedes a recognizable entity body: either a
/// named entity (up to four letters followed by two or three word
/// characters and `;`) or a numeric one (`#` plus two or three digits
/// and `;`). Such ampersands were already encoded in the input.
fn pre_encoded() -> &'static Regex {
	PRE_ENCODED.get_or_init(|| Regex::new(r"&amp;([a-zA-Z]{0,4}\w{2,3};|#\d{2,3};)").unwrap())
}

/// Replace every special character with its entity, unconditionally.
pub(crate) fn encode_entities(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#039;"),
			_ => out.push(ch),
		}
	}
	out
}

/// Escape text for use inside a double-quoted HTML attribute value.
///
/// Both quote styles are escaped. Ampersands that already begin an
/// entity are left alone, so feeding escaped output back in does not
/// double-encode it.
///
/// # Examples
///
/// ```
/// use html_attrs::escape;
///
/// assert_eq!(
///     escape(r#"" onload="alert('Hacked!')""#),
///     "&quot; onload=&quot;alert(&#039;Hacked!&#039;)&quot;"
/// );
///
/// // already-encoded entities survive untouched
/// assert_eq!(
///     escape("&amp; &lt; &gt; &quot; &#039;"),
///     "&amp; &lt; &gt; &quot; &#039;"
/// );
/// ```
pub fn escape(text: &str) -> String {
	let encoded = encode_entities(text);
	pre_encoded().replace_all(&encoded, "&$1").into_owned()
}
