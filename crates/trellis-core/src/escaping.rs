//! HTML escaping
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

use std::borrow::Cow;

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape HTML special characters in text content
///
/// Returns a borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use trellis_core::escape_html;
///
/// assert_eq!(escape_html("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
	if !s.contains(SPECIAL) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escape an HTML attribute value
///
/// Attribute values are always written double-quoted, so the same set of
/// characters as [`escape_html`] is sufficient.
///
/// # Examples
///
/// ```
/// use trellis_core::escape_html_attr;
///
/// assert_eq!(escape_html_attr(r#"value with "quotes""#),
///            "value with &quot;quotes&quot;");
/// ```
pub fn escape_html_attr(s: &str) -> Cow<'_, str> {
	escape_html(s)
}
