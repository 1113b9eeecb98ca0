//! Pre-escaped markup fragments.

use crate::escaping::escape_html;
use serde::{Serialize, Serializer};
use std::fmt;

/// An immutable HTML fragment that is safe to write into a page as-is
///
/// A `Markup` is never escaped again. Build one from untrusted text with
/// [`Markup::text`], or wrap content the caller already vouches for with
/// [`Markup::trusted`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
	/// The empty fragment
	///
	/// # Examples
	///
	/// ```
	/// use trellis_core::Markup;
	///
	/// assert!(Markup::empty().is_empty());
	/// assert_eq!(Markup::empty().to_string(), "");
	/// ```
	pub fn empty() -> Self {
		Markup(String::new())
	}

	/// Wrap content that is already safe HTML
	///
	/// # Examples
	///
	/// ```
	/// use trellis_core::Markup;
	///
	/// let bold = Markup::trusted("<b>Bold</b>");
	/// assert_eq!(bold.as_str(), "<b>Bold</b>");
	/// ```
	pub fn trusted(s: impl Into<String>) -> Self {
		Markup(s.into())
	}

	/// Escape plain text into markup
	///
	/// # Examples
	///
	/// ```
	/// use trellis_core::Markup;
	///
	/// assert_eq!(Markup::text("1 < 2").as_str(), "1 &lt; 2");
	/// ```
	pub fn text(s: impl AsRef<str>) -> Self {
		Markup(escape_html(s.as_ref()).into_owned())
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl From<String> for Markup {
	fn from(s: String) -> Self {
		Markup(s)
	}
}

impl From<&str> for Markup {
	fn from(s: &str) -> Self {
		Markup(s.to_string())
	}
}

impl From<Markup> for String {
	fn from(markup: Markup) -> Self {
		markup.0
	}
}

impl AsRef<str> for Markup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

// Serialized as the raw string so fragments can be handed to template contexts.
impl Serialize for Markup {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_trusted_is_not_escaped() {
		let markup = Markup::trusted("<i>x</i> & y");
		assert_eq!(markup.to_string(), "<i>x</i> & y");
	}

	#[rstest]
	fn test_from_conversions() {
		let a: Markup = String::from("<p>").into();
		let b: Markup = "<p>".into();
		assert_eq!(a, b);
		assert_eq!(String::from(a), "<p>");
	}

	#[rstest]
	fn test_serialize_as_string() {
		let value = serde_json::to_value(Markup::trusted("<br />")).unwrap();
		assert_eq!(value, serde_json::json!("<br />"));
	}
}
