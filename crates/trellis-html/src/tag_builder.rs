//! Single-element tag construction.

use crate::attributes::AttributeMap;
use std::fmt;
use trellis_core::{Markup, Result, ensure, escape_html, escape_html_attr};

/// How a [`TagBuilder`] serializes its element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagRenderMode {
	/// Start tag, inner HTML and end tag
	#[default]
	Normal,
	/// Start tag only
	StartTag,
	/// End tag only
	EndTag,
	/// `<tag ... />`
	SelfClosing,
}

/// Builds one HTML element
///
/// Attribute merges keep the first value written for a name; use
/// [`set_attribute`](Self::set_attribute) to overwrite.
#[derive(Debug, Clone)]
pub struct TagBuilder {
	tag_name: String,
	attributes: AttributeMap,
	inner_html: String,
}

impl TagBuilder {
	/// Create a builder for `tag_name`
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::TagBuilder;
	///
	/// let tag = TagBuilder::new("div").unwrap();
	/// assert_eq!(tag.tag_name(), "div");
	///
	/// assert!(TagBuilder::new("").is_err());
	/// ```
	pub fn new(tag_name: &str) -> Result<Self> {
		let tag_name = ensure::not_blank(tag_name, "tag_name")?;
		Ok(Self {
			tag_name: tag_name.to_string(),
			attributes: AttributeMap::new(),
			inner_html: String::new(),
		})
	}

	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	pub fn attributes(&self) -> &AttributeMap {
		&self.attributes
	}

	pub fn inner_html(&self) -> &str {
		&self.inner_html
	}

	/// Add an attribute unless one with the same name is already set
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::TagBuilder;
	///
	/// let mut tag = TagBuilder::new("img").unwrap();
	/// tag.merge_attribute("alt", "first").unwrap();
	/// tag.merge_attribute("alt", "second").unwrap();
	/// assert_eq!(tag.attributes().get("alt"), Some("first"));
	/// ```
	pub fn merge_attribute(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
		let name = ensure::not_empty(name, "name")?;
		self.attributes.merge(name, value);
		Ok(())
	}

	/// Add an attribute, overwriting any existing value
	pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
		let name = ensure::not_empty(name, "name")?;
		self.attributes.insert(name, value);
		Ok(())
	}

	/// Merge every attribute of `attributes`, keeping values already set
	pub fn merge_attributes(&mut self, attributes: &AttributeMap) -> Result<()> {
		for (name, value) in attributes.iter() {
			self.merge_attribute(name, value)?;
		}
		Ok(())
	}

	/// Merge every attribute of `attributes`, overwriting values already set
	pub fn set_attributes(&mut self, attributes: &AttributeMap) -> Result<()> {
		for (name, value) in attributes.iter() {
			self.set_attribute(name, value)?;
		}
		Ok(())
	}

	/// Prepend a CSS class to the `class` attribute
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::TagBuilder;
	///
	/// let mut tag = TagBuilder::new("div").unwrap();
	/// tag.add_css_class("card");
	/// tag.add_css_class("active");
	/// assert_eq!(tag.attributes().get("class"), Some("active card"));
	/// ```
	pub fn add_css_class(&mut self, class: &str) {
		let class = match self.attributes.get("class") {
			Some(existing) => format!("{} {}", class, existing),
			None => class.to_string(),
		};
		self.attributes.insert("class", class);
	}

	/// Set the `id` attribute from a field name, unless an id is already set
	///
	/// See [`TagBuilder::sanitized_id`] for the rules applied to `name`.
	pub fn generate_id(&mut self, name: &str) {
		if self.attributes.contains_key("id") {
			return;
		}
		if let Some(id) = Self::sanitized_id(name) {
			self.attributes.insert("id", id);
		}
	}

	/// Turn an arbitrary name into a valid element id
	///
	/// The first character must be an ASCII letter, otherwise no id can be
	/// produced. Remaining characters other than ASCII letters, digits, `-`,
	/// `_` and `:` are replaced with `_`.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::TagBuilder;
	///
	/// assert_eq!(TagBuilder::sanitized_id("Person.Title"), Some("Person_Title".to_string()));
	/// assert_eq!(TagBuilder::sanitized_id("items[0]"), Some("items_0_".to_string()));
	/// assert_eq!(TagBuilder::sanitized_id("1st"), None);
	/// assert_eq!(TagBuilder::sanitized_id(""), None);
	/// ```
	pub fn sanitized_id(name: &str) -> Option<String> {
		let mut chars = name.chars();
		let first = chars.next()?;
		if !first.is_ascii_alphabetic() {
			return None;
		}

		let mut id = String::with_capacity(name.len());
		id.push(first);
		for c in chars {
			if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':') {
				id.push(c);
			} else {
				id.push('_');
			}
		}
		Some(id)
	}

	/// Set the element content from plain text, escaping it
	pub fn set_inner_text(&mut self, text: &str) {
		self.inner_html = escape_html(text).into_owned();
	}

	/// Set the element content from markup that is already safe
	pub fn set_inner_html(&mut self, html: impl Into<String>) {
		self.inner_html = html.into();
	}

	/// Serialize the element
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::{TagBuilder, TagRenderMode};
	///
	/// let mut tag = TagBuilder::new("p").unwrap();
	/// tag.set_inner_text("1 < 2");
	///
	/// assert_eq!(tag.render(TagRenderMode::Normal).as_str(), "<p>1 &lt; 2</p>");
	/// assert_eq!(tag.render(TagRenderMode::StartTag).as_str(), "<p>");
	/// assert_eq!(tag.render(TagRenderMode::EndTag).as_str(), "</p>");
	/// ```
	pub fn render(&self, mode: TagRenderMode) -> Markup {
		let mut html = String::new();
		match mode {
			TagRenderMode::StartTag => self.write_start_tag(&mut html, ">"),
			TagRenderMode::EndTag => self.write_end_tag(&mut html),
			TagRenderMode::SelfClosing => self.write_start_tag(&mut html, " />"),
			TagRenderMode::Normal => {
				self.write_start_tag(&mut html, ">");
				html.push_str(&self.inner_html);
				self.write_end_tag(&mut html);
			}
		}
		Markup::trusted(html)
	}

	fn write_start_tag(&self, html: &mut String, close: &str) {
		html.push('<');
		html.push_str(&self.tag_name);
		for (name, value) in self.attributes.iter() {
			// An empty id is never written
			if name == "id" && value.is_empty() {
				continue;
			}
			html.push(' ');
			html.push_str(name);
			html.push_str("=\"");
			html.push_str(&escape_html_attr(value));
			html.push('"');
		}
		html.push_str(close);
	}

	fn write_end_tag(&self, html: &mut String) {
		html.push_str("</");
		html.push_str(&self.tag_name);
		html.push('>');
	}
}

impl fmt::Display for TagBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.render(TagRenderMode::Normal).as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use trellis_core::ArgumentError;

	#[rstest]
	fn test_attribute_values_are_escaped() {
		let mut tag = TagBuilder::new("img").unwrap();
		tag.merge_attribute("alt", r#"say "hi" & <wave>"#).unwrap();

		assert_eq!(
			tag.render(TagRenderMode::SelfClosing).as_str(),
			r#"<img alt="say &quot;hi&quot; &amp; &lt;wave&gt;" />"#
		);
	}

	#[rstest]
	fn test_merge_attributes_keeps_existing() {
		let mut tag = TagBuilder::new("img").unwrap();
		tag.merge_attribute("src", "/a.png").unwrap();
		tag.merge_attributes(&AttributeMap::from([("src", "/evil.png"), ("class", "x")]))
			.unwrap();

		assert_eq!(
			tag.render(TagRenderMode::SelfClosing).as_str(),
			r#"<img src="/a.png" class="x" />"#
		);
	}

	#[rstest]
	fn test_set_attributes_overwrites() {
		let mut tag = TagBuilder::new("img").unwrap();
		tag.merge_attribute("src", "/a.png").unwrap();
		tag.set_attributes(&AttributeMap::from([("src", "/b.png")])).unwrap();

		assert_eq!(tag.attributes().get("src"), Some("/b.png"));
	}

	#[rstest]
	fn test_empty_attribute_name_rejected() {
		let mut tag = TagBuilder::new("img").unwrap();
		assert_eq!(
			tag.merge_attribute("", "x"),
			Err(ArgumentError::Empty { param: "name" })
		);
	}

	#[rstest]
	fn test_generate_id_does_not_override() {
		let mut tag = TagBuilder::new("select").unwrap();
		tag.merge_attribute("id", "custom").unwrap();
		tag.generate_id("Title");
		assert_eq!(tag.attributes().get("id"), Some("custom"));
	}

	#[rstest]
	fn test_empty_id_skipped() {
		let mut tag = TagBuilder::new("div").unwrap();
		tag.merge_attribute("id", "").unwrap();
		assert_eq!(tag.to_string(), "<div></div>");
	}
}
