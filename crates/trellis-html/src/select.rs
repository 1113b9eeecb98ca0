//! `<select>` rendering.

use crate::attributes::AttributeMap;
use crate::tag_builder::{TagBuilder, TagRenderMode};
use serde::{Deserialize, Serialize};
use trellis_core::{Markup, Result, ensure};

/// One `<option>` of a select list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectListItem {
	pub value: String,
	pub text: String,
	#[serde(default)]
	pub selected: bool,
}

impl SelectListItem {
	pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			text: text.into(),
			selected: false,
		}
	}
}

/// Ordered list of options for a `<select>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectList {
	items: Vec<SelectListItem>,
}

impl SelectList {
	/// Create a select list from items, keeping their order
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::{SelectList, SelectListItem};
	///
	/// let list = SelectList::new(vec![
	///     SelectListItem::new("1", "One"),
	///     SelectListItem::new("2", "Two"),
	/// ]);
	/// assert_eq!(list.len(), 2);
	/// assert_eq!(list.items()[1].text, "Two");
	/// ```
	pub fn new(items: impl IntoIterator<Item = SelectListItem>) -> Self {
		Self {
			items: items.into_iter().collect(),
		}
	}

	/// Mark the items whose value equals `selected`, clearing all others
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::{SelectList, SelectListItem};
	///
	/// let list = SelectList::new(vec![
	///     SelectListItem::new("a", "A"),
	///     SelectListItem::new("b", "B"),
	/// ])
	/// .with_selected(Some("b"));
	///
	/// assert_eq!(list.selected_value(), Some("b"));
	/// ```
	pub fn with_selected(mut self, selected: Option<&str>) -> Self {
		for item in &mut self.items {
			item.selected = selected == Some(item.value.as_str());
		}
		self
	}

	pub fn items(&self) -> &[SelectListItem] {
		&self.items
	}

	pub fn iter(&self) -> std::slice::Iter<'_, SelectListItem> {
		self.items.iter()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Value of the first selected item
	pub fn selected_value(&self) -> Option<&str> {
		self.items
			.iter()
			.find(|item| item.selected)
			.map(|item| item.value.as_str())
	}
}

impl<'a> IntoIterator for &'a SelectList {
	type Item = &'a SelectListItem;
	type IntoIter = std::slice::Iter<'a, SelectListItem>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

/// Render a `<select>` element named `name`
///
/// Caller attributes are merged first, then `name` is set (overwriting) and
/// an `id` is generated from `name` unless the caller supplied one. When
/// `option_label` is given, an extra `<option value="">` heads the list.
/// Every option is followed by a newline.
///
/// # Examples
///
/// ```
/// use trellis_html::{AttributeMap, SelectList, SelectListItem, render_select};
///
/// let list = SelectList::new(vec![
///     SelectListItem::new("1", "One"),
///     SelectListItem::new("2", "Two"),
/// ])
/// .with_selected(Some("2"));
///
/// let html = render_select("count", &list, None, &AttributeMap::new()).unwrap();
/// assert_eq!(
///     html.as_str(),
///     "<select name=\"count\" id=\"count\"><option value=\"1\">One</option>\n\
///      <option value=\"2\" selected=\"selected\">Two</option>\n</select>"
/// );
/// ```
pub fn render_select(
	name: &str,
	list: &SelectList,
	option_label: Option<&str>,
	html_attributes: &AttributeMap,
) -> Result<Markup> {
	let name = ensure::not_empty(name, "name")?;

	let mut options = String::new();
	if let Some(label) = option_label {
		options.push_str(render_option(&SelectListItem::new("", label))?.as_str());
		options.push('\n');
	}
	for item in list {
		options.push_str(render_option(item)?.as_str());
		options.push('\n');
	}

	let mut select = TagBuilder::new("select")?;
	select.merge_attributes(html_attributes)?;
	select.set_attribute("name", name)?;
	select.generate_id(name);
	select.set_inner_html(options);
	Ok(select.render(TagRenderMode::Normal))
}

fn render_option(item: &SelectListItem) -> Result<Markup> {
	let mut option = TagBuilder::new("option")?;
	option.set_attribute("value", item.value.as_str())?;
	if item.selected {
		option.set_attribute("selected", "selected")?;
	}
	option.set_inner_text(&item.text);
	Ok(option.render(TagRenderMode::Normal))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_select_escapes_option_text_and_value() {
		let list = SelectList::new(vec![SelectListItem::new("a\"b", "<A>")]);
		let html = render_select("x", &list, None, &AttributeMap::new()).unwrap();

		assert!(html.as_str().contains(r#"<option value="a&quot;b">&lt;A&gt;</option>"#));
	}

	#[rstest]
	fn test_select_option_label_comes_first() {
		let list = SelectList::new(vec![SelectListItem::new("1", "One")]);
		let html = render_select("x", &list, Some("-- pick --"), &AttributeMap::new()).unwrap();

		assert!(
			html.as_str()
				.starts_with("<select name=\"x\" id=\"x\"><option value=\"\">-- pick --</option>\n")
		);
	}

	#[rstest]
	fn test_select_prefixed_name_id() {
		let list = SelectList::default();
		let html = render_select("Person.Title", &list, None, &AttributeMap::new()).unwrap();
		assert_eq!(
			html.as_str(),
			r#"<select name="Person.Title" id="Person_Title"></select>"#
		);
	}

	#[rstest]
	fn test_select_caller_attributes_precede_name() {
		let attrs = AttributeMap::from([("class", "form-select"), ("name", "ignored")]);
		let html = render_select("x", &SelectList::default(), None, &attrs).unwrap();
		assert_eq!(
			html.as_str(),
			r#"<select class="form-select" name="x" id="x"></select>"#
		);
	}

	#[rstest]
	fn test_select_empty_name_rejected() {
		assert!(render_select("", &SelectList::default(), None, &AttributeMap::new()).is_err());
	}

	#[rstest]
	fn test_with_selected_clears_previous() {
		let mut first = SelectListItem::new("a", "A");
		first.selected = true;
		let list = SelectList::new(vec![first, SelectListItem::new("b", "B")]).with_selected(None);

		assert_eq!(list.selected_value(), None);
	}
}
