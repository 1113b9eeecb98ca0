//! The view helpers.
//!
//! [`HtmlHelper`] is obtained from a [`ViewContext`] with
//! [`ViewContext::html`] and exposes every helper as a method:
//!
//! | Helper                                    | Output                                   |
//! |-------------------------------------------|------------------------------------------|
//! | [`description_for`](HtmlHelper::description_for) | description of a model property   |
//! | [`if_text`](HtmlHelper::if_text), [`if_else_text`](HtmlHelper::if_else_text) | text chosen by a condition |
//! | [`render_if`](HtmlHelper::render_if), [`render_if_else`](HtmlHelper::render_if_else) | markup from the selected closure |
//! | [`image`](HtmlHelper::image), [`image_with`](HtmlHelper::image_with) | `<img />` element |
//! | [`enum_drop_down_list_for`](HtmlHelper::enum_drop_down_list_for) | `<select>` over a choice enum |

mod conditional;
mod description;
mod enum_select;
mod image;

pub use enum_select::enum_select_list;
#[cfg(feature = "tera")]
pub(crate) use image::render_image;

use crate::context::ViewContext;

/// Helper methods bound to one [`ViewContext`]
pub struct HtmlHelper<'c, 'a, M> {
	context: &'c ViewContext<'a, M>,
}

impl<'c, 'a, M> HtmlHelper<'c, 'a, M> {
	pub fn new(context: &'c ViewContext<'a, M>) -> Self {
		Self { context }
	}

	pub fn context(&self) -> &'c ViewContext<'a, M> {
		self.context
	}
}
