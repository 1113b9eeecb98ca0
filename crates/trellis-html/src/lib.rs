//! # Trellis HTML
//!
//! Tag construction utilities used by the view helpers.
//!
//! - [`AttributeMap`]: insertion-ordered attribute name → value map
//! - [`TagBuilder`]: builds a single element and serializes it in one of the
//!   [`TagRenderMode`]s
//! - [`SelectList`] / [`render_select`]: `<select>` element rendering
//!
//! Attributes are written in insertion order, double-quoted, with values
//! escaped by [`trellis_core::escape_html_attr`].
//!
//! ## Example
//!
//! ```
//! use trellis_html::{TagBuilder, TagRenderMode};
//!
//! let mut tag = TagBuilder::new("img").unwrap();
//! tag.merge_attribute("src", "/logo.png").unwrap();
//! tag.merge_attribute("alt", "Logo").unwrap();
//!
//! assert_eq!(
//!     tag.render(TagRenderMode::SelfClosing).as_str(),
//!     r#"<img src="/logo.png" alt="Logo" />"#
//! );
//! ```

pub mod attributes;
pub mod select;
pub mod tag_builder;

pub use attributes::AttributeMap;
pub use select::{SelectList, SelectListItem, render_select};
pub use tag_builder::{TagBuilder, TagRenderMode};
