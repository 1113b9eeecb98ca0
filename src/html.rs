//! HTML building blocks module.
//!
//! Tag construction with ordered attributes and `<select>` rendering.
//!
//! # Examples
//!
//! ```
//! use trellis::html::{TagBuilder, TagRenderMode};
//!
//! let mut tag = TagBuilder::new("br").unwrap();
//! tag.merge_attribute("class", "spacer").unwrap();
//! assert_eq!(tag.render(TagRenderMode::SelfClosing).as_str(), r#"<br class="spacer" />"#);
//! ```

pub use trellis_html::*;
