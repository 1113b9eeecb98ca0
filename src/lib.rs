//! # Trellis
//!
//! View helpers for server-rendered HTML.
//!
//! Trellis provides small, composable helpers that views call while
//! rendering a model: property descriptions from registered metadata,
//! conditional text and markup, `<img />` elements with application-relative
//! sources, and `<select>` elements listing the members of a choice enum.
//!
//! ## Crates
//!
//! - [`core`]: markup fragments, escaping and argument errors
//! - [`html`]: tag building and `<select>` rendering
//! - [`conf`]: settings loaded from TOML and environment variables
//! - [`helpers`]: the view helpers, model metadata and path resolution
//!
//! ## Feature Flags
//!
//! - `full` (default): everything below
//! - `tera`: helper functions and filters for Tera templates
//!
//! ## Quick Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! choice_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum NameField { FirstName, LastName }
//! }
//!
//! struct Search {
//!     sort_by: NameField,
//! }
//!
//! impl Search {
//!     const SORT_BY: Field<Search, NameField> = Field::new("SortBy", |s| &s.sort_by);
//! }
//!
//! let env = HelperEnvironment::default();
//! let search = Search { sort_by: NameField::LastName };
//! let ctx = env.context(&search);
//!
//! let html = ctx.html().enum_drop_down_list_for(&Search::SORT_BY).unwrap();
//! assert_eq!(
//!     html.as_str(),
//!     "<select name=\"SortBy\" id=\"SortBy\">\
//!      <option value=\"FirstName\">First Name</option>\n\
//!      <option value=\"LastName\" selected=\"selected\">Last Name</option>\n\
//!      </select>"
//! );
//! ```

pub mod conf;
pub mod core;
pub mod helpers;
pub mod html;

pub use trellis_helpers::choice_enum;

pub use trellis_conf::{HelperSettings, SettingsError};
pub use trellis_core::{ArgumentError, Markup, Result};
pub use trellis_helpers::{
	ApplicationPathResolver, Field, HelperEnvironment, HtmlHelper, MetadataRegistry,
	ModelMetadata, PathResolver, ValueType, ViewContext,
};
pub use trellis_html::{AttributeMap, SelectList, SelectListItem, TagBuilder, TagRenderMode};

#[cfg(feature = "tera")]
pub use trellis_helpers::register_helpers;

/// Commonly used types and macros
pub mod prelude {
	pub use crate::{
		ApplicationPathResolver, ArgumentError, AttributeMap, Field, HelperEnvironment,
		HelperSettings, HtmlHelper, Markup, MetadataRegistry, ModelMetadata, PathResolver,
		SelectList, ValueType, ViewContext, choice_enum,
	};

	#[cfg(feature = "tera")]
	pub use crate::register_helpers;
}
