//! # Trellis Helpers
//!
//! View helpers for server-rendered HTML:
//!
//! - **Descriptions**: metadata-driven property descriptions and display names
//! - **Conditional output**: text or markup selected by a condition, lazily
//! - **Images**: `<img />` elements with application-relative (`~/`) sources
//! - **Enum dropdowns**: `<select>` elements listing every member of a choice enum
//!
//! ## Quick Start
//!
//! ```
//! use trellis_conf::HelperSettings;
//! use trellis_helpers::{Field, HelperEnvironment, MetadataRegistry, choice_enum};
//!
//! choice_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Status { Draft, AwaitingReview, Published }
//! }
//!
//! struct Article {
//!     status: Status,
//! }
//!
//! impl Article {
//!     const STATUS: Field<Article, Status> = Field::new("Status", |a| &a.status);
//! }
//!
//! let registry = MetadataRegistry::builder()
//!     .field(&Article::STATUS, |m| m.with_description("Publication state"))
//!     .build();
//! let settings = HelperSettings::from_toml_str(r#"application_path = "/blog""#).unwrap();
//! let env = HelperEnvironment::new(settings, registry);
//!
//! let article = Article { status: Status::AwaitingReview };
//! let ctx = env.context(&article);
//! let html = ctx.html();
//!
//! assert_eq!(html.description_for(&Article::STATUS).as_str(), "Publication state");
//! assert_eq!(
//!     html.image("~/img/banner.png").unwrap().as_str(),
//!     r#"<img src="/blog/img/banner.png" alt="" />"#
//! );
//!
//! let select = html.enum_drop_down_list_for(&Article::STATUS).unwrap();
//! assert!(select.as_str().contains(
//!     r#"<option value="AwaitingReview" selected="selected">Awaiting Review</option>"#
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! - `tera` (default): [`register_helpers`] exposes the model-independent
//!   helpers to Tera templates

pub mod context;
pub mod field;
pub mod helper;
pub mod metadata;
pub mod paths;
pub mod pascal;
#[cfg(feature = "tera")]
pub mod tera_helpers;

pub use context::{HelperEnvironment, ViewContext, ViewData};
pub use field::{Field, ValueType};
pub use helper::{HtmlHelper, enum_select_list};
pub use metadata::{MetadataRegistry, MetadataRegistryBuilder, ModelMetadata};
pub use paths::{ApplicationPathResolver, PathResolver};
pub use pascal::separate_pascal_case;
#[cfg(feature = "tera")]
pub use tera_helpers::register_helpers;
pub use trellis_core::{ArgumentError, Markup, Result};
