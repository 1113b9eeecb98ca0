//! Core types module.
//!
//! Markup fragments, HTML escaping and the argument errors returned by
//! every helper.
//!
//! # Examples
//!
//! ```
//! use trellis::core::{Markup, escape_html};
//!
//! assert_eq!(escape_html("<b>"), "&lt;b&gt;");
//! assert_eq!(Markup::text("a & b").as_str(), "a &amp; b");
//! ```

pub use trellis_core::*;
