//! # Trellis Core
//!
//! Building blocks shared by every Trellis helper crate:
//!
//! - [`Markup`]: an immutable, already-escaped HTML fragment
//! - [`escape_html`] / [`escape_html_attr`]: escaping for text and attribute values
//! - [`ArgumentError`]: the single error kind raised by helpers
//! - [`ensure`]: argument guards returning [`ArgumentError`]
//!
//! ## Example
//!
//! ```
//! use trellis_core::{Markup, ensure};
//!
//! fn greeting(name: &str) -> trellis_core::Result<Markup> {
//!     ensure::not_empty(name, "name")?;
//!     Ok(Markup::text(format!("Hello, {}!", name)))
//! }
//!
//! assert_eq!(greeting("<b>").unwrap().as_str(), "Hello, &lt;b&gt;!");
//! assert!(greeting("").is_err());
//! ```

pub mod ensure;
pub mod error;
pub mod escaping;
pub mod markup;

pub use error::{ArgumentError, Result};
pub use escaping::{escape_html, escape_html_attr};
pub use markup::Markup;
