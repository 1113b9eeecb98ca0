//! View helpers module.
//!
//! See [`HtmlHelper`] for the full list of helpers.

pub use trellis_helpers::*;
