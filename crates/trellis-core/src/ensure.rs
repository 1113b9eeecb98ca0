//! Argument guards.
//!
//! Each guard returns `Ok` with the checked value or an [`ArgumentError`]
//! naming the parameter, so callers can bail out with `?` before doing any
//! work.

use crate::error::{ArgumentError, Result};

/// Reject an empty string
///
/// # Examples
///
/// ```
/// use trellis_core::{ArgumentError, ensure};
///
/// assert_eq!(ensure::not_empty("logo.png", "src"), Ok("logo.png"));
/// assert_eq!(
///     ensure::not_empty("", "src"),
///     Err(ArgumentError::Empty { param: "src" })
/// );
/// ```
pub fn not_empty<'a>(value: &'a str, param: &'static str) -> Result<&'a str> {
	if value.is_empty() {
		return Err(ArgumentError::Empty { param });
	}
	Ok(value)
}

/// Reject an empty or whitespace-only string
pub fn not_blank<'a>(value: &'a str, param: &'static str) -> Result<&'a str> {
	if value.trim().is_empty() {
		return Err(ArgumentError::Empty { param });
	}
	Ok(value)
}
