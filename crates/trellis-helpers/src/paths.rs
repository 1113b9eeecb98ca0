//! Application-relative path resolution.
//!
//! Paths starting with `~` are relative to the application root, wherever
//! the application is mounted. A [`PathResolver`] turns them into absolute
//! URL paths.

use trellis_conf::HelperSettings;
use trellis_core::{ArgumentError, Result};

/// Marker that starts an application-relative path
pub const APP_RELATIVE_MARKER: char = '~';

/// Whether `path` is application-relative (starts with `~`)
///
/// # Examples
///
/// ```
/// use trellis_helpers::paths::is_app_relative;
///
/// assert!(is_app_relative("~/img/logo.png"));
/// assert!(!is_app_relative("/img/logo.png"));
/// ```
pub fn is_app_relative(path: &str) -> bool {
	path.starts_with(APP_RELATIVE_MARKER)
}

/// Resolves application-relative paths to absolute URL paths
pub trait PathResolver: Send + Sync {
	fn to_absolute(&self, virtual_path: &str) -> Result<String>;
}

/// Resolves `~` against the path the application is mounted under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPathResolver {
	application_path: String,
}

impl ApplicationPathResolver {
	/// Create a resolver for an application mounted at `application_path`
	///
	/// # Examples
	///
	/// ```
	/// use trellis_helpers::{ApplicationPathResolver, PathResolver};
	///
	/// let resolver = ApplicationPathResolver::new("/app");
	/// assert_eq!(resolver.to_absolute("~/img/a.png").unwrap(), "/app/img/a.png");
	/// assert_eq!(resolver.to_absolute("~").unwrap(), "/app/");
	/// ```
	pub fn new(application_path: impl Into<String>) -> Self {
		let application_path = application_path.into();
		let trimmed = application_path.trim().trim_matches('/');
		let application_path = if trimmed.is_empty() {
			"/".to_string()
		} else {
			format!("/{}", trimmed)
		};
		Self { application_path }
	}

	pub fn from_settings(settings: &HelperSettings) -> Self {
		Self::new(settings.application_path.as_str())
	}

	pub fn application_path(&self) -> &str {
		&self.application_path
	}
}

impl Default for ApplicationPathResolver {
	fn default() -> Self {
		Self::new("/")
	}
}

impl PathResolver for ApplicationPathResolver {
	/// Resolve `virtual_path`
	///
	/// - `~` and `~/` resolve to the application path with a trailing slash
	/// - `~/rest` resolves to the application path joined with `rest`
	/// - already absolute paths (`/...`) are only normalized
	/// - `.` and `..` segments are collapsed; going above `/` is an error
	/// - a query string or fragment is carried over untouched
	fn to_absolute(&self, virtual_path: &str) -> Result<String> {
		let (path, suffix) = match virtual_path.find(['?', '#']) {
			Some(index) => virtual_path.split_at(index),
			None => (virtual_path, ""),
		};

		let combined = if let Some(rest) = path.strip_prefix(APP_RELATIVE_MARKER) {
			if !rest.is_empty() && !rest.starts_with('/') {
				return Err(ArgumentError::invalid(
					"path",
					format!("'{}' is not a valid application-relative path", virtual_path),
				));
			}
			let rest = rest.strip_prefix('/').unwrap_or(rest);
			format!("{}/{}", self.application_path.trim_end_matches('/'), rest)
		} else if path.starts_with('/') {
			path.to_string()
		} else {
			return Err(ArgumentError::invalid(
				"path",
				format!("'{}' is neither absolute nor application-relative", virtual_path),
			));
		};

		let resolved = format!("{}{}", normalize_segments(&combined, virtual_path)?, suffix);
		tracing::trace!("resolved '{}' to '{}'", virtual_path, resolved);
		Ok(resolved)
	}
}

/// Collapse `.`, `..` and empty segments of an absolute path
fn normalize_segments(path: &str, original: &str) -> Result<String> {
	let mut segments: Vec<&str> = Vec::new();
	let mut trailing_slash = false;

	for segment in path.split('/').skip(1) {
		trailing_slash = matches!(segment, "" | "." | "..");
		match segment {
			"" | "." => {}
			".." => {
				if segments.pop().is_none() {
					return Err(ArgumentError::invalid(
						"path",
						format!("'{}' goes above the root", original),
					));
				}
			}
			_ => segments.push(segment),
		}
	}

	let mut normalized = String::with_capacity(path.len());
	normalized.push('/');
	normalized.push_str(&segments.join("/"));
	if trailing_slash && !segments.is_empty() {
		normalized.push('/');
	}
	Ok(normalized)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/app", "~/img/a.png", "/app/img/a.png")]
	#[case("/app/", "~/img/a.png", "/app/img/a.png")]
	#[case("/", "~/img/a.png", "/img/a.png")]
	#[case("/app", "~", "/app/")]
	#[case("/app", "~/", "/app/")]
	#[case("/", "~", "/")]
	#[case("/app", "~/css/../img/./a.png", "/app/img/a.png")]
	#[case("/app", "~/../shared/a.png", "/shared/a.png")]
	#[case("/app", "~/img/", "/app/img/")]
	#[case("/app", "~/img//a.png", "/app/img/a.png")]
	#[case("/app", "~/search?q=a/../b#top", "/app/search?q=a/../b#top")]
	#[case("/app", "/static/a.png", "/static/a.png")]
	fn test_to_absolute(#[case] app: &str, #[case] input: &str, #[case] expected: &str) {
		let resolver = ApplicationPathResolver::new(app);
		assert_eq!(resolver.to_absolute(input).unwrap(), expected);
	}

	#[rstest]
	#[case("~img/a.png")]
	#[case("~/../../a.png")]
	#[case("img/a.png")]
	#[case("")]
	fn test_to_absolute_rejects(#[case] input: &str) {
		let resolver = ApplicationPathResolver::new("/app");
		assert!(matches!(
			resolver.to_absolute(input),
			Err(ArgumentError::Invalid { param: "path", .. })
		));
	}

	#[rstest]
	#[case("", "/")]
	#[case("app", "/app")]
	#[case("/app/", "/app")]
	#[case("  /a/b/ ", "/a/b")]
	fn test_new_normalizes_application_path(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(ApplicationPathResolver::new(input).application_path(), expected);
	}

	#[rstest]
	fn test_from_settings() {
		let settings = HelperSettings::from_toml_str(r#"application_path = "/shop""#).unwrap();
		let resolver = ApplicationPathResolver::from_settings(&settings);
		assert_eq!(resolver.to_absolute("~/a").unwrap(), "/shop/a");
	}
}
