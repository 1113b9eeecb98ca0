//! Helper settings and their loading.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_APPLICATION_PATH: &str = "TRELLIS_APPLICATION_PATH";
pub const ENV_HTML_FIELD_PREFIX: &str = "TRELLIS_HTML_FIELD_PREFIX";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid setting '{key}': {message}")]
	Invalid { key: &'static str, message: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings consumed by the view helpers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelperSettings {
	/// URL path the application is mounted under (e.g. "/" or "/app")
	///
	/// Application-relative paths (`~/...`) resolve against this value.
	pub application_path: String,

	/// Prefix prepended to generated form field names
	///
	/// With prefix `"Person"`, the field `Title` is rendered as `Person.Title`.
	pub html_field_prefix: String,
}

impl Default for HelperSettings {
	fn default() -> Self {
		Self {
			application_path: "/".to_string(),
			html_field_prefix: String::new(),
		}
	}
}

impl HelperSettings {
	/// Parse and validate settings from a TOML document
	///
	/// Missing keys take their default values.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_conf::HelperSettings;
	///
	/// let settings = HelperSettings::from_toml_str("").unwrap();
	/// assert_eq!(settings, HelperSettings::default());
	///
	/// assert!(HelperSettings::from_toml_str(r#"application_path = "app""#).is_err());
	/// ```
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: HelperSettings = toml::from_str(source)?;
		settings.validate()
	}

	/// Read, parse and validate a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Default settings with overrides from the process environment
	pub fn from_env() -> SettingsResult<Self> {
		Self::default().with_env_overrides(|key| std::env::var(key).ok())
	}

	/// Apply overrides from `lookup`, then re-validate
	///
	/// `lookup` receives the environment variable names listed in the crate
	/// documentation; taking a closure keeps the process environment out of
	/// tests.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_conf::{ENV_APPLICATION_PATH, HelperSettings};
	///
	/// let settings = HelperSettings::default()
	///     .with_env_overrides(|key| (key == ENV_APPLICATION_PATH).then(|| "/shop".to_string()))
	///     .unwrap();
	/// assert_eq!(settings.application_path, "/shop");
	/// ```
	pub fn with_env_overrides<F>(mut self, lookup: F) -> SettingsResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(path) = lookup(ENV_APPLICATION_PATH) {
			self.application_path = path;
		}
		if let Some(prefix) = lookup(ENV_HTML_FIELD_PREFIX) {
			self.html_field_prefix = prefix;
		}
		self.validate()
	}

	/// Check and normalize the settings
	///
	/// The application path must be absolute and free of query or fragment
	/// parts; a trailing slash is removed except for the root path.
	pub fn validate(mut self) -> SettingsResult<Self> {
		let path = self.application_path.trim();
		if !path.starts_with('/') {
			return Err(SettingsError::Invalid {
				key: "application_path",
				message: format!("'{}' must start with '/'", self.application_path),
			});
		}
		if path.contains(['?', '#', '~', '\\']) {
			return Err(SettingsError::Invalid {
				key: "application_path",
				message: format!("'{}' must be a plain URL path", self.application_path),
			});
		}
		if path.contains("//") {
			tracing::warn!(
				"application_path '{}' contains empty segments",
				self.application_path
			);
		}

		let normalized = match path.trim_end_matches('/') {
			"" => "/".to_string(),
			trimmed => trimmed.to_string(),
		};
		self.application_path = normalized;

		if self.html_field_prefix.ends_with('.') {
			tracing::warn!(
				"html_field_prefix '{}' ends with '.', field names will contain '..'",
				self.html_field_prefix
			);
		}

		Ok(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	#[case("/", "/")]
	#[case("/app", "/app")]
	#[case("/app/", "/app")]
	#[case("  /app/shop//  ", "/app/shop")]
	fn test_application_path_normalized(#[case] input: &str, #[case] expected: &str) {
		let settings = HelperSettings {
			application_path: input.to_string(),
			..Default::default()
		}
		.validate()
		.unwrap();

		assert_eq!(settings.application_path, expected);
	}

	#[rstest]
	#[case("app")]
	#[case("")]
	#[case("/app?x=1")]
	#[case("~/app")]
	fn test_application_path_rejected(#[case] input: &str) {
		let result = HelperSettings {
			application_path: input.to_string(),
			..Default::default()
		}
		.validate();

		assert!(matches!(
			result,
			Err(SettingsError::Invalid {
				key: "application_path",
				..
			})
		));
	}

	#[rstest]
	fn test_from_toml_str_reads_all_keys() {
		let settings = HelperSettings::from_toml_str(
			r#"
application_path = "/portal/"
html_field_prefix = "Person"
"#,
		)
		.unwrap();

		assert_eq!(settings.application_path, "/portal");
		assert_eq!(settings.html_field_prefix, "Person");
	}

	#[rstest]
	fn test_from_toml_str_rejects_unknown_keys() {
		let result = HelperSettings::from_toml_str(r#"static_url = "/static/""#);
		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, r#"application_path = "/app""#).unwrap();

		let settings = HelperSettings::from_file(file.path()).unwrap();
		assert_eq!(settings.application_path, "/app");
	}

	#[rstest]
	fn test_from_file_missing() {
		let result = HelperSettings::from_file("/nonexistent/trellis.toml");
		assert!(matches!(result, Err(SettingsError::Io { .. })));
	}

	#[rstest]
	fn test_env_overrides_are_validated() {
		let result = HelperSettings::default().with_env_overrides(|key| match key {
			ENV_APPLICATION_PATH => Some("relative".to_string()),
			_ => None,
		});
		assert!(result.is_err());
	}

	#[rstest]
	fn test_env_override_prefix() {
		let settings = HelperSettings::default()
			.with_env_overrides(|key| match key {
				ENV_HTML_FIELD_PREFIX => Some("Order".to_string()),
				_ => None,
			})
			.unwrap();

		assert_eq!(settings.html_field_prefix, "Order");
		assert_eq!(settings.application_path, "/");
	}
}
