//! # Trellis Settings
//!
//! Configuration for the view helpers: where the application is mounted and
//! which prefix qualifies generated form field names.
//!
//! Settings are loaded from TOML and can be overridden from the environment:
//!
//! | Key                 | Environment variable         | Default |
//! |---------------------|------------------------------|---------|
//! | `application_path`  | `TRELLIS_APPLICATION_PATH`   | `/`     |
//! | `html_field_prefix` | `TRELLIS_HTML_FIELD_PREFIX`  | empty   |
//!
//! ## Example
//!
//! ```
//! use trellis_conf::HelperSettings;
//!
//! let settings = HelperSettings::from_toml_str(r#"application_path = "/app""#).unwrap();
//! assert_eq!(settings.application_path, "/app");
//! assert_eq!(settings.html_field_prefix, "");
//! ```

pub mod settings;

pub use settings::{
	ENV_APPLICATION_PATH, ENV_HTML_FIELD_PREFIX, HelperSettings, SettingsError, SettingsResult,
};
