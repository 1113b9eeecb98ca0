//! Rendering environment and per-render view context.

use crate::field::Field;
use crate::helper::HtmlHelper;
use crate::metadata::{MetadataRegistry, ModelMetadata};
use crate::paths::{ApplicationPathResolver, PathResolver};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use trellis_conf::HelperSettings;

/// View-data bag: loosely typed values handed to a view next to its model
pub type ViewData = HashMap<String, Value>;

/// Everything the helpers need that outlives a single render
///
/// Built once at startup and shared (by reference or `Arc`) between
/// requests.
#[derive(Clone)]
pub struct HelperEnvironment {
	settings: HelperSettings,
	metadata: MetadataRegistry,
	resolver: Arc<dyn PathResolver>,
}

impl HelperEnvironment {
	/// Create an environment resolving `~` paths against the configured
	/// application path
	///
	/// # Examples
	///
	/// ```
	/// use trellis_conf::HelperSettings;
	/// use trellis_helpers::{HelperEnvironment, MetadataRegistry};
	///
	/// let settings = HelperSettings::from_toml_str(r#"application_path = "/app""#).unwrap();
	/// let env = HelperEnvironment::new(settings, MetadataRegistry::default());
	///
	/// let ctx = env.context_without_model::<()>();
	/// assert_eq!(ctx.html().image("~/logo.png").unwrap().as_str(),
	///            r#"<img src="/app/logo.png" alt="" />"#);
	/// ```
	pub fn new(settings: HelperSettings, metadata: MetadataRegistry) -> Self {
		let resolver = Arc::new(ApplicationPathResolver::from_settings(&settings));
		Self {
			settings,
			metadata,
			resolver,
		}
	}

	/// Replace the path resolver
	pub fn with_resolver(mut self, resolver: impl PathResolver + 'static) -> Self {
		self.resolver = Arc::new(resolver);
		self
	}

	pub fn settings(&self) -> &HelperSettings {
		&self.settings
	}

	pub fn metadata(&self) -> &MetadataRegistry {
		&self.metadata
	}

	pub fn resolver(&self) -> &dyn PathResolver {
		self.resolver.as_ref()
	}

	/// Shared handle to the resolver, e.g. for template engine functions
	pub fn resolver_handle(&self) -> Arc<dyn PathResolver> {
		Arc::clone(&self.resolver)
	}

	/// Context for rendering a view bound to `model`
	pub fn context<'a, M>(&'a self, model: &'a M) -> ViewContext<'a, M> {
		ViewContext::new(self, Some(model))
	}

	/// Context for rendering a view with no bound model
	pub fn context_without_model<'a, M>(&'a self) -> ViewContext<'a, M> {
		ViewContext::new(self, None)
	}
}

impl Default for HelperEnvironment {
	fn default() -> Self {
		Self::new(HelperSettings::default(), MetadataRegistry::default())
	}
}

impl std::fmt::Debug for HelperEnvironment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HelperEnvironment")
			.field("settings", &self.settings)
			.field("metadata", &self.metadata)
			.finish_non_exhaustive()
	}
}

/// The state of one render: bound model, view data and environment
///
/// Owned by a single request; helpers only read from it.
pub struct ViewContext<'a, M> {
	env: &'a HelperEnvironment,
	model: Option<&'a M>,
	view_data: ViewData,
	html_field_prefix: String,
}

impl<'a, M> ViewContext<'a, M> {
	pub fn new(env: &'a HelperEnvironment, model: Option<&'a M>) -> Self {
		Self {
			env,
			model,
			view_data: ViewData::new(),
			html_field_prefix: env.settings().html_field_prefix.clone(),
		}
	}

	/// Add a view-data entry
	///
	/// An entry keyed by a field's full html name holds the value the user
	/// last submitted for it, and takes precedence over the model value.
	pub fn with_view_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.view_data.insert(key.into(), value.into());
		self
	}

	/// Override the configured html field prefix for this render
	pub fn with_html_field_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.html_field_prefix = prefix.into();
		self
	}

	pub fn model(&self) -> Option<&'a M> {
		self.model
	}

	pub fn view_data(&self) -> &ViewData {
		&self.view_data
	}

	pub fn html_field_prefix(&self) -> &str {
		&self.html_field_prefix
	}

	pub fn environment(&self) -> &'a HelperEnvironment {
		self.env
	}

	pub fn resolver(&self) -> &'a dyn PathResolver {
		self.env.resolver()
	}

	/// Field name qualified with the html field prefix
	///
	/// # Examples
	///
	/// ```
	/// use trellis_helpers::HelperEnvironment;
	///
	/// let env = HelperEnvironment::default();
	/// let ctx = env.context_without_model::<()>();
	/// assert_eq!(ctx.full_html_field_name("Title"), "Title");
	///
	/// let ctx = ctx.with_html_field_prefix("Person");
	/// assert_eq!(ctx.full_html_field_name("Title"), "Person.Title");
	/// ```
	pub fn full_html_field_name(&self, name: &str) -> String {
		match (self.html_field_prefix.is_empty(), name.is_empty()) {
			(true, _) => name.to_string(),
			(false, true) => self.html_field_prefix.clone(),
			(false, false) => format!("{}.{}", self.html_field_prefix, name),
		}
	}

	/// Previously submitted value for `full_name`, if view data holds one
	pub fn attempted_value(&self, full_name: &str) -> Option<String> {
		match self.view_data.get(full_name)? {
			Value::String(s) => Some(s.clone()),
			Value::Null => None,
			other => Some(other.to_string()),
		}
	}

	/// Helper methods bound to this context
	pub fn html(&self) -> HtmlHelper<'_, 'a, M> {
		HtmlHelper::new(self)
	}
}

impl<'a, M: 'static> ViewContext<'a, M> {
	/// Metadata for a field of the bound model type
	pub fn metadata_for<T>(&self, field: &Field<M, T>) -> ModelMetadata {
		self.env.metadata().metadata_for(field)
	}
}
