//! Model metadata registry.
//!
//! Metadata (display names, descriptions) is registered once at startup,
//! keyed by typed [`Field`]s, and looked up by helpers while rendering.

use crate::field::Field;
use std::any::TypeId;
use std::collections::HashMap;

/// Read-only description of one model property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetadata {
	property_name: &'static str,
	model_type: &'static str,
	value_type: &'static str,
	display_name: Option<String>,
	description: Option<String>,
}

impl ModelMetadata {
	/// Bare metadata for `field`: names and types only
	///
	/// # Examples
	///
	/// ```
	/// use trellis_helpers::{Field, ModelMetadata};
	///
	/// struct Person { age: u32 }
	/// const AGE: Field<Person, u32> = Field::new("Age", |p| &p.age);
	///
	/// let metadata = ModelMetadata::for_field(&AGE).with_description("Age in years");
	/// assert_eq!(metadata.property_name(), "Age");
	/// assert_eq!(metadata.description(), Some("Age in years"));
	/// assert_eq!(metadata.display_name(), "Age");
	/// ```
	pub fn for_field<M, T>(field: &Field<M, T>) -> Self {
		Self {
			property_name: field.name(),
			model_type: field.model_type_name(),
			value_type: field.value_type_name(),
			display_name: None,
			description: None,
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
		self.display_name = Some(display_name.into());
		self
	}

	pub fn property_name(&self) -> &'static str {
		self.property_name
	}

	pub fn model_type(&self) -> &'static str {
		self.model_type
	}

	pub fn value_type(&self) -> &'static str {
		self.value_type
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Configured display name, falling back to the property name
	pub fn display_name(&self) -> &str {
		self.display_name.as_deref().unwrap_or(self.property_name)
	}
}

type MetadataKey = (TypeId, &'static str);

/// Startup-built lookup table from fields to their metadata
///
/// The registry is immutable once built and can be shared between requests.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
	entries: HashMap<MetadataKey, ModelMetadata>,
}

impl MetadataRegistry {
	/// Start building a registry
	///
	/// # Examples
	///
	/// ```
	/// use trellis_helpers::{Field, MetadataRegistry};
	///
	/// struct Person { age: u32 }
	/// impl Person {
	///     const AGE: Field<Person, u32> = Field::new("Age", |p| &p.age);
	/// }
	///
	/// let registry = MetadataRegistry::builder()
	///     .field(&Person::AGE, |m| m.with_description("Age in years"))
	///     .build();
	///
	/// assert_eq!(registry.metadata_for(&Person::AGE).description(), Some("Age in years"));
	/// ```
	pub fn builder() -> MetadataRegistryBuilder {
		MetadataRegistryBuilder::default()
	}

	/// Registered metadata for `field`, if any
	pub fn get<M: 'static, T>(&self, field: &Field<M, T>) -> Option<&ModelMetadata> {
		self.entries.get(&(TypeId::of::<M>(), field.name()))
	}

	/// Metadata for `field`, or bare metadata when nothing was registered
	pub fn metadata_for<M: 'static, T>(&self, field: &Field<M, T>) -> ModelMetadata {
		match self.get(field) {
			Some(metadata) => metadata.clone(),
			None => {
				tracing::debug!(
					"no metadata registered for {}.{}",
					field.model_type_name(),
					field.name()
				);
				ModelMetadata::for_field(field)
			}
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[derive(Debug, Default)]
pub struct MetadataRegistryBuilder {
	entries: HashMap<MetadataKey, ModelMetadata>,
}

impl MetadataRegistryBuilder {
	/// Register metadata for `field`
	///
	/// `configure` receives bare metadata for the field and returns the
	/// metadata to store. Registering the same field twice keeps the last
	/// registration.
	pub fn field<M, T, F>(mut self, field: &Field<M, T>, configure: F) -> Self
	where
		M: 'static,
		F: FnOnce(ModelMetadata) -> ModelMetadata,
	{
		let metadata = configure(ModelMetadata::for_field(field));
		let key = (TypeId::of::<M>(), field.name());
		if self.entries.insert(key, metadata).is_some() {
			tracing::warn!(
				"metadata for {}.{} registered more than once; keeping the last registration",
				field.model_type_name(),
				field.name()
			);
		}
		self
	}

	pub fn build(self) -> MetadataRegistry {
		MetadataRegistry {
			entries: self.entries,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Person {
		age: u32,
		name: String,
	}

	struct Pet {
		age: u32,
	}

	impl Person {
		const AGE: Field<Person, u32> = Field::new("Age", |p| &p.age);
		const NAME: Field<Person, String> = Field::new("Name", |p| &p.name);
	}

	impl Pet {
		const AGE: Field<Pet, u32> = Field::new("Age", |p| &p.age);
	}

	#[rstest]
	fn test_lookup_is_keyed_by_model_type() {
		let registry = MetadataRegistry::builder()
			.field(&Person::AGE, |m| m.with_description("Age in years"))
			.build();

		assert!(registry.get(&Person::AGE).is_some());
		assert!(registry.get(&Pet::AGE).is_none());
		assert_eq!(registry.metadata_for(&Pet::AGE).description(), None);
	}

	#[rstest]
	fn test_unregistered_field_gets_bare_metadata() {
		let registry = MetadataRegistry::default();
		let metadata = registry.metadata_for(&Person::NAME);

		assert_eq!(metadata.property_name(), "Name");
		assert_eq!(metadata.display_name(), "Name");
		assert_eq!(metadata.description(), None);
		assert!(metadata.model_type().ends_with("Person"));
	}

	#[rstest]
	fn test_last_registration_wins() {
		let registry = MetadataRegistry::builder()
			.field(&Person::NAME, |m| m.with_display_name("Name"))
			.field(&Person::NAME, |m| m.with_display_name("Full name"))
			.build();

		assert_eq!(registry.len(), 1);
		assert_eq!(registry.metadata_for(&Person::NAME).display_name(), "Full name");
	}
}
