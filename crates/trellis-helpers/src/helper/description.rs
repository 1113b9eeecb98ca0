use super::HtmlHelper;
use crate::field::Field;
use trellis_core::Markup;

impl<M: 'static> HtmlHelper<'_, '_, M> {
	/// Description registered for `field`, as trusted markup
	///
	/// Descriptions come from the application's own metadata registry and are
	/// written as-is. Without a registered description the result is empty.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_conf::HelperSettings;
	/// use trellis_helpers::{Field, HelperEnvironment, MetadataRegistry};
	///
	/// struct Person { age: u32 }
	/// impl Person {
	///     const AGE: Field<Person, u32> = Field::new("Age", |p| &p.age);
	/// }
	///
	/// let registry = MetadataRegistry::builder()
	///     .field(&Person::AGE, |m| m.with_description("Age in years"))
	///     .build();
	/// let env = HelperEnvironment::new(HelperSettings::default(), registry);
	///
	/// let person = Person { age: 30 };
	/// let ctx = env.context(&person);
	/// assert_eq!(ctx.html().description_for(&Person::AGE).as_str(), "Age in years");
	/// ```
	pub fn description_for<T>(&self, field: &Field<M, T>) -> Markup {
		self.context
			.metadata_for(field)
			.description()
			.map(Markup::trusted)
			.unwrap_or_default()
	}

	/// Display name of `field` (falling back to its property name), escaped
	pub fn display_name_for<T>(&self, field: &Field<M, T>) -> Markup {
		Markup::text(self.context.metadata_for(field).display_name())
	}
}
