use super::HtmlHelper;
use crate::field::{Field, ValueType};
use crate::pascal::separate_pascal_case;
use std::any::type_name;
use trellis_core::{ArgumentError, Markup, Result};
use trellis_html::{AttributeMap, SelectList, SelectListItem, render_select};

/// Options for every member of the choice enum `T`, in declaration order
///
/// Each option's value is the member name and its text the member name with
/// PascalCase words separated.
///
/// # Examples
///
/// ```
/// use trellis_helpers::{choice_enum, enum_select_list};
///
/// choice_enum! {
///     enum NameField { FirstName, LastName }
/// }
///
/// let list = enum_select_list::<NameField>().unwrap();
/// let pairs: Vec<(&str, &str)> = list
///     .iter()
///     .map(|item| (item.value.as_str(), item.text.as_str()))
///     .collect();
/// assert_eq!(pairs, vec![("FirstName", "First Name"), ("LastName", "Last Name")]);
///
/// assert!(enum_select_list::<String>().is_err());
/// ```
pub fn enum_select_list<T: ValueType>() -> Result<SelectList> {
	let members = T::enum_members().ok_or(ArgumentError::InvalidEnumType {
		type_name: type_name::<T>(),
	})?;
	Ok(SelectList::new(members.iter().map(|member| {
		SelectListItem::new(*member, separate_pascal_case(member))
	})))
}

impl<M: 'static> HtmlHelper<'_, '_, M> {
	/// `<select>` offering every member of the choice enum behind `field`
	///
	/// Fails with [`ArgumentError::InvalidEnumType`] when the field's value
	/// type is not a choice enum; that check happens before the context is
	/// consulted. `Option<E>` fields are rejected the same way. The selected
	/// option is the value submitted for the field (from view data) or else
	/// the bound model's current value.
	///
	/// `T` must implement [`ValueType`]. Enums declared with
	/// [`choice_enum!`](crate::choice_enum) do; any other type joins the
	/// runtime non-enum check with an empty impl:
	///
	/// ```
	/// use trellis_helpers::{ArgumentError, Field, HelperEnvironment, ValueType};
	///
	/// struct Money(u64);
	/// impl ValueType for Money {}
	///
	/// struct Order { total: Money }
	/// impl Order {
	///     const TOTAL: Field<Order, Money> = Field::new("Total", |o| &o.total);
	/// }
	///
	/// let env = HelperEnvironment::default();
	/// let ctx = env.context_without_model::<Order>();
	/// let err = ctx.html().enum_drop_down_list_for(&Order::TOTAL).unwrap_err();
	/// assert!(matches!(err, ArgumentError::InvalidEnumType { .. }));
	/// ```
	pub fn enum_drop_down_list_for<T>(&self, field: &Field<M, T>) -> Result<Markup>
	where
		T: ValueType,
	{
		self.enum_drop_down_list_for_with(field, None, None)
	}

	/// [`enum_drop_down_list_for`](Self::enum_drop_down_list_for) with an
	/// optional leading empty option and extra `<select>` attributes
	pub fn enum_drop_down_list_for_with<T>(
		&self,
		field: &Field<M, T>,
		option_label: Option<&str>,
		html_attributes: Option<&AttributeMap>,
	) -> Result<Markup>
	where
		T: ValueType,
	{
		let list = enum_select_list::<T>()?;

		let metadata = self.context.metadata_for(field);
		let name = self
			.context
			.full_html_field_name(metadata.property_name());

		let selected = self.context.attempted_value(&name).or_else(|| {
			self.context
				.model()
				.and_then(|model| field.get(model).member_name())
				.map(str::to_string)
		});
		let list = list.with_selected(selected.as_deref());

		let no_attributes = AttributeMap::new();
		render_select(
			&name,
			&list,
			option_label,
			html_attributes.unwrap_or(&no_attributes),
		)
	}
}
