//! Typed model field keys and value type descriptions.
//!
//! A [`Field`] names one property of a model type and knows how to read it.
//! Fields are declared once, usually as associated constants, and passed to
//! helpers instead of property-access expressions:
//!
//! ```
//! use trellis_helpers::Field;
//!
//! struct Person {
//!     age: u32,
//! }
//!
//! impl Person {
//!     const AGE: Field<Person, u32> = Field::new("Age", |p| &p.age);
//! }
//!
//! let person = Person { age: 42 };
//! assert_eq!(Person::AGE.name(), "Age");
//! assert_eq!(*Person::AGE.get(&person), 42);
//! ```

use std::any::type_name;
use std::fmt;

/// Key for the property `name` of model `M`, whose value has type `T`
pub struct Field<M, T> {
	name: &'static str,
	accessor: fn(&M) -> &T,
}

impl<M, T> Field<M, T> {
	pub const fn new(name: &'static str, accessor: fn(&M) -> &T) -> Self {
		Self { name, accessor }
	}

	/// Property name, as used for metadata lookup and form field names
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Read the property from `model`
	pub fn get<'m>(&self, model: &'m M) -> &'m T {
		(self.accessor)(model)
	}

	pub fn model_type_name(&self) -> &'static str {
		type_name::<M>()
	}

	pub fn value_type_name(&self) -> &'static str {
		type_name::<T>()
	}
}

// Manual impls: deriving would require `M: Clone` and `T: Clone`.
impl<M, T> Clone for Field<M, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<M, T> Copy for Field<M, T> {}

impl<M, T> fmt::Debug for Field<M, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("model", &type_name::<M>())
			.field("name", &self.name)
			.field("value", &type_name::<T>())
			.finish()
	}
}

/// Describes how a field value type participates in choice rendering
///
/// Only choice enums (see [`choice_enum!`](crate::choice_enum)) report
/// members; every other value type keeps the defaults.
pub trait ValueType {
	/// Member names in declaration order, or `None` for non-enum types
	fn enum_members() -> Option<&'static [&'static str]> {
		None
	}

	/// Member name of this value, or `None` for non-enum types
	fn member_name(&self) -> Option<&'static str> {
		None
	}
}

macro_rules! plain_value_types {
	($($ty:ty),* $(,)?) => {
		$(impl ValueType for $ty {})*
	};
}

plain_value_types!(
	String, &str, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
	f32, f64,
);

impl<T: ValueType> ValueType for Vec<T> {}

/// `Option<E>` is not itself a choice enum, even when `E` is one; only the
/// member name of a present value passes through.
impl<T: ValueType> ValueType for Option<T> {
	fn member_name(&self) -> Option<&'static str> {
		self.as_ref().and_then(ValueType::member_name)
	}
}

/// Declare an enum usable as a dropdown choice type
///
/// Implements [`ValueType`] with the members in declaration order, plus
/// `as_str`, `Display` and `FromStr` over the member names.
///
/// # Examples
///
/// ```
/// use trellis_helpers::{ValueType, choice_enum};
///
/// choice_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Title {
///         Mister,
///         MissOrMrs,
///         Doctor,
///     }
/// }
///
/// assert_eq!(Title::enum_members(), Some(&["Mister", "MissOrMrs", "Doctor"][..]));
/// assert_eq!(Title::Doctor.to_string(), "Doctor");
/// assert_eq!("MissOrMrs".parse::<Title>().unwrap(), Title::MissOrMrs);
/// assert!("Sir".parse::<Title>().is_err());
/// ```
#[macro_export]
macro_rules! choice_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($(#[$vmeta:meta])* $variant:ident),+ $(,)?
		}
	) => {
		$(#[$meta])*
		$vis enum $name {
			$($(#[$vmeta])* $variant),+
		}

		impl $name {
			/// Member names in declaration order
			pub const MEMBERS: &'static [&'static str] = &[$(stringify!($variant)),+];

			pub fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => stringify!($variant)),+
				}
			}
		}

		impl $crate::ValueType for $name {
			fn enum_members() -> ::std::option::Option<&'static [&'static str]> {
				::std::option::Option::Some(Self::MEMBERS)
			}

			fn member_name(&self) -> ::std::option::Option<&'static str> {
				::std::option::Option::Some(self.as_str())
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::ArgumentError;

			fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
				match s {
					$(stringify!($variant) => ::std::result::Result::Ok($name::$variant),)+
					_ => ::std::result::Result::Err($crate::ArgumentError::invalid(
						"value",
						::std::format!("'{}' is not a member of {}", s, stringify!($name)),
					)),
				}
			}
		}
	};
}
