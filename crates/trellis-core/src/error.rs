//! Argument errors raised by view helpers.

/// Error raised when a helper receives an unusable argument.
///
/// Helpers fail with this error before producing any output; nothing is
/// rendered partially.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
	/// A required string argument was empty.
	#[error("argument '{param}' must not be empty")]
	Empty { param: &'static str },
	/// An argument was present but not acceptable.
	#[error("invalid argument '{param}': {message}")]
	Invalid {
		param: &'static str,
		message: String,
	},
	/// A value type that is not a choice enum was used where one is required.
	#[error("Must be a valid Enum type.")]
	InvalidEnumType { type_name: &'static str },
}

impl ArgumentError {
	/// Build an [`ArgumentError::Invalid`] for `param`
	///
	/// # Examples
	///
	/// ```
	/// use trellis_core::ArgumentError;
	///
	/// let err = ArgumentError::invalid("src", "not a virtual path");
	/// assert_eq!(err.to_string(), "invalid argument 'src': not a virtual path");
	/// ```
	pub fn invalid(param: &'static str, message: impl Into<String>) -> Self {
		ArgumentError::Invalid {
			param,
			message: message.into(),
		}
	}

	/// Name of the offending parameter, when the error is tied to one
	pub fn param(&self) -> Option<&'static str> {
		match self {
			ArgumentError::Empty { param } | ArgumentError::Invalid { param, .. } => Some(param),
			ArgumentError::InvalidEnumType { .. } => None,
		}
	}
}

pub type Result<T> = std::result::Result<T, ArgumentError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_message() {
		let err = ArgumentError::Empty { param: "src" };
		assert_eq!(err.to_string(), "argument 'src' must not be empty");
		assert_eq!(err.param(), Some("src"));
	}

	#[rstest]
	fn test_invalid_enum_type_message() {
		let err = ArgumentError::InvalidEnumType { type_name: "String" };
		assert_eq!(err.to_string(), "Must be a valid Enum type.");
		assert_eq!(err.param(), None);
	}
}
