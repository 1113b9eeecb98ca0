//! PascalCase word separation for human-readable labels.

/// Insert spaces at the word boundaries of a PascalCase identifier
///
/// A space goes before an uppercase letter when the previous character is
/// lowercase or a digit, or when the previous character is uppercase and
/// the next one is lowercase (the end of an acronym). Acronyms stay
/// together and text without such boundaries is returned unchanged.
///
/// # Examples
///
/// ```
/// use trellis_helpers::separate_pascal_case;
///
/// assert_eq!(separate_pascal_case("FirstName"), "First Name");
/// assert_eq!(separate_pascal_case("UserID"), "User ID");
/// assert_eq!(separate_pascal_case("HTMLParser"), "HTML Parser");
/// assert_eq!(separate_pascal_case("ID"), "ID");
/// ```
pub fn separate_pascal_case(s: &str) -> String {
	let chars: Vec<char> = s.chars().collect();
	let mut separated = String::with_capacity(s.len() + 4);

	for (i, &c) in chars.iter().enumerate() {
		if i > 0 && c.is_uppercase() {
			let prev = chars[i - 1];
			let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
			if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
			{
				separated.push(' ');
			}
		}
		separated.push(c);
	}

	separated
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("FirstName", "First Name")]
	#[case("LastName", "Last Name")]
	#[case("ID", "ID")]
	#[case("Id", "Id")]
	#[case("UserID", "User ID")]
	#[case("UserId", "User Id")]
	#[case("HTMLParser", "HTML Parser")]
	#[case("XmlHttpRequest", "Xml Http Request")]
	#[case("Level2Boss", "Level2 Boss")]
	#[case("Area51", "Area51")]
	#[case("firstName", "first Name")]
	#[case("A", "A")]
	#[case("already spaced", "already spaced")]
	#[case("Already Spaced", "Already Spaced")]
	#[case("", "")]
	#[case("ÉtéChaud", "Été Chaud")]
	fn test_separate_pascal_case(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(separate_pascal_case(input), expected);
	}

	proptest! {
		#[test]
		fn only_spaces_are_inserted(s in "[A-Za-z0-9 ]{0,24}") {
			let separated = separate_pascal_case(&s);
			prop_assert_eq!(separated.replace(' ', ""), s.replace(' ', ""));
		}

		#[test]
		fn identifiers_never_gain_edge_or_double_spaces(s in "[A-Za-z][A-Za-z0-9]{0,24}") {
			let separated = separate_pascal_case(&s);
			prop_assert!(!separated.starts_with(' '));
			prop_assert!(!separated.ends_with(' '));
			prop_assert!(!separated.contains("  "));
		}
	}
}
