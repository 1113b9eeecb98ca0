//! Ordered HTML attribute maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute name → value mapping that remembers insertion order
///
/// Order matters because tags are serialized with their attributes in the
/// order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
	attrs: IndexMap<String, String>,
}

impl AttributeMap {
	/// Create an empty attribute map
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::AttributeMap;
	///
	/// let attrs = AttributeMap::new();
	/// assert!(attrs.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert an attribute, replacing any existing value
	///
	/// A replaced key keeps its original position.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.attrs.insert(name.into(), value.into())
	}

	/// Builder-style [`insert`](Self::insert)
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::AttributeMap;
	///
	/// let attrs = AttributeMap::new()
	///     .with("class", "img-fluid")
	///     .with("width", "120");
	///
	/// let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
	/// assert_eq!(names, vec!["class", "width"]);
	/// ```
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);
		self
	}

	/// Insert an attribute only when the name is not already present
	///
	/// Returns `true` when the value was added.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_html::AttributeMap;
	///
	/// let mut attrs = AttributeMap::new().with("alt", "first");
	/// assert!(!attrs.merge("alt", "second"));
	/// assert_eq!(attrs.get("alt"), Some("first"));
	/// ```
	pub fn merge(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
		let name = name.into();
		if self.attrs.contains_key(&name) {
			return false;
		}
		self.attrs.insert(name, value.into());
		true
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}

	pub fn contains_key(&self, name: &str) -> bool {
		self.attrs.contains_key(name)
	}

	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.attrs.shift_remove(name)
	}

	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	/// Iterate over `(name, value)` pairs in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = AttributeMap::new();
		for (k, v) in iter {
			map.insert(k, v);
		}
		map
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for AttributeMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_replaces_in_place() {
		let mut attrs = AttributeMap::from([("a", "1"), ("b", "2")]);
		assert_eq!(attrs.insert("a", "3"), Some("1".to_string()));

		let pairs: Vec<(&str, &str)> = attrs.iter().collect();
		assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
	}

	#[rstest]
	fn test_merge_keeps_first_value() {
		let mut attrs = AttributeMap::new();
		assert!(attrs.merge("src", "/a.png"));
		assert!(!attrs.merge("src", "/b.png"));
		assert_eq!(attrs.get("src"), Some("/a.png"));
		assert_eq!(attrs.len(), 1);
	}

	#[rstest]
	fn test_remove_preserves_order() {
		let mut attrs = AttributeMap::from([("a", "1"), ("b", "2"), ("c", "3")]);
		attrs.remove("b");

		let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
		assert_eq!(names, vec!["a", "c"]);
	}
}
