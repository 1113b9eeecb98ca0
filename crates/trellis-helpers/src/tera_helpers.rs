//! Tera integration
//!
//! Registers the model-independent helpers with a [`tera::Tera`] instance:
//!
//! - `image(src, alt="", ...)`: `<img />` element; any other argument becomes
//!   an attribute (sorted by name)
//! - `if_else(condition, when_true="", when_false="")`: text chosen by a condition
//! - `pascal_words`: filter separating PascalCase words
//!
//! ```tera
//! {{ image(src="~/img/logo.png", alt="Logo", class="brand") }}
//! <li class="{{ if_else(condition=is_active, when_true='active') }}">...</li>
//! {{ status | pascal_words }}
//! ```

use crate::helper::render_image;
use crate::pascal::separate_pascal_case;
use crate::paths::PathResolver;
use std::collections::HashMap;
use std::sync::Arc;
use tera::{Function, Tera, Value};
use trellis_html::AttributeMap;

/// Register the helper functions and filters on `tera`
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tera::{Context, Tera};
/// use trellis_helpers::{ApplicationPathResolver, register_helpers};
///
/// let mut tera = Tera::default();
/// register_helpers(&mut tera, Arc::new(ApplicationPathResolver::new("/app")));
/// tera.add_raw_template("logo.html", r#"{{ image(src="~/logo.png", alt="Logo") }}"#).unwrap();
///
/// let html = tera.render("logo.html", &Context::new()).unwrap();
/// assert_eq!(html, r#"<img src="/app/logo.png" alt="Logo" />"#);
/// ```
pub fn register_helpers(tera: &mut Tera, resolver: Arc<dyn PathResolver>) {
	tera.register_function("image", ImageFunction::new(resolver));
	tera.register_function("if_else", IfElseFunction);
	tera.register_filter("pascal_words", pascal_words);
}

/// `image(src, alt="", ...)`
pub struct ImageFunction {
	resolver: Arc<dyn PathResolver>,
}

impl ImageFunction {
	pub fn new(resolver: Arc<dyn PathResolver>) -> Self {
		Self { resolver }
	}
}

impl Function for ImageFunction {
	fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
		let src = string_arg(args, "src")?
			.ok_or_else(|| tera::Error::msg("image: missing argument 'src'"))?;
		let alt = string_arg(args, "alt")?.unwrap_or_default();

		let mut names: Vec<&String> = args
			.keys()
			.filter(|name| !matches!(name.as_str(), "src" | "alt"))
			.collect();
		names.sort();
		let mut attributes = AttributeMap::new();
		for name in names {
			if let Some(value) = string_arg(args, name)? {
				attributes.insert(name.as_str(), value);
			}
		}

		let markup = render_image(self.resolver.as_ref(), &src, &alt, Some(&attributes))
			.map_err(|e| tera::Error::msg(format!("image: {}", e)))?;
		Ok(Value::String(markup.into_string()))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

/// `if_else(condition, when_true="", when_false="")`
///
/// The selected text is emitted unescaped, like the `if_text` helper.
pub struct IfElseFunction;

impl Function for IfElseFunction {
	fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
		let condition = args.get("condition").is_some_and(is_truthy);
		let key = if condition { "when_true" } else { "when_false" };
		Ok(Value::String(string_arg(args, key)?.unwrap_or_default()))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

/// `{{ value | pascal_words }}`
pub fn pascal_words(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
	let s = value
		.as_str()
		.ok_or_else(|| tera::Error::msg("pascal_words filter requires a string"))?;
	Ok(Value::String(separate_pascal_case(s)))
}

fn string_arg(args: &HashMap<String, Value>, name: &str) -> tera::Result<Option<String>> {
	match args.get(name) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.clone())),
		Some(Value::Number(n)) => Ok(Some(n.to_string())),
		Some(Value::Bool(b)) => Ok(Some(b.to_string())),
		Some(_) => Err(tera::Error::msg(format!(
			"argument '{}' must be a string, number or boolean",
			name
		))),
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(a) => !a.is_empty(),
		Value::Object(o) => !o.is_empty(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ApplicationPathResolver;
	use rstest::{fixture, rstest};
	use tera::Context;

	#[fixture]
	fn engine() -> Tera {
		let mut engine = Tera::default();
		register_helpers(&mut engine, Arc::new(ApplicationPathResolver::new("/app")));
		engine
	}

	fn render(engine: &mut Tera, template: &str, context: &Context) -> tera::Result<String> {
		engine.add_raw_template("page.html", template)?;
		engine.render("page.html", context)
	}

	#[rstest]
	fn test_image_function_extra_attributes_sorted(mut engine: Tera) {
		let html = render(
			&mut engine,
			r#"{{ image(src="~/a.png", width=64, class="thumb") }}"#,
			&Context::new(),
		)
		.unwrap();

		assert_eq!(
			html,
			r#"<img src="/app/a.png" alt="" class="thumb" width="64" />"#
		);
	}

	#[rstest]
	fn test_image_function_requires_src(mut engine: Tera) {
		assert!(render(&mut engine, r#"{{ image(alt="x") }}"#, &Context::new()).is_err());
		assert!(render(&mut engine, r#"{{ image(src="") }}"#, &Context::new()).is_err());
	}

	#[rstest]
	#[case(true, "active")]
	#[case(false, "idle")]
	fn test_if_else_function(mut engine: Tera, #[case] flag: bool, #[case] expected: &str) {
		let mut context = Context::new();
		context.insert("flag", &flag);

		let html = render(
			&mut engine,
			r#"{{ if_else(condition=flag, when_true="active", when_false="idle") }}"#,
			&context,
		)
		.unwrap();
		assert_eq!(html, expected);
	}

	#[rstest]
	fn test_if_else_without_else_is_empty(mut engine: Tera) {
		let html = render(
			&mut engine,
			r#"[{{ if_else(condition=false, when_true="x") }}]"#,
			&Context::new(),
		)
		.unwrap();
		assert_eq!(html, "[]");
	}

	#[rstest]
	fn test_pascal_words_filter(mut engine: Tera) {
		let mut context = Context::new();
		context.insert("status", "AwaitingPayment");

		let html = render(&mut engine, "{{ status | pascal_words }}", &context).unwrap();
		assert_eq!(html, "Awaiting Payment");
	}
}
