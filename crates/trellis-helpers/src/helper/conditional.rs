use super::HtmlHelper;
use trellis_core::{Markup, Result};

impl<M> HtmlHelper<'_, '_, M> {
	/// `text` when `condition` holds, empty markup otherwise
	///
	/// The text is emitted as given; it is not escaped.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_helpers::HelperEnvironment;
	///
	/// let env = HelperEnvironment::default();
	/// let ctx = env.context_without_model::<()>();
	/// let html = ctx.html();
	///
	/// assert_eq!(html.if_text(true, "active").as_str(), "active");
	/// assert!(html.if_text(false, "active").is_empty());
	/// ```
	pub fn if_text(&self, condition: bool, text: impl Into<String>) -> Markup {
		let text = text.into();
		self.render_if_else(condition, |_| Markup::trusted(text), |_| Markup::empty())
	}

	/// `true_text` or `false_text` depending on `condition`
	pub fn if_else_text(
		&self,
		condition: bool,
		true_text: impl Into<String>,
		false_text: impl Into<String>,
	) -> Markup {
		let (true_text, false_text) = (true_text.into(), false_text.into());
		self.render_if_else(
			condition,
			|_| Markup::trusted(true_text),
			|_| Markup::trusted(false_text),
		)
	}

	/// Markup produced by `action` when `condition` holds, empty otherwise
	///
	/// `action` is not called when `condition` is false.
	pub fn render_if<F>(&self, condition: bool, action: F) -> Markup
	where
		F: FnOnce(&Self) -> Markup,
	{
		self.render_if_else(condition, action, |_| Markup::empty())
	}

	/// Markup produced by whichever closure `condition` selects
	///
	/// Only the selected closure is called.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_core::Markup;
	/// use trellis_helpers::HelperEnvironment;
	///
	/// let env = HelperEnvironment::default();
	/// let ctx = env.context_without_model::<()>();
	///
	/// let html = ctx.html().render_if_else(
	///     false,
	///     |_| unreachable!("not selected"),
	///     |_| Markup::text("Sign in"),
	/// );
	/// assert_eq!(html.as_str(), "Sign in");
	/// ```
	pub fn render_if_else<T, F>(&self, condition: bool, true_action: T, false_action: F) -> Markup
	where
		T: FnOnce(&Self) -> Markup,
		F: FnOnce(&Self) -> Markup,
	{
		if condition {
			true_action(self)
		} else {
			false_action(self)
		}
	}

	/// [`render_if`](Self::render_if) for fallible helpers
	///
	/// # Examples
	///
	/// ```
	/// use trellis_helpers::HelperEnvironment;
	///
	/// let env = HelperEnvironment::default();
	/// let ctx = env.context_without_model::<()>();
	///
	/// let logo = ctx.html().try_render_if(true, |h| h.image("~/logo.png")).unwrap();
	/// assert_eq!(logo.as_str(), r#"<img src="/logo.png" alt="" />"#);
	///
	/// let none = ctx.html().try_render_if(false, |h| h.image("")).unwrap();
	/// assert!(none.is_empty());
	/// ```
	pub fn try_render_if<F>(&self, condition: bool, action: F) -> Result<Markup>
	where
		F: FnOnce(&Self) -> Result<Markup>,
	{
		self.try_render_if_else(condition, action, |_| Ok(Markup::empty()))
	}

	/// [`render_if_else`](Self::render_if_else) for fallible helpers
	pub fn try_render_if_else<T, F>(
		&self,
		condition: bool,
		true_action: T,
		false_action: F,
	) -> Result<Markup>
	where
		T: FnOnce(&Self) -> Result<Markup>,
		F: FnOnce(&Self) -> Result<Markup>,
	{
		if condition {
			true_action(self)
		} else {
			false_action(self)
		}
	}
}
