use super::HtmlHelper;
use crate::paths::{PathResolver, is_app_relative};
use trellis_core::{Markup, Result, ensure};
use trellis_html::{AttributeMap, TagBuilder, TagRenderMode};

impl<M> HtmlHelper<'_, '_, M> {
	/// `<img />` for `src` with an empty `alt`
	pub fn image(&self, src: &str) -> Result<Markup> {
		self.image_with(src, "", None)
	}

	/// `<img />` for `src` with `alt` text and extra attributes
	///
	/// An application-relative `src` (`~/...`) is resolved to an absolute
	/// path. `src` and `alt` are set before the extra attributes are merged,
	/// and merging never replaces an attribute that is already set, so
	/// `html_attributes` cannot override them.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_conf::HelperSettings;
	/// use trellis_helpers::{HelperEnvironment, MetadataRegistry};
	/// use trellis_html::AttributeMap;
	///
	/// let settings = HelperSettings::from_toml_str(r#"application_path = "/app""#).unwrap();
	/// let env = HelperEnvironment::new(settings, MetadataRegistry::default());
	/// let ctx = env.context_without_model::<()>();
	///
	/// let attrs = AttributeMap::from([("class", "avatar"), ("alt", "ignored")]);
	/// let html = ctx.html().image_with("~/img/a.png", "a", Some(&attrs)).unwrap();
	/// assert_eq!(html.as_str(), r#"<img src="/app/img/a.png" alt="a" class="avatar" />"#);
	/// ```
	pub fn image_with(
		&self,
		src: &str,
		alt: &str,
		html_attributes: Option<&AttributeMap>,
	) -> Result<Markup> {
		render_image(self.context.resolver(), src, alt, html_attributes)
	}
}

pub(crate) fn render_image(
	resolver: &dyn PathResolver,
	src: &str,
	alt: &str,
	html_attributes: Option<&AttributeMap>,
) -> Result<Markup> {
	let src = ensure::not_empty(src, "src")?;
	let src = if is_app_relative(src) {
		resolver.to_absolute(src)?
	} else {
		src.to_string()
	};

	let mut tag = TagBuilder::new("img")?;
	tag.merge_attribute("src", src)?;
	tag.merge_attribute("alt", alt)?;
	if let Some(attributes) = html_attributes {
		tag.merge_attributes(attributes)?;
	}
	Ok(tag.render(TagRenderMode::SelfClosing))
}
