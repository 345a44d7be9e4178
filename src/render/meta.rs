//! `<head>` metadata: title, description and social preview tags.

use url::form_urlencoded;

use crate::model::JsDoc;

use super::header::module_label;
use super::html::escape;
use super::state::RenderContext;

/// Maximum length of the meta description, in characters.
pub const DESCRIPTION_LIMIT: usize = 160;

/// Metadata emitted in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTags {
	/// Document title.
	pub title: String,
	/// Plain-text description, at most [`DESCRIPTION_LIMIT`] characters.
	pub description: Option<String>,
	/// Absolute url of the social preview image.
	pub image: String,
}

impl MetaTags {
	/// Metadata for the module root (`item` absent) or an item page.
	pub fn new(ctx: &RenderContext<'_>, item: Option<&str>, js_doc: Option<&JsDoc>) -> Self {
		let label = module_label(ctx.url);
		let title = match item {
			Some(item) => format!("{item} | {label}"),
			None => label,
		};
		let description = js_doc
			.and_then(JsDoc::body)
			.map(|body| truncate(&ctx.markdown.clean(body), DESCRIPTION_LIMIT))
			.filter(|description| !description.is_empty());
		Self {
			title,
			description,
			image: og_image(ctx.config.origin(), ctx.url, item),
		}
	}

	/// Render the tags.
	pub fn to_html(&self) -> String {
		let title = escape(&self.title);
		let mut out = format!(
			"<title>{title}</title>\n<meta property=\"og:title\" content=\"{title}\">\n"
		);
		if let Some(description) = &self.description {
			let description = escape(description);
			out.push_str(&format!(
				"<meta name=\"description\" content=\"{description}\">\n<meta property=\"og:description\" content=\"{description}\">\n"
			));
		}
		out.push_str(&format!(
			"<meta property=\"og:image\" content=\"{}\">\n<meta name=\"twitter:card\" content=\"summary_large_image\">\n",
			escape(&self.image)
		));
		out
	}
}

/// `{origin}/img/og?url=..&item=..`; the item is empty on module pages.
pub fn og_image(origin: &str, url: &str, item: Option<&str>) -> String {
	let query = form_urlencoded::Serializer::new(String::new())
		.append_pair("url", url)
		.append_pair("item", item.unwrap_or_default())
		.finish();
	format!("{origin}/img/og?{query}")
}

/// Cut `text` to at most `limit` characters, ending with an ellipsis when shortened.
pub fn truncate(text: &str, limit: usize) -> String {
	if text.chars().count() <= limit {
		return text.to_string();
	}
	let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
	cut.truncate(cut.trim_end().len());
	cut.push('…');
	cut
}
