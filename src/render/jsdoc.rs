//! JSDoc bodies, tags and item badges.

use crate::model::{JsDoc, JsDocTag};

use super::html::escape;
use super::state::RenderContext;

/// Marker shown next to an item title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
	/// The item is an abstract class.
	Abstract,
	/// The item carries a `@deprecated` tag, with its optional note.
	Deprecated(Option<String>),
}

impl Badge {
	/// Deprecation badge for a doc comment, if it has a `@deprecated` tag.
	pub fn deprecated(js_doc: &JsDoc) -> Option<Self> {
		js_doc
			.deprecated()
			.map(|tag| Self::Deprecated(tag.doc.clone().filter(|doc| !doc.trim().is_empty())))
	}

	/// Render the badge.
	pub fn to_html(&self) -> String {
		match self {
			Self::Abstract => "<span class=\"badge abstract\">abstract</span>".to_string(),
			Self::Deprecated(None) => "<span class=\"badge deprecated\">deprecated</span>".to_string(),
			Self::Deprecated(Some(note)) => format!(
				"<span class=\"badge deprecated\" title=\"{}\">deprecated</span>",
				escape(note)
			),
		}
	}
}

/// Body and tags of a doc comment; empty when there is nothing to show.
pub fn render_js_doc(ctx: &RenderContext<'_>, js_doc: &JsDoc) -> String {
	let mut out = String::new();
	if let Some(body) = js_doc.body() {
		out.push_str(&ctx.render_markdown(body));
	}
	let tags: Vec<&JsDocTag> = js_doc
		.tags
		.iter()
		// Shown as a badge instead.
		.filter(|tag| tag.kind != "deprecated")
		.collect();
	if !tags.is_empty() {
		out.push_str("<dl class=\"tags\">\n");
		for tag in tags {
			out.push_str(&render_tag(ctx, tag));
		}
		out.push_str("</dl>\n");
	}
	if out.is_empty() {
		return out;
	}
	format!("<div class=\"jsdoc\">\n{out}</div>\n")
}

/// Doc comment of a member, or nothing.
pub fn render_optional(ctx: &RenderContext<'_>, js_doc: Option<&JsDoc>) -> String {
	js_doc
		.map(|js_doc| render_js_doc(ctx, js_doc))
		.unwrap_or_default()
}

fn render_tag(ctx: &RenderContext<'_>, tag: &JsDocTag) -> String {
	let mut term = format!("@{}", escape(&tag.kind));
	if let Some(name) = &tag.name {
		term.push_str(&format!(" <code>{}</code>", escape(name)));
	}
	let description = tag
		.doc
		.as_deref()
		.map(|doc| ctx.render_markdown(doc))
		.unwrap_or_default();
	format!("<dt>{term}</dt><dd>{description}</dd>\n")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::SiteConfig;
	use crate::markdown::CmarkRenderer;
	use crate::model::DocNode;

	#[test]
	fn renders_body_and_tags_without_deprecated() {
		let config = SiteConfig::default();
		let entries: Vec<DocNode> = Vec::new();
		let ctx = RenderContext::new("https://deno.land/x/a/mod.ts", &entries, &config, &CmarkRenderer);
		let js_doc = JsDoc::new("Reads **all** bytes.")
			.with_tag(JsDocTag {
				kind: "param".into(),
				name: Some("reader".into()),
				doc: Some("source".into()),
			})
			.with_tag(JsDocTag::new("deprecated"));

		let html = render_js_doc(&ctx, &js_doc);
		assert!(html.contains("<strong>all</strong>"));
		assert!(html.contains("@param <code>reader</code>"));
		assert!(!html.contains("@deprecated"));
	}

	#[test]
	fn empty_doc_renders_nothing() {
		let config = SiteConfig::default();
		let entries: Vec<DocNode> = Vec::new();
		let ctx = RenderContext::new("https://deno.land/x/a/mod.ts", &entries, &config, &CmarkRenderer);
		assert_eq!(render_js_doc(&ctx, &JsDoc::default()), "");
		assert_eq!(render_optional(&ctx, None), "");
	}

	#[test]
	fn deprecated_badge_keeps_note() {
		let js_doc = JsDoc::default().with_tag(JsDocTag::new("deprecated").with_doc("Use `b`."));
		assert_eq!(
			Badge::deprecated(&js_doc),
			Some(Badge::Deprecated(Some("Use `b`.".into())))
		);
		assert_eq!(Badge::deprecated(&JsDoc::new("fine")), None);
		assert_eq!(
			Badge::Deprecated(Some("<b>".into())).to_html(),
			"<span class=\"badge deprecated\" title=\"&lt;b&gt;\">deprecated</span>"
		);
	}
}
