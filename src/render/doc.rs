//! Building blocks for the documentation sections below the code blocks.

use crate::model::JsDoc;

use super::html::{anchor_id, escape};
use super::jsdoc::render_optional;
use super::state::RenderContext;

/// One documented member: an anchored signature followed by its doc comment.
pub fn member(
	ctx: &RenderContext<'_>,
	section: &str,
	name: &str,
	signature: &str,
	js_doc: Option<&JsDoc>,
) -> String {
	member_with(ctx, section, name, signature, js_doc, "")
}

/// [`member`] followed by extra pre-rendered content inside the member element.
pub fn member_with(
	ctx: &RenderContext<'_>,
	section: &str,
	name: &str,
	signature: &str,
	js_doc: Option<&JsDoc>,
	extra: &str,
) -> String {
	format!(
		"<div class=\"member\" id=\"{}\">\n<h3><code>{}</code></h3>\n{}{extra}</div>\n",
		anchor_id(section, name),
		escape(signature),
		render_optional(ctx, js_doc)
	)
}

/// Titled section wrapping pre-rendered members; empty when there are none.
pub fn section(id: &str, title: &str, members: Vec<String>) -> String {
	if members.is_empty() {
		return String::new();
	}
	format!(
		"<section class=\"doc-section\" id=\"{id}\">\n<h2>{}</h2>\n{}</section>\n",
		escape(title),
		members.concat()
	)
}

/// Documentation block for one item: its non-empty sections in order.
pub fn item(kind: &str, name: &str, sections: Vec<String>) -> String {
	let body: String = sections.concat();
	format!(
		"<div class=\"doc {kind}\" data-name=\"{}\">\n{body}</div>\n",
		escape(name)
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_sections_vanish() {
		assert_eq!(section("properties", "Properties", Vec::new()), "");
		let html = item("class", "A", vec![String::new(), section("methods", "Methods", vec!["<p>m</p>".into()])]);
		assert!(html.contains("<h2>Methods</h2>"));
		assert!(!html.contains("Properties"));
	}
}
