use crate::model::classify;
use crate::render::{MetaTags, RenderContext, listing_toc, module_label, render_header, render_js_doc, render_listing, toc};
use crate::usage::parse_usage;

use super::Page;

/// Module root page: module doc, usage, and every node grouped by kind.
pub fn assemble_module(ctx: &RenderContext<'_>) -> Page {
	let collection = classify(ctx.entries);
	let js_doc = collection.module_doc().and_then(|node| node.non_empty_js_doc());

	let toc_title = if ctx.is_library() { "Library" } else { "Module" };
	let listing = render_listing(ctx, ctx.entries, "");

	Page {
		meta: MetaTags::new(ctx, None, js_doc),
		header: render_header(ctx),
		toc: Some(toc::nav(toc_title, listing_toc(ctx, ctx.entries, ""))),
		title: module_label(ctx.url),
		breadcrumbs: Vec::new(),
		usage: ctx.shows_usage().then(|| parse_usage(ctx.url, None, false)),
		badges: Vec::new(),
		js_doc: js_doc
			.map(|js_doc| render_js_doc(ctx, js_doc))
			.filter(|html| !html.is_empty()),
		code_blocks: Vec::new(),
		doc_sections: Vec::new(),
		listing: Some(listing).filter(|html| !html.is_empty()),
		error: None,
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;
	use crate::config::SiteConfig;
	use crate::markdown::CmarkRenderer;
	use crate::model::DocNode;

	#[test]
	fn module_page_uses_module_doc_and_lists_nodes() {
		let entries: Vec<DocNode> = serde_json::from_value(json!([
			{ "kind": "moduleDoc", "name": "", "jsDoc": { "doc": "HTTP *server* utilities." } },
			{ "kind": "function", "name": "serve", "functionDef": {} },
			{ "kind": "function", "name": "serve", "functionDef": {} }
		]))
		.unwrap();
		let config = SiteConfig::default();
		let ctx = RenderContext::new("https://deno.land/std@0.140.0/http/server.ts", &entries, &config, &CmarkRenderer);

		let page = assemble_module(&ctx);
		assert_eq!(page.title, "std@0.140.0/http/server.ts");
		assert_eq!(page.meta.description.as_deref(), Some("HTTP server utilities."));
		assert!(page.js_doc.unwrap().contains("<em>server</em>"));
		assert_eq!(page.usage.unwrap().import_symbol, "mod");
		assert!(page.toc.unwrap().contains("<h2>Module</h2>"));
		assert_eq!(page.listing.unwrap().matches(">serve</a>").count(), 1);
	}

	#[test]
	fn library_module_has_no_usage() {
		let entries: Vec<DocNode> = Vec::new();
		let config = SiteConfig::default();
		let ctx = RenderContext::new("builtin/stable", &entries, &config, &CmarkRenderer);

		let page = assemble_module(&ctx);
		assert!(page.usage.is_none());
		assert!(page.toc.unwrap().contains("<h2>Library</h2>"));
		assert!(page.listing.is_none());
	}
}
