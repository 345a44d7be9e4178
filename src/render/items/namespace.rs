use crate::model::DocNode;

use super::super::doc;
use super::super::listing::{listing_toc, render_listing};
use super::super::state::RenderContext;
use super::super::toc;

fn child_prefix(path: &[&str], name: &str) -> String {
	path.iter()
		.copied()
		.chain(std::iter::once(name))
		.collect::<Vec<_>>()
		.join(".")
}

/// Children of each namespace, grouped by kind and linked below `path`.
pub fn doc_html(ctx: &RenderContext<'_>, nodes: &[&DocNode], path: &[&str]) -> String {
	let mut out = String::new();
	for node in nodes {
		let Some(elements) = node.namespace_elements() else {
			continue;
		};
		let listing = render_listing(ctx, elements, &child_prefix(path, &node.name));
		let section = if listing.is_empty() {
			String::new()
		} else {
			format!("<section class=\"doc-section\" id=\"members\">\n{listing}</section>\n")
		};
		out.push_str(&doc::item("namespace", &node.name, vec![section]));
	}
	out
}

/// Links to the namespace's children, grouped by kind.
pub fn toc_html(ctx: &RenderContext<'_>, node: &DocNode) -> String {
	let Some(elements) = node.namespace_elements() else {
		return String::new();
	};
	let prefix = child_prefix(&ctx.namespace_path(), &node.name);
	toc::nav(&node.name, listing_toc(ctx, elements, &prefix))
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::config::SiteConfig;
	use crate::markdown::CmarkRenderer;

	#[test]
	fn children_link_below_the_resolved_path() {
		let entries: Vec<DocNode> = serde_json::from_value(json!([{
			"kind": "namespace",
			"name": "Inner",
			"namespaceDef": { "elements": [
				{ "kind": "function", "name": "run", "functionDef": {} }
			] }
		}]))
		.unwrap();
		let config = SiteConfig::default();
		let ctx = RenderContext::new("https://deno.land/x/a/mod.ts", &entries, &config, &CmarkRenderer);

		let html = doc_html(&ctx, &[&entries[0]], &["Outer"]);
		assert!(html.contains("href=\"/https/deno.land/x/a/mod.ts/~/Outer.Inner.run\""));

		let toc = toc_html(&ctx, &entries[0]);
		assert!(toc.contains("href=\"/https/deno.land/x/a/mod.ts/~/Inner.run\""));
	}
}
