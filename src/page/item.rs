use crate::model::{DocNode, JsDoc};
use crate::render::{
	Badge, MetaTags, RenderContext, is_type_only, module_label, render_code_block, render_doc, render_header,
	render_js_doc, render_toc,
};
use crate::usage::parse_usage;

use super::{Breadcrumb, NotFound, Page, resolve};

/// Page for the dotted `item` path, or the "Entry not found" page.
pub fn assemble_item(ctx: &RenderContext<'_>, item: &str) -> Page {
	let resolution = resolve(ctx, item);
	let ctx = &resolution.ctx;
	let nodes = resolution.nodes.as_slice();

	if nodes.is_empty() {
		return not_found(ctx, item);
	}

	// The first node with a doc comment documents the whole set.
	let js_doc: Option<&JsDoc> = nodes.iter().find_map(|node| node.non_empty_js_doc());
	let path = ctx.namespace_path();

	Page {
		meta: MetaTags::new(ctx, Some(item), js_doc),
		header: render_header(ctx),
		toc: render_toc(ctx, nodes),
		title: item.to_string(),
		breadcrumbs: breadcrumbs(ctx, &path, &nodes[0].name),
		usage: ctx
			.shows_usage()
			.then(|| parse_usage(ctx.url, Some(item), is_type_only(nodes))),
		badges: badges(nodes, js_doc),
		js_doc: js_doc
			.map(|js_doc| render_js_doc(ctx, js_doc))
			.filter(|html| !html.is_empty()),
		code_blocks: render_code_block(ctx, nodes),
		doc_sections: render_doc(ctx, nodes, &path),
		listing: None,
		error: None,
	}
}

fn not_found(ctx: &RenderContext<'_>, item: &str) -> Page {
	Page {
		meta: MetaTags::new(ctx, Some(item), None),
		header: render_header(ctx),
		toc: None,
		title: item.to_string(),
		breadcrumbs: Vec::new(),
		usage: None,
		badges: Vec::new(),
		js_doc: None,
		code_blocks: Vec::new(),
		doc_sections: Vec::new(),
		listing: None,
		error: Some(NotFound {
			item: item.to_string(),
			url: ctx.url.to_string(),
		}),
	}
}

fn badges(nodes: &[&DocNode], js_doc: Option<&JsDoc>) -> Vec<Badge> {
	let mut badges = Vec::new();
	if nodes.first().is_some_and(|node| node.is_abstract()) {
		badges.push(Badge::Abstract);
	}
	if let Some(deprecated) = js_doc.and_then(Badge::deprecated) {
		badges.push(deprecated);
	}
	badges
}

/// Module root, then each namespace walked through, then the item itself.
fn breadcrumbs(ctx: &RenderContext<'_>, path: &[&str], name: &str) -> Vec<Breadcrumb> {
	let mut crumbs = vec![Breadcrumb {
		label: module_label(ctx.url),
		href: Some(ctx.module_href()),
	}];
	for depth in 1..=path.len() {
		crumbs.push(Breadcrumb {
			label: path[depth - 1].to_string(),
			href: Some(ctx.item_href(&path[..depth].join("."))),
		});
	}
	crumbs.push(Breadcrumb {
		label: name.to_string(),
		href: None,
	});
	crumbs
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;
	use crate::config::SiteConfig;
	use crate::markdown::CmarkRenderer;

	#[test]
	fn breadcrumbs_follow_the_namespace_trail() {
		let entries: Vec<DocNode> = serde_json::from_value(json!([
			{ "kind": "namespace", "name": "Outer", "namespaceDef": { "elements": [
				{ "kind": "namespace", "name": "Inner", "namespaceDef": { "elements": [
					{ "kind": "typeAlias", "name": "Id", "typeAliasDef": { "tsType": { "repr": "string" } } }
				] } }
			] } }
		]))
		.unwrap();
		let config = SiteConfig::default();
		let ctx = RenderContext::new("https://deno.land/x/a/mod.ts", &entries, &config, &CmarkRenderer);

		let page = assemble_item(&ctx, "Outer.Inner.Id");
		let labels: Vec<&str> = page.breadcrumbs.iter().map(|crumb| crumb.label.as_str()).collect();
		assert_eq!(labels, vec!["a/mod.ts", "Outer", "Inner", "Id"]);
		assert_eq!(
			page.breadcrumbs[2].href.as_deref(),
			Some("/https/deno.land/x/a/mod.ts/~/Outer.Inner")
		);
		let usage = page.usage.unwrap();
		assert!(usage.import_statement.starts_with("import type { Outer }"));
		assert_eq!(usage.local_var.as_deref(), Some("Outer.Inner"));
	}
}
