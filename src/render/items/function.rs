use crate::model::{DocNode, FunctionDef};

use super::super::doc;
use super::super::html::{code_block, escape};
use super::super::signature;
use super::super::state::RenderContext;

fn overloads<'a>(nodes: &'a [&'a DocNode]) -> impl Iterator<Item = (&'a DocNode, &'a FunctionDef)> + 'a {
	nodes
		.iter()
		.filter_map(|node| node.as_function().map(|def| (*node, def)))
}

/// One declaration per overload, all in a single block.
pub fn code_block_html(_ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> String {
	let lines: Vec<String> = overloads(nodes)
		.map(|(node, def)| format!("{};", signature::function(&node.name, def)))
		.collect();
	if lines.is_empty() {
		return String::new();
	}
	code_block(&lines.join("\n"))
}

fn parameters(def: &FunctionDef) -> String {
	if def.params.is_empty() && def.return_type.is_none() {
		return String::new();
	}
	let mut out = String::from("<ul class=\"params\">\n");
	for param in &def.params {
		out.push_str(&format!("<li><code>{}</code></li>\n", escape(&signature::param(param))));
	}
	if let Some(return_type) = &def.return_type {
		out.push_str(&format!(
			"<li class=\"return\">returns <code>{}</code></li>\n",
			escape(&return_type.repr)
		));
	}
	out.push_str("</ul>\n");
	out
}

/// Every overload with its own doc comment, parameters and return type.
pub fn doc_html(ctx: &RenderContext<'_>, nodes: &[&DocNode], _path: &[&str]) -> String {
	let entries: Vec<String> = overloads(nodes)
		.enumerate()
		.map(|(index, (node, def))| {
			doc::member_with(
				ctx,
				"overload",
				&index.to_string(),
				&signature::function(&node.name, def),
				node.non_empty_js_doc(),
				&parameters(def),
			)
		})
		.collect();
	let Some(first) = nodes.first() else {
		return String::new();
	};
	doc::item(
		"function",
		&first.name,
		vec![doc::section("overloads", "Overloads", entries)],
	)
}
