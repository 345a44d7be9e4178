use crate::model::{DocNode, DocNodeDef, EnumDef};

use super::super::doc;
use super::super::html::{anchor_id, code_block};
use super::super::state::RenderContext;
use super::super::toc;
use super::declaration;

fn member_source(name: &str, init: Option<&str>) -> String {
	match init {
		Some(init) => format!("{name} = {init}"),
		None => name.to_string(),
	}
}

fn as_enum(node: &DocNode) -> Option<&EnumDef> {
	match &node.def {
		DocNodeDef::Enum { def } => Some(def),
		_ => None,
	}
}

/// TypeScript declaration of an enum.
pub fn source(name: &str, def: &EnumDef) -> String {
	let body: String = def
		.members
		.iter()
		.map(|member| {
			format!(
				"  {},\n",
				member_source(&member.name, member.init.as_ref().map(|init| init.repr.as_str()))
			)
		})
		.collect();
	declaration(&format!("enum {name}"), &body)
}

/// Code block for each enum node.
pub fn code_block_html(_ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> String {
	nodes
		.iter()
		.filter_map(|node| as_enum(node).map(|def| code_block(&source(&node.name, def))))
		.collect()
}

/// Member list of each enum node.
pub fn doc_html(ctx: &RenderContext<'_>, nodes: &[&DocNode], _path: &[&str]) -> String {
	let mut out = String::new();
	for node in nodes {
		let Some(def) = as_enum(node) else {
			continue;
		};
		let members = def
			.members
			.iter()
			.map(|member| {
				let source = member_source(&member.name, member.init.as_ref().map(|init| init.repr.as_str()));
				doc::member(ctx, "member", &member.name, &source, member.js_doc.as_ref())
			})
			.collect();
		out.push_str(&doc::item(
			"enum",
			&node.name,
			vec![doc::section("members", "Members", members)],
		));
	}
	out
}

/// Anchors to each member.
pub fn toc_html(_ctx: &RenderContext<'_>, node: &DocNode) -> String {
	let Some(def) = as_enum(node) else {
		return String::new();
	};
	let members = def
		.members
		.iter()
		.map(|member| (toc::anchor(anchor_id("member", &member.name)), member.name.clone()))
		.collect();
	toc::nav(&node.name, vec![toc::section("Members", members)])
}
