use crate::model::{DocNode, DocNodeDef, TypeAliasDef};

use super::super::doc;
use super::super::html::{anchor_id, code_block};
use super::super::signature;
use super::super::state::RenderContext;
use super::super::toc;

fn as_type_alias(node: &DocNode) -> Option<&TypeAliasDef> {
	match &node.def {
		DocNodeDef::TypeAlias { def } => Some(def),
		_ => None,
	}
}

/// `type Name<T> = ...;`
pub fn source(name: &str, def: &TypeAliasDef) -> String {
	format!(
		"type {name}{} = {};",
		signature::type_params(&def.type_params),
		def.ts_type
	)
}

/// Code block for each type alias node.
pub fn code_block_html(_ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> String {
	nodes
		.iter()
		.filter_map(|node| as_type_alias(node).map(|def| code_block(&source(&node.name, def))))
		.collect()
}

/// Type parameters and the aliased type.
pub fn doc_html(ctx: &RenderContext<'_>, nodes: &[&DocNode], _path: &[&str]) -> String {
	let mut out = String::new();
	for node in nodes {
		let Some(def) = as_type_alias(node) else {
			continue;
		};
		let type_params = def
			.type_params
			.iter()
			.map(|param| doc::member(ctx, "typeparam", &param.name, &signature::type_param(param), None))
			.collect();
		out.push_str(&doc::item(
			"typeAlias",
			&node.name,
			vec![
				doc::section("type-parameters", "Type Parameters", type_params),
				doc::section("definition", "Definition", vec![code_block(&def.ts_type.repr)]),
			],
		));
	}
	out
}

/// Anchors to the type parameters and the definition.
pub fn toc_html(_ctx: &RenderContext<'_>, node: &DocNode) -> String {
	let Some(def) = as_type_alias(node) else {
		return String::new();
	};
	let type_params = def
		.type_params
		.iter()
		.map(|param| (toc::anchor(anchor_id("typeparam", &param.name)), param.name.clone()))
		.collect();
	toc::nav(
		&node.name,
		vec![
			toc::section("Type Parameters", type_params),
			toc::section(
				"Definition",
				vec![(toc::anchor("definition".to_string()), node.name.clone())],
			),
		],
	)
}
