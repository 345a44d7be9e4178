use crate::model::{DocNode, InterfaceDef, JsDoc};

use super::super::doc;
use super::super::html::{anchor_id, code_block};
use super::super::signature;
use super::super::state::RenderContext;
use super::super::toc;
use super::{body_lines, declaration, group_by_name};

/// TypeScript declaration of an interface.
pub fn source(name: &str, def: &InterfaceDef) -> String {
	let mut head = format!("interface {name}{}", signature::type_params(&def.type_params));
	if !def.extends.is_empty() {
		let extends: Vec<String> = def.extends.iter().map(ToString::to_string).collect();
		head.push_str(&format!(" extends {}", extends.join(", ")));
	}
	let lines = def
		.properties
		.iter()
		.map(signature::interface_property)
		.chain(def.methods.iter().map(signature::interface_method));
	declaration(&head, &body_lines(lines))
}

/// Code block for each interface node.
pub fn code_block_html(_ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> String {
	nodes
		.iter()
		.filter_map(|node| node.as_interface().map(|def| code_block(&source(&node.name, def))))
		.collect()
}

/// Properties and methods of each interface node.
pub fn doc_html(ctx: &RenderContext<'_>, nodes: &[&DocNode], _path: &[&str]) -> String {
	let mut out = String::new();
	for node in nodes {
		let Some(def) = node.as_interface() else {
			continue;
		};
		let properties = def
			.properties
			.iter()
			.map(|prop| {
				doc::member(
					ctx,
					"prop",
					&prop.name,
					&signature::interface_property(prop),
					prop.js_doc.as_ref(),
				)
			})
			.collect();
		let methods = group_by_name(&def.methods, |method| method.name.as_str())
			.into_iter()
			.map(|(name, overloads)| {
				let signatures: Vec<String> = overloads.iter().map(|m| signature::interface_method(m)).collect();
				let js_doc: Option<&JsDoc> = overloads
					.iter()
					.find_map(|m| m.js_doc.as_ref().filter(|js_doc| !js_doc.is_empty()));
				doc::member(ctx, "method", name, &signatures.join("\n"), js_doc)
			})
			.collect();
		out.push_str(&doc::item(
			"interface",
			&node.name,
			vec![
				doc::section("properties", "Properties", properties),
				doc::section("methods", "Methods", methods),
			],
		));
	}
	out
}

/// Anchors to properties and methods.
pub fn toc_html(_ctx: &RenderContext<'_>, node: &DocNode) -> String {
	let Some(def) = node.as_interface() else {
		return String::new();
	};
	let properties = def
		.properties
		.iter()
		.map(|prop| (toc::anchor(anchor_id("prop", &prop.name)), prop.name.clone()))
		.collect();
	let methods = group_by_name(&def.methods, |method| method.name.as_str())
		.into_iter()
		.map(|(name, _)| (toc::anchor(anchor_id("method", name)), name.to_string()))
		.collect();
	toc::nav(
		&node.name,
		vec![
			toc::section("Properties", properties),
			toc::section("Methods", methods),
		],
	)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::model::{InterfaceMethodDef, InterfacePropertyDef, TsTypeDef};

	#[test]
	fn renders_declaration() {
		let def = InterfaceDef {
			extends: vec![TsTypeDef::new("Reader"), TsTypeDef::new("Closer")],
			properties: vec![InterfacePropertyDef {
				name: "rid".into(),
				ts_type: Some(TsTypeDef::new("number")),
				readonly: true,
				..Default::default()
			}],
			methods: vec![InterfaceMethodDef {
				name: "close".into(),
				return_type: Some(TsTypeDef::new("void")),
				..Default::default()
			}],
			..Default::default()
		};
		assert_eq!(
			source("Conn", &def),
			"interface Conn extends Reader, Closer {\n  readonly rid: number;\n  close(): void;\n}"
		);
	}
}
