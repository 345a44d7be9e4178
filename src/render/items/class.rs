use crate::model::{ClassDef, DocNode, JsDoc};

use super::super::doc;
use super::super::html::{anchor_id, code_block};
use super::super::signature;
use super::super::state::RenderContext;
use super::super::toc;
use super::{body_lines, declaration, group_by_name};

fn head(name: &str, class: &ClassDef) -> String {
	let mut head = String::new();
	if class.is_abstract {
		head.push_str("abstract ");
	}
	head.push_str(&format!("class {name}{}", signature::type_params(&class.type_params)));
	if let Some(extends) = &class.extends {
		head.push_str(&format!(" extends {extends}"));
	}
	if !class.implements.is_empty() {
		let implements: Vec<String> = class.implements.iter().map(ToString::to_string).collect();
		head.push_str(&format!(" implements {}", implements.join(", ")));
	}
	head
}

/// TypeScript declaration of a class and its members.
pub fn source(name: &str, class: &ClassDef) -> String {
	let lines = class
		.constructors
		.iter()
		.map(signature::constructor)
		.chain(class.properties.iter().map(signature::class_property))
		.chain(class.methods.iter().map(signature::class_method));
	declaration(&head(name, class), &body_lines(lines))
}

/// Code block for each class node.
pub fn code_block_html(_ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> String {
	nodes
		.iter()
		.filter_map(|node| node.as_class().map(|class| code_block(&source(&node.name, class))))
		.collect()
}

/// Constructors, properties and methods of each class node.
pub fn doc_html(ctx: &RenderContext<'_>, nodes: &[&DocNode], _path: &[&str]) -> String {
	let mut out = String::new();
	for node in nodes {
		let Some(class) = node.as_class() else {
			continue;
		};
		let constructors = class
			.constructors
			.iter()
			.enumerate()
			.map(|(index, ctor)| {
				doc::member(
					ctx,
					"ctor",
					&index.to_string(),
					&signature::constructor(ctor),
					ctor.js_doc.as_ref(),
				)
			})
			.collect();
		let properties = class
			.properties
			.iter()
			.map(|prop| {
				doc::member(
					ctx,
					"prop",
					&prop.name,
					&signature::class_property(prop),
					prop.js_doc.as_ref(),
				)
			})
			.collect();
		let methods = group_by_name(&class.methods, |method| method.name.as_str())
			.into_iter()
			.map(|(name, overloads)| {
				let signatures: Vec<String> = overloads.iter().map(|m| signature::class_method(m)).collect();
				let js_doc: Option<&JsDoc> = overloads
					.iter()
					.find_map(|m| m.js_doc.as_ref().filter(|js_doc| !js_doc.is_empty()));
				doc::member(ctx, "method", name, &signatures.join("\n"), js_doc)
			})
			.collect();
		out.push_str(&doc::item(
			"class",
			&node.name,
			vec![
				doc::section("constructors", "Constructors", constructors),
				doc::section("properties", "Properties", properties),
				doc::section("methods", "Methods", methods),
			],
		));
	}
	out
}

/// Anchors to the members documented by [`doc_html`].
pub fn toc_html(_ctx: &RenderContext<'_>, node: &DocNode) -> String {
	let Some(class) = node.as_class() else {
		return String::new();
	};
	let constructors = (0..class.constructors.len())
		.map(|index| (toc::anchor(anchor_id("ctor", &index.to_string())), "constructor".to_string()))
		.collect();
	let properties = class
		.properties
		.iter()
		.map(|prop| (toc::anchor(anchor_id("prop", &prop.name)), prop.name.clone()))
		.collect();
	let methods = group_by_name(&class.methods, |method| method.name.as_str())
		.into_iter()
		.map(|(name, _)| (toc::anchor(anchor_id("method", name)), name.to_string()))
		.collect();
	toc::nav(
		&node.name,
		vec![
			toc::section("Constructors", constructors),
			toc::section("Properties", properties),
			toc::section("Methods", methods),
		],
	)
}
