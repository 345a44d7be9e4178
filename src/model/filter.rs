use super::{Accessibility, DeclarationKind, DocNode, DocNodeDef};

/// Drop module-private nodes and `private` class members, descending into namespaces.
pub fn filter_private(entries: &[DocNode]) -> Vec<DocNode> {
	entries
		.iter()
		.filter(|node| node.declaration_kind != DeclarationKind::Private)
		.map(strip_private_members)
		.collect()
}

fn strip_private_members(node: &DocNode) -> DocNode {
	let mut node = node.clone();
	match &mut node.def {
		DocNodeDef::Namespace { def } => {
			def.elements = filter_private(&def.elements);
		}
		DocNodeDef::Class { def } => {
			let is_private = |access: &Option<Accessibility>| *access == Some(Accessibility::Private);
			def.constructors
				.retain(|ctor| !is_private(&ctor.accessibility));
			def.properties.retain(|prop| !is_private(&prop.accessibility));
			def.methods.retain(|method| !is_private(&method.accessibility));
		}
		_ => {}
	}
	node
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::model::VariableDef;

	#[test]
	fn removes_private_nodes_recursively() {
		let entries: Vec<DocNode> = serde_json::from_value(json!([
			{ "kind": "variable", "name": "hidden", "declarationKind": "private", "variableDef": {} },
			{
				"kind": "namespace",
				"name": "Ns",
				"namespaceDef": {
					"elements": [
						{ "kind": "variable", "name": "inner", "declarationKind": "private", "variableDef": {} },
						{ "kind": "variable", "name": "kept", "variableDef": {} }
					]
				}
			}
		]))
		.unwrap();

		let filtered = filter_private(&entries);
		assert_eq!(filtered.len(), 1);
		let elements = filtered[0].namespace_elements().unwrap();
		assert_eq!(elements.len(), 1);
		assert_eq!(elements[0].name, "kept");
	}

	#[test]
	fn strips_private_class_members() {
		let entries: Vec<DocNode> = serde_json::from_value(json!([{
			"kind": "class",
			"name": "Widget",
			"classDef": {
				"properties": [
					{ "name": "secret", "accessibility": "private" },
					{ "name": "label", "accessibility": "public" },
					{ "name": "size" }
				],
				"methods": [{ "name": "draw", "accessibility": "private", "functionDef": {} }]
			}
		}]))
		.unwrap();

		let filtered = filter_private(&entries);
		let class = filtered[0].as_class().unwrap();
		let names: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
		assert_eq!(names, vec!["label", "size"]);
		assert!(class.methods.is_empty());
	}

	#[test]
	fn declared_and_exported_nodes_survive() {
		let variable = || DocNodeDef::Variable { def: VariableDef::default() };
		let entries = vec![
			DocNode::new("exported", variable()),
			DocNode::new("ambient", variable()).with_declaration_kind(DeclarationKind::Declare),
			DocNode::new("local", variable()).with_declaration_kind(DeclarationKind::Private),
		];

		let names: Vec<String> = filter_private(&entries).into_iter().map(|node| node.name).collect();
		assert_eq!(names, vec!["exported", "ambient"]);
	}
}
