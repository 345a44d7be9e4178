use std::collections::BTreeMap;

use super::{DocNode, DocNodeKind};

/// Nodes grouped by kind, preserving source order inside each group.
///
/// Every input node lands in exactly one group.
#[derive(Debug, Clone, Default)]
pub struct DocNodeCollection<'a> {
	groups: BTreeMap<DocNodeKind, Vec<&'a DocNode>>,
}

impl<'a> DocNodeCollection<'a> {
	/// Nodes of `kind`, empty when none were present.
	pub fn get(&self, kind: DocNodeKind) -> &[&'a DocNode] {
		self.groups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Non-empty groups in section order.
	pub fn iter(&self) -> impl Iterator<Item = (DocNodeKind, &[&'a DocNode])> + '_ {
		self.groups
			.iter()
			.map(|(kind, nodes)| (*kind, nodes.as_slice()))
	}

	/// Total number of grouped nodes.
	pub fn len(&self) -> usize {
		self.groups.values().map(Vec::len).sum()
	}

	/// True when no node was grouped.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// The first module documentation node, if any.
	pub fn module_doc(&self) -> Option<&'a DocNode> {
		self.get(DocNodeKind::ModuleDoc).first().copied()
	}
}

/// Group a flat node sequence by kind.
pub fn classify<'a, I>(nodes: I) -> DocNodeCollection<'a>
where
	I: IntoIterator<Item = &'a DocNode>,
{
	let mut groups: BTreeMap<DocNodeKind, Vec<&'a DocNode>> = BTreeMap::new();
	for node in nodes {
		groups.entry(node.kind()).or_default().push(node);
	}
	DocNodeCollection { groups }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{DocNodeDef, FunctionDef, InterfaceDef, VariableDef};

	fn function(name: &str) -> DocNode {
		DocNode::new(
			name,
			DocNodeDef::Function {
				def: FunctionDef::default(),
			},
		)
	}

	#[test]
	fn partitions_every_node() {
		let nodes = vec![
			function("a"),
			DocNode::new(
				"B",
				DocNodeDef::Interface {
					def: InterfaceDef::default(),
				},
			),
			function("c"),
			DocNode::new(
				"d",
				DocNodeDef::Variable {
					def: VariableDef::default(),
				},
			),
			DocNode::new("", DocNodeDef::ModuleDoc),
		];

		let collection = classify(&nodes);
		assert_eq!(collection.len(), nodes.len());

		let mut flattened: Vec<&str> = collection
			.iter()
			.flat_map(|(_, group)| group.iter().map(|node| node.name.as_str()))
			.collect();
		flattened.sort_unstable();
		assert_eq!(flattened, vec!["", "B", "a", "c", "d"]);
	}

	#[test]
	fn keeps_source_order_within_kind() {
		let nodes = vec![function("z"), function("a"), function("m")];
		let collection = classify(&nodes);
		let names: Vec<&str> = collection
			.get(DocNodeKind::Function)
			.iter()
			.map(|node| node.name.as_str())
			.collect();
		assert_eq!(names, vec!["z", "a", "m"]);
		assert!(collection.get(DocNodeKind::Class).is_empty());
	}

	#[test]
	fn empty_input_yields_empty_collection() {
		let nodes: Vec<DocNode> = Vec::new();
		let collection = classify(&nodes);
		assert!(collection.is_empty());
		assert_eq!(collection.len(), 0);
		assert!(collection.module_doc().is_none());
	}
}
