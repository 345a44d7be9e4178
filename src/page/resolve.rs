use tracing::debug;

use crate::model::{DocNode, DocNodeKind};
use crate::render::RenderContext;

/// Outcome of resolving a dotted item path.
pub struct Resolution<'a> {
	/// Context narrowed to the deepest namespace reached.
	pub ctx: RenderContext<'a>,
	/// Nodes named like the last segment in the reached scope, imports excluded.
	pub nodes: Vec<&'a DocNode>,
	/// False when a namespace segment was missing and the walk stopped early.
	pub complete: bool,
}

/// Split `item` into namespace segments and a target name, then walk the namespaces.
///
/// A missing namespace segment stops the walk without failing: the target is then looked up in
/// the deepest scope reached.
pub fn resolve<'a>(ctx: &RenderContext<'a>, item: &str) -> Resolution<'a> {
	let mut segments: Vec<&str> = item.split('.').collect();
	let name = segments.pop().unwrap_or_default();

	let mut current = ctx.clone();
	let mut complete = true;
	for segment in segments {
		let entries: &'a [DocNode] = current.entries;
		let namespace = entries
			.iter()
			.find(|node| node.name == segment && node.kind() == DocNodeKind::Namespace);
		match namespace {
			Some(namespace) => current = current.descend(namespace),
			None => {
				debug!(item, segment, "namespace not found, resolving in the enclosing scope");
				complete = false;
				break;
			}
		}
	}

	let entries: &'a [DocNode] = current.entries;
	let nodes: Vec<&'a DocNode> = entries
		.iter()
		.filter(|node| node.name == name && node.kind() != DocNodeKind::Import)
		.collect();
	debug!(item, found = nodes.len(), depth = current.namespaces.len(), "resolved item");
	Resolution {
		ctx: current,
		nodes,
		complete,
	}
}
