//! Routes groups of doc nodes to the per-kind renderers.
//!
//! Every render site (code blocks, doc sections, TOC) looks renderers up in one table keyed by
//! kind. Which kinds a site renders, and which kinds it merges into a single output, is
//! configured per site with [`KindSet`]s.

use bitflags::bitflags;
use tracing::debug;

use crate::model::{DocNode, DocNodeKind, classify};

use super::items::{class, enums, function, interface, namespace, type_alias, variable};
use super::state::RenderContext;

bitflags! {
	/// Set of doc node kinds.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct KindSet: u16 {
		/// `namespace`
		const NAMESPACE = 1 << 0;
		/// `class`
		const CLASS = 1 << 1;
		/// `enum`
		const ENUM = 1 << 2;
		/// `variable`
		const VARIABLE = 1 << 3;
		/// `function`
		const FUNCTION = 1 << 4;
		/// `interface`
		const INTERFACE = 1 << 5;
		/// `typeAlias`
		const TYPE_ALIAS = 1 << 6;
		/// `moduleDoc`
		const MODULE_DOC = 1 << 7;
		/// `import`
		const IMPORT = 1 << 8;
	}
}

impl KindSet {
	/// The single-kind set for `kind`.
	pub const fn of(kind: DocNodeKind) -> Self {
		match kind {
			DocNodeKind::Namespace => Self::NAMESPACE,
			DocNodeKind::Class => Self::CLASS,
			DocNodeKind::Enum => Self::ENUM,
			DocNodeKind::Variable => Self::VARIABLE,
			DocNodeKind::Function => Self::FUNCTION,
			DocNodeKind::Interface => Self::INTERFACE,
			DocNodeKind::TypeAlias => Self::TYPE_ALIAS,
			DocNodeKind::ModuleDoc => Self::MODULE_DOC,
			DocNodeKind::Import => Self::IMPORT,
		}
	}

	/// True when `kind` is in the set.
	pub fn has(self, kind: DocNodeKind) -> bool {
		self.contains(Self::of(kind))
	}
}

/// Configuration of one render site.
#[derive(Debug, Clone, Copy)]
pub struct RenderSite {
	/// Kinds the site renders; others are skipped.
	pub kinds: KindSet,
	/// Kinds whose whole group is rendered as one output instead of one per node.
	pub merged: KindSet,
}

/// Code block previews.
pub const CODE_BLOCK_SITE: RenderSite = RenderSite {
	kinds: KindSet::CLASS
		.union(KindSet::ENUM)
		.union(KindSet::INTERFACE)
		.union(KindSet::TYPE_ALIAS)
		.union(KindSet::VARIABLE)
		.union(KindSet::FUNCTION),
	merged: KindSet::FUNCTION,
};

/// Documentation sections. Variables are fully described by their code block.
pub const DOC_SITE: RenderSite = RenderSite {
	kinds: KindSet::CLASS
		.union(KindSet::ENUM)
		.union(KindSet::INTERFACE)
		.union(KindSet::TYPE_ALIAS)
		.union(KindSet::FUNCTION)
		.union(KindSet::NAMESPACE),
	merged: KindSet::FUNCTION,
};

/// Item TOC, rendered only for a single node.
pub const TOC_SITE: RenderSite = RenderSite {
	kinds: KindSet::CLASS
		.union(KindSet::ENUM)
		.union(KindSet::INTERFACE)
		.union(KindSet::NAMESPACE)
		.union(KindSet::TYPE_ALIAS),
	merged: KindSet::empty(),
};

/// Renders a code block for a group of nodes.
pub type CodeBlockRenderer = fn(&RenderContext<'_>, &[&DocNode]) -> String;
/// Renders doc sections for a group of nodes; the path is the resolved namespace trail.
pub type DocRenderer = fn(&RenderContext<'_>, &[&DocNode], &[&str]) -> String;
/// Renders the TOC of a single node.
pub type TocRenderer = fn(&RenderContext<'_>, &DocNode) -> String;

/// Renderers available for one kind.
struct KindEntry {
	kind: DocNodeKind,
	code_block: Option<CodeBlockRenderer>,
	doc: Option<DocRenderer>,
	toc: Option<TocRenderer>,
}

static TABLE: &[KindEntry] = &[
	KindEntry {
		kind: DocNodeKind::Namespace,
		code_block: None,
		doc: Some(namespace::doc_html),
		toc: Some(namespace::toc_html),
	},
	KindEntry {
		kind: DocNodeKind::Class,
		code_block: Some(class::code_block_html),
		doc: Some(class::doc_html),
		toc: Some(class::toc_html),
	},
	KindEntry {
		kind: DocNodeKind::Enum,
		code_block: Some(enums::code_block_html),
		doc: Some(enums::doc_html),
		toc: Some(enums::toc_html),
	},
	KindEntry {
		kind: DocNodeKind::Variable,
		code_block: Some(variable::code_block_html),
		doc: None,
		toc: None,
	},
	KindEntry {
		kind: DocNodeKind::Function,
		code_block: Some(function::code_block_html),
		doc: Some(function::doc_html),
		toc: None,
	},
	KindEntry {
		kind: DocNodeKind::Interface,
		code_block: Some(interface::code_block_html),
		doc: Some(interface::doc_html),
		toc: Some(interface::toc_html),
	},
	KindEntry {
		kind: DocNodeKind::TypeAlias,
		code_block: Some(type_alias::code_block_html),
		doc: Some(type_alias::doc_html),
		toc: Some(type_alias::toc_html),
	},
];

fn entry(kind: DocNodeKind) -> Option<&'static KindEntry> {
	TABLE.iter().find(|entry| entry.kind == kind)
}

/// Apply `render` to each group the site accepts, merging where configured.
fn dispatch<'a, R>(
	site: RenderSite,
	nodes: &[&'a DocNode],
	select: impl Fn(&KindEntry) -> Option<R>,
	render: impl Fn(R, &[&'a DocNode]) -> String,
) -> Vec<String>
where
	R: Copy,
{
	let collection = classify(nodes.iter().copied());
	let mut out = Vec::new();
	for (kind, group) in collection.iter() {
		if !site.kinds.has(kind) {
			debug!(kind = kind.as_str(), count = group.len(), "skipping kind at this site");
			continue;
		}
		let Some(renderer) = entry(kind).and_then(&select) else {
			continue;
		};
		if site.merged.has(kind) {
			out.push(render(renderer, group));
		} else {
			for node in group {
				out.push(render(renderer, std::slice::from_ref(node)));
			}
		}
	}
	out.retain(|html| !html.is_empty());
	out
}

/// Code blocks for `nodes`: one per node, functions merged into one block.
pub fn render_code_block(ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> Vec<String> {
	dispatch(CODE_BLOCK_SITE, nodes, |entry| entry.code_block, |render: CodeBlockRenderer, group| {
		render(ctx, group)
	})
}

/// Doc sections for `nodes`; `path` names the namespaces the nodes were resolved through.
pub fn render_doc(ctx: &RenderContext<'_>, nodes: &[&DocNode], path: &[&str]) -> Vec<String> {
	dispatch(DOC_SITE, nodes, |entry| entry.doc, |render: DocRenderer, group| {
		render(ctx, group, path)
	})
}

/// Item TOC for the target set of an item page.
///
/// A single node gets its kind's TOC. Two nodes get a TOC only through
/// [`interface_pair_toc`]. Anything else gets none.
pub fn render_toc(ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> Option<String> {
	match nodes {
		[node] => single_toc(ctx, node),
		[_, _] => interface_pair_toc(ctx, nodes),
		_ => None,
	}
}

fn single_toc(ctx: &RenderContext<'_>, node: &DocNode) -> Option<String> {
	let kind = node.kind();
	if !TOC_SITE.kinds.has(kind) {
		return None;
	}
	let render = entry(kind)?.toc?;
	Some(render(ctx, node)).filter(|html| !html.is_empty())
}

/// TOC for a pair of same-named nodes, e.g. `interface Foo` alongside `const Foo`.
///
/// Only the interface's TOC is shown; the first interface wins when both are interfaces. A pair
/// without an interface has no TOC.
pub fn interface_pair_toc(ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> Option<String> {
	let interface = nodes
		.iter()
		.find(|node| node.kind() == DocNodeKind::Interface)?;
	single_toc(ctx, interface)
}

/// True when every node only exists at the type level.
///
/// Decides whether the usage statement imports with `import type`.
pub fn is_type_only(nodes: &[&DocNode]) -> bool {
	nodes
		.iter()
		.all(|node| matches!(node.kind(), DocNodeKind::Interface | DocNodeKind::TypeAlias))
}
