//! Kind-grouped listings of nodes linking to their item pages.
//!
//! Module pages and namespace doc sections list their children this way. Function overloads are
//! listed once per name.

use crate::model::{DocNode, DocNodeKind, classify};

use super::html::{escape, link, ppush};
use super::items::group_by_name;
use super::state::RenderContext;
use super::toc;

/// Kinds that never appear in a listing.
fn is_listed(kind: DocNodeKind) -> bool {
	!matches!(kind, DocNodeKind::ModuleDoc | DocNodeKind::Import)
}

/// Nodes of each listed kind, with one representative per name.
///
/// The representative is the first node of that name carrying documentation, or the first node.
fn groups<'a>(nodes: impl IntoIterator<Item = &'a DocNode>) -> Vec<(DocNodeKind, Vec<&'a DocNode>)> {
	let collection = classify(nodes);
	collection
		.iter()
		.filter(|(kind, _)| is_listed(*kind))
		.map(|(kind, nodes)| {
			let representatives = group_by_name(nodes.iter().copied(), |node| node.name.as_str())
				.into_iter()
				.filter_map(|(_, same_name)| {
					same_name
						.iter()
						.find(|node| node.non_empty_js_doc().is_some())
						.or_else(|| same_name.first())
						.copied()
				})
				.collect();
			(kind, representatives)
		})
		.collect()
}

/// Tables of the nodes grouped by kind; `prefix` is the dotted path of the enclosing namespace.
pub fn render_listing<'a>(
	ctx: &RenderContext<'_>,
	nodes: impl IntoIterator<Item = &'a DocNode>,
	prefix: &str,
) -> String {
	let mut out = String::new();
	for (kind, nodes) in groups(nodes) {
		out.push_str(&format!(
			"<section class=\"listing\" id=\"{}\">\n<h2>{}</h2>\n<table>\n",
			kind.as_str(),
			escape(kind.plural_label())
		));
		for node in nodes {
			let path = ppush(prefix, &node.name);
			let summary = node
				.non_empty_js_doc()
				.and_then(|js_doc| js_doc.summary())
				.map(|summary| ctx.render_markdown(summary))
				.unwrap_or_default();
			out.push_str(&format!(
				"<tr><td>{}</td><td>{summary}</td></tr>\n",
				link(&ctx.item_href(&path), &node.name)
			));
		}
		out.push_str("</table>\n</section>\n");
	}
	out
}

/// TOC sections linking to each listed node.
pub fn listing_toc<'a>(
	ctx: &RenderContext<'_>,
	nodes: impl IntoIterator<Item = &'a DocNode>,
	prefix: &str,
) -> Vec<String> {
	groups(nodes)
		.into_iter()
		.map(|(kind, nodes)| {
			let links = nodes
				.iter()
				.map(|node| (ctx.item_href(&ppush(prefix, &node.name)), node.name.clone()))
				.collect();
			toc::section(kind.plural_label(), links)
		})
		.collect()
}
