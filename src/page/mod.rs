//! Page assembly: resolves the requested item and combines the rendered pieces.

/// Item pages.
pub mod item;
/// Module root pages.
pub mod module;
/// Dotted item path resolution through namespaces.
pub mod resolve;

use tracing::debug;

use crate::config::SiteConfig;
use crate::markdown::MarkdownRenderer;
use crate::model::{DocNode, filter_private};
use crate::render::html::{escape, link};
use crate::render::{Badge, MetaTags, RenderContext, usage_panel};
use crate::usage::ParsedUsage;

pub use self::item::assemble_item;
pub use self::module::assemble_module;
pub use self::resolve::{Resolution, resolve};

const STYLE: &str = "body{margin:0;display:flex;font-family:system-ui,sans-serif}\
.sidebar{width:18rem;padding:1rem;border-right:1px solid #ddd}\
main{flex:1;padding:1rem 2rem;min-width:0}\
.code-block{background:#f6f8fa;padding:.75rem;overflow-x:auto}\
.badge{font-size:.75rem;padding:0 .4rem;margin-left:.5rem;border-radius:.25rem;background:#eee}\
.badge.deprecated{background:#fde2e2}\
.error{border:1px solid #e5484d;padding:1rem}";

/// One step of the title breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
	/// Text shown.
	pub label: String,
	/// Target page; the last crumb has none.
	pub href: Option<String>,
}

/// Inline error shown in place of an item's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
	/// Requested item path.
	pub item: String,
	/// Module url it was looked up in.
	pub url: String,
}

impl NotFound {
	/// Render the error panel.
	pub fn to_html(&self) -> String {
		format!(
			"<div class=\"error\">\n<h1>Entry not found</h1>\n<p>The item <code>{}</code> could not be found in <code>{}</code>.</p>\n</div>\n",
			escape(&self.item),
			escape(&self.url)
		)
	}
}

/// A fully rendered documentation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
	/// Head metadata.
	pub meta: MetaTags,
	/// Sidebar header.
	pub header: String,
	/// Sidebar table of contents.
	pub toc: Option<String>,
	/// Page title.
	pub title: String,
	/// Trail from the module root to the item.
	pub breadcrumbs: Vec<Breadcrumb>,
	/// Import snippet, absent for libraries and declaration files.
	pub usage: Option<ParsedUsage>,
	/// Badges shown next to the title.
	pub badges: Vec<Badge>,
	/// Rendered doc comment of the item or module.
	pub js_doc: Option<String>,
	/// Declaration previews.
	pub code_blocks: Vec<String>,
	/// Documentation sections.
	pub doc_sections: Vec<String>,
	/// Kind-grouped listing of the module's nodes.
	pub listing: Option<String>,
	/// Set when the requested item does not exist.
	pub error: Option<NotFound>,
}

impl Page {
	/// True for the "Entry not found" page.
	pub fn is_error(&self) -> bool {
		self.error.is_some()
	}

	fn breadcrumbs_html(&self) -> String {
		if self.breadcrumbs.is_empty() {
			return String::new();
		}
		let crumbs: Vec<String> = self
			.breadcrumbs
			.iter()
			.map(|crumb| match &crumb.href {
				Some(href) => link(href, &crumb.label),
				None => format!("<span>{}</span>", escape(&crumb.label)),
			})
			.collect();
		format!("<nav class=\"breadcrumbs\">{}</nav>\n", crumbs.join(" / "))
	}

	fn main_html(&self) -> String {
		if let Some(error) = &self.error {
			return error.to_html();
		}
		let mut out = String::from("<div class=\"title\">\n");
		out.push_str(&self.breadcrumbs_html());
		out.push_str(&format!("<h1>{}", escape(&self.title)));
		for badge in &self.badges {
			out.push_str(&badge.to_html());
		}
		out.push_str("</h1>\n</div>\n");
		if let Some(usage) = &self.usage {
			out.push_str(&usage_panel(usage));
		}
		if let Some(js_doc) = &self.js_doc {
			out.push_str(js_doc);
		}
		for block in &self.code_blocks {
			out.push_str(block);
		}
		for section in &self.doc_sections {
			out.push_str(section);
		}
		if let Some(listing) = &self.listing {
			out.push_str(listing);
		}
		out
	}

	/// Serialize the page as a standalone HTML document.
	pub fn to_html(&self) -> String {
		format!(
			"<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n{}<style>{STYLE}</style>\n</head>\n<body>\n<aside class=\"sidebar\">\n{}{}</aside>\n<main>\n{}</main>\n</body>\n</html>\n",
			self.meta.to_html(),
			self.header,
			self.toc.as_deref().unwrap_or_default(),
			self.main_html()
		)
	}
}

/// Assemble the module root page, or the page of `item` when one is given.
///
/// An empty item is treated as absent.
pub fn assemble_page(ctx: &RenderContext<'_>, item: Option<&str>) -> Page {
	match item.filter(|item| !item.is_empty()) {
		Some(item) => {
			debug!(url = ctx.url, item, "assembling item page");
			assemble_item(ctx, item)
		}
		None => {
			debug!(url = ctx.url, "assembling module page");
			assemble_module(ctx)
		}
	}
}

/// Render a page from raw entries, dropping private nodes unless the config includes them.
pub fn render_page(
	entries: &[DocNode],
	url: &str,
	item: Option<&str>,
	config: &SiteConfig,
	markdown: &dyn MarkdownRenderer,
) -> Page {
	if config.include_private {
		let ctx = RenderContext::new(url, entries, config, markdown);
		return assemble_page(&ctx, item);
	}
	let visible = filter_private(entries);
	debug!(
		removed = entries.len() - visible.len(),
		"filtered private top-level entries"
	);
	let ctx = RenderContext::new(url, &visible, config, markdown);
	assemble_page(&ctx, item)
}
