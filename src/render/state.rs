use crate::config::SiteConfig;
use crate::markdown::MarkdownRenderer;
use crate::model::DocNode;
use crate::registry::is_library;

use super::html::{item_href, module_href};

/// Immutable context threaded through one page render.
///
/// Namespace resolution produces narrowed copies through [`RenderContext::descend`]; nothing is
/// shared between renders, so several pages can be rendered concurrently.
#[derive(Clone)]
pub struct RenderContext<'a> {
	/// Module specifier being documented.
	pub url: &'a str,
	/// Entries visible at the current scope.
	pub entries: &'a [DocNode],
	/// Namespaces descended through to reach `entries`, outermost first.
	pub namespaces: Vec<&'a DocNode>,
	/// Site settings.
	pub config: &'a SiteConfig,
	/// JSDoc markdown renderer.
	pub markdown: &'a dyn MarkdownRenderer,
}

impl<'a> RenderContext<'a> {
	/// Create a context at module scope.
	pub fn new(
		url: &'a str,
		entries: &'a [DocNode],
		config: &'a SiteConfig,
		markdown: &'a dyn MarkdownRenderer,
	) -> Self {
		Self {
			url,
			entries,
			namespaces: Vec::new(),
			config,
			markdown,
		}
	}

	/// Context scoped to the children of `namespace`.
	pub fn descend(&self, namespace: &'a DocNode) -> Self {
		let mut namespaces = self.namespaces.clone();
		namespaces.push(namespace);
		Self {
			entries: namespace.namespace_elements().unwrap_or(&[]),
			namespaces,
			..self.clone()
		}
	}

	/// Names of the namespaces descended through.
	pub fn namespace_path(&self) -> Vec<&'a str> {
		self.namespaces
			.iter()
			.map(|namespace| namespace.name.as_str())
			.collect()
	}

	/// True when the module is a built-in library.
	pub fn is_library(&self) -> bool {
		is_library(self.url, &self.config.library_prefix)
	}

	/// True when the module is a declaration file.
	pub fn is_declaration_file(&self) -> bool {
		self.url.ends_with(".d.ts")
	}

	/// Whether the usage panel is shown for this module.
	pub fn shows_usage(&self) -> bool {
		!self.is_library() && !self.is_declaration_file()
	}

	/// Link to the module root page.
	pub fn module_href(&self) -> String {
		module_href(self.url)
	}

	/// Link to the page of a dotted item path.
	pub fn item_href(&self, item: &str) -> String {
		item_href(self.url, item)
	}

	/// Render a JSDoc markdown body.
	pub fn render_markdown(&self, markdown: &str) -> String {
		self.markdown.render_html(markdown)
	}
}
