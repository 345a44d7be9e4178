//! Sidebar header describing the documented module.

use tracing::warn;

use crate::registry::{ParsedUrl, parse_url};

use super::html::{escape, link};
use super::state::RenderContext;

/// Short human label for a module url, e.g. `oak@v10.1.0/mod.ts`.
///
/// Urls that are not registry urls are labelled with themselves.
pub fn module_label(url: &str) -> String {
	let Some(parsed) = parse_url(url) else {
		return url.to_string();
	};
	let mut label = match (parsed.org.as_deref(), parsed.display_package()) {
		(Some(org), Some(package)) => format!("{org}/{package}"),
		(None, Some(package)) => package.to_string(),
		_ => parsed.registry.clone(),
	};
	if let Some(version) = &parsed.version {
		label.push_str(&format!("@{version}"));
	}
	if let Some(module) = &parsed.module {
		label.push_str(&format!("/{}", module.trim_start_matches('/')));
	}
	label
}

/// Header for the sidebar: registry, package, version and module, linking back to the module root.
pub fn render_header(ctx: &RenderContext<'_>) -> String {
	if ctx.is_library() {
		return library_header(ctx);
	}
	match parse_url(ctx.url) {
		Some(parsed) => registry_header(ctx, &parsed),
		None => {
			warn!(url = ctx.url, "module url is not a registry url, showing it as a library");
			library_header(ctx)
		}
	}
}

fn library_header(ctx: &RenderContext<'_>) -> String {
	format!(
		"<header class=\"sidebar-header library\">\n<h1>{}</h1>\n</header>\n",
		link(&ctx.module_href(), ctx.url)
	)
}

fn registry_header(ctx: &RenderContext<'_>, parsed: &ParsedUrl) -> String {
	let mut out = String::from("<header class=\"sidebar-header\">\n");
	out.push_str(&format!(
		"<div class=\"registry\">{}</div>\n",
		escape(&parsed.registry)
	));
	if let Some(package) = parsed.display_package() {
		let package = match &parsed.org {
			Some(org) => format!("{org}/{package}"),
			None => package.to_string(),
		};
		out.push_str(&format!("<h1 class=\"package\">{}</h1>\n", escape(&package)));
	}
	if let Some(version) = &parsed.version {
		out.push_str(&format!("<div class=\"version\">{}</div>\n", escape(version)));
	}
	let module = parsed.module.as_deref().unwrap_or("/");
	out.push_str(&format!(
		"<div class=\"module\">{}</div>\n</header>\n",
		link(&ctx.module_href(), module)
	));
	out
}
