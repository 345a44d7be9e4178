//! Sidebar tables of contents.

use super::html::{escape, link};

/// A titled list of links. Empty entries produce no output.
pub fn section(title: &str, entries: Vec<(String, String)>) -> String {
	if entries.is_empty() {
		return String::new();
	}
	let mut out = format!("<h3>{}</h3>\n<ul>\n", escape(title));
	for (href, label) in entries {
		out.push_str(&format!("<li>{}</li>\n", link(&href, &label)));
	}
	out.push_str("</ul>\n");
	out
}

/// In-page anchor target.
pub fn anchor(id: String) -> String {
	format!("#{id}")
}

/// Wrap TOC sections in the navigation element, labelled by `title`.
pub fn nav(title: &str, sections: Vec<String>) -> String {
	format!(
		"<nav class=\"toc\">\n<h2>{}</h2>\n{}</nav>\n",
		escape(title),
		sections.concat()
	)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn renders_links() {
		let html = section("Methods", vec![(anchor("method_run".into()), "run".into())]);
		assert_eq!(html, "<h3>Methods</h3>\n<ul>\n<li><a href=\"#method_run\">run</a></li>\n</ul>\n");
		assert_eq!(section("Methods", Vec::new()), "");
	}
}
