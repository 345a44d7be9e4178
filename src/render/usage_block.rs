//! The "Usage" panel with its copy button.

use crate::usage::{ParsedUsage, copy_script, parse_usage};

use super::html::code_block;

/// Usage panel for `item` of `url`.
pub fn render_usage(url: &str, item: Option<&str>, is_type: bool) -> String {
	usage_panel(&parse_usage(url, item, is_type))
}

/// Usage panel for an already synthesized statement.
pub fn usage_panel(usage: &ParsedUsage) -> String {
	format!(
		"<section class=\"usage\">\n<h2>Usage</h2>\n{}<button type=\"button\" class=\"copy\" onclick=\"copyImport()\">Copy</button>\n{}</section>\n",
		code_block(&usage.import_statement),
		copy_script(&usage.import_statement)
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn panel_embeds_statement_and_script() {
		let html = render_usage("https://deno.land/x/oak/mod.ts", Some("Router"), false);
		assert!(html.contains("import { Router } from &quot;https://deno.land/x/oak/mod.ts&quot;;"));
		assert!(html.contains("navigator.clipboard.writeText(\"import { Router } from \\\"https://deno.land/x/oak/mod.ts\\\";\\n\")"));
		assert!(html.contains("onclick=\"copyImport()\""));
	}
}
