//! Usage synthesis through the public API, against parsed registry urls.
mod utils;

use pretty_assertions::assert_eq;
use regdoc::render::render_usage;
use regdoc::{classify, parse_url, parse_usage};
use utils::*;

#[test]
fn namespace_import_without_item() {
	for url in [MODULE_URL, "https://example.com/lib.ts", "builtin/stable"] {
		let usage = parse_usage(url, None, false);
		assert_eq!(
			usage.import_statement,
			format!("import * as {} from \"{url}\";\n", usage.import_symbol)
		);
		assert_eq!(usage.local_var, None);
		assert_eq!(usage.usage_symbol, None);
	}
}

#[test]
fn import_symbol_follows_the_registry_package() {
	assert_eq!(parse_usage(MODULE_URL, None, false).import_symbol, "oak");
	assert_eq!(
		parse_usage("https://deno.land/x/std_extras@1.0.0/mod.ts", None, false).import_symbol,
		"stdExtras"
	);
	assert_eq!(
		parse_usage("https://deno.land/std@0.140.0/http/server.ts", None, false).import_symbol,
		"mod"
	);
	assert_eq!(
		parse_usage("https://deno.land/x/café@1.0/mod.ts", None, false).import_symbol,
		"café"
	);
	assert_eq!(
		parse_url("https://unpkg.com/@scope/left-pad@1.3.0/index.js")
			.and_then(|parsed| parsed.package),
		Some("left-pad".to_string())
	);
	assert_eq!(
		parse_usage("https://unpkg.com/@scope/left-pad@1.3.0/index.js", None, false).import_symbol,
		"leftPad"
	);
}

#[test]
fn dotted_items_destructure_the_last_segment() {
	let usage = parse_usage(MODULE_URL, Some("Foo.bar"), true);
	assert_eq!(usage.import_symbol, "Foo");
	assert_eq!(usage.usage_symbol.as_deref(), Some("bar"));
	assert_eq!(usage.local_var.as_deref(), Some("Foo"));
	assert_eq!(
		usage.import_statement,
		format!("import type {{ Foo }} from \"{MODULE_URL}\";\n\nconst {{ bar }} = Foo;\n")
	);

	let single = parse_usage(MODULE_URL, Some("Foo"), false);
	assert_eq!(single.import_statement, format!("import {{ Foo }} from \"{MODULE_URL}\";\n"));
	assert_eq!(single.usage_symbol, None);
}

#[test]
fn usage_panel_wraps_the_statement() {
	let html = render_usage(MODULE_URL, Some("Application"), false);
	assert!(html.contains("<h2>Usage</h2>"));
	assert!(html.contains("import { Application } from &quot;"));
	assert!(html.contains("function copyImport()"));
}

#[test]
fn classify_partitions_the_sample_module() {
	let entries = sample_module();
	let collection = classify(&entries);
	let total: usize = collection.iter().map(|(_, nodes)| nodes.len()).sum();
	assert_eq!(total, entries.len());
	assert_eq!(collection.len(), entries.len());
	assert!(collection.module_doc().is_some());
}
