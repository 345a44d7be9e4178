//! Shared fixtures for integration tests.
#![allow(dead_code)]

use regdoc::{CmarkRenderer, DocNode, Page, SiteConfig, render_page};
use serde_json::{Value, json};

/// Registry module url used by most fixtures.
pub const MODULE_URL: &str = "https://deno.land/x/oak@v10.0.0/mod.ts";

/// Decode a JSON array of doc nodes.
pub fn nodes(value: Value) -> Vec<DocNode> {
	serde_json::from_value(value).expect("fixture nodes decode")
}

/// Render `item` of `url` with the default site config.
pub fn render(entries: &[DocNode], url: &str, item: Option<&str>) -> Page {
	render_with(entries, url, item, &SiteConfig::default())
}

/// Render with an explicit config.
pub fn render_with(entries: &[DocNode], url: &str, item: Option<&str>, config: &SiteConfig) -> Page {
	render_page(entries, url, item, config, &CmarkRenderer)
}

/// A small module: docs, a class, an interface/variable pair and function overloads.
pub fn sample_module() -> Vec<DocNode> {
	nodes(json!([
		{ "kind": "moduleDoc", "name": "", "jsDoc": { "doc": "A middleware framework for HTTP servers." } },
		{
			"kind": "class",
			"name": "Application",
			"jsDoc": { "doc": "The main application." },
			"classDef": {
				"isAbstract": false,
				"constructors": [{ "params": [{ "name": "options", "optional": true, "tsType": { "repr": "ApplicationOptions" } }] }],
				"properties": [
					{ "name": "state", "tsType": { "repr": "State" } },
					{ "name": "secret", "tsType": { "repr": "string" }, "accessibility": "private" }
				],
				"methods": [
					{ "name": "listen", "functionDef": { "isAsync": true, "returnType": { "repr": "Promise<void>" } } },
					{ "name": "use", "functionDef": { "params": [{ "name": "middleware", "tsType": { "repr": "Middleware" } }], "returnType": { "repr": "this" } } }
				]
			}
		},
		{
			"kind": "interface",
			"name": "Context",
			"interfaceDef": {
				"properties": [{ "name": "request", "tsType": { "repr": "Request" }, "readonly": true }],
				"methods": [{ "name": "assert", "params": [{ "name": "condition", "tsType": { "repr": "unknown" } }] }]
			}
		},
		{ "kind": "variable", "name": "Context", "variableDef": { "kind": "const", "tsType": { "repr": "ContextConstructor" } } },
		{ "kind": "function", "name": "compose", "jsDoc": { "doc": "Compose middleware." }, "functionDef": { "params": [{ "name": "stack", "tsType": { "repr": "Middleware[]" } }] } },
		{ "kind": "function", "name": "compose", "functionDef": {} }
	]))
}

/// Nested namespaces `Http.Status` holding an enum, plus a top-level `Item` function.
pub fn namespaced_module() -> Vec<DocNode> {
	nodes(json!([
		{
			"kind": "namespace",
			"name": "Http",
			"namespaceDef": { "elements": [
				{
					"kind": "namespace",
					"name": "Status",
					"namespaceDef": { "elements": [
						{ "kind": "enum", "name": "Code", "enumDef": { "members": [
							{ "name": "Ok", "init": { "repr": "200" } },
							{ "name": "NotFound", "init": { "repr": "404" } }
						] } }
					] }
				},
				{ "kind": "class", "name": "Item", "classDef": {} }
			] }
		},
		{ "kind": "function", "name": "Item", "functionDef": {} }
	]))
}
