//! Import statement synthesis for the "Usage" panel.

use heck::ToLowerCamelCase;

use crate::registry::parse_url;

/// Namespace import name used when no package name can be derived.
pub const DEFAULT_IMPORT_SYMBOL: &str = "mod";

/// Import snippet derived from a module url and an optional item path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUsage {
	/// Binding introduced by the import.
	pub import_symbol: String,
	/// Copy-paste ready source, newline terminated.
	pub import_statement: String,
	/// Namespace path the usage symbol is destructured from.
	pub local_var: Option<String>,
	/// Member pulled off `local_var`.
	pub usage_symbol: Option<String>,
}

/// Build the import statement for `item` (a dotted path) exported by `url`.
///
/// Without an item the module is imported as a namespace named after its package. With a
/// multi-segment item the first segment is imported and the last one destructured from the
/// path in between.
pub fn parse_usage(url: &str, item: Option<&str>, is_type: bool) -> ParsedUsage {
	let item = item.filter(|item| !item.is_empty());
	let mut segments: Vec<&str> = item.map(|item| item.split('.').collect()).unwrap_or_default();

	let import_symbol = match segments.first() {
		Some(first) => first.to_string(),
		None => parse_url(url)
			.and_then(|parsed| parsed.package)
			.map(|package| package.to_lower_camel_case())
			.filter(|symbol| !symbol.is_empty())
			.unwrap_or_else(|| DEFAULT_IMPORT_SYMBOL.to_string()),
	};

	let (usage_symbol, local_var) = if segments.len() > 1 {
		let usage_symbol = segments.pop().map(str::to_string);
		(usage_symbol, Some(segments.join(".")))
	} else {
		(None, None)
	};

	let mut import_statement = if item.is_some() {
		let type_keyword = if is_type { "type " } else { "" };
		format!("import {type_keyword}{{ {import_symbol} }} from \"{url}\";\n")
	} else {
		format!("import * as {import_symbol} from \"{url}\";\n")
	};

	if let (Some(usage), Some(local)) = (&usage_symbol, &local_var) {
		import_statement.push_str(&format!("\nconst {{ {usage} }} = {local};\n"));
	}

	ParsedUsage {
		import_symbol,
		import_statement,
		local_var,
		usage_symbol,
	}
}

/// Client-side script that copies `statement` to the clipboard when `copyImport()` runs.
pub fn copy_script(statement: &str) -> String {
	let literal = serde_json::to_string(statement).unwrap_or_else(|_| "\"\"".to_string());
	// `</` inside the literal would close the script element early.
	let literal = literal.replace("</", "<\\/");
	format!(
		"<script>\nfunction copyImport() {{\n  navigator.clipboard.writeText({literal});\n}}\n</script>\n"
	)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const URL: &str = "https://deno.land/x/oak@v10.0.0/mod.ts";

	#[test]
	fn namespace_import_without_item() {
		let usage = parse_usage(URL, None, false);
		assert_eq!(usage.import_symbol, "oak");
		assert_eq!(
			usage.import_statement,
			format!("import * as oak from \"{URL}\";\n")
		);
		assert_eq!(usage.local_var, None);
		assert_eq!(usage.usage_symbol, None);

		// The type flag has no effect on namespace imports.
		assert_eq!(parse_usage(URL, None, true), usage);
	}

	#[test]
	fn namespace_import_camel_cases_package() {
		let usage = parse_usage("https://esm.sh/lodash-es@4.17.21/lodash.js", None, false);
		assert_eq!(usage.import_symbol, "lodashEs");
	}

	#[test]
	fn namespace_import_falls_back_to_default_symbol() {
		let std = parse_usage("https://deno.land/std@0.100.0/fs/mod.ts", None, false);
		assert_eq!(std.import_symbol, DEFAULT_IMPORT_SYMBOL);

		let library = parse_usage("builtin/stable", None, false);
		assert_eq!(
			library.import_statement,
			"import * as mod from \"builtin/stable\";\n"
		);
	}

	#[test]
	fn named_import_for_single_segment() {
		let usage = parse_usage(URL, Some("Foo"), false);
		assert_eq!(usage.import_symbol, "Foo");
		assert_eq!(
			usage.import_statement,
			format!("import {{ Foo }} from \"{URL}\";\n")
		);
		assert_eq!(usage.local_var, None);
		assert_eq!(usage.usage_symbol, None);
	}

	#[test]
	fn type_import_destructures_member() {
		let usage = parse_usage(URL, Some("Foo.bar"), true);
		assert_eq!(usage.import_symbol, "Foo");
		assert_eq!(usage.usage_symbol.as_deref(), Some("bar"));
		assert_eq!(usage.local_var.as_deref(), Some("Foo"));
		assert_eq!(
			usage.import_statement,
			format!("import type {{ Foo }} from \"{URL}\";\n\nconst {{ bar }} = Foo;\n")
		);
	}

	#[test]
	fn deep_path_keeps_intermediate_namespaces() {
		let usage = parse_usage(URL, Some("A.B.c"), false);
		assert_eq!(usage.import_symbol, "A");
		assert_eq!(usage.local_var.as_deref(), Some("A.B"));
		assert!(usage.import_statement.ends_with("const { c } = A.B;\n"));
	}

	#[test]
	fn copy_script_embeds_escaped_statement() {
		let script = copy_script("import { a } from \"x\";\n");
		assert!(script.contains(r#"writeText("import { a } from \"x\";\n")"#));
		assert!(!copy_script("</script>").contains("</script>\");"));
	}
}
