//! Registry specifier parsing.
//!
//! Turns a module URL into the registry/org/package/version/module fields shown in the page
//! header. Anything that is not an `http(s)` URL is treated as a library reference and yields
//! `None`.

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Registry label of the standard library.
pub const STD_REGISTRY: &str = "deno.land/std";

/// Registry label shared by npm CDNs.
pub const NPM_REGISTRY: &str = "npm";

static NAME_VERSION: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^(?P<name>[^@]+)(?:@(?P<version>[^@]+))?$").expect("name@version pattern")
});

/// Structured view of a registry module specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
	/// Registry the module is published on.
	pub registry: String,
	/// Owning organization or npm scope.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub org: Option<String>,
	/// Package name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub package: Option<String>,
	/// Version or git ref.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub version: Option<String>,
	/// Module path inside the package.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub module: Option<String>,
}

impl ParsedUrl {
	fn new(registry: impl Into<String>) -> Self {
		Self {
			registry: registry.into(),
			org: None,
			package: None,
			version: None,
			module: None,
		}
	}

	/// True for the standard library registry.
	pub fn is_std(&self) -> bool {
		self.registry == STD_REGISTRY
	}

	/// Package name for display; the standard library shows as `std`.
	pub fn display_package(&self) -> Option<&str> {
		match self.package.as_deref() {
			Some(package) => Some(package),
			None if self.is_std() => Some("std"),
			None => None,
		}
	}
}

/// True when `url` names a built-in library rather than a registry module.
pub fn is_library(url: &str, library_prefix: &str) -> bool {
	!library_prefix.is_empty() && url.starts_with(library_prefix)
}

/// Parse a module specifier. Returns `None` for anything that is not an `http(s)` URL.
pub fn parse_url(url: &str) -> Option<ParsedUrl> {
	let parsed = Url::parse(url).ok()?;
	if !matches!(parsed.scheme(), "http" | "https") {
		return None;
	}
	let host = parsed.host_str()?;
	// Path segments come back percent-encoded; fields are reported decoded.
	let decoded: Vec<String> = parsed
		.path_segments()
		.map(|segments| {
			segments
				.filter(|s| !s.is_empty())
				.map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
				.collect()
		})
		.unwrap_or_default();
	let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

	let result = match host {
		"deno.land" => parse_deno_land(&segments),
		"x.nest.land" => parse_name_version_first("nest.land", &segments),
		"raw.githubusercontent.com" => match segments.as_slice() {
			[org, package, version, rest @ ..] => Some(with_fields(
				"github.com",
				Some(*org),
				package,
				Some(version.to_string()),
				rest,
			)),
			_ => None,
		},
		"github.com" => match segments.as_slice() {
			[org, package, "raw" | "blob", version, rest @ ..] => Some(with_fields(
				"github.com",
				Some(*org),
				package,
				Some(version.to_string()),
				rest,
			)),
			_ => None,
		},
		"gitlab.com" => match segments.as_slice() {
			[org, package, "-", "raw", version, rest @ ..] => Some(with_fields(
				"gitlab.com",
				Some(*org),
				package,
				Some(version.to_string()),
				rest,
			)),
			_ => None,
		},
		"denopkg.com" => match segments.as_slice() {
			[org, package, rest @ ..] => Some(org_package_version("github.com", org, package, rest)),
			_ => None,
		},
		"cdn.jsdelivr.net" => match segments.as_slice() {
			["npm", rest @ ..] => parse_npm(rest),
			["gh", org, package, rest @ ..] => {
				Some(org_package_version("github.com", org, package, rest))
			}
			_ => None,
		},
		"unpkg.com" | "esm.sh" | "cdn.skypack.dev" | "jspm.dev" => parse_npm(&segments),
		_ => None,
	};

	let result = result.unwrap_or_else(|| {
		let mut generic = ParsedUrl::new(host);
		generic.module = join_module(&segments);
		generic
	});
	debug!(url, registry = %result.registry, "parsed module url");
	Some(result)
}

fn parse_deno_land(segments: &[&str]) -> Option<ParsedUrl> {
	match segments {
		[first, rest @ ..] if first.starts_with("std") => {
			let (name, version) = split_name_version(first);
			if name != "std" {
				return None;
			}
			let mut parsed = ParsedUrl::new(STD_REGISTRY);
			parsed.version = version;
			parsed.module = join_module(rest);
			Some(parsed)
		}
		["x", rest @ ..] => parse_name_version_first("deno.land/x", rest),
		_ => None,
	}
}

fn parse_name_version_first(registry: &str, segments: &[&str]) -> Option<ParsedUrl> {
	let (first, rest) = segments.split_first()?;
	let (package, version) = split_name_version(first);
	Some(with_fields(registry, None, &package, version, rest))
}

fn parse_npm(segments: &[&str]) -> Option<ParsedUrl> {
	match segments {
		[scope, package, rest @ ..] if scope.starts_with('@') => Some(org_package_version(
			NPM_REGISTRY,
			&scope[1..],
			package,
			rest,
		)),
		[package, rest @ ..] => {
			let (package, version) = split_name_version(package);
			Some(with_fields(NPM_REGISTRY, None, &package, version, rest))
		}
		[] => None,
	}
}

fn org_package_version(registry: &str, org: &str, package: &str, rest: &[&str]) -> ParsedUrl {
	let (package, version) = split_name_version(package);
	with_fields(registry, Some(org), &package, version, rest)
}

fn with_fields(
	registry: &str,
	org: Option<&str>,
	package: &str,
	version: Option<String>,
	rest: &[&str],
) -> ParsedUrl {
	let mut parsed = ParsedUrl::new(registry);
	parsed.org = org.map(str::to_string);
	parsed.package = Some(package.to_string());
	parsed.version = version;
	parsed.module = join_module(rest);
	parsed
}

fn split_name_version(segment: &str) -> (String, Option<String>) {
	match NAME_VERSION.captures(segment) {
		Some(caps) => (
			caps["name"].to_string(),
			caps.name("version").map(|m| m.as_str().to_string()),
		),
		None => (segment.to_string(), None),
	}
}

fn join_module(segments: &[&str]) -> Option<String> {
	if segments.is_empty() {
		None
	} else {
		Some(segments.join("/"))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn fields(url: &str) -> (String, Option<String>, Option<String>, Option<String>, Option<String>) {
		let parsed = parse_url(url).expect("registry url");
		(parsed.registry, parsed.org, parsed.package, parsed.version, parsed.module)
	}

	fn s(value: &str) -> Option<String> {
		Some(value.to_string())
	}

	#[test]
	fn std_registry_without_package() {
		let parsed = parse_url("https://deno.land/std@0.100.0/fs/mod.ts").unwrap();
		assert_eq!(parsed.registry, STD_REGISTRY);
		assert_eq!(parsed.package, None);
		assert_eq!(parsed.display_package(), Some("std"));
		assert_eq!(parsed.version, s("0.100.0"));
		assert_eq!(parsed.module, s("fs/mod.ts"));
	}

	#[test]
	fn unversioned_std() {
		let parsed = parse_url("https://deno.land/std/http/server.ts").unwrap();
		assert_eq!(parsed.version, None);
		assert_eq!(parsed.module, s("http/server.ts"));
	}

	#[test]
	fn third_party_registry() {
		assert_eq!(
			fields("https://deno.land/x/oak@v10.0.0/mod.ts"),
			(
				"deno.land/x".to_string(),
				None,
				s("oak"),
				s("v10.0.0"),
				s("mod.ts")
			)
		);
	}

	#[test]
	fn nest_land() {
		assert_eq!(
			fields("https://x.nest.land/eggs@0.3.8/mod.ts"),
			("nest.land".to_string(), None, s("eggs"), s("0.3.8"), s("mod.ts"))
		);
	}

	#[test]
	fn github_raw_and_blob() {
		let expected = (
			"github.com".to_string(),
			s("denoland"),
			s("deno_std"),
			s("main"),
			s("fs/mod.ts"),
		);
		assert_eq!(
			fields("https://raw.githubusercontent.com/denoland/deno_std/main/fs/mod.ts"),
			expected
		);
		assert_eq!(
			fields("https://github.com/denoland/deno_std/raw/main/fs/mod.ts"),
			expected
		);
	}

	#[test]
	fn gitlab_raw() {
		assert_eq!(
			fields("https://gitlab.com/group/proj/-/raw/v1/src/mod.ts"),
			(
				"gitlab.com".to_string(),
				s("group"),
				s("proj"),
				s("v1"),
				s("src/mod.ts")
			)
		);
	}

	#[test]
	fn npm_scoped_and_unscoped() {
		assert_eq!(
			fields("https://esm.sh/@types/node@18.0.0/fs.d.ts"),
			(
				NPM_REGISTRY.to_string(),
				s("types"),
				s("node"),
				s("18.0.0"),
				s("fs.d.ts")
			)
		);
		assert_eq!(
			fields("https://cdn.jsdelivr.net/npm/lodash-es@4.17.21/lodash.js"),
			(
				NPM_REGISTRY.to_string(),
				None,
				s("lodash-es"),
				s("4.17.21"),
				s("lodash.js")
			)
		);
		assert_eq!(
			fields("https://unpkg.com/preact"),
			(NPM_REGISTRY.to_string(), None, s("preact"), None, None)
		);
	}

	#[test]
	fn remaining_npm_cdns() {
		assert_eq!(
			fields("https://unpkg.com/@preact/signals@1.2.0/dist/signals.mjs"),
			(
				NPM_REGISTRY.to_string(),
				s("preact"),
				s("signals"),
				s("1.2.0"),
				s("dist/signals.mjs")
			)
		);
		assert_eq!(
			fields("https://cdn.skypack.dev/canvas-confetti@1.6.0"),
			(NPM_REGISTRY.to_string(), None, s("canvas-confetti"), s("1.6.0"), None)
		);
		assert_eq!(
			fields("https://jspm.dev/@lit/reactive-element@1.0.0/decorators.js"),
			(
				NPM_REGISTRY.to_string(),
				s("lit"),
				s("reactive-element"),
				s("1.0.0"),
				s("decorators.js")
			)
		);
	}

	#[test]
	fn denopkg_maps_to_github() {
		assert_eq!(
			fields("https://denopkg.com/denoland/deno_std@0.50.0/fs/mod.ts"),
			(
				"github.com".to_string(),
				s("denoland"),
				s("deno_std"),
				s("0.50.0"),
				s("fs/mod.ts")
			)
		);
	}

	#[test]
	fn fields_are_percent_decoded() {
		assert_eq!(
			fields("https://deno.land/x/café@1.0/a b/mod%20two.ts"),
			(
				"deno.land/x".to_string(),
				None,
				s("café"),
				s("1.0"),
				s("a b/mod two.ts")
			)
		);
	}

	#[test]
	fn jsdelivr_github() {
		assert_eq!(
			fields("https://cdn.jsdelivr.net/gh/user/repo@1.0/mod.ts"),
			(
				"github.com".to_string(),
				s("user"),
				s("repo"),
				s("1.0"),
				s("mod.ts")
			)
		);
	}

	#[test]
	fn unknown_host_keeps_module_path() {
		assert_eq!(
			fields("https://example.com/lib/mod.ts"),
			("example.com".to_string(), None, None, None, s("lib/mod.ts"))
		);
	}

	#[test]
	fn short_github_path_falls_back_to_host() {
		assert_eq!(
			fields("https://github.com/denoland"),
			("github.com".to_string(), None, None, None, s("denoland"))
		);
	}

	#[test]
	fn non_urls_are_libraries() {
		assert_eq!(parse_url("builtin/stable"), None);
		assert_eq!(parse_url("file:///home/user/mod.ts"), None);
		assert_eq!(parse_url(""), None);
		assert!(is_library("builtin/stable", "builtin/"));
		assert!(!is_library("https://deno.land/x/oak/mod.ts", "builtin/"));
		assert!(!is_library("anything", ""));
	}
}
