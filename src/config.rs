//! Site configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then `REGDOC_*`
//! environment variables, then whatever the caller sets through the `with_*` builders.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RegdocError, Result};

/// Environment variable overriding [`SiteConfig::base_url`].
pub const ENV_BASE_URL: &str = "REGDOC_BASE_URL";
/// Environment variable overriding [`SiteConfig::library_prefix`].
pub const ENV_LIBRARY_PREFIX: &str = "REGDOC_LIBRARY_PREFIX";
/// Environment variable overriding [`SiteConfig::include_private`].
pub const ENV_INCLUDE_PRIVATE: &str = "REGDOC_INCLUDE_PRIVATE";

/// Settings shared by every page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Absolute origin used for social preview image links.
	pub base_url: String,
	/// Module urls starting with this prefix are built-in libraries.
	pub library_prefix: String,
	/// Render module-private nodes and private class members.
	pub include_private: bool,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:8080".to_string(),
			library_prefix: "builtin/".to_string(),
			include_private: false,
		}
	}
}

impl SiteConfig {
	/// Load a config file on top of the defaults.
	pub fn load(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path).map_err(|err| RegdocError::io(path, err))?;
		let config: Self = serde_json::from_str(&content)
			.map_err(|err| RegdocError::json(format!("config '{}'", path.display()), err))?;
		debug!(path = %path.display(), "loaded site config");
		config.validated()
	}

	/// Apply `REGDOC_*` variables from the process environment.
	pub fn apply_env(self) -> Result<Self> {
		self.apply_env_from(|key| std::env::var(key).ok())
	}

	/// Apply `REGDOC_*` overrides using `lookup` to read variables.
	pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		if let Some(base_url) = lookup(ENV_BASE_URL) {
			self.base_url = base_url;
		}
		if let Some(prefix) = lookup(ENV_LIBRARY_PREFIX) {
			self.library_prefix = prefix;
		}
		if let Some(flag) = lookup(ENV_INCLUDE_PRIVATE) {
			self.include_private = parse_flag(&flag).ok_or_else(|| {
				RegdocError::Config(format!("{ENV_INCLUDE_PRIVATE} must be a boolean, got '{flag}'"))
			})?;
		}
		self.validated()
	}

	/// Set the base url for preview images.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Set the library prefix.
	pub fn with_library_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.library_prefix = prefix.into();
		self
	}

	/// Render private items?
	pub fn with_include_private(mut self, include_private: bool) -> Self {
		self.include_private = include_private;
		self
	}

	/// Base url without a trailing slash.
	pub fn origin(&self) -> &str {
		self.base_url.trim_end_matches('/')
	}

	fn validated(self) -> Result<Self> {
		if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
			return Err(RegdocError::Config(format!(
				"base_url must be an http(s) url, got '{}'",
				self.base_url
			)));
		}
		Ok(self)
	}
}

fn parse_flag(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" | "" => Some(false),
		_ => None,
	}
}
