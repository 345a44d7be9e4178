//! Core library for regdoc: HTML documentation pages for registry modules.
//!
//! Doc nodes extracted from a module are grouped by kind, resolved through namespaces, and
//! rendered into a page with a table of contents, declaration previews, rendered JSDoc and a
//! copy-paste import statement. Rendering is total: a missing item yields an error page, never
//! an `Err`.

/// Site configuration layering.
pub mod config;

/// Error type for input and configuration handling.
pub mod error;

/// Loading doc nodes from files or stdin.
pub mod input;

/// Tracing subscriber setup.
pub mod logger;

/// Markdown collaborator for JSDoc bodies.
pub mod markdown;

/// Doc node model.
pub mod model;

/// Page assembly.
pub mod page;

/// Registry url parsing.
pub mod registry;

/// HTML rendering of doc nodes.
pub mod render;

/// Import statement synthesis.
pub mod usage;

pub use crate::config::SiteConfig;
pub use crate::error::{RegdocError, Result};
pub use crate::markdown::{CmarkRenderer, MarkdownRenderer};
pub use crate::model::{DocNode, DocNodeCollection, DocNodeKind, classify, filter_private};
pub use crate::page::{Page, assemble_page, render_page};
pub use crate::registry::{ParsedUrl, is_library, parse_url};
pub use crate::render::RenderContext;
pub use crate::usage::{ParsedUsage, parse_usage};
