//! HTML rendering of doc nodes.
//!
//! Everything here is a pure function of a [`RenderContext`] and the nodes being rendered.

/// Documentation section building blocks.
pub mod doc;
/// Kind-keyed dispatch of node groups to per-kind renderers.
pub mod dispatch;
/// Sidebar header.
pub mod header;
/// Escaping, anchors and links.
pub mod html;
/// Per-kind renderers.
pub mod items;
/// JSDoc bodies, tags and badges.
pub mod jsdoc;
/// Kind-grouped listings for module and namespace pages.
pub mod listing;
/// Head metadata.
pub mod meta;
/// TypeScript declaration text.
pub mod signature;
/// Render context threaded through a page render.
pub mod state;
/// Tables of contents.
pub mod toc;
/// Usage panel.
pub mod usage_block;

pub use self::dispatch::{
	KindSet, RenderSite, interface_pair_toc, is_type_only, render_code_block, render_doc, render_toc,
};
pub use self::header::{module_label, render_header};
pub use self::jsdoc::{Badge, render_js_doc};
pub use self::listing::{listing_toc, render_listing};
pub use self::meta::MetaTags;
pub use self::state::RenderContext;
pub use self::usage_block::{render_usage, usage_panel};
