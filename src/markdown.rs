//! Markdown rendering for JSDoc bodies.
//!
//! The page assembler only relies on the [`MarkdownRenderer`] contract; [`CmarkRenderer`] is the
//! default implementation.

use once_cell::sync::Lazy;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};
use regex::Regex;
use url::{ParseError, Url};

static LINK_TAG: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"\{@link(?:code|plain)?\s+(?P<target>[^}\s|]+)(?:\s*\|\s*|\s+)?(?P<label>[^}]*)\}")
		.expect("inline link tag pattern")
});

/// Converts JSDoc markdown into page content.
pub trait MarkdownRenderer {
	/// Render markdown to an HTML fragment. Raw HTML in the input is escaped and link or image
	/// targets outside `http`, `https` and `mailto` are replaced with `#`.
	fn render_html(&self, markdown: &str) -> String;

	/// Reduce markdown to plain single-line text, e.g. for meta descriptions.
	fn clean(&self, markdown: &str) -> String;
}

/// [`MarkdownRenderer`] backed by pulldown-cmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkRenderer;

impl CmarkRenderer {
	fn parser(markdown: &str) -> Parser<'_, '_> {
		Parser::new_ext(
			markdown,
			Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS,
		)
	}
}

impl MarkdownRenderer for CmarkRenderer {
	fn render_html(&self, markdown: &str) -> String {
		let source = rewrite_link_tags(markdown);
		let events = Self::parser(&source).map(|event| match event {
			Event::Html(raw) => Event::Text(raw),
			Event::Start(Tag::Link(kind, dest, title)) => {
				Event::Start(Tag::Link(kind, safe_destination(dest), title))
			}
			Event::Start(Tag::Image(kind, dest, title)) => {
				Event::Start(Tag::Image(kind, safe_destination(dest), title))
			}
			other => other,
		});
		let mut output = String::with_capacity(source.len() * 3 / 2);
		html::push_html(&mut output, events);
		output
	}

	fn clean(&self, markdown: &str) -> String {
		let source = rewrite_link_tags(markdown);
		let mut text = String::new();
		let mut in_code_block = false;
		for event in Self::parser(&source) {
			match event {
				Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
				Event::End(Tag::CodeBlock(_)) => in_code_block = false,
				Event::Text(value) | Event::Code(value) if !in_code_block => text.push_str(&value),
				Event::SoftBreak | Event::HardBreak => text.push(' '),
				Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item) => text.push(' '),
				_ => {}
			}
		}
		text.split_whitespace().collect::<Vec<_>>().join(" ")
	}
}

/// Relative targets and `http`/`https`/`mailto` urls pass through; any other scheme becomes `#`.
fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
	let allowed = match Url::parse(&dest) {
		Ok(url) => matches!(url.scheme(), "http" | "https" | "mailto"),
		Err(ParseError::RelativeUrlWithoutBase) => true,
		Err(_) => false,
	};
	if allowed { dest } else { CowStr::Borrowed("#") }
}

/// Replace `{@link Target}` / `{@link Target | label}` with inline code.
fn rewrite_link_tags(markdown: &str) -> String {
	LINK_TAG
		.replace_all(markdown, |caps: &regex::Captures<'_>| {
			let label = caps["label"].trim();
			if label.is_empty() {
				format!("`{}`", &caps["target"])
			} else {
				format!("`{label}`")
			}
		})
		.into_owned()
}
