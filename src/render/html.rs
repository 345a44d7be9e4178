//! Small HTML helpers shared by the renderers.

/// Escape text for use in element content and attribute values.
pub fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// Append `name` to a dotted item path.
pub fn ppush(path_prefix: &str, name: &str) -> String {
	if path_prefix.is_empty() {
		name.to_string()
	} else {
		format!("{path_prefix}.{name}")
	}
}

/// Anchor-safe slug: alphanumerics, `-` and `_` in their original case; whitespace becomes `-`.
///
/// Case is significant so `A` and `a` stay distinct members.
pub fn slug(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());
	for c in text.chars() {
		if c.is_alphanumeric() || c == '-' || c == '_' {
			slug.push(c);
		} else if c.is_whitespace() {
			slug.push('-');
		}
	}
	slug
}

/// Element id for a member of a page section, e.g. `prop_size`.
pub fn anchor_id(section: &str, name: &str) -> String {
	format!("{section}_{}", slug(name))
}

/// Path of the module root page: the specifier with its scheme separator folded into the path.
pub fn module_href(url: &str) -> String {
	format!("/{}", url.replacen("://", "/", 1))
}

/// Path of an item page within a module.
pub fn item_href(url: &str, item: &str) -> String {
	format!("{}/~/{}", module_href(url), item)
}

/// Wrap preformatted source in a code block.
pub fn code_block(source: &str) -> String {
	format!(
		"<pre class=\"code-block\"><code class=\"language-typescript\">{}</code></pre>\n",
		escape(source.trim_end())
	)
}

/// Link with escaped href and label.
pub fn link(href: &str, label: &str) -> String {
	format!("<a href=\"{}\">{}</a>", escape(href), escape(label))
}
