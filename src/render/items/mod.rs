/// Class rendering.
pub mod class;
/// Enum and member rendering.
pub mod enums;
/// Function rendering; overloads share one block.
pub mod function;
/// Interface rendering.
pub mod interface;
/// Namespace rendering: child listings and links.
pub mod namespace;
/// Type alias rendering.
pub mod type_alias;
/// Variable rendering.
pub mod variable;

/// Group `items` by name, keeping the order in which names first appear.
pub(crate) fn group_by_name<'a, T>(
	items: impl IntoIterator<Item = &'a T>,
	name: impl Fn(&T) -> &str,
) -> Vec<(&'a str, Vec<&'a T>)>
where
	T: 'a,
{
	let mut groups: Vec<(&'a str, Vec<&'a T>)> = Vec::new();
	for item in items {
		let key = name(item);
		match groups.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, members)) => members.push(item),
			None => groups.push((key, vec![item])),
		}
	}
	groups
}

/// `signature;` lines indented for a declaration body.
pub(crate) fn body_lines(lines: impl IntoIterator<Item = String>) -> String {
	let mut body = String::new();
	for line in lines {
		body.push_str(&format!("  {line};\n"));
	}
	body
}

/// `head {\n body }` or `head {}` when the body is empty.
pub(crate) fn declaration(head: &str, body: &str) -> String {
	if body.is_empty() {
		format!("{head} {{}}")
	} else {
		format!("{head} {{\n{body}}}")
	}
}
