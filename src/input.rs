//! Loading doc nodes produced by the extraction step.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{RegdocError, Result};
use crate::model::DocNode;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Decode a JSON array of doc nodes; `origin` names the input in errors.
pub fn parse_nodes(json: &str, origin: &str) -> Result<Vec<DocNode>> {
	let nodes: Vec<DocNode> = serde_json::from_str(json).map_err(|err| RegdocError::json(origin, err))?;
	debug!(origin, count = nodes.len(), "decoded doc nodes");
	Ok(nodes)
}

/// Read doc nodes from a file, or from stdin when `path` is `-`.
pub fn read_nodes(path: &Path) -> Result<Vec<DocNode>> {
	if path == Path::new(STDIN_PATH) {
		let mut json = String::new();
		std::io::stdin()
			.read_to_string(&mut json)
			.map_err(|err| RegdocError::io(path, err))?;
		return parse_nodes(&json, "<stdin>");
	}
	let json = fs::read_to_string(path).map_err(|err| RegdocError::io(path, err))?;
	parse_nodes(&json, &path.display().to_string())
}
