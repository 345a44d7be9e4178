use crate::model::{DocNode, DocNodeDef, VariableDef};

use super::super::html::code_block;
use super::super::state::RenderContext;

/// `const name: T;`
pub fn source(name: &str, def: &VariableDef) -> String {
	match &def.ts_type {
		Some(ts_type) => format!("{} {name}: {ts_type};", def.kind.as_str()),
		None => format!("{} {name};", def.kind.as_str()),
	}
}

/// Code block for each variable node. Variables have no doc section.
pub fn code_block_html(_ctx: &RenderContext<'_>, nodes: &[&DocNode]) -> String {
	nodes
		.iter()
		.filter_map(|node| match &node.def {
			DocNodeDef::Variable { def } => Some(code_block(&source(&node.name, def))),
			_ => None,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{TsTypeDef, VarDeclKind};

	#[test]
	fn renders_keyword_and_type() {
		let def = VariableDef {
			ts_type: Some(TsTypeDef::new("string")),
			kind: VarDeclKind::Let,
		};
		assert_eq!(source("version", &def), "let version: string;");
		assert_eq!(source("x", &VariableDef::default()), "const x;");
	}
}
