//! Doc node model consumed by the renderer.
//!
//! Nodes are produced by an external extraction step and arrive as camelCase JSON with a
//! `kind` discriminant. The renderer only ever reads and groups them.

/// Grouping of nodes by kind.
pub mod collection;
/// Kind-specific payload definitions.
pub mod defs;
/// Private-item filtering applied before rendering.
pub mod filter;

use serde::{Deserialize, Serialize};

pub use self::collection::{DocNodeCollection, classify};
pub use self::defs::*;
pub use self::filter::filter_private;

/// Source position of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
	/// Specifier of the file that declares the node.
	pub filename: String,
	/// One-based line.
	pub line: u32,
	/// Zero-based column.
	pub col: u32,
}

/// How a node is declared in its module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
	/// Exported from the module.
	#[default]
	Export,
	/// Ambient `declare` statement.
	Declare,
	/// Module-private declaration.
	Private,
}

/// A single JSDoc tag such as `@deprecated` or `@param`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsDocTag {
	/// Tag identifier without the leading `@`.
	pub kind: String,
	/// Optional name the tag refers to (e.g. a parameter).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Free text attached to the tag.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub doc: Option<String>,
}

impl JsDocTag {
	/// Creates a tag with no name or text.
	pub fn new(kind: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			name: None,
			doc: None,
		}
	}

	/// Attaches free text to the tag.
	pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
		self.doc = Some(doc.into());
		self
	}
}

/// Structured documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsDoc {
	/// Markdown body preceding the tags.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub doc: Option<String>,
	/// Tags in source order.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<JsDocTag>,
}

impl JsDoc {
	/// Creates a doc comment with only a body.
	pub fn new(doc: impl Into<String>) -> Self {
		Self {
			doc: Some(doc.into()),
			tags: Vec::new(),
		}
	}

	/// Appends a tag.
	pub fn with_tag(mut self, tag: JsDocTag) -> Self {
		self.tags.push(tag);
		self
	}

	/// The body, if it contains anything besides whitespace.
	pub fn body(&self) -> Option<&str> {
		self.doc
			.as_deref()
			.map(str::trim)
			.filter(|body| !body.is_empty())
	}

	/// True when there is neither a body nor any tag.
	pub fn is_empty(&self) -> bool {
		self.body().is_none() && self.tags.is_empty()
	}

	/// The first `@deprecated` tag, if any.
	pub fn deprecated(&self) -> Option<&JsDocTag> {
		self.tags.iter().find(|tag| tag.kind == "deprecated")
	}

	/// First paragraph of the body.
	pub fn summary(&self) -> Option<&str> {
		let body = self.body()?;
		let end = body.find("\n\n").unwrap_or(body.len());
		Some(body[..end].trim_end())
	}
}

/// Discriminant of a [`DocNode`].
///
/// The declaration order doubles as the section order on module pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocNodeKind {
	/// Namespace holding nested nodes.
	Namespace,
	/// Class declaration.
	Class,
	/// Enum declaration.
	Enum,
	/// Variable declaration.
	Variable,
	/// Function declaration, possibly one of several overloads.
	Function,
	/// Interface declaration.
	Interface,
	/// Type alias.
	TypeAlias,
	/// Module-level documentation comment.
	ModuleDoc,
	/// Import declaration.
	Import,
}

impl DocNodeKind {
	/// Wire name of the kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Namespace => "namespace",
			Self::Class => "class",
			Self::Enum => "enum",
			Self::Variable => "variable",
			Self::Function => "function",
			Self::Interface => "interface",
			Self::TypeAlias => "typeAlias",
			Self::ModuleDoc => "moduleDoc",
			Self::Import => "import",
		}
	}

	/// Heading used for a group of nodes of this kind.
	pub fn plural_label(self) -> &'static str {
		match self {
			Self::Namespace => "Namespaces",
			Self::Class => "Classes",
			Self::Enum => "Enums",
			Self::Variable => "Variables",
			Self::Function => "Functions",
			Self::Interface => "Interfaces",
			Self::TypeAlias => "Type Aliases",
			Self::ModuleDoc => "Module",
			Self::Import => "Imports",
		}
	}
}

/// Kind-tagged payload of a [`DocNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocNodeDef {
	/// See [`NamespaceDef`].
	Namespace {
		/// Payload.
		#[serde(rename = "namespaceDef")]
		def: NamespaceDef,
	},
	/// See [`ClassDef`].
	Class {
		/// Payload.
		#[serde(rename = "classDef")]
		def: ClassDef,
	},
	/// See [`EnumDef`].
	Enum {
		/// Payload.
		#[serde(rename = "enumDef")]
		def: EnumDef,
	},
	/// See [`VariableDef`].
	Variable {
		/// Payload.
		#[serde(rename = "variableDef")]
		def: VariableDef,
	},
	/// See [`FunctionDef`].
	Function {
		/// Payload.
		#[serde(rename = "functionDef")]
		def: FunctionDef,
	},
	/// See [`InterfaceDef`].
	Interface {
		/// Payload.
		#[serde(rename = "interfaceDef")]
		def: InterfaceDef,
	},
	/// See [`TypeAliasDef`].
	TypeAlias {
		/// Payload.
		#[serde(rename = "typeAliasDef")]
		def: TypeAliasDef,
	},
	/// Module documentation; the node's JSDoc describes the module.
	ModuleDoc,
	/// See [`ImportDef`].
	Import {
		/// Payload.
		#[serde(rename = "importDef")]
		def: ImportDef,
	},
}

impl DocNodeDef {
	/// Discriminant of this payload.
	pub fn kind(&self) -> DocNodeKind {
		match self {
			Self::Namespace { .. } => DocNodeKind::Namespace,
			Self::Class { .. } => DocNodeKind::Class,
			Self::Enum { .. } => DocNodeKind::Enum,
			Self::Variable { .. } => DocNodeKind::Variable,
			Self::Function { .. } => DocNodeKind::Function,
			Self::Interface { .. } => DocNodeKind::Interface,
			Self::TypeAlias { .. } => DocNodeKind::TypeAlias,
			Self::ModuleDoc => DocNodeKind::ModuleDoc,
			Self::Import { .. } => DocNodeKind::Import,
		}
	}
}

/// One extracted documentation entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocNode {
	/// Exported name. Several nodes may share it.
	pub name: String,
	/// Where the node was declared.
	#[serde(default)]
	pub location: Location,
	/// Export status.
	#[serde(default)]
	pub declaration_kind: DeclarationKind,
	/// Attached documentation comment.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub js_doc: Option<JsDoc>,
	/// Kind and kind-specific payload.
	#[serde(flatten)]
	pub def: DocNodeDef,
}

impl DocNode {
	/// Creates an exported node without documentation.
	pub fn new(name: impl Into<String>, def: DocNodeDef) -> Self {
		Self {
			name: name.into(),
			location: Location::default(),
			declaration_kind: DeclarationKind::Export,
			js_doc: None,
			def,
		}
	}

	/// Attaches a documentation comment.
	pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
		self.js_doc = Some(js_doc);
		self
	}

	/// Overrides the declaration kind.
	pub fn with_declaration_kind(mut self, declaration_kind: DeclarationKind) -> Self {
		self.declaration_kind = declaration_kind;
		self
	}

	/// Discriminant of the node.
	pub fn kind(&self) -> DocNodeKind {
		self.def.kind()
	}

	/// The documentation comment when it carries a body or tags.
	pub fn non_empty_js_doc(&self) -> Option<&JsDoc> {
		self.js_doc.as_ref().filter(|js_doc| !js_doc.is_empty())
	}

	/// Children of a namespace node.
	pub fn namespace_elements(&self) -> Option<&[DocNode]> {
		match &self.def {
			DocNodeDef::Namespace { def } => Some(&def.elements),
			_ => None,
		}
	}

	/// Class payload, if this is a class.
	pub fn as_class(&self) -> Option<&ClassDef> {
		match &self.def {
			DocNodeDef::Class { def } => Some(def),
			_ => None,
		}
	}

	/// Interface payload, if this is an interface.
	pub fn as_interface(&self) -> Option<&InterfaceDef> {
		match &self.def {
			DocNodeDef::Interface { def } => Some(def),
			_ => None,
		}
	}

	/// Function payload, if this is a function.
	pub fn as_function(&self) -> Option<&FunctionDef> {
		match &self.def {
			DocNodeDef::Function { def } => Some(def),
			_ => None,
		}
	}

	/// True when the node is an abstract class.
	pub fn is_abstract(&self) -> bool {
		self.as_class().is_some_and(|class| class.is_abstract)
	}
}
