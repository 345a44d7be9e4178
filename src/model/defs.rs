use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DocNode, JsDoc};

/// A TypeScript type carried as its display representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TsTypeDef {
	/// Source text of the type.
	pub repr: String,
}

impl TsTypeDef {
	/// Creates a type from its display text.
	pub fn new(repr: impl Into<String>) -> Self {
		Self { repr: repr.into() }
	}
}

impl fmt::Display for TsTypeDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.repr)
	}
}

/// Generic type parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeParamDef {
	/// Parameter name.
	pub name: String,
	/// `extends` constraint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub constraint: Option<TsTypeDef>,
	/// Default type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default: Option<TsTypeDef>,
}

/// Function or method parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParamDef {
	/// Binding name.
	pub name: String,
	/// Whether the parameter is optional (`?`).
	pub optional: bool,
	/// Whether the parameter is a rest parameter (`...`).
	pub rest: bool,
	/// Declared type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ts_type: Option<TsTypeDef>,
}

impl ParamDef {
	/// Creates a required parameter of the given type.
	pub fn new(name: impl Into<String>, ts_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			optional: false,
			rest: false,
			ts_type: Some(TsTypeDef::new(ts_type)),
		}
	}
}

/// Function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunctionDef {
	/// Parameters in declaration order.
	pub params: Vec<ParamDef>,
	/// Declared return type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub return_type: Option<TsTypeDef>,
	/// `async` modifier.
	pub is_async: bool,
	/// Generator (`function*`).
	pub is_generator: bool,
	/// Generic parameters.
	pub type_params: Vec<TypeParamDef>,
}

/// Member accessibility modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accessibility {
	/// `public`
	Public,
	/// `protected`
	Protected,
	/// `private`
	Private,
}

impl Accessibility {
	/// Keyword as written in source.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Public => "public",
			Self::Protected => "protected",
			Self::Private => "private",
		}
	}
}

/// Class constructor overload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassConstructorDef {
	/// Constructor documentation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub js_doc: Option<JsDoc>,
	/// Accessibility modifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub accessibility: Option<Accessibility>,
	/// Parameters.
	pub params: Vec<ParamDef>,
}

/// Class property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassPropertyDef {
	/// Property documentation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub js_doc: Option<JsDoc>,
	/// Property name.
	pub name: String,
	/// Declared type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ts_type: Option<TsTypeDef>,
	/// `readonly` modifier.
	pub readonly: bool,
	/// `static` modifier.
	pub is_static: bool,
	/// `abstract` modifier.
	pub is_abstract: bool,
	/// Optional property.
	pub optional: bool,
	/// Accessibility modifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub accessibility: Option<Accessibility>,
}

/// Method flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MethodKind {
	/// Plain method.
	#[default]
	Method,
	/// `get` accessor.
	Getter,
	/// `set` accessor.
	Setter,
}

/// Class method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassMethodDef {
	/// Method documentation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub js_doc: Option<JsDoc>,
	/// Method name.
	pub name: String,
	/// Method flavour.
	pub kind: MethodKind,
	/// `static` modifier.
	pub is_static: bool,
	/// `abstract` modifier.
	pub is_abstract: bool,
	/// Optional method.
	pub optional: bool,
	/// Accessibility modifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub accessibility: Option<Accessibility>,
	/// Signature.
	pub function_def: FunctionDef,
}

/// Class payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassDef {
	/// `abstract` modifier.
	pub is_abstract: bool,
	/// Superclass expression.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extends: Option<String>,
	/// Implemented interfaces.
	pub implements: Vec<TsTypeDef>,
	/// Generic parameters.
	pub type_params: Vec<TypeParamDef>,
	/// Constructor overloads.
	pub constructors: Vec<ClassConstructorDef>,
	/// Properties.
	pub properties: Vec<ClassPropertyDef>,
	/// Methods.
	pub methods: Vec<ClassMethodDef>,
}

/// Enum member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumMemberDef {
	/// Member name.
	pub name: String,
	/// Initializer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub init: Option<TsTypeDef>,
	/// Member documentation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub js_doc: Option<JsDoc>,
}

/// Enum payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumDef {
	/// Members in declaration order.
	pub members: Vec<EnumMemberDef>,
}

/// Interface property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterfacePropertyDef {
	/// Property documentation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub js_doc: Option<JsDoc>,
	/// Property name.
	pub name: String,
	/// Declared type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ts_type: Option<TsTypeDef>,
	/// `readonly` modifier.
	pub readonly: bool,
	/// Optional property.
	pub optional: bool,
}

/// Interface method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterfaceMethodDef {
	/// Method documentation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub js_doc: Option<JsDoc>,
	/// Method name.
	pub name: String,
	/// Parameters.
	pub params: Vec<ParamDef>,
	/// Return type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub return_type: Option<TsTypeDef>,
	/// Optional method.
	pub optional: bool,
	/// Generic parameters.
	pub type_params: Vec<TypeParamDef>,
}

/// Interface payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterfaceDef {
	/// Extended interfaces.
	pub extends: Vec<TsTypeDef>,
	/// Generic parameters.
	pub type_params: Vec<TypeParamDef>,
	/// Properties.
	pub properties: Vec<InterfacePropertyDef>,
	/// Methods.
	pub methods: Vec<InterfaceMethodDef>,
}

/// Type alias payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeAliasDef {
	/// Aliased type.
	pub ts_type: TsTypeDef,
	/// Generic parameters.
	pub type_params: Vec<TypeParamDef>,
}

/// Variable declaration keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VarDeclKind {
	/// `const`
	#[default]
	Const,
	/// `let`
	Let,
	/// `var`
	Var,
}

impl VarDeclKind {
	/// Keyword as written in source.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Const => "const",
			Self::Let => "let",
			Self::Var => "var",
		}
	}
}

/// Variable payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariableDef {
	/// Declared or inferred type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ts_type: Option<TsTypeDef>,
	/// Declaration keyword.
	pub kind: VarDeclKind,
}

/// Namespace payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceDef {
	/// Child nodes in declaration order.
	pub elements: Vec<DocNode>,
}

/// Import payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportDef {
	/// Specifier the import resolves to.
	pub src: String,
	/// Imported binding, absent for namespace imports.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub imported: Option<String>,
}
