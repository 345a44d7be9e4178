//! TypeScript-like declaration text for code blocks and member headings.

use crate::model::{
	Accessibility, ClassConstructorDef, ClassMethodDef, ClassPropertyDef, FunctionDef,
	InterfaceMethodDef, InterfacePropertyDef, MethodKind, ParamDef, TsTypeDef, TypeParamDef,
};

/// `<T extends U = V, K>` or an empty string.
pub fn type_params(params: &[TypeParamDef]) -> String {
	if params.is_empty() {
		return String::new();
	}
	let rendered: Vec<String> = params.iter().map(type_param).collect();
	format!("<{}>", rendered.join(", "))
}

/// A single type parameter with its constraint and default.
pub fn type_param(param: &TypeParamDef) -> String {
	let mut out = param.name.clone();
	if let Some(constraint) = &param.constraint {
		out.push_str(&format!(" extends {constraint}"));
	}
	if let Some(default) = &param.default {
		out.push_str(&format!(" = {default}"));
	}
	out
}

/// A single parameter, e.g. `...rest?: T[]`.
pub fn param(param: &ParamDef) -> String {
	let mut out = String::new();
	if param.rest {
		out.push_str("...");
	}
	out.push_str(&param.name);
	if param.optional {
		out.push('?');
	}
	if let Some(ts_type) = &param.ts_type {
		out.push_str(&format!(": {ts_type}"));
	}
	out
}

/// Comma separated parameter list without parentheses.
pub fn params(params: &[ParamDef]) -> String {
	params.iter().map(param).collect::<Vec<_>>().join(", ")
}

fn return_type(ts_type: Option<&TsTypeDef>) -> String {
	ts_type.map(|ty| format!(": {ty}")).unwrap_or_default()
}

fn accessibility(access: Option<Accessibility>) -> String {
	match access {
		// `public` is the default and omitted.
		Some(Accessibility::Public) | None => String::new(),
		Some(other) => format!("{} ", other.as_str()),
	}
}

/// `async function* name<T>(a: A): R`
pub fn function(name: &str, def: &FunctionDef) -> String {
	format!(
		"{}function{} {}{}({}){}",
		if def.is_async { "async " } else { "" },
		if def.is_generator { "*" } else { "" },
		name,
		type_params(&def.type_params),
		params(&def.params),
		return_type(def.return_type.as_ref()),
	)
}

/// `protected constructor(a: A)`
pub fn constructor(def: &ClassConstructorDef) -> String {
	format!(
		"{}constructor({})",
		accessibility(def.accessibility),
		params(&def.params)
	)
}

/// `private static readonly name?: T`
pub fn class_property(def: &ClassPropertyDef) -> String {
	let mut out = accessibility(def.accessibility);
	if def.is_abstract {
		out.push_str("abstract ");
	}
	if def.is_static {
		out.push_str("static ");
	}
	if def.readonly {
		out.push_str("readonly ");
	}
	out.push_str(&def.name);
	if def.optional {
		out.push('?');
	}
	out.push_str(&return_type(def.ts_type.as_ref()));
	out
}

/// `static get name(): T` and friends.
pub fn class_method(def: &ClassMethodDef) -> String {
	let mut out = accessibility(def.accessibility);
	if def.is_abstract {
		out.push_str("abstract ");
	}
	if def.is_static {
		out.push_str("static ");
	}
	if def.function_def.is_async {
		out.push_str("async ");
	}
	match def.kind {
		MethodKind::Getter => out.push_str("get "),
		MethodKind::Setter => out.push_str("set "),
		MethodKind::Method if def.function_def.is_generator => out.push('*'),
		MethodKind::Method => {}
	}
	out.push_str(&def.name);
	if def.optional {
		out.push('?');
	}
	out.push_str(&format!(
		"{}({}){}",
		type_params(&def.function_def.type_params),
		params(&def.function_def.params),
		return_type(def.function_def.return_type.as_ref())
	));
	out
}

/// `readonly name?: T`
pub fn interface_property(def: &InterfacePropertyDef) -> String {
	format!(
		"{}{}{}{}",
		if def.readonly { "readonly " } else { "" },
		def.name,
		if def.optional { "?" } else { "" },
		return_type(def.ts_type.as_ref())
	)
}

/// `name?<T>(a: A): R`
pub fn interface_method(def: &InterfaceMethodDef) -> String {
	format!(
		"{}{}{}({}){}",
		def.name,
		if def.optional { "?" } else { "" },
		type_params(&def.type_params),
		params(&def.params),
		return_type(def.return_type.as_ref())
	)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn renders_function_signature() {
		let def = FunctionDef {
			params: vec![
				ParamDef::new("port", "number"),
				ParamDef {
					name: "rest".into(),
					rest: true,
					ts_type: Some(TsTypeDef::new("string[]")),
					..Default::default()
				},
			],
			return_type: Some(TsTypeDef::new("Promise<void>")),
			is_async: true,
			type_params: vec![TypeParamDef {
				name: "T".into(),
				constraint: Some(TsTypeDef::new("object")),
				default: None,
			}],
			..Default::default()
		};
		assert_eq!(
			function("serve", &def),
			"async function serve<T extends object>(port: number, ...rest: string[]): Promise<void>"
		);
	}

	#[test]
	fn renders_member_modifiers() {
		let property = ClassPropertyDef {
			name: "size".into(),
			ts_type: Some(TsTypeDef::new("number")),
			readonly: true,
			is_static: true,
			optional: true,
			accessibility: Some(Accessibility::Protected),
			..Default::default()
		};
		assert_eq!(class_property(&property), "protected static readonly size?: number");

		let getter = ClassMethodDef {
			name: "length".into(),
			kind: MethodKind::Getter,
			function_def: FunctionDef {
				return_type: Some(TsTypeDef::new("number")),
				..Default::default()
			},
			..Default::default()
		};
		assert_eq!(class_method(&getter), "get length(): number");
	}

	#[test]
	fn public_accessibility_is_omitted() {
		let ctor = ClassConstructorDef {
			accessibility: Some(Accessibility::Public),
			params: vec![ParamDef::new("a", "string")],
			..Default::default()
		};
		assert_eq!(constructor(&ctor), "constructor(a: string)");
	}
}
