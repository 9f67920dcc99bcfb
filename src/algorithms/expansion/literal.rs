use serde_json::{Map, Value};

use crate::{Context, Keyword, Nullable};

/// Expands a scalar value according to the definition of the active
/// property.
///
/// Strings are expanded as IRIs when the term has the `@id` or `@vocab`
/// type mapping. Anything else is wrapped in a value object carrying the
/// type or language mapping of the term.
pub fn expand_literal(active_context: &Context, active_property: Option<&str>, value: &Value) -> Value {
	let definition = active_property.and_then(|p| active_context.get(p));
	let typ = definition.and_then(|d| d.typ.as_deref());

	if let Value::String(s) = value {
		let id = match typ {
			Some("@id") => Some(active_context.expand_iri(s, true, false)),
			Some("@vocab") => Some(active_context.expand_iri(s, true, true)),
			_ => None,
		};

		if let Some(id) = id {
			let mut result = Map::new();
			result.insert(
				Keyword::Id.as_str().to_owned(),
				id.map(Value::String).unwrap_or(Value::Null),
			);
			return Value::Object(result);
		}
	}

	let mut result = Map::new();
	result.insert(Keyword::Value.as_str().to_owned(), value.clone());

	match typ {
		Some(typ) if typ != "@id" && typ != "@vocab" => {
			result.insert(
				Keyword::Type.as_str().to_owned(),
				Value::String(typ.to_owned()),
			);
		}
		_ => {
			if value.is_string() {
				let language = match definition.and_then(|d| d.language.as_ref()) {
					Some(Nullable::Some(lang)) => Some(lang.as_str()),
					Some(Nullable::Null) => None,
					None => active_context.default_language(),
				};

				if let Some(lang) = language {
					result.insert(
						Keyword::Language.as_str().to_owned(),
						Value::String(lang.to_owned()),
					);
				}
			}
		}
	}

	Value::Object(result)
}
