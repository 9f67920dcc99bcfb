use serde_json::{Map, Value};

use super::iri::compact_iri;
use crate::{Container, Context, Nullable};

/// Compacts a value object or node reference into a scalar, if possible.
///
/// Returns `None` when the value must be kept as an object, in which case
/// it is compacted as any other object.
pub fn compact_value(
	active_context: &Context,
	active_property: Option<&str>,
	value: &Map<String, Value>,
) -> Option<Value> {
	let definition = active_property.and_then(|p| active_context.get(p));

	let mut number_members = value.len();
	if value.contains_key("@index") && definition.map_or(false, |d| d.has_container(Container::Index))
	{
		number_members -= 1
	}

	if number_members > 2 {
		return None;
	}

	let type_mapping = definition.and_then(|d| d.typ.as_deref());
	let language_mapping = definition.and_then(|d| d.language.as_ref());
	let language = match language_mapping {
		Some(Nullable::Some(lang)) => Some(lang.as_str()),
		Some(Nullable::Null) => None,
		None => active_context.default_language(),
	};

	if let Some(id) = value.get("@id").and_then(Value::as_str) {
		if number_members == 1 {
			match type_mapping {
				Some("@id") => return Some(Value::String(compact_iri(active_context, id, None, false, false))),
				Some("@vocab") => return Some(Value::String(compact_iri(active_context, id, None, true, false))),
				_ => (),
			}
		}

		return None;
	}

	let inner = value.get("@value")?;

	if let Some(ty) = value.get("@type").and_then(Value::as_str) {
		if type_mapping == Some(ty) {
			return Some(inner.clone());
		}

		return None;
	}

	if let Some(lang) = value.get("@language").and_then(Value::as_str) {
		if language == Some(lang) {
			return Some(inner.clone());
		}

		return None;
	}

	if number_members == 1
		&& (!inner.is_string()
			|| active_context.default_language().is_none()
			|| language_mapping == Some(&Nullable::Null))
	{
		return Some(inner.clone());
	}

	None
}
