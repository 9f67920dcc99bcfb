use iref::Iri;
use serde_json::Value;

use crate::{
	context::inverse::{NONE, NULL_LANGUAGE, REVERSE},
	context::Selection,
	util::{compare_shortest_least, is_value_object},
	Container, Context,
};

/// Compacts the given IRI into a term, compact IRI or relative IRI reference.
///
/// The optional `value` is the expanded value the IRI is a property of,
/// used to select the term best matching its shape (container, type and
/// language). `vocab` makes the compaction relative to the vocabulary
/// mapping rather than the base IRI. `reverse` selects reverse property
/// terms.
pub fn compact_iri(
	active_context: &Context,
	iri: &str,
	value: Option<&Value>,
	vocab: bool,
	reverse: bool,
) -> String {
	if vocab && active_context.inverse().contains(iri) {
		if let Some(term) = select_term(active_context, iri, value, reverse) {
			return term;
		}
	}

	if vocab {
		if let Some(vocabulary) = active_context.vocabulary() {
			if let Some(suffix) = iri.strip_prefix(vocabulary) {
				if !suffix.is_empty() && !active_context.contains_term(suffix) {
					return suffix.to_owned();
				}
			}
		}
	}

	if let Some(compact_iri) = select_compact_iri(active_context, iri, value) {
		return compact_iri;
	}

	if !vocab {
		if let Some(base_iri) = active_context.base_iri() {
			if let Ok(iri) = Iri::new(iri) {
				return iri.relative_to(base_iri).as_str().to_owned();
			}
		}
	}

	iri.to_owned()
}

/// Selects the term defined for `iri` best matching the shape of `value`.
fn select_term(
	active_context: &Context,
	iri: &str,
	value: Option<&Value>,
	reverse: bool,
) -> Option<String> {
	let default_language = active_context.default_language().unwrap_or(NONE);
	let object = value.and_then(Value::as_object);

	let mut containers = Vec::new();
	if object.map_or(false, |o| o.contains_key("@index")) {
		containers.push(Some(Container::Index));
	}

	let mut type_selection = false;
	let mut type_or_language_value = NULL_LANGUAGE.to_owned();

	if reverse {
		type_selection = true;
		type_or_language_value = REVERSE.to_owned();
	} else if let Some(list) = object.filter(|o| o.contains_key("@list")) {
		if !list.contains_key("@index") {
			containers.push(Some(Container::List));
		}

		let items = list
			.get("@list")
			.and_then(Value::as_array)
			.map(Vec::as_slice)
			.unwrap_or_default();

		let mut common_type: Option<String> = None;
		let mut common_language: Option<String> = if items.is_empty() {
			Some(default_language.to_owned())
		} else {
			None
		};

		for item in items {
			let mut item_language = NONE;
			let mut item_type = NONE;

			if is_value_object(item) {
				if let Some(lang) = item.get("@language").and_then(Value::as_str) {
					item_language = lang
				} else if let Some(ty) = item.get("@type").and_then(Value::as_str) {
					item_type = ty
				} else {
					item_language = NULL_LANGUAGE
				}
			} else {
				item_type = "@id"
			}

			match &common_language {
				None => common_language = Some(item_language.to_owned()),
				Some(l) if l != item_language && is_value_object(item) => {
					common_language = Some(NONE.to_owned())
				}
				_ => (),
			}

			match &common_type {
				None => common_type = Some(item_type.to_owned()),
				Some(t) if t != item_type => common_type = Some(NONE.to_owned()),
				_ => (),
			}

			if common_language.as_deref() == Some(NONE) && common_type.as_deref() == Some(NONE) {
				break;
			}
		}

		let common_language = common_language.unwrap_or_else(|| NONE.to_owned());
		let common_type = common_type.unwrap_or_else(|| NONE.to_owned());

		if common_type != NONE {
			type_selection = true;
			type_or_language_value = common_type
		} else {
			type_or_language_value = common_language
		}
	} else {
		match object {
			Some(o) if o.contains_key("@value") => {
				if let (Some(lang), false) = (
					o.get("@language").and_then(Value::as_str),
					o.contains_key("@index"),
				) {
					type_or_language_value = lang.to_owned();
					containers.push(Some(Container::Language));
				} else if let Some(ty) = o.get("@type").and_then(Value::as_str) {
					type_selection = true;
					type_or_language_value = ty.to_owned();
				}
			}
			_ => {
				type_selection = true;
				type_or_language_value = "@id".to_owned();
			}
		}

		containers.push(Some(Container::Set));
	}

	containers.push(None);

	let mut preferred_values = Vec::new();
	if type_or_language_value == REVERSE {
		preferred_values.push(REVERSE.to_owned());
	}

	let id = object.and_then(|o| o.get("@id")).and_then(Value::as_str);
	match id {
		Some(id) if type_or_language_value == "@id" || type_or_language_value == REVERSE => {
			let compacted = compact_iri(active_context, id, None, true, false);
			let maps_back = active_context
				.get(&compacted)
				.and_then(|d| d.id.as_deref())
				== Some(id);

			if maps_back {
				preferred_values.push("@vocab".to_owned());
				preferred_values.push("@id".to_owned());
			} else {
				preferred_values.push("@id".to_owned());
				preferred_values.push("@vocab".to_owned());
			}
		}
		_ => preferred_values.push(type_or_language_value),
	}

	preferred_values.push(NONE.to_owned());

	let selection = if type_selection {
		Selection::Type(preferred_values)
	} else {
		Selection::Lang(preferred_values)
	};

	active_context
		.inverse()
		.select(iri, &containers, &selection)
		.map(ToOwned::to_owned)
}

/// Selects the shortest then lexicographically least usable compact IRI.
fn select_compact_iri(active_context: &Context, iri: &str, value: Option<&Value>) -> Option<String> {
	let mut choice: Option<String> = None;

	for (term, definition) in active_context.definitions() {
		if term.contains(':') {
			continue;
		}

		let prefix_iri = match definition.id.as_deref() {
			Some(id) if id != iri && !definition.is_keyword_alias() => id,
			_ => continue,
		};

		let suffix = match iri.strip_prefix(prefix_iri) {
			Some(suffix) => suffix,
			None => continue,
		};

		let candidate = format!("{term}:{suffix}");
		let usable = match active_context.get(&candidate) {
			None => true,
			Some(d) => value.is_none() && d.id.as_deref() == Some(iri),
		};

		if usable
			&& choice
				.as_deref()
				.map_or(true, |c| compare_shortest_least(&candidate, c).is_lt())
		{
			choice = Some(candidate)
		}
	}

	choice
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::TermDefinition;
	use serde_json::json;

	#[test]
	fn prefers_shortest_term() {
		let mut context = Context::new(None);
		context.set("name", TermDefinition::from_id("http://schema.org/name"));
		context.set("nm", TermDefinition::from_id("http://schema.org/name"));

		let value = json!({"@value": "A"});
		assert_eq!(
			compact_iri(&context, "http://schema.org/name", Some(&value), true, false),
			"nm"
		);
	}

	#[test]
	fn compact_iri_fallback() {
		let mut context = Context::new(None);
		context.set("schema", TermDefinition::from_id("http://schema.org/"));
		context.set("s", TermDefinition::from_id("http://schema.org/"));

		assert_eq!(
			compact_iri(&context, "http://schema.org/name", None, true, false),
			"s:name"
		);
		assert_eq!(
			compact_iri(&context, "http://other.org/name", None, true, false),
			"http://other.org/name"
		);
	}

	#[test]
	fn vocab_relative() {
		let mut context = Context::new(None);
		context.set_vocabulary(Some("http://schema.org/".to_owned()));
		context.set("name", TermDefinition::from_id("http://example.org/name"));

		assert_eq!(
			compact_iri(&context, "http://schema.org/knows", None, true, false),
			"knows"
		);
		// `name` would expand to another IRI.
		assert_eq!(
			compact_iri(&context, "http://schema.org/name", None, true, false),
			"http://schema.org/name"
		);
	}
}
