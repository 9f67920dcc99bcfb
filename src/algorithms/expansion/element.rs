use mown::Mown;
use serde_json::{Map, Value};

use super::{expand_literal, Expander};
use crate::{
	algorithms::{context_processing::normalize_language, Error, ProcessingEnvironment, Warning},
	is_keyword,
	util::{add_value, as_array, into_array, is_absolute_iri, is_list_object, is_scalar, is_value_object},
	Container, Context, Keyword,
};

/// Checks if the given active property is a top-level position, where
/// free-floating values are dropped.
fn is_top_level(active_property: Option<&str>) -> bool {
	matches!(active_property, None | Some("@graph"))
}

fn sorted_keys(map: &Map<String, Value>, ordered: bool) -> Vec<&String> {
	let mut keys: Vec<_> = map.keys().collect();
	if ordered {
		keys.sort();
	}

	keys
}

impl<'a> Expander<'a> {
	/// Expands an element.
	///
	/// Returns `Value::Null` when the element is dropped.
	pub fn expand_element(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &Context,
		active_property: Option<&str>,
		element: &Value,
		inside_list: bool,
	) -> Result<Value, Error> {
		match element {
			Value::Null => Ok(Value::Null),
			Value::Array(items) => {
				self.expand_array(env, active_context, active_property, items, inside_list)
			}
			Value::Object(map) => self.expand_object(env, active_context, active_property, map),
			scalar => {
				if is_top_level(active_property) {
					Ok(Value::Null)
				} else {
					Ok(expand_literal(active_context, active_property, scalar))
				}
			}
		}
	}

	fn expand_object(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &Context,
		active_property: Option<&str>,
		element: &Map<String, Value>,
	) -> Result<Value, Error> {
		let active_context = match element.get(Keyword::Context.as_str()) {
			Some(local_context) => Mown::Owned(active_context.process_with(
				env,
				local_context,
				self.base_url,
				self.options.into(),
			)?),
			None => Mown::Borrowed(active_context),
		};
		let active_context = active_context.as_ref();

		let mut result = Map::new();

		for key in sorted_keys(element, self.options.ordered) {
			let value = &element[key];

			if key == Keyword::Context.as_str() {
				continue;
			}

			let expanded_property = match active_context.expand_iri(key, false, true) {
				Some(p) if is_keyword(&p) || is_absolute_iri(&p) => p,
				Some(_) => {
					env.warn(Warning::DroppedKey(key.clone()));
					continue;
				}
				None => continue,
			};

			match Keyword::try_from(expanded_property.as_str()) {
				Ok(keyword) => {
					if active_property == Some(Keyword::Reverse.as_str()) {
						return Err(Error::InvalidReversePropertyMap);
					}

					if result.contains_key(keyword.as_str()) {
						return Err(Error::CollidingKeywords(keyword.as_str().to_owned()));
					}

					self.expand_keyword_entry(
						env,
						active_context,
						active_property,
						keyword,
						value,
						&mut result,
					)?;
				}
				Err(_) => {
					self.expand_property_entry(
						env,
						active_context,
						key,
						&expanded_property,
						value,
						&mut result,
					)?;
				}
			}
		}

		self.finish_object(active_property, result)
	}

	fn expand_keyword_entry(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &Context,
		active_property: Option<&str>,
		keyword: Keyword,
		value: &Value,
		result: &mut Map<String, Value>,
	) -> Result<(), Error> {
		let frame = self.options.frame_expansion;

		let expanded_value = match keyword {
			Keyword::Id => match value {
				Value::String(id) => expand_id(active_context, id),
				Value::Object(o) if frame && o.is_empty() => value.clone(),
				Value::Array(ids) if frame => {
					let mut expanded = Vec::with_capacity(ids.len());
					for id in ids {
						match id {
							Value::String(id) => expanded.push(expand_id(active_context, id)),
							other => return Err(Error::InvalidIdValue(other.clone())),
						}
					}

					Value::Array(expanded)
				}
				other => return Err(Error::InvalidIdValue(other.clone())),
			},
			Keyword::Type => match value {
				Value::String(ty) => expand_type(active_context, ty),
				Value::Object(o) if frame && o.is_empty() => value.clone(),
				Value::Array(types) => {
					let mut expanded = Vec::with_capacity(types.len());
					for ty in types {
						match ty {
							Value::String(ty) => {
								let ty = expand_type(active_context, ty);
								if !ty.is_null() {
									expanded.push(ty)
								}
							}
							Value::Object(o) if frame && o.is_empty() => expanded.push(ty.clone()),
							other => return Err(Error::InvalidTypeValue(other.clone())),
						}
					}

					Value::Array(expanded)
				}
				other => return Err(Error::InvalidTypeValue(other.clone())),
			},
			Keyword::Graph => {
				let expanded = self.expand_element(
					env,
					active_context,
					Some(Keyword::Graph.as_str()),
					value,
					false,
				)?;

				Value::Array(match expanded {
					Value::Null => Vec::new(),
					expanded => into_array(expanded),
				})
			}
			Keyword::Value => {
				if !frame && !(value.is_null() || is_scalar(value)) {
					return Err(Error::InvalidValueObjectValue(value.clone()));
				}

				result.insert(keyword.as_str().to_owned(), value.clone());
				return Ok(());
			}
			Keyword::Language => match value {
				Value::String(lang) => Value::String(normalize_language(env, lang)),
				_ if frame => value.clone(),
				other => return Err(Error::InvalidLanguageTaggedString(other.clone())),
			},
			Keyword::Index => match value {
				Value::String(_) => value.clone(),
				other => return Err(Error::InvalidIndexValue(other.clone())),
			},
			Keyword::List => {
				if is_top_level(active_property) {
					return Ok(());
				}

				let expanded =
					self.expand_element(env, active_context, active_property, value, true)?;

				if is_list_object(&expanded) {
					return Err(Error::ListOfLists);
				}

				Value::Array(match expanded {
					Value::Null => Vec::new(),
					expanded => into_array(expanded),
				})
			}
			Keyword::Set => self.expand_element(env, active_context, active_property, value, false)?,
			Keyword::Reverse => {
				if !value.is_object() {
					return Err(Error::InvalidReverseValue);
				}

				let expanded = self.expand_element(
					env,
					active_context,
					Some(Keyword::Reverse.as_str()),
					value,
					false,
				)?;

				if let Value::Object(mut expanded) = expanded {
					if let Some(Value::Object(double_reversed)) =
						expanded.remove(Keyword::Reverse.as_str())
					{
						for (property, items) in double_reversed {
							add_value(result, &property, items, true, true)
						}
					}

					if !expanded.is_empty() {
						let reverse_map = reverse_map_mut(result);
						for (property, items) in expanded {
							for item in into_array(items) {
								if is_value_object(&item) || is_list_object(&item) {
									return Err(Error::InvalidReversePropertyValue);
								}

								add_value(reverse_map, &property, item, true, true)
							}
						}
					}
				}

				return Ok(());
			}
			Keyword::Default if frame => {
				match self.expand_element(env, active_context, active_property, value, false)? {
					Value::Null => value.clone(),
					expanded => expanded,
				}
			}
			Keyword::Embed | Keyword::Explicit | Keyword::OmitDefault | Keyword::RequireAll
				if frame =>
			{
				value.clone()
			}
			_ => return Ok(()),
		};

		if !expanded_value.is_null() {
			result.insert(keyword.as_str().to_owned(), expanded_value);
		}

		Ok(())
	}

	fn expand_property_entry(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &Context,
		key: &str,
		expanded_property: &str,
		value: &Value,
		result: &mut Map<String, Value>,
	) -> Result<(), Error> {
		let definition = active_context.get(key);
		let container = definition.and_then(|d| d.container);

		let mut expanded_value = match (container, value) {
			(Some(Container::Language), Value::Object(language_map)) => {
				let mut expanded = Vec::new();
				for language in sorted_keys(language_map, self.options.ordered) {
					for item in as_array(&language_map[language]) {
						match item {
							Value::String(_) => {
								let mut value_object = Map::new();
								value_object.insert("@value".to_owned(), item.clone());
								value_object.insert(
									"@language".to_owned(),
									Value::String(language.to_lowercase()),
								);
								expanded.push(Value::Object(value_object))
							}
							other => return Err(Error::InvalidLanguageMapValue(other.clone())),
						}
					}
				}

				Value::Array(expanded)
			}
			(Some(Container::Index), Value::Object(index_map)) => {
				let mut expanded = Vec::new();
				for index in sorted_keys(index_map, self.options.ordered) {
					let items = Value::Array(as_array(&index_map[index]).to_vec());
					let expanded_items =
						self.expand_element(env, active_context, Some(key), &items, false)?;

					for mut item in into_array(expanded_items) {
						if let Value::Object(item) = &mut item {
							if !item.contains_key("@index") {
								item.insert("@index".to_owned(), Value::String(index.clone()));
							}
						}

						expanded.push(item)
					}
				}

				Value::Array(expanded)
			}
			_ => self.expand_element(env, active_context, Some(key), value, false)?,
		};

		if expanded_value.is_null() {
			return Ok(());
		}

		if container == Some(Container::List) && !is_list_object(&expanded_value) {
			let mut list = Map::new();
			list.insert("@list".to_owned(), Value::Array(into_array(expanded_value)));
			expanded_value = Value::Object(list)
		}

		if definition.map_or(false, |d| d.reverse) {
			let reverse_map = reverse_map_mut(result);
			for item in into_array(expanded_value) {
				if is_value_object(&item) || is_list_object(&item) {
					return Err(Error::InvalidReversePropertyValue);
				}

				add_value(reverse_map, expanded_property, item, true, true)
			}
		} else {
			add_value(result, expanded_property, expanded_value, true, true)
		}

		Ok(())
	}

	/// Validates and simplifies an expanded object.
	fn finish_object(
		&self,
		active_property: Option<&str>,
		mut result: Map<String, Value>,
	) -> Result<Value, Error> {
		let frame = self.options.frame_expansion;

		if let Some(value) = result.get("@value") {
			if result
				.keys()
				.any(|k| !matches!(k.as_str(), "@value" | "@language" | "@type" | "@index"))
			{
				return Err(Error::InvalidValueObject("unexpected entry"));
			}

			if result.contains_key("@language") && result.contains_key("@type") {
				return Err(Error::InvalidValueObject(
					"both `@language` and `@type` are present",
				));
			}

			if value.is_null() {
				return Ok(Value::Null);
			}

			if !frame && !value.is_string() && result.contains_key("@language") {
				return Err(Error::InvalidLanguageTaggedValue(value.clone()));
			}

			if let Some(ty) = result.get("@type") {
				let valid = match ty {
					Value::String(ty) => is_absolute_iri(ty),
					_ => frame,
				};

				if !valid {
					return Err(Error::InvalidTypedValue(ty.clone()));
				}
			}
		} else if let Some(ty) = result.get_mut("@type") {
			if !ty.is_array() {
				*ty = Value::Array(vec![ty.take()])
			}
		} else if result.contains_key("@set") || result.contains_key("@list") {
			if result.len() > 2 || (result.len() == 2 && !result.contains_key("@index")) {
				return Err(Error::InvalidSetOrListObject);
			}

			if let Some(set) = result.remove("@set") {
				return Ok(set);
			}
		}

		if result.len() == 1 && result.contains_key("@language") {
			return Ok(Value::Null);
		}

		if is_top_level(active_property)
			&& (result.contains_key("@value")
				|| result.contains_key("@list")
				|| (!frame
					&& (result.is_empty() || (result.len() == 1 && result.contains_key("@id")))))
		{
			return Ok(Value::Null);
		}

		Ok(Value::Object(result))
	}
}

fn expand_id(active_context: &Context, id: &str) -> Value {
	active_context
		.expand_iri(id, true, false)
		.map(Value::String)
		.unwrap_or(Value::Null)
}

fn expand_type(active_context: &Context, ty: &str) -> Value {
	active_context
		.expand_iri(ty, true, true)
		.map(Value::String)
		.unwrap_or(Value::Null)
}

fn reverse_map_mut(result: &mut Map<String, Value>) -> &mut Map<String, Value> {
	let entry = result
		.entry("@reverse")
		.or_insert_with(|| Value::Object(Map::new()));

	if !entry.is_object() {
		*entry = Value::Object(Map::new())
	}

	match entry {
		Value::Object(map) => map,
		_ => unreachable!(),
	}
}
