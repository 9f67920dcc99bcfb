use serde_json::{Map, Value};

use super::{compact_iri, Compactor};
use crate::{
	algorithms::Error,
	util::{add_value, as_array, is_list_object},
	Container, Keyword,
};

impl<'a> Compactor<'a> {
	/// Compacts a node object, value object that cannot be reduced to a
	/// scalar, or list object.
	pub fn compact_object(
		&self,
		active_property: Option<&str>,
		element: &Map<String, Value>,
	) -> Result<Map<String, Value>, Error> {
		let inside_reverse = active_property == Some(Keyword::Reverse.as_str());
		let active_container = active_property
			.and_then(|p| self.active_context.get(p))
			.and_then(|d| d.container);

		let mut result = Map::new();

		let mut keys: Vec<_> = element.keys().collect();
		if self.options.ordered {
			keys.sort();
		}

		for expanded_property in keys {
			let expanded_value = &element[expanded_property];

			match expanded_property.as_str() {
				"@id" => {
					let compacted = match expanded_value {
						Value::String(id) => {
							Value::String(compact_iri(self.active_context, id, None, false, false))
						}
						other => other.clone(),
					};

					result.insert(self.keyword(Keyword::Id), compacted);
					continue;
				}
				"@type" => {
					let mut types: Vec<Value> = as_array(expanded_value)
						.iter()
						.map(|ty| match ty {
							Value::String(ty) => {
								Value::String(compact_iri(self.active_context, ty, None, true, false))
							}
							other => other.clone(),
						})
						.collect();

					let compacted = if expanded_value.is_array()
						&& !(self.options.compact_arrays && types.len() == 1)
					{
						Value::Array(types)
					} else {
						types.remove(0)
					};

					result.insert(self.keyword(Keyword::Type), compacted);
					continue;
				}
				"@reverse" => {
					let compacted = self.compact_element(Some(Keyword::Reverse.as_str()), expanded_value)?;

					if let Value::Object(compacted) = compacted {
						let mut remaining = Map::new();
						for (property, value) in compacted {
							match self.active_context.get(&property) {
								Some(definition) if definition.reverse => {
									add_value(
										&mut result,
										&property,
										value,
										!self.options.compact_arrays,
										true,
									)
								}
								_ => {
									remaining.insert(property, value);
								}
							}
						}

						if !remaining.is_empty() {
							result.insert(self.keyword(Keyword::Reverse), Value::Object(remaining));
						}
					}

					continue;
				}
				"@index" if active_container == Some(Container::Index) => continue,
				"@index" | "@value" | "@language" => {
					let keyword = Keyword::try_from(expanded_property.as_str())
						.map_err(|_| Error::InvalidValueObject("unexpected entry"))?;
					result.insert(self.keyword(keyword), expanded_value.clone());
					continue;
				}
				_ => (),
			}

			let items = as_array(expanded_value);

			if items.is_empty() {
				let item_active_property = compact_iri(
					self.active_context,
					expanded_property,
					Some(expanded_value),
					true,
					inside_reverse,
				);

				add_value(
					&mut result,
					&item_active_property,
					Value::Array(Vec::new()),
					true,
					true,
				);
			}

			for expanded_item in items {
				self.compact_property_item(
					&mut result,
					expanded_property,
					expanded_item,
					inside_reverse,
				)?;
			}
		}

		Ok(result)
	}

	fn compact_property_item(
		&self,
		result: &mut Map<String, Value>,
		expanded_property: &str,
		expanded_item: &Value,
		inside_reverse: bool,
	) -> Result<(), Error> {
		if let Some(preserved) = expanded_item.get(Keyword::Preserve.as_str()) {
			return self.compact_preserved(result, expanded_property, preserved, inside_reverse);
		}

		let item_active_property = compact_iri(
			self.active_context,
			expanded_property,
			Some(expanded_item),
			true,
			inside_reverse,
		);
		let container = self
			.active_context
			.get(&item_active_property)
			.and_then(|d| d.container);

		let list = if is_list_object(expanded_item) {
			expanded_item.get("@list")
		} else {
			None
		};

		let mut compacted_item = match list {
			Some(list) => self.compact_element(Some(&item_active_property), list)?,
			None => self.compact_element(Some(&item_active_property), expanded_item)?,
		};

		if list.is_some() {
			if !compacted_item.is_array() {
				compacted_item = Value::Array(vec![compacted_item])
			}

			if container != Some(Container::List) {
				let mut wrapper = Map::new();
				wrapper.insert(self.keyword(Keyword::List), compacted_item);
				if let Some(index) = expanded_item.get("@index") {
					wrapper.insert(self.keyword(Keyword::Index), index.clone());
				}

				compacted_item = Value::Object(wrapper)
			} else if result.contains_key(&item_active_property) {
				return Err(Error::CompactionToListOfLists(item_active_property));
			}
		}

		match container {
			Some(c @ (Container::Language | Container::Index)) => {
				let key = expanded_item
					.get(c.as_str())
					.and_then(Value::as_str)
					.unwrap_or("@none")
					.to_owned();

				if c == Container::Language {
					if let Some(value) = compacted_item.get("@value") {
						compacted_item = value.clone()
					}
				}

				let map_object = result
					.entry(item_active_property)
					.or_insert_with(|| Value::Object(Map::new()));

				if let Value::Object(map_object) = map_object {
					add_value(map_object, &key, compacted_item, false, true)
				}
			}
			_ => {
				let as_array = !self.options.compact_arrays
					|| matches!(container, Some(Container::Set | Container::List))
					|| expanded_property == "@list"
					|| expanded_property == "@graph";

				add_value(result, &item_active_property, compacted_item, as_array, true)
			}
		}

		Ok(())
	}

	/// Compacts a `@preserve` placeholder left by framing.
	///
	/// The term is selected for the preserved value, which is compacted
	/// under that term and wrapped again.
	fn compact_preserved(
		&self,
		result: &mut Map<String, Value>,
		expanded_property: &str,
		preserved: &Value,
		inside_reverse: bool,
	) -> Result<(), Error> {
		let content = match as_array(preserved).first() {
			Some(content) => content,
			None => return Ok(()),
		};

		let selection_value = match content {
			Value::String(s) if s == Keyword::Null.as_str() => None,
			content => Some(content),
		};

		let item_active_property = compact_iri(
			self.active_context,
			expanded_property,
			selection_value,
			true,
			inside_reverse,
		);
		let container = self
			.active_context
			.get(&item_active_property)
			.and_then(|d| d.container);

		let mut wrapper = Map::new();
		wrapper.insert(
			Keyword::Preserve.as_str().to_owned(),
			self.compact_element(Some(&item_active_property), content)?,
		);

		let as_array = !self.options.compact_arrays
			|| matches!(container, Some(Container::Set | Container::List));

		add_value(result, &item_active_property, Value::Object(wrapper), as_array, true);
		Ok(())
	}
}
