use serde_json::{Map, Value};

/// Views the given value as a slice, wrapping non-array values.
pub fn as_array(value: &Value) -> &[Value] {
	match value {
		Value::Array(items) => items.as_slice(),
		other => std::slice::from_ref(other),
	}
}

/// Converts the given value into an array if it is not already.
pub fn into_array(value: Value) -> Vec<Value> {
	match value {
		Value::Array(items) => items,
		other => vec![other],
	}
}

/// Checks if the value is a scalar (string, number or boolean).
pub fn is_scalar(value: &Value) -> bool {
	matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// Checks if the value is a value object (has a `@value` entry).
pub fn is_value_object(value: &Value) -> bool {
	value.as_object().map_or(false, |o| o.contains_key("@value"))
}

/// Checks if the value is a list object (has a `@list` entry).
pub fn is_list_object(value: &Value) -> bool {
	value.as_object().map_or(false, |o| o.contains_key("@list"))
}

/// Checks if the value is a node reference: an object whose only entry is
/// `@id`.
pub fn is_node_reference(value: &Value) -> bool {
	value
		.as_object()
		.map_or(false, |o| o.len() == 1 && o.contains_key("@id"))
}

/// Checks if the value is a node object.
pub fn is_node_object(value: &Value) -> bool {
	match value.as_object() {
		Some(o) => {
			!o.contains_key("@value")
				&& !o.contains_key("@list")
				&& !o.contains_key("@set")
				&& (o.len() > 1 || !o.contains_key("@id"))
		}
		None => false,
	}
}

/// Structural comparison used to detect duplicate property values.
///
/// Value objects compare on `@value`, `@type`, `@language` and `@index`,
/// node objects on `@id`, and anything else by deep equality (member order
/// is ignored).
pub fn deep_compare(a: &Value, b: &Value) -> bool {
	if a == b {
		return true;
	}

	match (a, b) {
		(Value::Object(a), Value::Object(b)) => {
			if a.contains_key("@value") && b.contains_key("@value") {
				return ["@value", "@type", "@language", "@index"]
					.iter()
					.all(|k| a.get(*k) == b.get(*k));
			}

			match (a.get("@id"), b.get("@id")) {
				(Some(Value::String(x)), Some(Value::String(y))) => {
					!a.contains_key("@value") && !b.contains_key("@value") && x == y
				}
				_ => false,
			}
		}
		_ => false,
	}
}

/// Checks if the given property of `subject` already holds `value`.
pub fn has_value(subject: &Map<String, Value>, property: &str, value: &Value) -> bool {
	match subject.get(property) {
		Some(v) if is_list_object(v) && !is_list_object(value) => false,
		Some(v) => as_array(v).iter().any(|item| deep_compare(item, value)),
		None => false,
	}
}

/// Adds a value to a property of `subject`.
///
/// When `as_array` is set the property always holds an array, even for a
/// single value. Duplicates (according to [`deep_compare`]) are skipped
/// unless `allow_duplicate` is set.
pub fn add_value(
	subject: &mut Map<String, Value>,
	property: &str,
	value: Value,
	as_array: bool,
	allow_duplicate: bool,
) {
	match value {
		Value::Array(items) => {
			if items.is_empty() && as_array && !subject.contains_key(property) {
				subject.insert(property.to_owned(), Value::Array(Vec::new()));
			}

			for item in items {
				add_value(subject, property, item, as_array, allow_duplicate)
			}
		}
		value => {
			if !allow_duplicate && has_value(subject, property, &value) {
				return;
			}

			match subject.get_mut(property) {
				Some(Value::Array(items)) => items.push(value),
				Some(existing) => {
					let previous = existing.take();
					*existing = Value::Array(vec![previous, value]);
				}
				None => {
					let value = if as_array {
						Value::Array(vec![value])
					} else {
						value
					};
					subject.insert(property.to_owned(), value);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn add_value_skips_duplicates() {
		let mut subject = Map::new();
		add_value(&mut subject, "p", json!({"@id": "ex:a"}), true, false);
		add_value(&mut subject, "p", json!({"@id": "ex:a", "ex:q": 1}), true, false);
		add_value(&mut subject, "p", json!({"@value": "x"}), true, false);
		assert_eq!(
			Value::Object(subject),
			json!({"p": [{"@id": "ex:a"}, {"@value": "x"}]})
		)
	}

	#[test]
	fn add_value_single() {
		let mut subject = Map::new();
		add_value(&mut subject, "p", json!("a"), false, true);
		assert_eq!(subject["p"], json!("a"));
		add_value(&mut subject, "p", json!("a"), false, true);
		assert_eq!(subject["p"], json!(["a", "a"]));
	}
}
