//! Framing algorithm.
//!
//! Reconstructs a tree from the flattened nodes of an expanded document,
//! following the shape of a frame.
use serde_json::{Map, Value};

use crate::{
	algorithms::{
		flattening::{generate_node_map, NodeMap},
		Error,
	},
	BlankIdGenerator, Container, Context, Keyword,
};

mod framer;
mod options;

use framer::Framer;
pub use options::*;

/// Frames the given expanded document.
///
/// The frame must be an expanded frame holding exactly one node object.
/// Every graph of the document is merged before framing. The result is
/// expanded and may contain `@preserve` placeholders for the frame defaults,
/// see [`remove_preserve`].
pub fn frame(
	expanded: &[Value],
	expanded_frame: &[Value],
	generator: &mut BlankIdGenerator,
	options: FramingOptions,
) -> Result<Vec<Value>, Error> {
	let frame = match expanded_frame {
		[Value::Object(frame)] => frame,
		[_] => return Err(Error::InvalidFrame("a frame must be an object")),
		_ => return Err(Error::InvalidFrame("a frame must be a single object")),
	};

	let mut node_map = NodeMap::new();
	for element in expanded {
		generate_node_map(element, &mut node_map, generator)?;
	}

	let subjects = node_map.merge();
	Framer::new(&subjects, options).run(frame)
}

/// Removes the `@preserve` placeholders of a compacted framing result.
///
/// A placeholder is replaced by its content, and the `@null` sentinel by
/// `null`. Nulls are removed from arrays. When `compact_arrays` is set,
/// single-element arrays of properties without container are replaced by
/// their element.
pub fn remove_preserve(active_context: &Context, value: Value, compact_arrays: bool) -> Value {
	match value {
		Value::Array(items) => Value::Array(
			items
				.into_iter()
				.map(|item| remove_preserve(active_context, item, compact_arrays))
				.filter(|item| !item.is_null())
				.collect(),
		),
		Value::Object(mut object) => {
			if let Some(preserved) = object.remove(Keyword::Preserve.as_str()) {
				return match preserved {
					Value::Array(mut items) if items.len() == 1 => unwrap_null(items.remove(0)),
					other => unwrap_null(other),
				};
			}

			if object.contains_key(Keyword::Value.as_str()) {
				return Value::Object(object);
			}

			if let Some(list) = object.remove(Keyword::List.as_str()) {
				object.insert(
					Keyword::List.as_str().to_owned(),
					remove_preserve(active_context, list, compact_arrays),
				);
				return Value::Object(object);
			}

			let result: Map<String, Value> = object
				.into_iter()
				.map(|(property, value)| {
					let mut value = remove_preserve(active_context, value, compact_arrays);

					let container: Option<Container> =
						active_context.get(&property).and_then(|d| d.container);

					if compact_arrays && container.is_none() {
						if let Value::Array(items) = &mut value {
							if items.len() == 1 {
								value = items.remove(0)
							}
						}
					}

					(property, value)
				})
				.collect();

			Value::Object(result)
		}
		other => other,
	}
}

fn unwrap_null(value: Value) -> Value {
	match value {
		Value::String(s) if s == Keyword::Null.as_str() => Value::Null,
		other => other,
	}
}
