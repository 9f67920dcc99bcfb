//! Compaction algorithm.
//!
//! See: <https://www.w3.org/TR/json-ld-api/#compaction-algorithms>
use serde_json::{Map, Value};

mod iri;
mod node;
mod options;
mod value;

pub use iri::compact_iri;
pub use options::*;
pub use value::compact_value;

use crate::{algorithms::Error, Context, Keyword};

/// Compactor.
pub(crate) struct Compactor<'a> {
	pub options: CompactionOptions,
	pub active_context: &'a Context,
}

impl<'a> Compactor<'a> {
	pub fn new(active_context: &'a Context, options: CompactionOptions) -> Self {
		Self {
			options,
			active_context,
		}
	}

	/// Compacts the alias of the given keyword.
	pub fn keyword(&self, keyword: Keyword) -> String {
		compact_iri(self.active_context, keyword.as_str(), None, true, false)
	}

	/// Compacts an expanded element.
	pub fn compact_element(&self, active_property: Option<&str>, element: &Value) -> Result<Value, Error> {
		match element {
			Value::Array(items) => {
				let mut result = Vec::with_capacity(items.len());
				for item in items {
					let compacted = self.compact_element(active_property, item)?;
					if !compacted.is_null() {
						result.push(compacted)
					}
				}

				let container = active_property
					.and_then(|p| self.active_context.get(p))
					.and_then(|d| d.container);

				if self.options.compact_arrays && result.len() == 1 && container.is_none() {
					Ok(result.remove(0))
				} else {
					Ok(Value::Array(result))
				}
			}
			Value::Object(object) => {
				if object.contains_key("@value") || is_reference(object) {
					if let Some(scalar) = compact_value(self.active_context, active_property, object) {
						return Ok(scalar);
					}
				}

				self.compact_object(active_property, object).map(Value::Object)
			}
			scalar => Ok(scalar.clone()),
		}
	}
}

fn is_reference(object: &Map<String, Value>) -> bool {
	object.len() == 1 && object.contains_key("@id")
}

/// Compacts the given expanded document with the given context.
///
/// `context` is the local context that was processed into `active_context`.
/// It is inserted as the `@context` entry of the result unless it is empty.
/// A result holding more than one top-level node is wrapped in a `@graph`
/// entry.
pub fn compact(
	active_context: &Context,
	context: &Value,
	expanded: &[Value],
	options: CompactionOptions,
) -> Result<Value, Error> {
	let compactor = Compactor::new(active_context, options);
	let compacted = compactor.compact_element(None, &Value::Array(expanded.to_vec()))?;

	let body = match compacted {
		Value::Array(items) => {
			let mut map = Map::new();
			if !items.is_empty() {
				map.insert(compactor.keyword(Keyword::Graph), Value::Array(items));
			}

			map
		}
		Value::Object(map) => map,
		other => {
			let mut map = Map::new();
			map.insert(compactor.keyword(Keyword::Graph), other);
			map
		}
	};

	Ok(Value::Object(with_context(context, body)))
}

/// Compacts the given list of expanded nodes, always wrapping the result in
/// a `@graph` entry.
///
/// Used to compact flattened and framed documents.
pub fn compact_graph(
	active_context: &Context,
	context: &Value,
	nodes: &[Value],
	options: CompactionOptions,
) -> Result<Value, Error> {
	let compactor = Compactor::new(active_context, options);

	let mut items = Vec::with_capacity(nodes.len());
	for node in nodes {
		let compacted = compactor.compact_element(None, node)?;
		if !compacted.is_null() {
			items.push(compacted)
		}
	}

	let mut body = Map::new();
	body.insert(compactor.keyword(Keyword::Graph), Value::Array(items));

	Ok(Value::Object(with_context(context, body)))
}

/// Inserts the `@context` entry at the front of the given object.
pub(crate) fn with_context(context: &Value, body: Map<String, Value>) -> Map<String, Value> {
	let non_empty = match context {
		Value::Null => false,
		Value::Object(o) => !o.is_empty(),
		Value::Array(a) => !a.is_empty(),
		_ => true,
	};

	if non_empty {
		let mut result = Map::new();
		result.insert(Keyword::Context.as_str().to_owned(), context.clone());
		result.extend(body);
		result
	} else {
		body
	}
}
