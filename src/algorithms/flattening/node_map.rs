use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{
	algorithms::Error,
	blank::is_blank_id,
	util::{add_value, deep_compare},
	BlankIdGenerator,
};

/// Name of the default graph in the JSON rendering of a node map.
pub const DEFAULT_GRAPH: &str = "@default";

/// Graph name to node map graph map.
#[derive(Clone, Debug, Default)]
pub struct NodeMap {
	graphs: IndexMap<String, NodeMapGraph>,
	default_graph: NodeMapGraph,
}

impl NodeMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn iter(&self) -> Iter {
		Iter {
			default_graph: Some(&self.default_graph),
			graphs: self.graphs.iter(),
		}
	}

	pub fn iter_named(&self) -> indexmap::map::Iter<String, NodeMapGraph> {
		self.graphs.iter()
	}

	pub fn default_graph(&self) -> &NodeMapGraph {
		&self.default_graph
	}

	/// Returns the given graph, or the default graph if `id` is `None`.
	pub fn graph(&self, id: Option<&str>) -> Option<&NodeMapGraph> {
		match id {
			Some(id) => self.graphs.get(id),
			None => Some(&self.default_graph),
		}
	}

	pub fn graph_mut(&mut self, id: Option<&str>) -> Option<&mut NodeMapGraph> {
		match id {
			Some(id) => self.graphs.get_mut(id),
			None => Some(&mut self.default_graph),
		}
	}

	pub fn declare_graph(&mut self, id: &str) {
		if !self.graphs.contains_key(id) {
			log::debug!("new graph `{id}`");
			self.graphs.insert(id.to_owned(), NodeMapGraph::new());
		}
	}

	/// Merge all the graphs into a single `NodeMapGraph`.
	///
	/// Types and property values of a node described in more than one graph
	/// are unioned. Other keyword entries are overwritten by the last graph.
	pub fn merge(&self) -> NodeMapGraph {
		let mut result = NodeMapGraph::new();

		for (_, graph) in self {
			let mut ids: Vec<_> = graph.nodes.keys().collect();
			ids.sort();

			for id in ids {
				let node = &graph.nodes[id];
				let merged = result.declare_node(id);

				let mut properties: Vec<_> = node.keys().collect();
				properties.sort();

				for property in properties {
					let value = &node[property];
					if property.starts_with('@') && property != "@type" {
						merged.insert(property.clone(), value.clone());
					} else {
						add_value(merged, property, value.clone(), true, false)
					}
				}
			}
		}

		result
	}

	/// Renders the node map as a JSON object.
	///
	/// The default graph is named `@default`.
	pub fn to_value(&self) -> Value {
		let mut result = Map::new();

		for (id, graph) in self {
			let name = id.unwrap_or(DEFAULT_GRAPH);
			result.insert(name.to_owned(), graph.to_value());
		}

		Value::Object(result)
	}

	/// Flattens the node map.
	///
	/// Each named graph is attached to the node of the same identifier in the
	/// default graph. Nodes consisting only of an `@id` entry are dropped.
	pub fn flatten(self, ordered: bool) -> Vec<Value> {
		let mut default_graph = self.default_graph;

		let mut named_graphs: Vec<_> = self.graphs.into_iter().collect();
		if ordered {
			named_graphs.sort_by(|a, b| a.0.cmp(&b.0));
		}

		for (graph_id, graph) in named_graphs {
			let nodes = graph.into_nodes(ordered);
			let entry = default_graph.declare_node(&graph_id);
			entry.insert(
				"@graph".to_owned(),
				Value::Array(nodes.into_iter().filter(is_not_reference).collect()),
			);
		}

		default_graph
			.into_nodes(ordered)
			.into_iter()
			.filter(is_not_reference)
			.collect()
	}
}

fn is_not_reference(node: &Value) -> bool {
	!crate::util::is_node_reference(node)
}

pub struct Iter<'a> {
	default_graph: Option<&'a NodeMapGraph>,
	graphs: indexmap::map::Iter<'a, String, NodeMapGraph>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = (Option<&'a str>, &'a NodeMapGraph);

	fn next(&mut self) -> Option<Self::Item> {
		match self.default_graph.take() {
			Some(default_graph) => Some((None, default_graph)),
			None => self
				.graphs
				.next()
				.map(|(id, graph)| (Some(id.as_str()), graph)),
		}
	}
}

impl<'a> IntoIterator for &'a NodeMap {
	type Item = (Option<&'a str>, &'a NodeMapGraph);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Node identifier to node object map.
#[derive(Clone, Debug, Default)]
pub struct NodeMapGraph {
	nodes: IndexMap<String, Map<String, Value>>,
}

impl NodeMapGraph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.nodes.contains_key(id)
	}

	pub fn get(&self, id: &str) -> Option<&Map<String, Value>> {
		self.nodes.get(id)
	}

	pub fn get_mut(&mut self, id: &str) -> Option<&mut Map<String, Value>> {
		self.nodes.get_mut(id)
	}

	/// Node identifiers, in insertion order.
	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.nodes.keys().map(String::as_str)
	}

	pub fn iter(&self) -> indexmap::map::Iter<String, Map<String, Value>> {
		self.nodes.iter()
	}

	/// Returns the node with the given identifier, creating it if needed.
	pub fn declare_node(&mut self, id: &str) -> &mut Map<String, Value> {
		self.nodes.entry(id.to_owned()).or_insert_with(|| {
			let mut node = Map::new();
			node.insert("@id".to_owned(), Value::String(id.to_owned()));
			node
		})
	}

	/// Returns the nodes, sorted by identifier if `ordered` is set.
	pub fn into_nodes(self, ordered: bool) -> Vec<Value> {
		let mut nodes: Vec<_> = self.nodes.into_iter().collect();
		if ordered {
			nodes.sort_by(|a, b| a.0.cmp(&b.0));
		}

		nodes.into_iter().map(|(_, node)| Value::Object(node)).collect()
	}

	pub fn to_value(&self) -> Value {
		Value::Object(
			self.nodes
				.iter()
				.map(|(id, node)| (id.clone(), Value::Object(node.clone())))
				.collect(),
		)
	}
}

/// Subject a value is attached to while building a node map.
#[derive(Clone, Copy)]
enum Subject<'a> {
	/// Node of the current graph with the given identifier.
	Node(&'a str),

	/// Reverse property: the referencing node is added to the value instead.
	Reverse(&'a str),
}

/// Adds the nodes of the given expanded element to `node_map`.
///
/// Blank node identifiers are renamed through `generator`, and nodes
/// without identifier receive a fresh one.
pub fn generate_node_map(
	element: &Value,
	node_map: &mut NodeMap,
	generator: &mut BlankIdGenerator,
) -> Result<(), Error> {
	let mut builder = NodeMapBuilder {
		node_map,
		generator,
	};

	builder.extend(element, None, None, None, None)
}

struct NodeMapBuilder<'a> {
	node_map: &'a mut NodeMap,
	generator: &'a mut BlankIdGenerator,
}

impl<'a> NodeMapBuilder<'a> {
	fn graph_mut(&mut self, graph: Option<&str>) -> &mut NodeMapGraph {
		match graph {
			Some(id) => {
				self.node_map.declare_graph(id);
				&mut self.node_map.graphs[id]
			}
			None => &mut self.node_map.default_graph,
		}
	}

	fn rename(&mut self, id: &str) -> String {
		if is_blank_id(id) {
			self.generator.assign(id)
		} else {
			id.to_owned()
		}
	}

	fn extend(
		&mut self,
		element: &Value,
		graph: Option<&str>,
		subject: Option<Subject>,
		property: Option<&str>,
		list: Option<&mut Vec<Value>>,
	) -> Result<(), Error> {
		match element {
			Value::Array(items) => {
				let mut list = list;
				for item in items {
					self.extend(item, graph, subject, property, list.as_deref_mut())?
				}

				Ok(())
			}
			Value::Object(object) => {
				if object.contains_key("@value") {
					let mut value = object.clone();
					if let Some(Value::String(ty)) = object.get("@type") {
						let ty = self.rename(ty);
						value.insert("@type".to_owned(), Value::String(ty));
					}

					match list {
						Some(list) => list.push(Value::Object(value)),
						None => self.attach(graph, subject, property, Value::Object(value), false),
					}

					Ok(())
				} else if let Some(items) = object.get("@list") {
					let mut result = Vec::new();
					self.extend(items, graph, subject, property, Some(&mut result))?;

					let mut list_object = Map::new();
					list_object.insert("@list".to_owned(), Value::Array(result));
					self.attach(graph, subject, property, Value::Object(list_object), true);
					Ok(())
				} else {
					self.extend_node(object, graph, subject, property, list)
				}
			}
			_ => Ok(()),
		}
	}

	/// Adds `value` to `property` of the given subject.
	fn attach(
		&mut self,
		graph: Option<&str>,
		subject: Option<Subject>,
		property: Option<&str>,
		value: Value,
		allow_duplicate: bool,
	) {
		if let (Some(Subject::Node(id)), Some(property)) = (subject, property) {
			if let Some(node) = self.graph_mut(graph).get_mut(id) {
				add_value(node, property, value, true, allow_duplicate)
			}
		}
	}

	fn extend_node(
		&mut self,
		object: &Map<String, Value>,
		graph: Option<&str>,
		subject: Option<Subject>,
		property: Option<&str>,
		list: Option<&mut Vec<Value>>,
	) -> Result<(), Error> {
		let id = match object.get("@id").and_then(Value::as_str) {
			Some(id) => self.rename(id),
			None => self.generator.next(),
		};

		let node_ref = reference(&id);
		self.graph_mut(graph).declare_node(&id);

		match (subject, property) {
			(Some(Subject::Reverse(referencing)), Some(property)) => {
				let node = self.graph_mut(graph).declare_node(&id);
				add_value(node, property, reference(referencing), true, false)
			}
			(Some(Subject::Node(_)), Some(_)) => match list {
				Some(list) => list.push(node_ref),
				None => self.attach(graph, subject, property, node_ref, false),
			},
			_ => {
				if let Some(list) = list {
					list.push(node_ref)
				}
			}
		}

		if let Some(types) = object.get("@type") {
			let types: Vec<Value> = crate::util::as_array(types)
				.iter()
				.map(|ty| match ty {
					Value::String(ty) => Value::String(self.rename(ty)),
					other => other.clone(),
				})
				.collect();

			let node = self.graph_mut(graph).declare_node(&id);
			for ty in types {
				add_value(node, "@type", ty, true, false)
			}
		}

		if let Some(index) = object.get("@index") {
			let node = self.graph_mut(graph).declare_node(&id);
			match node.get("@index") {
				Some(defined) if !deep_compare(defined, index) => {
					return Err(Error::ConflictingIndexes(id));
				}
				_ => {
					node.insert("@index".to_owned(), index.clone());
				}
			}
		}

		if let Some(Value::Object(reverse_map)) = object.get("@reverse") {
			let mut reverse_properties: Vec<_> = reverse_map.keys().collect();
			reverse_properties.sort();

			for reverse_property in reverse_properties {
				let values = &reverse_map[reverse_property];
				self.extend(
					values,
					graph,
					Some(Subject::Reverse(&id)),
					Some(reverse_property),
					None,
				)?
			}
		}

		if let Some(sub_graph) = object.get("@graph") {
			self.node_map.declare_graph(&id);
			self.extend(sub_graph, Some(&id), None, None, None)?
		}

		let mut properties: Vec<_> = object.keys().filter(|k| !k.starts_with('@')).collect();
		properties.sort();

		for expanded_property in properties {
			let property = self.rename(expanded_property);
			let node = self.graph_mut(graph).declare_node(&id);
			if !node.contains_key(&property) {
				node.insert(property.clone(), Value::Array(Vec::new()));
			}

			let values = &object[expanded_property];
			self.extend(values, graph, Some(Subject::Node(&id)), Some(&property), None)?
		}

		Ok(())
	}
}

fn reference(id: &str) -> Value {
	let mut reference = Map::new();
	reference.insert("@id".to_owned(), Value::String(id.to_owned()));
	Value::Object(reference)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn blank_nodes_are_named() {
		let mut node_map = NodeMap::new();
		let mut generator = BlankIdGenerator::new();
		generate_node_map(
			&json!([{
				"@id": "_:x",
				"ex:p": [{"ex:q": [{"@value": 1}]}],
				"ex:r": [{"@id": "_:x"}]
			}]),
			&mut node_map,
			&mut generator,
		)
		.unwrap();

		assert_eq!(
			node_map.to_value(),
			json!({
				"@default": {
					"_:b0": {
						"@id": "_:b0",
						"ex:p": [{"@id": "_:b1"}],
						"ex:r": [{"@id": "_:b0"}]
					},
					"_:b1": {"@id": "_:b1", "ex:q": [{"@value": 1}]}
				}
			})
		)
	}

	#[test]
	fn conflicting_indexes() {
		let mut node_map = NodeMap::new();
		let mut generator = BlankIdGenerator::new();
		let result = generate_node_map(
			&json!([
				{"@id": "ex:a", "@index": "1"},
				{"@id": "ex:a", "@index": "2"}
			]),
			&mut node_map,
			&mut generator,
		);

		assert!(matches!(result, Err(Error::ConflictingIndexes(id)) if id == "ex:a"))
	}
}
