use std::borrow::Cow;
use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{Embed, FramingOptions};
use crate::{
	algorithms::{flattening::NodeMapGraph, Error},
	util::{as_array, deep_compare, is_list_object, is_node_reference},
	Keyword,
};

/// Output item.
enum Item {
	Value(Value),
	Node(usize),
	List(Vec<Item>),
}

/// Entry of an output node.
enum Entry {
	/// Keyword entry copied from the subject.
	Raw(Value),
	Items(Vec<Item>),
}

/// Output node under construction.
struct OutputNode {
	entries: IndexMap<String, Entry>,
}

impl OutputNode {
	fn new(id: &str) -> Self {
		let mut entries = IndexMap::new();
		entries.insert(
			Keyword::Id.as_str().to_owned(),
			Entry::Raw(Value::String(id.to_owned())),
		);

		Self { entries }
	}

	fn items_mut(&mut self, property: &str) -> &mut Vec<Item> {
		let entry = self
			.entries
			.entry(property.to_owned())
			.or_insert_with(|| Entry::Items(Vec::new()));

		if let Entry::Raw(value) = entry {
			let value = value.take();
			*entry = Entry::Items(vec![Item::Value(value)])
		}

		match entry {
			Entry::Items(items) => items,
			Entry::Raw(_) => unreachable!(),
		}
	}
}

/// Where a framed node is attached.
#[derive(Clone)]
enum Target {
	/// Top-level result.
	Root,

	/// Property of an output node.
	Property(usize, String),

	/// Last list of the given property of an output node.
	List(usize, String),
}

impl Target {
	fn node(&self) -> Option<usize> {
		match self {
			Self::Root => None,
			Self::Property(node, _) | Self::List(node, _) => Some(*node),
		}
	}
}

/// Current embedding of a node.
struct Embedding {
	parent: Option<usize>,
	node: usize,
}

/// Directives of a frame, defaulting to the framing options.
#[derive(Clone, Copy)]
struct Flags {
	embed: Embed,
	explicit: bool,
	require_all: bool,
}

/// Framing state.
pub(crate) struct Framer<'a> {
	options: FramingOptions,
	subjects: &'a NodeMapGraph,
	nodes: Vec<OutputNode>,
	roots: Vec<Item>,
	unique_embeds: HashMap<String, Embedding>,
	links: HashMap<String, usize>,
	subject_stack: Vec<String>,
}

impl<'a> Framer<'a> {
	pub fn new(subjects: &'a NodeMapGraph, options: FramingOptions) -> Self {
		Self {
			options,
			subjects,
			nodes: Vec::new(),
			roots: Vec::new(),
			unique_embeds: HashMap::new(),
			links: HashMap::new(),
			subject_stack: Vec::new(),
		}
	}

	/// Frames every subject with the given frame and returns the framed
	/// nodes.
	pub fn run(mut self, frame: &Map<String, Value>) -> Result<Vec<Value>, Error> {
		let subjects = self.subjects;
		let mut ids: Vec<&str> = subjects.ids().collect();
		ids.sort_unstable();

		self.frame(&ids, frame, Target::Root)?;

		let roots = std::mem::take(&mut self.roots);
		Ok(roots.iter().map(|item| self.render(item)).collect())
	}

	fn flags(&self, frame: &Map<String, Value>) -> Result<Flags, Error> {
		let embed = match directive(frame, Keyword::Embed) {
			Some(value) => Embed::from_value(value)?,
			None => self.options.embed,
		};

		Ok(Flags {
			embed,
			explicit: bool_directive(frame, Keyword::Explicit).unwrap_or(self.options.explicit),
			require_all: bool_directive(frame, Keyword::RequireAll)
				.unwrap_or(self.options.require_all),
		})
	}

	fn frame(
		&mut self,
		candidates: &[&str],
		frame: &Map<String, Value>,
		target: Target,
	) -> Result<(), Error> {
		let flags = self.flags(frame)?;

		let mut matches: Vec<&str> = candidates
			.iter()
			.copied()
			.filter(|id| {
				self.subjects
					.get(id)
					.map_or(false, |node| filter_node(node, frame, flags.require_all))
			})
			.collect();
		matches.sort_unstable();
		matches.dedup();

		log::debug!("{} matching nodes", matches.len());

		for id in matches {
			let on_stack = self.subject_stack.iter().any(|s| s == id);

			if flags.embed == Embed::Link && !on_stack {
				if let Some(&node) = self.links.get(id) {
					self.add_output(&target, Item::Node(node));
					continue;
				}
			}

			if matches!(target, Target::Root) {
				self.unique_embeds.clear()
			}

			if flags.embed == Embed::Never || on_stack {
				self.add_output(&target, Item::Value(reference(id)));
				continue;
			}

			let node = self.nodes.len();
			self.nodes.push(OutputNode::new(id));
			self.links.insert(id.to_owned(), node);

			if flags.embed == Embed::Last {
				if self.unique_embeds.contains_key(id) {
					self.remove_embed(id)
				}

				self.unique_embeds.insert(
					id.to_owned(),
					Embedding {
						parent: target.node(),
						node,
					},
				);
			}

			self.add_output(&target, Item::Node(node));

			self.subject_stack.push(id.to_owned());
			let result = self.embed(node, id, frame, flags);
			self.subject_stack.pop();
			result?
		}

		Ok(())
	}

	/// Fills the output node of the subject `id`.
	fn embed(
		&mut self,
		node: usize,
		id: &str,
		frame: &Map<String, Value>,
		flags: Flags,
	) -> Result<(), Error> {
		let subjects = self.subjects;
		let subject = match subjects.get(id) {
			Some(subject) => subject,
			None => return Ok(()),
		};

		let mut properties: Vec<&String> = subject.keys().collect();
		properties.sort_unstable();

		for property in properties {
			let values = &subject[property];

			if property.starts_with('@') {
				self.nodes[node]
					.entries
					.insert(property.clone(), Entry::Raw(values.clone()));
				continue;
			}

			if flags.explicit && !frame.contains_key(property) {
				continue;
			}

			let sub_frame = frame.get(property).and_then(first_frame);

			if as_array(values).is_empty() {
				self.nodes[node].items_mut(property);
			}

			for value in as_array(values) {
				if is_list_object(value) {
					let list_frame = match sub_frame {
						Some(f) if f.contains_key(Keyword::List.as_str()) => {
							f.get(Keyword::List.as_str()).and_then(first_frame)
						}
						f => f,
					};

					self.nodes[node].items_mut(property).push(Item::List(Vec::new()));
					let list_target = Target::List(node, property.clone());

					for item in value.get("@list").map(as_array).unwrap_or_default() {
						if is_node_reference(item) {
							let item_id = node_id(item);
							let sub_frame = self.sub_frame(list_frame, flags);
							self.frame(&[item_id], &sub_frame, list_target.clone())?
						} else {
							self.add_output(&list_target, Item::Value(item.clone()))
						}
					}
				} else if is_node_reference(value) {
					let sub_frame = self.sub_frame(sub_frame, flags);
					self.frame(
						&[node_id(value)],
						&sub_frame,
						Target::Property(node, property.clone()),
					)?
				} else {
					self.nodes[node]
						.items_mut(property)
						.push(Item::Value(value.clone()))
				}
			}
		}

		let mut frame_properties: Vec<&String> =
			frame.keys().filter(|k| !k.starts_with('@')).collect();
		frame_properties.sort_unstable();

		for property in frame_properties {
			if self.nodes[node].entries.contains_key(property.as_str()) {
				continue;
			}

			let next = first_frame(&frame[property]);
			let omit_default = next
				.and_then(|next| bool_directive(next, Keyword::OmitDefault))
				.unwrap_or(self.options.omit_default);

			if !omit_default {
				let preserve = next
					.and_then(|next| next.get(Keyword::Default.as_str()))
					.cloned()
					.unwrap_or_else(|| Value::String(Keyword::Null.as_str().to_owned()));

				let mut placeholder = Map::new();
				placeholder.insert(
					Keyword::Preserve.as_str().to_owned(),
					Value::Array(crate::util::into_array(preserve)),
				);

				self.nodes[node]
					.items_mut(property)
					.push(Item::Value(Value::Object(placeholder)))
			}
		}

		Ok(())
	}

	/// Returns the given sub-frame, or an open frame carrying the current
	/// flags.
	fn sub_frame<'f>(
		&self,
		frame: Option<&'f Map<String, Value>>,
		flags: Flags,
	) -> Cow<'f, Map<String, Value>> {
		match frame {
			Some(frame) => Cow::Borrowed(frame),
			None => {
				let mut implicit = Map::new();
				implicit.insert(
					Keyword::Embed.as_str().to_owned(),
					Value::String(flags.embed.as_str().to_owned()),
				);
				implicit.insert(
					Keyword::Explicit.as_str().to_owned(),
					Value::Bool(flags.explicit),
				);
				implicit.insert(
					Keyword::RequireAll.as_str().to_owned(),
					Value::Bool(flags.require_all),
				);
				Cow::Owned(implicit)
			}
		}
	}

	fn add_output(&mut self, target: &Target, item: Item) {
		match target {
			Target::Root => self.roots.push(item),
			Target::Property(node, property) => self.nodes[*node].items_mut(property).push(item),
			Target::List(node, property) => {
				if let Some(Item::List(items)) = self.nodes[*node].items_mut(property).last_mut() {
					items.push(item)
				}
			}
		}
	}

	/// Replaces the current embedding of `id` by a node reference.
	///
	/// Embeddings that only existed inside the removed node are forgotten.
	fn remove_embed(&mut self, id: &str) {
		let embedding = match self.unique_embeds.remove(id) {
			Some(embedding) => embedding,
			None => return,
		};

		log::debug!("replacing previous embedding of `{id}`");

		let items: Vec<&mut Vec<Item>> = match embedding.parent {
			None => vec![&mut self.roots],
			Some(parent) => self.nodes[parent]
				.entries
				.values_mut()
				.filter_map(|entry| match entry {
					Entry::Items(items) => Some(items),
					Entry::Raw(_) => None,
				})
				.collect(),
		};

		for items in items {
			replace_node(items, embedding.node, id);
		}

		self.remove_dependents(embedding.node)
	}

	fn remove_dependents(&mut self, node: usize) {
		let dependents: Vec<(String, usize)> = self
			.unique_embeds
			.iter()
			.filter(|(_, e)| e.parent == Some(node))
			.map(|(id, e)| (id.clone(), e.node))
			.collect();

		for (id, dependent) in dependents {
			self.unique_embeds.remove(&id);
			self.remove_dependents(dependent)
		}
	}

	fn render(&self, item: &Item) -> Value {
		match item {
			Item::Value(value) => value.clone(),
			Item::Node(node) => {
				let mut result = Map::new();
				for (key, entry) in &self.nodes[*node].entries {
					let value = match entry {
						Entry::Raw(value) => value.clone(),
						Entry::Items(items) => {
							Value::Array(items.iter().map(|item| self.render(item)).collect())
						}
					};

					result.insert(key.clone(), value);
				}

				Value::Object(result)
			}
			Item::List(items) => {
				let mut result = Map::new();
				result.insert(
					Keyword::List.as_str().to_owned(),
					Value::Array(items.iter().map(|item| self.render(item)).collect()),
				);
				Value::Object(result)
			}
		}
	}
}

fn replace_node(items: &mut [Item], node: usize, id: &str) {
	for item in items {
		if matches!(item, Item::Node(n) if *n == node) {
			*item = Item::Value(reference(id))
		} else if let Item::List(list) = item {
			replace_node(list, node, id)
		}
	}
}

/// Checks if the given node matches the frame.
///
/// Unless `require_all` is set, the first applicable rule decides: `@id`,
/// then `@type`, then the presence of the frame properties.
fn filter_node(node: &Map<String, Value>, frame: &Map<String, Value>, require_all: bool) -> bool {
	if let Some(frame_ids) = frame.get(Keyword::Id.as_str()) {
		let id = node.get(Keyword::Id.as_str());
		let matched = as_array(frame_ids)
			.iter()
			.any(|f| is_wildcard(f) || Some(f) == id);

		if !matched || !require_all {
			return matched;
		}
	}

	if let Some(frame_types) = frame.get(Keyword::Type.as_str()) {
		let frame_types = as_array(frame_types);
		let node_types = node
			.get(Keyword::Type.as_str())
			.map(as_array)
			.unwrap_or_default();

		let matched = match frame_types {
			[] => node_types.is_empty(),
			[Value::String(none)] if none == Keyword::None.as_str() => node_types.is_empty(),
			[wildcard] if is_wildcard(wildcard) => !node_types.is_empty(),
			_ => frame_types
				.iter()
				.any(|ty| node_types.iter().any(|t| deep_compare(t, ty))),
		};

		if !matched || !require_all {
			return matched;
		}
	}

	for (property, pattern) in frame {
		if property.starts_with('@') {
			continue;
		}

		match node.get(property) {
			Some(_) if matches!(pattern, Value::Array(p) if p.is_empty()) => return false,
			Some(_) => (),
			None => {
				let has_default = first_frame(pattern)
					.map_or(false, |f| f.contains_key(Keyword::Default.as_str()));

				if !has_default {
					return false;
				}
			}
		}
	}

	true
}

fn is_wildcard(value: &Value) -> bool {
	matches!(value, Value::Object(o) if o.is_empty())
}

/// First object of an expanded frame entry.
fn first_frame(value: &Value) -> Option<&Map<String, Value>> {
	as_array(value).first().and_then(Value::as_object)
}

/// Reads a framing directive, unwrapping arrays and value objects.
fn directive(frame: &Map<String, Value>, keyword: Keyword) -> Option<&Value> {
	let value = frame.get(keyword.as_str())?;
	let value = as_array(value).first()?;
	match value {
		Value::Object(o) => o.get(Keyword::Value.as_str()),
		value => Some(value),
	}
}

fn bool_directive(frame: &Map<String, Value>, keyword: Keyword) -> Option<bool> {
	directive(frame, keyword).and_then(|v| match v {
		Value::Bool(b) => Some(*b),
		Value::String(s) => match s.as_str() {
			"true" => Some(true),
			"false" => Some(false),
			_ => None,
		},
		_ => None,
	})
}

fn node_id(reference: &Value) -> &str {
	reference
		.get(Keyword::Id.as_str())
		.and_then(Value::as_str)
		.unwrap_or_default()
}

fn reference(id: &str) -> Value {
	let mut reference = Map::new();
	reference.insert(
		Keyword::Id.as_str().to_owned(),
		Value::String(id.to_owned()),
	);
	Value::Object(reference)
}
