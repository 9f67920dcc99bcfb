//! Flattening algorithm and related types.
use serde_json::Value;

use crate::{algorithms::Error, BlankIdGenerator};

mod node_map;

pub use node_map::*;

/// Flattens the given expanded document.
///
/// Nodes are collected in a node map, named graphs are attached to their
/// graph node, and the resulting list of node objects is returned, sorted by
/// identifier if `ordered` is set.
pub fn flatten(
	expanded: &[Value],
	generator: &mut BlankIdGenerator,
	ordered: bool,
) -> Result<Vec<Value>, Error> {
	let mut node_map = NodeMap::new();

	for element in expanded {
		generate_node_map(element, &mut node_map, generator)?;
	}

	Ok(node_map.flatten(ordered))
}
