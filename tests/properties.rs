use jsonld_transform::{util::is_node_object, JsonLdProcessor};
use serde_json::{json, Value};

fn document() -> Value {
	json!({
		"@context": {
			"@vocab": "http://schema.org/",
			"knows": { "@type": "@id" },
			"tags": { "@id": "http://example.org/tag", "@container": "@set" }
		},
		"@id": "http://example.org/alice",
		"@type": "Person",
		"name": "Alice",
		"tags": ["a", "b"],
		"knows": "http://example.org/bob",
		"spouse": {
			"name": "Carol",
			"knows": "http://example.org/alice"
		}
	})
}

#[test]
fn expansion_is_idempotent() {
	let expanded = document().expand().unwrap();
	assert_eq!(expanded.expand().unwrap(), expanded)
}

#[test]
fn expansion_is_deterministic() {
	let a = serde_json::to_string(&document().expand().unwrap()).unwrap();
	let b = serde_json::to_string(&document().expand().unwrap()).unwrap();
	assert_eq!(a, b)
}

#[test]
fn compaction_round_trip() {
	let input = document();
	let context = &input["@context"];

	let compacted = input.expand().unwrap().compact(context).unwrap();
	assert_eq!(compacted.expand().unwrap(), input.expand().unwrap())
}

#[test]
fn flattened_nodes_are_flat() {
	let flattened = document().flatten(None).unwrap();
	let nodes = flattened.as_array().unwrap();
	assert_eq!(nodes.len(), 2);

	for node in nodes {
		let node = node.as_object().unwrap();
		for (key, values) in node {
			if key.starts_with('@') {
				continue;
			}

			for value in values.as_array().unwrap() {
				assert!(!is_node_object(value), "embedded node under `{key}`")
			}
		}
	}
}

#[test]
fn flattening_is_deterministic() {
	let a = serde_json::to_string(&document().flatten(None).unwrap()).unwrap();
	let b = serde_json::to_string(&document().flatten(None).unwrap()).unwrap();
	assert_eq!(a, b)
}
