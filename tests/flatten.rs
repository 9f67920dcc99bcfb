use jsonld_transform::{generate_node_map, BlankIdGenerator, ErrorCode, JsonLdProcessor, NodeMap};
use serde_json::json;

#[test]
fn node_map() {
	let expanded = json!([
		{ "@id": "ex:a", "ex:knows": { "@id": "ex:b" } },
		{ "@id": "ex:b" }
	]);

	let mut node_map = NodeMap::new();
	let mut generator = BlankIdGenerator::new();
	generate_node_map(&expanded, &mut node_map, &mut generator).unwrap();

	assert_eq!(
		node_map.to_value(),
		json!({
			"@default": {
				"ex:a": { "@id": "ex:a", "ex:knows": [{ "@id": "ex:b" }] },
				"ex:b": { "@id": "ex:b" }
			}
		})
	)
}

#[test]
fn flatten_embedded_nodes() {
	let input = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@id": "http://example.org/a",
		"knows": { "name": "B" }
	});

	assert_eq!(
		input.flatten(None).unwrap(),
		json!([
			{
				"@id": "_:b0",
				"http://example.org/name": [{ "@value": "B" }]
			},
			{
				"@id": "http://example.org/a",
				"http://example.org/knows": [{ "@id": "_:b0" }]
			}
		])
	)
}

#[test]
fn flatten_and_compact() {
	let context = json!({ "@vocab": "http://example.org/" });
	let input = json!({
		"@context": context,
		"@id": "http://example.org/a",
		"knows": { "name": "B" }
	});

	assert_eq!(
		input.flatten(Some(&context)).unwrap(),
		json!({
			"@context": context,
			"@graph": [
				{ "@id": "_:b0", "name": "B" },
				{ "@id": "http://example.org/a", "knows": { "@id": "_:b0" } }
			]
		})
	)
}

#[test]
fn flatten_named_graph() {
	let input = json!({
		"@id": "http://example.org/g",
		"@graph": [{
			"@id": "http://example.org/a",
			"http://example.org/p": { "@id": "http://example.org/b" }
		}]
	});

	assert_eq!(
		input.flatten(None).unwrap(),
		json!([{
			"@id": "http://example.org/g",
			"@graph": [{
				"@id": "http://example.org/a",
				"http://example.org/p": [{ "@id": "http://example.org/b" }]
			}]
		}])
	)
}

#[test]
fn merge_node_descriptions() {
	let input = json!({
		"@graph": [
			{
				"@id": "http://example.org/a",
				"@type": "http://example.org/T",
				"http://example.org/p": "x"
			},
			{
				"@id": "http://example.org/a",
				"http://example.org/p": ["x", "y"]
			}
		]
	});

	assert_eq!(
		input.flatten(None).unwrap(),
		json!([{
			"@id": "http://example.org/a",
			"@type": ["http://example.org/T"],
			"http://example.org/p": [{ "@value": "x" }, { "@value": "y" }]
		}])
	)
}

#[test]
fn relabel_blank_nodes() {
	let input = json!({
		"@id": "_:alice",
		"http://example.org/knows": { "@id": "_:bob" }
	});

	assert_eq!(
		input.flatten(None).unwrap(),
		json!([{
			"@id": "_:b0",
			"http://example.org/knows": [{ "@id": "_:b1" }]
		}])
	)
}

#[test]
fn conflicting_indexes() {
	let input = json!([
		{ "@id": "http://example.org/a", "@index": "1", "http://example.org/p": "x" },
		{ "@id": "http://example.org/a", "@index": "2", "http://example.org/p": "y" }
	]);

	assert_eq!(
		input.flatten(None).unwrap_err().code(),
		ErrorCode::ConflictingIndexes
	)
}
