use jsonld_transform::{ErrorCode, JsonLdProcessor};
use serde_json::json;

#[test]
fn compact_round_trip() {
	let context = json!({
		"name": "http://schema.org/name",
		"knows": { "@id": "http://schema.org/knows", "@type": "@id" }
	});

	let input = json!({
		"@context": context,
		"@id": "http://example.org/alice",
		"name": "Alice",
		"knows": "http://example.org/bob"
	});

	let expanded = input.expand().unwrap();
	assert_eq!(expanded.compact(&context).unwrap(), input)
}

#[test]
fn compact_keyword_aliases() {
	let expanded = json!([{
		"@id": "http://example.org/a",
		"@type": ["http://schema.org/Person"],
		"http://schema.org/name": [{ "@value": "A" }]
	}]);

	let context = json!({
		"id": "@id",
		"type": "@type",
		"name": "http://schema.org/name",
		"Person": "http://schema.org/Person"
	});

	assert_eq!(
		expanded.compact(&context).unwrap(),
		json!({
			"@context": context,
			"id": "http://example.org/a",
			"type": "Person",
			"name": "A"
		})
	)
}

#[test]
fn compact_with_context_document() {
	let expanded = json!([{ "http://schema.org/name": [{ "@value": "A" }] }]);
	let context = json!({ "@context": { "name": "http://schema.org/name" } });

	assert_eq!(
		expanded.compact(&context).unwrap(),
		json!({
			"@context": { "name": "http://schema.org/name" },
			"name": "A"
		})
	)
}

#[test]
fn compact_prefixes_and_vocab() {
	let expanded = json!([{
		"@id": "http://example.org/a",
		"http://schema.org/name": [{ "@value": "A" }],
		"http://xmlns.com/foaf/0.1/nick": [{ "@value": "a" }]
	}]);

	let context = json!({
		"@vocab": "http://schema.org/",
		"foaf": "http://xmlns.com/foaf/0.1/"
	});

	assert_eq!(
		expanded.compact(&context).unwrap(),
		json!({
			"@context": context,
			"@id": "http://example.org/a",
			"foaf:nick": "a",
			"name": "A"
		})
	)
}

#[test]
fn compact_containers() {
	let context = json!({
		"label": { "@id": "http://example.org/label", "@container": "@language" },
		"list": { "@id": "http://example.org/list", "@container": "@list" },
		"tags": { "@id": "http://example.org/tag", "@container": "@set" }
	});

	let expanded = json!([{
		"http://example.org/label": [
			{ "@value": "Hello", "@language": "en" },
			{ "@value": "Bonjour", "@language": "fr" }
		],
		"http://example.org/list": [{ "@list": [{ "@value": 1 }, { "@value": 2 }] }],
		"http://example.org/tag": [{ "@value": "rust" }]
	}]);

	assert_eq!(
		expanded.compact(&context).unwrap(),
		json!({
			"@context": context,
			"label": { "en": "Hello", "fr": "Bonjour" },
			"list": [1, 2],
			"tags": ["rust"]
		})
	)
}

#[test]
fn compact_multiple_nodes_to_graph() {
	let expanded = json!([
		{ "@id": "http://example.org/a", "http://schema.org/name": [{ "@value": "A" }] },
		{ "@id": "http://example.org/b", "http://schema.org/name": [{ "@value": "B" }] }
	]);

	let context = json!({ "name": "http://schema.org/name" });

	assert_eq!(
		expanded.compact(&context).unwrap(),
		json!({
			"@context": context,
			"@graph": [
				{ "@id": "http://example.org/a", "name": "A" },
				{ "@id": "http://example.org/b", "name": "B" }
			]
		})
	)
}

#[test]
fn compact_empty_document() {
	let context = json!({ "name": "http://schema.org/name" });

	assert_eq!(
		json!([]).compact(&context).unwrap(),
		json!({ "@context": context })
	)
}

#[test]
fn compact_reverse_property() {
	let context = json!({
		"children": { "@reverse": "http://example.org/parent" }
	});

	let input = json!({
		"@context": context,
		"@id": "http://example.org/p",
		"children": { "@id": "http://example.org/c" }
	});

	// Reverse terms are coerced to `@id`.
	let expected = json!({
		"@context": context,
		"@id": "http://example.org/p",
		"children": "http://example.org/c"
	});

	assert_eq!(input.expand().unwrap().compact(&context).unwrap(), expected)
}

#[test]
fn compaction_to_list_of_lists() {
	let context = json!({
		"list": { "@id": "http://example.org/list", "@container": "@list" }
	});

	let expanded = json!([{
		"http://example.org/list": [
			{ "@list": [{ "@value": 1 }] },
			{ "@list": [{ "@value": 2 }] }
		]
	}]);

	assert_eq!(
		expanded.compact(&context).unwrap_err().code(),
		ErrorCode::CompactionToListOfLists
	)
}
