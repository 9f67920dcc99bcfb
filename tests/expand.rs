use jsonld_transform::{
	expand, CollectWarnings, Context, ErrorCode, ExpansionOptions, JsonLdProcessor, NoLoader,
	Warning,
};
use serde_json::json;
use static_iref::iri;

#[test]
fn expand_term() {
	let input = json!({
		"@context": { "name": "http://schema.org/name" },
		"name": "A"
	});

	assert_eq!(
		input.expand().unwrap(),
		json!([{ "http://schema.org/name": [{ "@value": "A" }] }])
	)
}

#[test]
fn expand_prefixed_term() {
	let input = json!({
		"@context": {
			"foo:bar": { "@type": "@id" },
			"foo": "http://example.org/"
		},
		"foo:bar": "http://example.org/target"
	});

	assert_eq!(
		input.expand().unwrap(),
		json!([{ "http://example.org/bar": [{ "@id": "http://example.org/target" }] }])
	)
}

#[test]
fn expand_typed_and_tagged_values() {
	let input = json!({
		"@context": {
			"@language": "EN",
			"age": {
				"@id": "http://example.org/age",
				"@type": "http://www.w3.org/2001/XMLSchema#integer"
			},
			"label": "http://example.org/label",
			"code": { "@id": "http://example.org/code", "@language": null }
		},
		"age": "5",
		"label": "hello",
		"code": "x"
	});

	assert_eq!(
		input.expand().unwrap(),
		json!([{
			"http://example.org/age": [{
				"@value": "5",
				"@type": "http://www.w3.org/2001/XMLSchema#integer"
			}],
			"http://example.org/code": [{ "@value": "x" }],
			"http://example.org/label": [{ "@value": "hello", "@language": "en" }]
		}])
	)
}

#[test]
fn expand_vocab_and_base() {
	let input = json!({
		"@context": {
			"@vocab": "http://schema.org/",
			"@base": "http://example.org/people/"
		},
		"@id": "alice",
		"@type": "Person",
		"name": "Alice"
	});

	assert_eq!(
		input.expand().unwrap(),
		json!([{
			"@id": "http://example.org/people/alice",
			"@type": ["http://schema.org/Person"],
			"http://schema.org/name": [{ "@value": "Alice" }]
		}])
	)
}

#[test]
fn expand_keyword_aliases() {
	let input = json!({
		"@context": {
			"id": "@id",
			"type": "@type",
			"name": "http://schema.org/name"
		},
		"id": "http://example.org/a",
		"type": "http://schema.org/Person",
		"name": "A"
	});

	assert_eq!(
		input.expand().unwrap(),
		json!([{
			"@id": "http://example.org/a",
			"@type": ["http://schema.org/Person"],
			"http://schema.org/name": [{ "@value": "A" }]
		}])
	)
}

#[test]
fn expand_containers() {
	let input = json!({
		"@context": {
			"label": { "@id": "http://example.org/label", "@container": "@language" },
			"list": { "@id": "http://example.org/list", "@container": "@list" },
			"page": { "@id": "http://example.org/page", "@container": "@index" }
		},
		"label": { "en": "Hello", "fr": "Bonjour" },
		"list": [1, 2],
		"page": { "first": { "@id": "http://example.org/p1" } }
	});

	assert_eq!(
		input.expand().unwrap(),
		json!([{
			"http://example.org/label": [
				{ "@value": "Hello", "@language": "en" },
				{ "@value": "Bonjour", "@language": "fr" }
			],
			"http://example.org/list": [{
				"@list": [{ "@value": 1 }, { "@value": 2 }]
			}],
			"http://example.org/page": [{ "@id": "http://example.org/p1", "@index": "first" }]
		}])
	)
}

#[test]
fn expand_reverse_property() {
	let input = json!({
		"@context": {
			"parent": { "@reverse": "http://example.org/child" }
		},
		"@id": "http://example.org/c",
		"parent": { "@id": "http://example.org/p" }
	});

	assert_eq!(
		input.expand().unwrap(),
		json!([{
			"@id": "http://example.org/c",
			"@reverse": {
				"http://example.org/child": [{ "@id": "http://example.org/p" }]
			}
		}])
	)
}

#[test]
fn drop_free_floating_values() {
	let input = json!({
		"@graph": [
			"free",
			{ "@value": "floating" },
			{ "@id": "http://example.org/reference" },
			{ "@id": "http://example.org/a", "http://example.org/p": 1 }
		]
	});

	assert_eq!(
		input.expand().unwrap(),
		json!([{
			"@id": "http://example.org/a",
			"http://example.org/p": [{ "@value": 1 }]
		}])
	)
}

#[test]
fn drop_unmapped_keys() {
	let input = json!({
		"@id": "http://example.org/a",
		"unmapped": "value",
		"http://example.org/p": "kept"
	});

	let mut env = CollectWarnings::new(&NoLoader);
	let expanded = expand(
		&mut env,
		&Context::new(None),
		&input,
		None,
		ExpansionOptions::default(),
	)
	.unwrap();

	assert_eq!(
		expanded,
		vec![json!({
			"@id": "http://example.org/a",
			"http://example.org/p": [{ "@value": "kept" }]
		})]
	);
	assert_eq!(env.warnings, vec![Warning::DroppedKey("unmapped".to_owned())])
}

#[test]
fn relative_to_document_url() {
	let input = json!({ "@id": "a", "http://example.org/p": { "@id": "../b" } });

	let mut env = NoLoader;
	let expanded = expand(
		&mut env,
		&Context::new(Some(iri!("http://example.org/dir/doc").to_owned())),
		&input,
		None,
		ExpansionOptions::default(),
	)
	.unwrap();

	assert_eq!(
		expanded,
		vec![json!({
			"@id": "http://example.org/dir/a",
			"http://example.org/p": [{ "@id": "http://example.org/b" }]
		})]
	)
}

#[test]
fn list_of_lists() {
	let input = json!({
		"@context": {
			"list": { "@id": "http://example.org/list", "@container": "@list" }
		},
		"list": [[1, 2], 3]
	});

	assert_eq!(input.expand().unwrap_err().code(), ErrorCode::ListOfLists)
}

#[test]
fn colliding_keywords() {
	let input = json!({
		"@context": { "id": "@id" },
		"@id": "http://example.org/a",
		"id": "http://example.org/b",
		"http://example.org/p": 1
	});

	assert_eq!(
		input.expand().unwrap_err().code(),
		ErrorCode::CollidingKeywords
	)
}

#[test]
fn invalid_value_objects() {
	let unexpected_entry = json!({
		"http://example.org/p": { "@value": "x", "http://example.org/q": 1 }
	});
	assert_eq!(
		unexpected_entry.expand().unwrap_err().code(),
		ErrorCode::InvalidValueObject
	);

	let tagged_number = json!({
		"http://example.org/p": { "@value": 1, "@language": "en" }
	});
	assert_eq!(
		tagged_number.expand().unwrap_err().code(),
		ErrorCode::InvalidLanguageTaggedValue
	);

	let relative_type = json!({
		"http://example.org/p": { "@value": "1", "@type": "integer" }
	});
	assert_eq!(
		relative_type.expand().unwrap_err().code(),
		ErrorCode::InvalidTypedValue
	)
}

#[test]
fn invalid_id_value() {
	let input = json!({ "@id": 1, "http://example.org/p": "x" });
	assert_eq!(input.expand().unwrap_err().code(), ErrorCode::InvalidIdValue)
}
