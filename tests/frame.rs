use jsonld_transform::{Embed, ErrorCode, JsonLdProcessor, NoLoader, Options};
use serde_json::{json, Value};

fn library() -> Value {
	json!({
		"@context": { "@vocab": "http://example.org/" },
		"@graph": [
			{
				"@id": "http://example.org/a",
				"knows": [
					{ "@id": "http://example.org/b" },
					{ "@id": "http://example.org/c" }
				]
			},
			{
				"@id": "http://example.org/b",
				"knows": { "@id": "http://example.org/c" }
			},
			{
				"@id": "http://example.org/c",
				"name": "C"
			}
		]
	})
}

const VERBOSITY: usize = 4;

/// Logs the framing decisions when running with `--nocapture`.
fn init_logger() {
	stderrlog::new().verbosity(VERBOSITY).init().ok();
}

fn root_frame() -> Value {
	json!({
		"@context": { "@vocab": "http://example.org/" },
		"@id": "http://example.org/a"
	})
}

#[test]
fn self_reference_is_not_embedded() {
	let input = json!({
		"@id": "http://example.org/a",
		"http://example.org/knows": { "@id": "http://example.org/a" }
	});

	let frame = json!({
		"@type": "@none",
		"http://example.org/knows": { "@embed": "@never" }
	});

	let expected = json!({
		"@graph": [{
			"@id": "http://example.org/a",
			"http://example.org/knows": { "@id": "http://example.org/a" }
		}]
	});

	assert_eq!(input.frame(&frame).unwrap(), expected);

	let options = Options {
		embed: Embed::Always,
		..Options::default()
	};
	assert_eq!(
		input.frame_with(&json!({}), &NoLoader, &options).unwrap(),
		expected
	)
}

#[test]
fn frame_by_type_with_defaults() {
	let input = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@graph": [
			{ "@id": "http://example.org/a", "@type": "Person", "name": "A" },
			{ "@id": "http://example.org/x", "@type": "Place", "name": "X" }
		]
	});

	let frame = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@type": "Person",
		"age": { "@default": 0 },
		"nick": {}
	});

	assert_eq!(
		input.frame(&frame).unwrap(),
		json!({
			"@context": { "@vocab": "http://example.org/" },
			"@graph": [{
				"@id": "http://example.org/a",
				"@type": "Person",
				"age": 0,
				"name": "A",
				"nick": null
			}]
		})
	)
}

#[test]
fn omit_default() {
	let input = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@id": "http://example.org/a",
		"@type": "Person"
	});

	let frame = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@type": "Person",
		"nick": { "@omitDefault": true }
	});

	assert_eq!(
		input.frame(&frame).unwrap(),
		json!({
			"@context": { "@vocab": "http://example.org/" },
			"@graph": [{ "@id": "http://example.org/a", "@type": "Person" }]
		})
	)
}

#[test]
fn defaults_of_typed_and_tagged_terms() {
	let context = json!({
		"d": { "@id": "http://example.org/d", "@type": "http://example.org/Dt" },
		"label": { "@id": "http://example.org/label", "@language": "en" }
	});

	let input = json!({
		"@id": "http://example.org/n",
		"@type": "http://example.org/T"
	});

	let frame = json!({
		"@context": context,
		"@type": "http://example.org/T",
		"d": { "@default": "v" },
		"label": { "@default": "none" }
	});

	assert_eq!(
		input.frame(&frame).unwrap(),
		json!({
			"@context": context,
			"@graph": [{
				"@id": "http://example.org/n",
				"@type": "http://example.org/T",
				"d": "v",
				"label": "none"
			}]
		})
	)
}

#[test]
fn frame_list_items() {
	let input = json!({
		"@id": "http://example.org/a",
		"http://example.org/p": {
			"@list": [{
				"@id": "http://example.org/b",
				"http://example.org/q": "Q",
				"http://example.org/r": "R"
			}]
		}
	});

	let frame = json!({
		"@id": "http://example.org/a",
		"http://example.org/p": {
			"@explicit": true,
			"http://example.org/q": {}
		}
	});

	assert_eq!(
		input.frame(&frame).unwrap(),
		json!({
			"@graph": [{
				"@id": "http://example.org/a",
				"http://example.org/p": {
					"@list": [{
						"@id": "http://example.org/b",
						"http://example.org/q": "Q"
					}]
				}
			}]
		})
	)
}

#[test]
fn embed_last() {
	init_logger();

	assert_eq!(
		library().frame(&root_frame()).unwrap(),
		json!({
			"@context": { "@vocab": "http://example.org/" },
			"@graph": [{
				"@id": "http://example.org/a",
				"knows": [
					{
						"@id": "http://example.org/b",
						"knows": { "@id": "http://example.org/c" }
					},
					{ "@id": "http://example.org/c", "name": "C" }
				]
			}]
		})
	)
}

#[test]
fn embed_always_and_link() {
	init_logger();

	let expected = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@graph": [{
			"@id": "http://example.org/a",
			"knows": [
				{
					"@id": "http://example.org/b",
					"knows": { "@id": "http://example.org/c", "name": "C" }
				},
				{ "@id": "http://example.org/c", "name": "C" }
			]
		}]
	});

	for embed in [Embed::Always, Embed::Link] {
		let options = Options {
			embed,
			..Options::default()
		};

		assert_eq!(
			library()
				.frame_with(&root_frame(), &NoLoader, &options)
				.unwrap(),
			expected
		)
	}
}

#[test]
fn explicit_inclusion() {
	let input = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@id": "http://example.org/a",
		"name": "A",
		"age": 30
	});

	let frame = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@explicit": true,
		"name": {}
	});

	assert_eq!(
		input.frame(&frame).unwrap(),
		json!({
			"@context": { "@vocab": "http://example.org/" },
			"@graph": [{ "@id": "http://example.org/a", "name": "A" }]
		})
	)
}

#[test]
fn require_all() {
	let input = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@graph": [
			{ "@id": "http://example.org/a", "@type": "Person", "name": "A" },
			{ "@id": "http://example.org/b", "@type": "Person" }
		]
	});

	let ids = |framed: Value| -> Vec<Value> {
		framed["@graph"]
			.as_array()
			.unwrap()
			.iter()
			.map(|node| node["@id"].clone())
			.collect()
	};

	let frame = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@type": "Person",
		"name": {}
	});
	assert_eq!(
		ids(input.frame(&frame).unwrap()),
		vec![json!("http://example.org/a"), json!("http://example.org/b")]
	);

	let frame = json!({
		"@context": { "@vocab": "http://example.org/" },
		"@type": "Person",
		"@requireAll": true,
		"name": {}
	});
	assert_eq!(
		ids(input.frame(&frame).unwrap()),
		vec![json!("http://example.org/a")]
	)
}

#[test]
fn match_untyped_nodes() {
	let input = json!({
		"@graph": [
			{ "@id": "http://example.org/a", "@type": "http://example.org/T" },
			{ "@id": "http://example.org/b", "http://example.org/p": "x" }
		]
	});

	let frame = json!({ "@type": [] });

	assert_eq!(
		input.frame(&frame).unwrap(),
		json!({
			"@graph": [{
				"@id": "http://example.org/b",
				"http://example.org/p": "x"
			}]
		})
	)
}

#[test]
fn invalid_frames() {
	let input = json!({ "@id": "http://example.org/a", "http://example.org/p": "x" });

	let two_frames = json!([
		{ "@type": "http://example.org/A" },
		{ "@type": "http://example.org/B" }
	]);
	assert_eq!(
		input.frame(&two_frames).unwrap_err().code(),
		ErrorCode::InvalidFrame
	);

	let invalid_embed = json!({ "@embed": "@sometimes" });
	assert_eq!(
		input.frame(&invalid_embed).unwrap_err().code(),
		ErrorCode::InvalidEmbedValue
	)
}
