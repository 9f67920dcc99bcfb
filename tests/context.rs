use std::collections::HashMap;

use iref::IriBuf;
use jsonld_transform::{
	Context, ContextProcessingOptions, ErrorCode, JsonLdProcessor, NoLoader, Options,
	ProcessingMode, RemoteDocument,
};
use serde_json::{json, Value};
use static_iref::iri;

fn expand_iri(context: &Context, value: &str) -> Option<String> {
	context.expand_iri(value, false, true)
}

#[test]
fn prefix_defined_after_use() {
	let context = Context::new(None)
		.process(
			&mut NoLoader,
			&json!({
				"foo:bar": { "@type": "@id" },
				"foo": "http://example.org/"
			}),
			None,
		)
		.unwrap();

	assert_eq!(
		context.get("foo:bar").and_then(|d| d.id.as_deref()),
		Some("http://example.org/bar")
	);
	assert_eq!(
		context.get("foo:bar").and_then(|d| d.typ.as_deref()),
		Some("@id")
	)
}

#[test]
fn term_expansion() {
	let context = Context::new(None)
		.process(
			&mut NoLoader,
			&json!({
				"@vocab": "http://schema.org/",
				"ex": "http://example.org/",
				"knows": "ex:knows",
				"hidden": null
			}),
			None,
		)
		.unwrap();

	assert_eq!(
		expand_iri(&context, "knows").as_deref(),
		Some("http://example.org/knows")
	);
	assert_eq!(
		expand_iri(&context, "ex:name").as_deref(),
		Some("http://example.org/name")
	);
	assert_eq!(
		expand_iri(&context, "name").as_deref(),
		Some("http://schema.org/name")
	);
	assert_eq!(expand_iri(&context, "@type").as_deref(), Some("@type"));
	assert_eq!(expand_iri(&context, "hidden"), None)
}

#[test]
fn null_context_resets() {
	let base = iri!("http://example.org/doc").to_owned();
	let context = Context::new(Some(base.clone()))
		.process(
			&mut NoLoader,
			&json!([{ "name": "http://schema.org/name" }, null]),
			None,
		)
		.unwrap();

	assert!(context.get("name").is_none());
	assert_eq!(context.base_iri(), Some(base.as_iri()))
}

#[test]
fn cyclic_iri_mapping() {
	let result = Context::new(None).process(
		&mut NoLoader,
		&json!({ "a": "b:x", "b": "a:y" }),
		None,
	);

	assert_eq!(result.unwrap_err().code(), ErrorCode::CyclicIriMapping)
}

#[test]
fn keyword_redefinition() {
	let result = Context::new(None).process(
		&mut NoLoader,
		&json!({ "@type": "http://example.org/type" }),
		None,
	);

	assert_eq!(result.unwrap_err().code(), ErrorCode::KeywordRedefinition)
}

#[test]
fn invalid_definitions() {
	let cases = [
		(
			json!({ "t": { "@id": "http://example.org/t", "@container": "@foo" } }),
			ErrorCode::InvalidContainerMapping,
		),
		(
			json!({ "t": { "@id": "http://example.org/t", "@type": "@list" } }),
			ErrorCode::InvalidTypeMapping,
		),
		(json!({ "t": 1 }), ErrorCode::InvalidTermDefinition),
		(json!({ "@vocab": "relative" }), ErrorCode::InvalidVocabMapping),
		(json!({ "@language": 1 }), ErrorCode::InvalidDefaultLanguage),
		(json!(1), ErrorCode::InvalidLocalContext),
		(
			json!({ "t": { "@reverse": "http://example.org/t", "@container": "@set" } }),
			ErrorCode::InvalidReverseProperty,
		),
	];

	for (local_context, code) in cases {
		let result = Context::new(None).process(&mut NoLoader, &local_context, None);
		assert_eq!(result.unwrap_err().code(), code, "{local_context}")
	}
}

fn loader(documents: Vec<(&str, Value)>) -> HashMap<IriBuf, Value> {
	documents
		.into_iter()
		.map(|(url, document)| (IriBuf::new(url.to_owned()).unwrap(), document))
		.collect()
}

#[test]
fn remote_context() {
	let mut loader = loader(vec![(
		"http://example.org/context.jsonld",
		json!({ "@context": { "name": "http://schema.org/name" } }),
	)]);

	let context = Context::new(None)
		.process(&mut loader, &json!("http://example.org/context.jsonld"), None)
		.unwrap();

	assert_eq!(
		context.get("name").and_then(|d| d.id.as_deref()),
		Some("http://schema.org/name")
	)
}

#[test]
fn relative_remote_context() {
	let loader = loader(vec![(
		"http://example.org/contexts/person.jsonld",
		json!({ "@context": { "name": "http://schema.org/name" } }),
	)]);

	let document = RemoteDocument::new(
		Some(iri!("http://example.org/people/alice.jsonld").to_owned()),
		None,
		json!({
			"@context": "../contexts/person.jsonld",
			"@id": "alice",
			"name": "Alice"
		}),
	);

	assert_eq!(
		document.expand_with(&loader, &Options::default()).unwrap(),
		json!([{
			"@id": "http://example.org/people/alice",
			"http://schema.org/name": [{ "@value": "Alice" }]
		}])
	)
}

#[test]
fn context_url() {
	let loader = loader(vec![(
		"http://example.org/context.jsonld",
		json!({ "@context": { "@vocab": "http://schema.org/" } }),
	)]);

	let document = RemoteDocument::new(
		None,
		Some(iri!("http://example.org/context.jsonld").to_owned()),
		json!({ "name": "A" }),
	);

	assert_eq!(
		document.expand_with(&loader, &Options::default()).unwrap(),
		json!([{ "http://schema.org/name": [{ "@value": "A" }] }])
	)
}

#[test]
fn expand_context_option() {
	let options = Options::default()
		.with_expand_context(json!({ "@context": { "name": "http://schema.org/name" } }));

	assert_eq!(
		json!({ "name": "A" })
			.expand_with(&NoLoader, &options)
			.unwrap(),
		json!([{ "http://schema.org/name": [{ "@value": "A" }] }])
	)
}

#[test]
fn recursive_context_inclusion() {
	let mut loader = loader(vec![(
		"http://example.org/a.jsonld",
		json!({ "@context": "http://example.org/a.jsonld" }),
	)]);

	let result = Context::new(None).process(&mut loader, &json!("http://example.org/a.jsonld"), None);

	assert_eq!(
		result.unwrap_err().code(),
		ErrorCode::RecursiveContextInclusion
	)
}

#[test]
fn context_overflow() {
	let documents = (0..12)
		.map(|i| {
			(
				format!("http://example.org/{i}.jsonld"),
				json!({ "@context": format!("http://example.org/{}.jsonld", i + 1) }),
			)
		})
		.collect::<Vec<_>>();

	let mut loader = loader(
		documents
			.iter()
			.map(|(url, document)| (url.as_str(), document.clone()))
			.collect(),
	);

	let result = Context::new(None).process(&mut loader, &json!("http://example.org/0.jsonld"), None);

	assert_eq!(result.unwrap_err().code(), ErrorCode::ContextOverflow)
}

#[test]
fn remote_context_bound() {
	let mut loader = loader(vec![
		(
			"http://example.org/0.jsonld",
			json!({ "@context": "http://example.org/1.jsonld" }),
		),
		(
			"http://example.org/1.jsonld",
			json!({ "@context": "http://example.org/2.jsonld" }),
		),
		(
			"http://example.org/2.jsonld",
			json!({ "@context": { "name": "http://schema.org/name" } }),
		),
	]);

	let local_context = json!("http://example.org/0.jsonld");

	let context = Context::new(None)
		.process(&mut loader, &local_context, None)
		.unwrap();
	assert_eq!(
		expand_iri(&context, "name").as_deref(),
		Some("http://schema.org/name")
	);

	let options = ContextProcessingOptions::default().with_max_remote_contexts(2);
	let result = Context::new(None).process_with(&mut loader, &local_context, None, options);
	assert_eq!(result.unwrap_err().code(), ErrorCode::ContextOverflow)
}

#[test]
fn invalid_remote_context() {
	let mut loader = loader(vec![(
		"http://example.org/context.jsonld",
		json!({ "name": "http://schema.org/name" }),
	)]);

	let result = Context::new(None).process(
		&mut loader,
		&json!("http://example.org/context.jsonld"),
		None,
	);

	assert_eq!(result.unwrap_err().code(), ErrorCode::InvalidRemoteContext)
}

#[test]
fn loading_failure() {
	let result = Context::new(None).process(
		&mut NoLoader,
		&json!("http://example.org/context.jsonld"),
		None,
	);

	assert_eq!(
		result.unwrap_err().code(),
		ErrorCode::LoadingRemoteContextFailed
	)
}

#[test]
fn context_version() {
	let document = json!({
		"@context": { "@version": 1.1, "name": "http://schema.org/name" },
		"name": "A"
	});

	assert_eq!(
		document.expand().unwrap(),
		json!([{ "http://schema.org/name": [{ "@value": "A" }] }])
	);

	let options = Options {
		processing_mode: ProcessingMode::JsonLd1_0,
		..Options::default()
	};
	assert_eq!(
		document.expand_with(&NoLoader, &options).unwrap_err().code(),
		ErrorCode::ProcessingModeConflict
	);

	let result = Context::new(None).process(&mut NoLoader, &json!({ "@version": "1.1" }), None);
	assert_eq!(result.unwrap_err().code(), ErrorCode::InvalidVersionValue)
}
