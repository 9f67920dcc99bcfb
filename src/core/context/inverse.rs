//! Inverse context, used to select terms during compaction.
use std::collections::HashMap;

use super::Context;
use crate::{util::compare_shortest_least, Container, Nullable};

/// Language key standing for an explicit `null` language mapping.
pub const NULL_LANGUAGE: &str = "@null";

/// Value of the `@none` selection entry.
pub const NONE: &str = "@none";

/// Value of the `@reverse` type selection entry.
pub const REVERSE: &str = "@reverse";

#[derive(Debug, Clone, Default)]
struct InverseType {
	map: HashMap<String, String>,
}

impl InverseType {
	fn select(&self, selection: &str) -> Option<&str> {
		self.map.get(selection).map(String::as_str)
	}

	fn set(&mut self, ty: &str, term: &str) {
		if !self.map.contains_key(ty) {
			self.map.insert(ty.to_owned(), term.to_owned());
		}
	}
}

#[derive(Debug, Clone, Default)]
struct InverseLang {
	map: HashMap<String, String>,
}

impl InverseLang {
	fn select(&self, selection: &str) -> Option<&str> {
		self.map.get(selection).map(String::as_str)
	}

	fn set(&mut self, lang: &str, term: &str) {
		self.map
			.entry(lang.to_owned())
			.or_insert_with(|| term.to_owned());
	}
}

#[derive(Debug, Clone, Default)]
struct InverseContainer {
	language: InverseLang,
	typ: InverseType,
}

/// Inverse definition of an IRI, for every container.
///
/// The `None` container key stands for `@none`.
#[derive(Debug, Clone, Default)]
pub struct InverseDefinition {
	map: HashMap<Option<Container>, InverseContainer>,
}

/// Term selection preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
	/// Preferred type mapping values, by priority.
	Type(Vec<String>),

	/// Preferred language mapping values, by priority.
	Lang(Vec<String>),
}

impl InverseDefinition {
	fn new() -> InverseDefinition {
		InverseDefinition {
			map: HashMap::new(),
		}
	}

	fn get(&self, container: &Option<Container>) -> Option<&InverseContainer> {
		self.map.get(container)
	}

	fn reference_mut(&mut self, container: Option<Container>) -> &mut InverseContainer {
		self.map.entry(container).or_default()
	}

	/// Returns the first term matching the given containers and selection,
	/// trying containers first and preferred values second.
	pub fn select(&self, containers: &[Option<Container>], selection: &Selection) -> Option<&str> {
		for container in containers {
			if let Some(type_lang_map) = self.get(container) {
				match selection {
					Selection::Type(preferred_values) => {
						for item in preferred_values {
							if let Some(term) = type_lang_map.typ.select(item) {
								return Some(term);
							}
						}
					}
					Selection::Lang(preferred_values) => {
						for item in preferred_values {
							if let Some(term) = type_lang_map.language.select(item) {
								return Some(term);
							}
						}
					}
				}
			}
		}

		None
	}
}

/// Inverse context.
#[derive(Debug, Clone, Default)]
pub struct InverseContext {
	map: HashMap<String, InverseDefinition>,
}

impl InverseContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, iri: &str) -> bool {
		self.map.contains_key(iri)
	}

	pub fn get(&self, iri: &str) -> Option<&InverseDefinition> {
		self.map.get(iri)
	}

	fn reference_mut(&mut self, iri: &str) -> &mut InverseDefinition {
		self.map
			.entry(iri.to_owned())
			.or_insert_with(InverseDefinition::new)
	}

	pub fn select(
		&self,
		iri: &str,
		containers: &[Option<Container>],
		selection: &Selection,
	) -> Option<&str> {
		match self.get(iri) {
			Some(container_map) => container_map.select(containers, selection),
			None => None,
		}
	}
}

impl<'a> From<&'a Context> for InverseContext {
	fn from(context: &'a Context) -> Self {
		let mut result = InverseContext::new();
		let default_language = context.default_language().unwrap_or(NONE);

		let mut definitions: Vec<_> = context.definitions().iter().collect();
		definitions.sort_by(|(a, _), (b, _)| compare_shortest_least(a, b));
		log::trace!("building inverse context over {} terms", definitions.len());

		for (term, term_definition) in definitions {
			if let Some(iri) = term_definition.id.as_deref() {
				let container_map = result.reference_mut(iri);
				let type_lang_map = container_map.reference_mut(term_definition.container);

				let type_map = &mut type_lang_map.typ;
				let lang_map = &mut type_lang_map.language;

				if term_definition.reverse {
					type_map.set(REVERSE, term)
				} else if let Some(typ) = &term_definition.typ {
					type_map.set(typ, term)
				} else if let Some(language) = &term_definition.language {
					match language {
						Nullable::Some(language) => lang_map.set(language, term),
						Nullable::Null => lang_map.set(NULL_LANGUAGE, term),
					}
				} else {
					lang_map.set(default_language, term);
					lang_map.set(NONE, term);
					type_map.set(NONE, term);
				}
			}
		}

		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::TermDefinition;

	#[test]
	fn shortest_term_wins() {
		let mut context = Context::new(None);
		context.set("name", TermDefinition::from_id("http://schema.org/name"));
		context.set("n", TermDefinition::from_id("http://schema.org/name"));
		context.set("m", TermDefinition::from_id("http://schema.org/name"));

		let selection = Selection::Lang(vec![NONE.to_owned()]);
		assert_eq!(
			context
				.inverse()
				.select("http://schema.org/name", &[None], &selection),
			Some("m")
		);
	}

	#[test]
	fn typed_terms_are_kept_apart() {
		let mut context = Context::new(None);
		context.set("date", {
			let mut d = TermDefinition::from_id("http://example.org/date");
			d.typ = Some("http://www.w3.org/2001/XMLSchema#date".to_owned());
			d
		});
		context.set("d", TermDefinition::from_id("http://example.org/date"));

		let inverse = context.inverse();
		let typed = Selection::Type(vec![
			"http://www.w3.org/2001/XMLSchema#date".to_owned(),
			NONE.to_owned(),
		]);
		assert_eq!(
			inverse.select("http://example.org/date", &[None], &typed),
			Some("date")
		);

		let untyped = Selection::Type(vec![NONE.to_owned()]);
		assert_eq!(
			inverse.select("http://example.org/date", &[None], &untyped),
			Some("d")
		);
	}

	#[test]
	fn inverse_is_invalidated() {
		let mut context = Context::new(None);
		context.set("long", TermDefinition::from_id("http://example.org/p"));
		let selection = Selection::Lang(vec![NONE.to_owned()]);
		assert_eq!(
			context.inverse().select("http://example.org/p", &[None], &selection),
			Some("long")
		);

		context.set("p", TermDefinition::from_id("http://example.org/p"));
		assert_eq!(
			context.inverse().select("http://example.org/p", &[None], &selection),
			Some("p")
		);
	}
}
