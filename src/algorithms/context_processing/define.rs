use std::collections::HashMap;

use serde_json::{Map, Value};

use super::ContextProcessor;
use crate::{
	algorithms::{error::Error, warning::Warning, ProcessingEnvironment},
	is_keyword, is_keyword_like, is_well_formed_lang_tag,
	util::is_absolute_iri,
	Container, Context, Keyword, Nullable, TermDefinition,
};

/// Terms of a local context already defined, or being defined.
#[derive(Default)]
pub struct DefinedTerms(HashMap<String, DefinedTerm>);

impl DefinedTerms {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts the definition of `term`.
	///
	/// Returns `Ok(false)` if the term is already defined and an error if
	/// its definition is still pending (cyclic IRI mapping).
	pub fn begin(&mut self, term: &str) -> Result<bool, Error> {
		match self.0.get(term) {
			Some(d) => {
				if d.pending {
					Err(Error::CyclicIriMapping(term.to_owned()))
				} else {
					Ok(false)
				}
			}
			None => {
				self.0.insert(term.to_owned(), DefinedTerm { pending: true });

				Ok(true)
			}
		}
	}

	pub fn end(&mut self, term: &str) {
		if let Some(d) = self.0.get_mut(term) {
			d.pending = false
		}
	}
}

pub struct DefinedTerm {
	pending: bool,
}

/// Lower-cases a language tag, warning if it is malformed.
pub(crate) fn normalize_language(env: &mut impl ProcessingEnvironment, lang: &str) -> String {
	if !is_well_formed_lang_tag(lang) {
		env.warn(Warning::MalformedLanguageTag(lang.to_owned()))
	}

	lang.to_lowercase()
}

impl<'a> ContextProcessor<'a> {
	/// Creates the definition of `term` from the local context into the
	/// active context.
	pub fn define(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &mut Context,
		local_context: &Map<String, Value>,
		defined: &mut DefinedTerms,
		term: &str,
	) -> Result<(), Error> {
		if !defined.begin(term)? {
			return Ok(());
		}

		log::trace!("defining term `{term}`");
		let definition = self.create_definition(env, active_context, local_context, defined, term)?;

		if let Some(definition) = definition {
			active_context.set(term, definition);
		}

		defined.end(term);
		Ok(())
	}

	fn create_definition(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &mut Context,
		local_context: &Map<String, Value>,
		defined: &mut DefinedTerms,
		term: &str,
	) -> Result<Option<TermDefinition>, Error> {
		if is_keyword(term) {
			return Err(Error::KeywordRedefinition(term.to_owned()));
		}

		if term.is_empty() {
			return Err(Error::InvalidTermDefinition(term.to_owned()));
		}

		if is_keyword_like(term) {
			env.warn(Warning::KeywordLikeTerm(term.to_owned()));
			return Ok(None);
		}

		active_context.remove(term);

		let value = match local_context.get(term) {
			Some(Value::Null) | None => return Ok(Some(TermDefinition::undefined())),
			Some(Value::String(id)) => {
				let mut map = Map::new();
				map.insert("@id".to_owned(), Value::String(id.clone()));
				map
			}
			Some(Value::Object(map)) => map.clone(),
			Some(_) => return Err(Error::InvalidTermDefinition(term.to_owned())),
		};

		if let Some(Value::Null) = value.get("@id") {
			return Ok(Some(TermDefinition::undefined()));
		}

		let mut definition = TermDefinition::default();

		if let Some(typ) = value.get("@type") {
			let typ = typ
				.as_str()
				.ok_or_else(|| Error::InvalidTypeMapping(term.to_owned()))?;
			let expanded = self.expand_iri_recursive(
				env,
				active_context,
				local_context,
				defined,
				typ,
				false,
				true,
			)?;

			match expanded {
				Some(typ)
					if typ == "@id"
						|| typ == "@vocab"
						|| (is_absolute_iri(&typ) && !typ.starts_with("_:")) =>
				{
					definition.typ = Some(typ)
				}
				_ => return Err(Error::InvalidTypeMapping(term.to_owned())),
			}
		}

		if let Some(reverse) = value.get("@reverse") {
			if value.contains_key("@id") {
				return Err(Error::InvalidReverseProperty(term.to_owned()));
			}

			let reverse = reverse
				.as_str()
				.ok_or_else(|| Error::InvalidIriMapping(term.to_owned()))?;
			let id = self.expand_iri_recursive(
				env,
				active_context,
				local_context,
				defined,
				reverse,
				false,
				true,
			)?;

			match id {
				Some(id) if is_absolute_iri(&id) => definition.id = Some(id),
				_ => return Err(Error::InvalidIriMapping(term.to_owned())),
			}

			if let Some(container) = value.get("@container") {
				definition.container = match container {
					Value::Null => None,
					Value::String(c) => match Container::try_from(c.as_str()) {
						Ok(c) if c.is_reverse_compatible() => Some(c),
						_ => return Err(Error::InvalidReverseProperty(term.to_owned())),
					},
					_ => return Err(Error::InvalidReverseProperty(term.to_owned())),
				}
			}

			definition.reverse = true;
			if definition.typ.is_none() {
				definition.typ = Some(Keyword::Id.as_str().to_owned())
			}

			return Ok(Some(definition));
		}

		match value.get("@id") {
			Some(id) if id.as_str() != Some(term) => {
				let id = id
					.as_str()
					.ok_or_else(|| Error::InvalidIriMapping(term.to_owned()))?;
				let expanded = self.expand_iri_recursive(
					env,
					active_context,
					local_context,
					defined,
					id,
					false,
					true,
				)?;

				match expanded {
					Some(id) if is_keyword(&id) => {
						if id.as_str() == Keyword::Context || id.as_str() == Keyword::Preserve {
							return Err(Error::InvalidKeywordAlias(term.to_owned()));
						}

						definition.id = Some(id)
					}
					Some(id) if is_absolute_iri(&id) => definition.id = Some(id),
					_ => return Err(Error::InvalidIriMapping(term.to_owned())),
				}
			}
			_ => {
				if let Some((prefix, suffix)) = term.split_once(':') {
					if local_context.contains_key(prefix) {
						self.define(env, active_context, local_context, defined, prefix)?;
					}

					definition.id = match active_context.get(prefix).and_then(|d| d.id.as_deref()) {
						Some(prefix_iri) => Some(format!("{prefix_iri}{suffix}")),
						None => Some(term.to_owned()),
					}
				} else if let Some(vocabulary) = active_context.vocabulary() {
					definition.id = Some(format!("{vocabulary}{term}"))
				} else {
					return Err(Error::InvalidIriMapping(term.to_owned()));
				}
			}
		}

		if let Some(container) = value.get("@container") {
			definition.container = match container {
				Value::Null => None,
				Value::String(c) => Some(
					Container::try_from(c.as_str())
						.map_err(|_| Error::InvalidContainerMapping(term.to_owned()))?,
				),
				_ => return Err(Error::InvalidContainerMapping(term.to_owned())),
			}
		}

		if !value.contains_key("@type") {
			if let Some(language) = value.get("@language") {
				definition.language = match language {
					Value::Null => Some(Nullable::Null),
					Value::String(lang) => Some(Nullable::Some(normalize_language(env, lang))),
					_ => return Err(Error::InvalidLanguageMapping(term.to_owned())),
				}
			}
		}

		Ok(Some(definition))
	}
}
