//! JSON-LD context processing types and algorithms.
use iref::Iri;
use serde_json::Value;

mod define;
mod iri;
mod options;
mod stack;

pub(crate) use define::normalize_language;
use define::*;
pub use iri::{resolve_iri, split_compact_iri};
pub use options::*;
use stack::ProcessingStack;

use crate::{
	algorithms::{error::Error, ProcessingEnvironment},
	util::{as_array, is_absolute_iri},
	Context, Keyword, Loader,
};

/// Context processing state.
pub(crate) struct ContextProcessor<'a> {
	/// Remote contexts being processed, to detect recursive inclusions.
	pub remote_contexts: ProcessingStack,

	/// URL against which remote context references are resolved.
	pub base_url: Option<&'a Iri>,

	pub options: ContextProcessingOptions,
}

impl<'a> ContextProcessor<'a> {
	fn for_remote_context<'b>(
		&'b self,
		remote_contexts: ProcessingStack,
		base_url: &'b Iri,
	) -> ContextProcessor<'b> {
		ContextProcessor {
			remote_contexts,
			base_url: Some(base_url),
			options: self.options,
		}
	}

	/// Merges `local_context` into a copy of `active_context`.
	pub fn process(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &Context,
		local_context: &Value,
	) -> Result<Context, Error> {
		let mut result = active_context.clone();

		for context in as_array(local_context) {
			match context {
				Value::Null => {
					result = Context::new(active_context.original_base_url().map(ToOwned::to_owned))
				}
				Value::String(iri_ref) => result = self.process_remote(env, &result, iri_ref)?,
				Value::Object(context) => {
					if let Some(value) = context.get(Keyword::Version.as_str()) {
						if value.as_f64() != Some(1.1) {
							return Err(Error::InvalidVersionValue(value.clone()));
						}

						let mode = self.options.processing_mode;
						if !mode.allows_version_1_1() {
							return Err(Error::ProcessingModeConflict(mode));
						}
					}

					if let Some(value) = context.get(Keyword::Base.as_str()) {
						if self.remote_contexts.is_empty() {
							match value {
								Value::Null => result.set_base_iri(None),
								Value::String(iri_ref) => {
									match resolve_iri(iri_ref, result.base_iri()) {
										Some(base_iri) => result.set_base_iri(Some(base_iri)),
										None => return Err(Error::InvalidBaseIri(value.clone())),
									}
								}
								_ => return Err(Error::InvalidBaseIri(value.clone())),
							}
						}
					}

					if let Some(value) = context.get(Keyword::Vocab.as_str()) {
						match value {
							Value::Null => result.set_vocabulary(None),
							Value::String(vocab) if is_absolute_iri(vocab) => {
								result.set_vocabulary(Some(vocab.clone()))
							}
							_ => return Err(Error::InvalidVocabMapping(value.clone())),
						}
					}

					if let Some(value) = context.get(Keyword::Language.as_str()) {
						match value {
							Value::Null => result.set_default_language(None),
							Value::String(lang) => {
								result.set_default_language(Some(normalize_language(env, lang)))
							}
							_ => return Err(Error::InvalidDefaultLanguage(value.clone())),
						}
					}

					let mut defined = DefinedTerms::new();
					for key in context.keys() {
						let key = key.as_str();
						if key == Keyword::Version
							|| key == Keyword::Base
							|| key == Keyword::Vocab
							|| key == Keyword::Language
						{
							continue;
						}

						self.define(env, &mut result, context, &mut defined, key)?;
					}
				}
				other => return Err(Error::InvalidLocalContext(other.clone())),
			}
		}

		Ok(result)
	}

	fn process_remote(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &Context,
		iri_ref: &str,
	) -> Result<Context, Error> {
		let base_url = self.base_url.or(active_context.original_base_url());
		let url = resolve_iri(iri_ref, base_url)
			.ok_or_else(|| Error::InvalidLocalContext(Value::String(iri_ref.to_owned())))?;

		let mut remote_contexts = self.remote_contexts.clone();
		if !remote_contexts.push(url.clone()) {
			return Err(Error::RecursiveContextInclusion(url));
		}

		if remote_contexts.len() > self.options.max_remote_contexts {
			return Err(Error::ContextOverflow);
		}

		log::debug!("loading remote context `{url}`");
		let document = env.loader().load(&url)?.document;
		let context = match document {
			Value::Object(mut map) => map
				.remove(Keyword::Context.as_str())
				.ok_or_else(|| Error::InvalidRemoteContext(url.clone()))?,
			_ => return Err(Error::InvalidRemoteContext(url)),
		};

		self.for_remote_context(remote_contexts, &url)
			.process(env, active_context, &context)
	}
}

impl Context {
	/// Process the given local context on top of this one, with the default
	/// options.
	///
	/// Remote contexts are resolved against `base_url`, or the base URL of
	/// this context.
	pub fn process(
		&self,
		env: &mut impl ProcessingEnvironment,
		local_context: &Value,
		base_url: Option<&Iri>,
	) -> Result<Context, Error> {
		self.process_with(
			env,
			local_context,
			base_url,
			ContextProcessingOptions::default(),
		)
	}

	/// Process the given local context on top of this one.
	pub fn process_with(
		&self,
		env: &mut impl ProcessingEnvironment,
		local_context: &Value,
		base_url: Option<&Iri>,
		options: ContextProcessingOptions,
	) -> Result<Context, Error> {
		ContextProcessor {
			remote_contexts: ProcessingStack::new(),
			base_url,
			options,
		}
		.process(env, self, local_context)
	}
}
