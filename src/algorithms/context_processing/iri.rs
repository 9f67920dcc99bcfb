use iref::{Iri, IriBuf, IriRef};
use serde_json::{Map, Value};

use super::{define::DefinedTerms, ContextProcessor};
use crate::{algorithms::error::Error, algorithms::ProcessingEnvironment, is_keyword, Context};

/// Resolve `iri_ref` against the given base IRI.
pub fn resolve_iri(iri_ref: &str, base_iri: Option<&Iri>) -> Option<IriBuf> {
	let iri_ref = IriRef::new(iri_ref).ok()?;
	match base_iri {
		Some(base_iri) => Some(iri_ref.resolved(base_iri)),
		None => iri_ref.as_iri().map(ToOwned::to_owned),
	}
}

/// Splits a compact IRI into its prefix and suffix.
///
/// Returns `None` if the value has no colon, is a blank node identifier or
/// has the form of an absolute IRI with an authority (`scheme://...`).
pub fn split_compact_iri(value: &str) -> Option<(&str, &str)> {
	let (prefix, suffix) = value.split_once(':')?;
	if prefix == "_" || suffix.starts_with("//") {
		None
	} else {
		Some((prefix, suffix))
	}
}

impl Context {
	/// Expands the given IRI, compact IRI, term or keyword.
	///
	/// Returns `None` if the value is a term explicitly mapped to `null`.
	/// The result is not guaranteed to be an absolute IRI: a relative
	/// reference that cannot be resolved is returned as is.
	///
	/// Default values for `document_relative` and `vocab` should be `false` and `true`.
	pub fn expand_iri(&self, value: &str, document_relative: bool, vocab: bool) -> Option<String> {
		if is_keyword(value) {
			return Some(value.to_owned());
		}

		if vocab {
			if let Some(definition) = self.get(value) {
				return definition.id.clone();
			}
		}

		if value.contains(':') {
			return match split_compact_iri(value) {
				Some((prefix, suffix)) => match self.get(prefix).and_then(|d| d.id.as_deref()) {
					Some(prefix_iri) => Some(format!("{prefix_iri}{suffix}")),
					None => Some(value.to_owned()),
				},
				None => Some(value.to_owned()),
			};
		}

		if vocab {
			if let Some(vocabulary) = self.vocabulary() {
				return Some(format!("{vocabulary}{value}"));
			}
		}

		if document_relative {
			if let Some(iri) = resolve_iri(value, self.base_iri()) {
				return Some(iri.as_str().to_owned());
			}
		}

		Some(value.to_owned())
	}
}

impl<'a> ContextProcessor<'a> {
	/// IRI expansion while a local context is being processed.
	///
	/// Terms of `local_context` referenced by `value` (directly or as the
	/// prefix of a compact IRI) are defined first.
	#[allow(clippy::too_many_arguments)]
	pub fn expand_iri_recursive(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &mut Context,
		local_context: &Map<String, Value>,
		defined: &mut DefinedTerms,
		value: &str,
		document_relative: bool,
		vocab: bool,
	) -> Result<Option<String>, Error> {
		if is_keyword(value) {
			return Ok(Some(value.to_owned()));
		}

		if local_context.contains_key(value) {
			self.define(env, active_context, local_context, defined, value)?;
		}

		if vocab {
			if let Some(definition) = active_context.get(value) {
				return Ok(definition.id.clone());
			}
		}

		if value.contains(':') {
			if let Some((prefix, suffix)) = split_compact_iri(value) {
				if local_context.contains_key(prefix) {
					self.define(env, active_context, local_context, defined, prefix)?;
				}

				if let Some(prefix_iri) = active_context.get(prefix).and_then(|d| d.id.as_deref()) {
					return Ok(Some(format!("{prefix_iri}{suffix}")));
				}
			}

			return Ok(Some(value.to_owned()));
		}

		if vocab {
			if let Some(vocabulary) = active_context.vocabulary() {
				return Ok(Some(format!("{vocabulary}{value}")));
			}
		}

		if document_relative {
			if let Some(iri) = resolve_iri(value, active_context.base_iri()) {
				return Ok(Some(iri.as_str().to_owned()));
			}
		}

		Ok(Some(value.to_owned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::TermDefinition;
	use static_iref::iri;

	#[test]
	fn resolve_relative() {
		let base = iri!("http://example.org/a/b");
		assert_eq!(
			resolve_iri("../c", Some(base)).unwrap().as_str(),
			"http://example.org/c"
		);
		assert_eq!(
			resolve_iri("#frag", Some(base)).unwrap().as_str(),
			"http://example.org/a/b#frag"
		);
		assert!(resolve_iri("c", None).is_none());
	}

	#[test]
	fn expand_compact_iri() {
		let mut context = Context::new(None);
		context.set("foaf", TermDefinition::from_id("http://xmlns.com/foaf/0.1/"));
		context.set("nothing", TermDefinition::undefined());
		context.set_vocabulary(Some("http://vocab.org/".to_owned()));

		assert_eq!(
			context.expand_iri("foaf:name", false, true).as_deref(),
			Some("http://xmlns.com/foaf/0.1/name")
		);
		assert_eq!(
			context.expand_iri("http://other.org/x", false, true).as_deref(),
			Some("http://other.org/x")
		);
		assert_eq!(context.expand_iri("_:b0", false, true).as_deref(), Some("_:b0"));
		assert_eq!(
			context.expand_iri("term", false, true).as_deref(),
			Some("http://vocab.org/term")
		);
		assert_eq!(context.expand_iri("nothing", false, true), None);
		assert_eq!(context.expand_iri("@type", false, true).as_deref(), Some("@type"));
	}
}
