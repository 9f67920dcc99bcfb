//! Active context and related types.
mod definition;
pub mod inverse;

use indexmap::IndexMap;
use iref::{Iri, IriBuf};
use once_cell::sync::OnceCell;

pub use definition::*;
pub use inverse::{InverseContext, InverseDefinition, Selection};

/// Processed JSON-LD context.
///
/// Represents the result of the context processing algorithm. A context is
/// never modified once shared: processing a local context produces a new
/// context derived from this one.
///
/// The inverse context used for compaction is computed lazily and cached
/// until the next modification of the term definitions.
#[derive(Debug, Clone, Default)]
pub struct Context {
	original_base_url: Option<IriBuf>,
	base_iri: Option<IriBuf>,
	vocabulary: Option<String>,
	default_language: Option<String>,
	definitions: IndexMap<String, TermDefinition>,
	inverse: OnceCell<InverseContext>,
}

impl Context {
	/// Create a new context with the given base IRI.
	pub fn new(base_iri: Option<IriBuf>) -> Self {
		Self {
			original_base_url: base_iri.clone(),
			base_iri,
			vocabulary: None,
			default_language: None,
			definitions: IndexMap::new(),
			inverse: OnceCell::default(),
		}
	}

	/// Returns a reference to the given `term` definition, if any.
	pub fn get(&self, term: &str) -> Option<&TermDefinition> {
		self.definitions.get(term)
	}

	/// Checks if the given `term` is defined.
	pub fn contains_term(&self, term: &str) -> bool {
		self.definitions.contains_key(term)
	}

	/// Returns the original base URL of the context.
	pub fn original_base_url(&self) -> Option<&Iri> {
		self.original_base_url.as_deref()
	}

	/// Returns the base IRI of the context.
	pub fn base_iri(&self) -> Option<&Iri> {
		self.base_iri.as_deref()
	}

	/// Returns the `@vocab` value, if any.
	pub fn vocabulary(&self) -> Option<&str> {
		self.vocabulary.as_deref()
	}

	/// Returns the default `@language` value.
	pub fn default_language(&self) -> Option<&str> {
		self.default_language.as_deref()
	}

	/// Returns the number of terms defined.
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Checks if no terms are defined.
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}

	/// Returns a handle to the term definitions.
	pub fn definitions(&self) -> &IndexMap<String, TermDefinition> {
		&self.definitions
	}

	/// Returns the inverse of this context.
	pub fn inverse(&self) -> &InverseContext {
		self.inverse.get_or_init(|| self.into())
	}

	/// Sets the definition for the given term.
	pub fn set(&mut self, term: impl Into<String>, definition: TermDefinition) -> Option<TermDefinition> {
		self.inverse.take();
		self.definitions.insert(term.into(), definition)
	}

	/// Removes the definition of the given term.
	pub fn remove(&mut self, term: &str) -> Option<TermDefinition> {
		self.inverse.take();
		self.definitions.shift_remove(term)
	}

	/// Sets the base IRI.
	pub fn set_base_iri(&mut self, iri: Option<IriBuf>) {
		self.base_iri = iri
	}

	/// Sets the `@vocab` value.
	pub fn set_vocabulary(&mut self, vocab: Option<String>) {
		self.vocabulary = vocab
	}

	/// Sets the default language.
	pub fn set_default_language(&mut self, lang: Option<String>) {
		self.inverse.take();
		self.default_language = lang;
	}
}
