use iref::{Iri, IriBuf};
use serde_json::Value;

pub mod fs;
pub mod map;
pub mod none;

pub use fs::FsLoader;
pub use map::EntryNotFound;
pub use none::NoLoader;

/// Loaded remote document.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteDocument {
	/// Final URL of the loaded document, after redirections.
	pub url: Option<IriBuf>,

	/// Context URL advertised alongside the document, if any.
	pub context_url: Option<IriBuf>,

	/// Document content.
	pub document: Value,
}

impl RemoteDocument {
	pub fn new(url: Option<IriBuf>, context_url: Option<IriBuf>, document: Value) -> Self {
		Self {
			url,
			context_url,
			document,
		}
	}

	/// Returns a reference to the document URL, if any.
	pub fn url(&self) -> Option<&Iri> {
		self.url.as_deref()
	}

	/// Returns a reference to the document content.
	pub fn document(&self) -> &Value {
		&self.document
	}

	pub fn into_document(self) -> Value {
		self.document
	}
}

impl From<Value> for RemoteDocument {
	fn from(document: Value) -> Self {
		Self::new(None, None, document)
	}
}

/// Loading error.
#[derive(Debug, thiserror::Error)]
#[error("loading document `{target}` failed: {cause}")]
pub struct LoadError {
	pub target: IriBuf,
	pub cause: anyhow::Error,
}

impl LoadError {
	pub fn new(target: IriBuf, cause: impl Into<anyhow::Error>) -> Self {
		Self {
			target,
			cause: cause.into(),
		}
	}
}

/// Document loader.
///
/// A document loader is required to fetch the remote contexts referenced by
/// IRI in a `@context` entry. Transport is entirely up to the implementation.
///
/// This library provides a few default loader implementations:
///   - [`NoLoader`] dummy loader that always fail. Perfect if you are certain
///     that the processing will not require any loading.
///   - Standard [`HashMap`](std::collections::HashMap) and
///     [`BTreeMap`](std::collections::BTreeMap) mapping IRIs to pre-loaded
///     documents. This way no network calls are performed and the loaded
///     content can be trusted.
///   - [`FsLoader`] redirecting registered IRI prefixes to a local
///     directory on the file system.
pub trait Loader {
	/// Loads the document behind the given IRI.
	fn load(&self, url: &Iri) -> Result<RemoteDocument, LoadError>;
}

impl<'l, L: Loader + ?Sized> Loader for &'l L {
	fn load(&self, url: &Iri) -> Result<RemoteDocument, LoadError> {
		L::load(self, url)
	}
}
