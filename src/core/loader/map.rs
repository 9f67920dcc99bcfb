use iref::{Iri, IriBuf};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use super::{LoadError, Loader, RemoteDocument};

/// Error returned using [`HashMap`] or [`BTreeMap`] as a [`Loader`] with the
/// requested document is not found.
#[derive(Debug, thiserror::Error)]
#[error("document not found")]
pub struct EntryNotFound;

impl Loader for HashMap<IriBuf, Value> {
	fn load(&self, url: &Iri) -> Result<RemoteDocument, LoadError> {
		match self.get(url) {
			Some(document) => Ok(RemoteDocument::new(
				Some(url.to_owned()),
				None,
				document.clone(),
			)),
			None => Err(LoadError::new(url.to_owned(), EntryNotFound)),
		}
	}
}

impl Loader for BTreeMap<IriBuf, Value> {
	fn load(&self, url: &Iri) -> Result<RemoteDocument, LoadError> {
		match self.get(url) {
			Some(document) => Ok(RemoteDocument::new(
				Some(url.to_owned()),
				None,
				document.clone(),
			)),
			None => Err(LoadError::new(url.to_owned(), EntryNotFound)),
		}
	}
}
