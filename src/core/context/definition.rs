use serde_json::{Map, Value};

use crate::{Container, Keyword, Nullable};

/// Term definition.
///
/// A definition whose `id` is `None` is a tombstone: the term has been
/// explicitly undefined (`"term": null` or `{"@id": null}`), which prevents
/// its expansion through `@vocab`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TermDefinition {
	/// IRI mapping (absolute IRI, blank node identifier or keyword).
	pub id: Option<String>,

	/// Type mapping (`@id`, `@vocab` or an absolute IRI).
	pub typ: Option<String>,

	/// Language mapping.
	///
	/// `None` when unset, `Some(Nullable::Null)` when explicitly set to
	/// `null`.
	pub language: Option<Nullable<String>>,

	/// Container mapping.
	pub container: Option<Container>,

	/// Reverse property flag.
	pub reverse: bool,
}

impl TermDefinition {
	/// Creates a tombstone definition.
	pub fn undefined() -> Self {
		Self::default()
	}

	/// Creates a simple definition mapping to the given IRI.
	pub fn from_id(id: impl Into<String>) -> Self {
		Self {
			id: Some(id.into()),
			..Self::default()
		}
	}

	/// Checks if this definition is a tombstone.
	pub fn is_undefined(&self) -> bool {
		self.id.is_none()
	}

	/// Returns the keyword this term is an alias of, if any.
	pub fn keyword(&self) -> Option<Keyword> {
		self.id.as_deref().and_then(|id| Keyword::try_from(id).ok())
	}

	/// Checks if this term is a keyword alias.
	pub fn is_keyword_alias(&self) -> bool {
		self.keyword().is_some()
	}

	/// Checks if the term uses the given container.
	pub fn has_container(&self, c: Container) -> bool {
		self.container == Some(c)
	}

	/// Builds back the expanded JSON representation of the definition.
	pub fn to_json(&self) -> Value {
		let mut map = Map::new();

		let id_key = if self.reverse { "@reverse" } else { "@id" };
		map.insert(
			id_key.to_owned(),
			self.id.clone().map(Value::String).unwrap_or(Value::Null),
		);

		if let Some(typ) = &self.typ {
			map.insert("@type".to_owned(), Value::String(typ.clone()));
		}

		if let Some(language) = &self.language {
			map.insert(
				"@language".to_owned(),
				match language {
					Nullable::Some(l) => Value::String(l.clone()),
					Nullable::Null => Value::Null,
				},
			);
		}

		if let Some(container) = self.container {
			map.insert(
				"@container".to_owned(),
				Value::String(container.as_str().to_owned()),
			);
		}

		Value::Object(map)
	}
}
