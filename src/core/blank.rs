use std::collections::HashMap;

/// Checks if the given string is a blank node identifier (`_:name`).
pub fn is_blank_id(s: &str) -> bool {
	s.starts_with("_:")
}

/// Blank node identifier generator.
///
/// Issues `_:b0`, `_:b1`, ... and remembers which fresh identifier has been
/// assigned to each input blank node identifier, so that every occurrence of
/// the same input label is renamed consistently.
///
/// A generator is owned by a single processing call: two documents processed
/// concurrently must each use their own generator.
#[derive(Debug, Default)]
pub struct BlankIdGenerator {
	prefix: String,
	count: usize,
	map: HashMap<String, String>,
}

impl BlankIdGenerator {
	pub fn new() -> Self {
		Self::with_prefix("b")
	}

	/// Creates a generator issuing `_:{prefix}N` identifiers.
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			count: 0,
			map: HashMap::new(),
		}
	}

	/// Number of identifiers issued so far.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Issues a fresh identifier.
	#[allow(clippy::should_implement_trait)]
	pub fn next(&mut self) -> String {
		let id = format!("_:{}{}", self.prefix, self.count);
		self.count += 1;
		id
	}

	/// Returns the identifier assigned to the given input blank node
	/// identifier, issuing a new one the first time it is seen.
	pub fn assign(&mut self, blank_id: &str) -> String {
		if let Some(id) = self.map.get(blank_id) {
			return id.clone();
		}

		let id = self.next();
		self.map.insert(blank_id.to_owned(), id.clone());
		id
	}

	/// Assigns an identifier to a node.
	///
	/// Blank node identifiers are renamed, IRIs are kept and a missing
	/// identifier is replaced by a fresh one.
	pub fn assign_node_id(&mut self, id: Option<&str>) -> String {
		match id {
			Some(id) if is_blank_id(id) => self.assign(id),
			Some(id) => id.to_owned(),
			None => self.next(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn assign_is_stable() {
		let mut gen = BlankIdGenerator::new();
		assert_eq!(gen.assign("_:x"), "_:b0");
		assert_eq!(gen.assign_node_id(None), "_:b1");
		assert_eq!(gen.assign("_:x"), "_:b0");
		assert_eq!(gen.assign_node_id(Some("_:y")), "_:b2");
		assert_eq!(gen.assign_node_id(Some("http://example.org/a")), "http://example.org/a");
		assert_eq!(gen.count(), 3);
	}
}
