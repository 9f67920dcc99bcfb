//! Utility functions.
use std::cmp::Ordering;

mod json;

pub use self::json::*;

/// Shortest-then-lexicographically-least ordering of terms.
///
/// This is the ordering used to pick a term or compact IRI whenever more
/// than one candidate is available.
pub fn compare_shortest_least(a: &str, b: &str) -> Ordering {
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Checks if the given string looks like an absolute IRI or a blank node
/// identifier: a scheme (or `_`) followed by a colon and no whitespace.
pub fn is_absolute_iri(s: &str) -> bool {
	match s.split_once(':') {
		Some((scheme, rest)) => {
			let valid_scheme = scheme == "_" || is_scheme(scheme);
			valid_scheme && !rest.chars().any(char::is_whitespace)
		}
		None => false,
	}
}

fn is_scheme(s: &str) -> bool {
	let mut chars = s.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() => {
			chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
		}
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shortest_least() {
		let mut terms = vec!["name", "nm", "b", "a", "ab"];
		terms.sort_by(|a, b| compare_shortest_least(a, b));
		assert_eq!(terms, ["a", "b", "ab", "nm", "name"])
	}

	#[test]
	fn absolute_iris() {
		assert!(is_absolute_iri("http://example.org/a"));
		assert!(is_absolute_iri("_:b0"));
		assert!(is_absolute_iri("ex:a"));
		assert!(is_absolute_iri("urn:isbn:123"));
		assert!(!is_absolute_iri("relative/path"));
		assert!(!is_absolute_iri("1ex:a"));
		assert!(!is_absolute_iri(":a"));
		assert!(!is_absolute_iri("ex:a b"));
	}
}
