use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug)]
pub struct NotAKeyword<T = String>(pub T);

impl<T: ?Sized + ToOwned> NotAKeyword<&T> {
	pub fn into_owned(self) -> NotAKeyword<T::Owned> {
		NotAKeyword(self.0.to_owned())
	}
}

macro_rules! keyword {
	{
		$(
			$(#[$meta:meta])*
			$ident:ident : $lit:literal
		),*
	} => {
		/// JSON-LD keywords, including the framing directives.
		#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
		#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
		pub enum Keyword {
			$(
				$(#[$meta])*
				#[cfg_attr(feature = "serde", serde(rename = $lit))]
				$ident
			),*
		}

		impl Keyword {
			pub fn into_str(self) -> &'static str {
				match self {
					$(
						Self::$ident => $lit
					),*
				}
			}
		}

		impl<'a> TryFrom<&'a str> for Keyword {
			type Error = NotAKeyword<&'a str>;

			fn try_from(input: &'a str) -> Result<Keyword, NotAKeyword<&'a str>> {
				match input {
					$(
						$lit => Ok(Self::$ident),
					)*
					_ => Err(NotAKeyword(input))
				}
			}
		}
	};
}

keyword! {
	/// `@base`.
	/// Sets the base IRI against which relative IRI references are resolved.
	Base : "@base",

	/// `@container`.
	/// Sets the default container type of a term.
	Container : "@container",

	/// `@context`.
	/// Defines the short-hand names used throughout a document.
	Context : "@context",

	/// `@default`.
	/// Framing: value injected when a frame property matches nothing.
	Default : "@default",

	/// `@embed`.
	/// Framing: embedding policy of matched nodes.
	Embed : "@embed",

	/// `@explicit`.
	/// Framing: only output the properties listed in the frame.
	Explicit : "@explicit",

	/// `@graph`.
	/// Used to express a graph.
	Graph : "@graph",

	/// `@id`.
	/// Uniquely identifies node objects.
	Id : "@id",

	/// `@index`.
	Index : "@index",

	/// `@language`.
	/// Language of a string value, or default language of a context.
	Language : "@language",

	/// `@list`.
	/// Used to express an ordered set of data.
	List : "@list",

	/// `@none`.
	/// Matches the absence of a type or language in an inverse context.
	None : "@none",

	/// `@null`.
	/// Framing sentinel standing for an explicit `null` default.
	Null : "@null",

	/// `@omitDefault`.
	/// Framing: do not inject default values for missing properties.
	OmitDefault : "@omitDefault",

	/// `@preserve`.
	/// Framing placeholder wrapping a default value.
	Preserve : "@preserve",

	/// `@requireAll`.
	/// Framing: every frame constraint must match.
	RequireAll : "@requireAll",

	/// `@reverse`.
	/// Used to express reverse properties.
	Reverse : "@reverse",

	/// `@set`.
	/// Used to express an unordered set of data.
	Set : "@set",

	/// `@type`.
	Type : "@type",

	/// `@value`.
	Value : "@value",

	/// `@version`.
	/// Processing mode required by a context.
	Version : "@version",

	/// `@vocab`.
	/// Expands properties and values of `@type` with a common prefix IRI.
	Vocab : "@vocab"
}

impl Keyword {
	pub fn as_str(&self) -> &'static str {
		self.into_str()
	}

	/// Checks if this keyword is a framing directive.
	pub fn is_framing(&self) -> bool {
		matches!(
			self,
			Self::Default | Self::Embed | Self::Explicit | Self::OmitDefault | Self::RequireAll
		)
	}
}

impl FromStr for Keyword {
	type Err = NotAKeyword;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from(s).map_err(NotAKeyword::into_owned)
	}
}

impl From<Keyword> for &'static str {
	fn from(k: Keyword) -> &'static str {
		k.into_str()
	}
}

impl fmt::Display for Keyword {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.into_str())
	}
}

impl PartialEq<str> for Keyword {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for Keyword {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

impl PartialEq<Keyword> for str {
	fn eq(&self, other: &Keyword) -> bool {
		self == other.as_str()
	}
}

impl PartialEq<Keyword> for &str {
	fn eq(&self, other: &Keyword) -> bool {
		*self == other.as_str()
	}
}

pub fn is_keyword(str: &str) -> bool {
	Keyword::try_from(str).is_ok()
}

fn is_alpha(c: char) -> bool {
	c.is_ascii_alphabetic()
}

/// Checks if the input has the form of a keyword (`@` followed by letters)
/// without necessarily being one.
pub fn is_keyword_like(s: &str) -> bool {
	s.len() > 1 && s.starts_with('@') && s.chars().skip(1).all(is_alpha)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_keywords() {
		assert_eq!(Keyword::try_from("@omitDefault").ok(), Some(Keyword::OmitDefault));
		assert!(Keyword::try_from("@omitdefault").is_err());
		assert!(is_keyword("@preserve"));
		assert!(!is_keyword("@foo"));
		assert!(is_keyword_like("@foo"));
		assert!(!is_keyword_like("@"));
		assert!(!is_keyword_like("@foo1"));
	}
}
