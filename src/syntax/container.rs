use crate::Keyword;

/// Container mapping of a term definition.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Container {
	#[cfg_attr(feature = "serde", serde(rename = "@index"))]
	Index,

	#[cfg_attr(feature = "serde", serde(rename = "@language"))]
	Language,

	#[cfg_attr(feature = "serde", serde(rename = "@list"))]
	List,

	#[cfg_attr(feature = "serde", serde(rename = "@set"))]
	Set,
}

impl Container {
	pub fn into_keyword(self) -> Keyword {
		self.into()
	}

	pub fn keyword(&self) -> Keyword {
		self.into_keyword()
	}

	pub fn as_str(&self) -> &'static str {
		self.into_keyword().into_str()
	}

	/// Checks if this container can be used by a reverse property.
	///
	/// Only `@index` is allowed.
	pub fn is_reverse_compatible(&self) -> bool {
		matches!(self, Self::Index)
	}
}

impl<'a> TryFrom<&'a str> for Container {
	type Error = &'a str;

	fn try_from(str: &'a str) -> Result<Container, &'a str> {
		use Container::*;
		match str {
			"@index" => Ok(Index),
			"@language" => Ok(Language),
			"@list" => Ok(List),
			"@set" => Ok(Set),
			_ => Err(str),
		}
	}
}

impl TryFrom<Keyword> for Container {
	type Error = Keyword;

	fn try_from(k: Keyword) -> Result<Container, Keyword> {
		use Container::*;
		match k {
			Keyword::Index => Ok(Index),
			Keyword::Language => Ok(Language),
			Keyword::List => Ok(List),
			Keyword::Set => Ok(Set),
			k => Err(k),
		}
	}
}

impl From<Container> for Keyword {
	fn from(c: Container) -> Keyword {
		use Container::*;
		match c {
			Index => Keyword::Index,
			Language => Keyword::Language,
			List => Keyword::List,
			Set => Keyword::Set,
		}
	}
}
