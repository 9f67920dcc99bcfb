use std::fmt;

use serde_json::Value;

use crate::{
	algorithms::{compaction::CompactionOptions, Error},
	ProcessingMode,
};

/// Embedding policy of matched nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Embed {
	/// Always embed the node, unless it would create a cycle.
	#[cfg_attr(feature = "serde", serde(rename = "@always"))]
	Always,

	/// Never embed, only output a node reference.
	#[cfg_attr(feature = "serde", serde(rename = "@never"))]
	Never,

	/// Only the last occurrence of a node is embedded, previous ones are
	/// replaced by node references.
	#[default]
	#[cfg_attr(feature = "serde", serde(rename = "@last"))]
	Last,

	/// Reuse the output node already built for the same identifier.
	#[cfg_attr(feature = "serde", serde(rename = "@link"))]
	Link,
}

impl Embed {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Always => "@always",
			Self::Never => "@never",
			Self::Last => "@last",
			Self::Link => "@link",
		}
	}

	/// Reads an `@embed` frame value.
	///
	/// Booleans are accepted: `true` stands for `@last` and `false` for
	/// `@never`.
	pub fn from_value(value: &Value) -> Result<Self, Error> {
		match value {
			Value::Bool(true) => Ok(Self::Last),
			Value::Bool(false) => Ok(Self::Never),
			Value::String(s) => Self::try_from(s.as_str()),
			other => Err(Error::InvalidEmbedValue(other.clone())),
		}
	}
}

impl<'a> TryFrom<&'a str> for Embed {
	type Error = Error;

	fn try_from(s: &'a str) -> Result<Self, Error> {
		match s {
			"@always" => Ok(Self::Always),
			"@never" => Ok(Self::Never),
			"@last" => Ok(Self::Last),
			"@link" => Ok(Self::Link),
			other => Err(Error::InvalidEmbedValue(Value::String(other.to_owned()))),
		}
	}
}

impl fmt::Display for Embed {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Framing options.
///
/// The flags are the defaults used by frames that do not set the
/// corresponding directive.
#[derive(Clone, Copy, Debug)]
pub struct FramingOptions {
	pub processing_mode: ProcessingMode,

	/// Default `@embed` policy.
	pub embed: Embed,

	/// Default `@explicit` flag.
	pub explicit: bool,

	/// Default `@omitDefault` flag.
	pub omit_default: bool,

	/// Default `@requireAll` flag.
	pub require_all: bool,

	/// Applies `compact_arrays` when removing `@preserve` placeholders.
	pub compact_arrays: bool,
}

impl Default for FramingOptions {
	fn default() -> Self {
		Self {
			processing_mode: ProcessingMode::default(),
			embed: Embed::Last,
			explicit: false,
			omit_default: false,
			require_all: false,
			compact_arrays: true,
		}
	}
}

impl From<FramingOptions> for CompactionOptions {
	fn from(options: FramingOptions) -> Self {
		Self {
			processing_mode: options.processing_mode,
			compact_arrays: options.compact_arrays,
			..Self::default()
		}
	}
}
