use std::fmt;

/// Processing mode.
///
/// Contexts may require JSON-LD 1.1 with a `@version` entry, which is an
/// error when processing in JSON-LD 1.0 mode.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProcessingMode {
	/// JSON-LD 1.0.
	#[cfg_attr(feature = "serde", serde(rename = "json-ld-1.0"))]
	JsonLd1_0,

	/// JSON-LD 1.1.
	#[default]
	#[cfg_attr(feature = "serde", serde(rename = "json-ld-1.1"))]
	JsonLd1_1,
}

impl ProcessingMode {
	/// Name of the processing mode, as used in the `processingMode` option.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::JsonLd1_0 => "json-ld-1.0",
			Self::JsonLd1_1 => "json-ld-1.1",
		}
	}

	/// Checks if contexts may declare `"@version": 1.1`.
	pub fn allows_version_1_1(&self) -> bool {
		*self != Self::JsonLd1_0
	}
}

impl fmt::Display for ProcessingMode {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
