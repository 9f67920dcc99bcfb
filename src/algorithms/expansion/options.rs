use crate::{algorithms::context_processing::ContextProcessingOptions, ProcessingMode};

/// Expansion options.
#[derive(Clone, Copy, Debug)]
pub struct ExpansionOptions {
	/// Sets the processing mode.
	pub processing_mode: ProcessingMode,

	/// If set to true, input document entries are processed lexicographically.
	///
	/// Default is `true`, which makes the output independent of the input
	/// entry order.
	pub ordered: bool,

	/// Expands a frame rather than a document.
	///
	/// Framing directives are preserved, `@id` and `@type` accept wildcards
	/// (`{}`) and node objects with only an `@id` are kept.
	pub frame_expansion: bool,
}

impl ExpansionOptions {
	pub fn unordered(self) -> Self {
		Self {
			ordered: false,
			..self
		}
	}

	/// Return the same set of options, for frame expansion.
	pub fn for_frame(self) -> Self {
		Self {
			frame_expansion: true,
			..self
		}
	}
}

impl Default for ExpansionOptions {
	fn default() -> Self {
		Self {
			processing_mode: ProcessingMode::default(),
			ordered: true,
			frame_expansion: false,
		}
	}
}

impl From<ExpansionOptions> for ContextProcessingOptions {
	fn from(options: ExpansionOptions) -> ContextProcessingOptions {
		ContextProcessingOptions {
			processing_mode: options.processing_mode,
			..Default::default()
		}
	}
}
