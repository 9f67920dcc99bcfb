use crate::ProcessingMode;

/// Default bound on the number of nested remote contexts.
pub const DEFAULT_MAX_REMOTE_CONTEXTS: usize = 10;

/// Options of the Context Processing Algorithm.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContextProcessingOptions {
	/// The processing mode
	pub processing_mode: ProcessingMode,

	/// Maximum number of nested remote contexts.
	pub max_remote_contexts: usize,
}

impl ContextProcessingOptions {
	/// Return the same set of options, but with the given remote context
	/// bound.
	#[must_use]
	pub fn with_max_remote_contexts(&self, max: usize) -> ContextProcessingOptions {
		let mut opt = *self;
		opt.max_remote_contexts = max;
		opt
	}
}

impl Default for ContextProcessingOptions {
	fn default() -> ContextProcessingOptions {
		ContextProcessingOptions {
			processing_mode: ProcessingMode::default(),
			max_remote_contexts: DEFAULT_MAX_REMOTE_CONTEXTS,
		}
	}
}
