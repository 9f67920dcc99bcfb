//! JSON-LD transformation algorithms.
pub mod compaction;
pub mod context_processing;
mod error;
pub mod expansion;
pub mod flattening;
pub mod framing;
mod warning;

pub use compaction::{compact, CompactionOptions};
pub use context_processing::ContextProcessingOptions;
pub use error::*;
pub use expansion::{expand, ExpansionOptions};
pub use flattening::{flatten, generate_node_map, NodeMap};
pub use framing::{frame, Embed, FramingOptions};
pub use warning::*;

use crate::Loader;

/// Environment of an algorithm: the loader used to fetch remote contexts and
/// a sink for warnings.
pub trait ProcessingEnvironment {
	type Loader: Loader;

	fn loader(&self) -> &Self::Loader;

	fn warn(&mut self, w: Warning);
}

impl<L: Loader> ProcessingEnvironment for L {
	type Loader = Self;

	fn loader(&self) -> &Self::Loader {
		self
	}

	fn warn(&mut self, w: Warning) {
		log_warning(w)
	}
}

/// Environment collecting the warnings instead of logging them.
pub struct CollectWarnings<'a, L> {
	pub loader: &'a L,
	pub warnings: Vec<Warning>,
}

impl<'a, L> CollectWarnings<'a, L> {
	pub fn new(loader: &'a L) -> Self {
		Self {
			loader,
			warnings: Vec::new(),
		}
	}
}

impl<'a, L: Loader> ProcessingEnvironment for CollectWarnings<'a, L> {
	type Loader = L;

	fn loader(&self) -> &Self::Loader {
		self.loader
	}

	fn warn(&mut self, w: Warning) {
		self.warnings.push(w)
	}
}
