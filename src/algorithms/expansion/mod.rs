//! JSON-LD expansion algorithm.
//!
//! See: <https://www.w3.org/TR/json-ld-api/#expansion-algorithms>
use iref::Iri;
use serde_json::Value;

use crate::{
	algorithms::{Error, ProcessingEnvironment},
	util::into_array,
	Context,
};

mod array;
mod element;
mod literal;
mod options;

pub use literal::expand_literal;
pub use options::*;

/// Expansion state shared by every recursive call.
pub(crate) struct Expander<'a> {
	/// URL against which remote contexts are resolved.
	pub base_url: Option<&'a Iri>,

	pub options: ExpansionOptions,
}

/// Expands the given document.
///
/// The result is always an array of node objects (possibly empty). A
/// top-level object holding only a `@graph` entry is unwrapped.
pub fn expand(
	env: &mut impl ProcessingEnvironment,
	active_context: &Context,
	element: &Value,
	base_url: Option<&Iri>,
	options: ExpansionOptions,
) -> Result<Vec<Value>, Error> {
	let expander = Expander { base_url, options };
	let mut expanded = expander.expand_element(env, active_context, None, element, false)?;

	if let Value::Object(map) = &mut expanded {
		if map.len() == 1 {
			if let Some(graph) = map.remove("@graph") {
				expanded = graph
			}
		}
	}

	Ok(match expanded {
		Value::Null => Vec::new(),
		expanded => into_array(expanded),
	})
}
