use serde_json::Value;

use super::Expander;
use crate::{
	algorithms::{Error, ProcessingEnvironment},
	util::is_list_object,
	Container, Context,
};

impl<'a> Expander<'a> {
	/// Expands every item of an array, flattening nested arrays one level.
	pub fn expand_array(
		&self,
		env: &mut impl ProcessingEnvironment,
		active_context: &Context,
		active_property: Option<&str>,
		items: &[Value],
		inside_list: bool,
	) -> Result<Value, Error> {
		let inside_list = inside_list
			|| active_property
				.and_then(|p| active_context.get(p))
				.map_or(false, |d| d.has_container(Container::List));

		let mut result = Vec::with_capacity(items.len());
		for item in items {
			let expanded = self.expand_element(env, active_context, active_property, item, false)?;

			if inside_list && (expanded.is_array() || is_list_object(&expanded)) {
				return Err(Error::ListOfLists);
			}

			match expanded {
				Value::Null => (),
				Value::Array(items) => result.extend(items),
				item => result.push(item),
			}
		}

		Ok(Value::Array(result))
	}
}
