//! High-level processing interface.
use iref::{Iri, IriBuf};
use serde_json::{Map, Value};

use crate::{
	algorithms::{
		compaction::{self, compact_graph, compact_iri},
		expansion, flattening, framing, CompactionOptions, ContextProcessingOptions, Error,
		ExpansionOptions, FramingOptions,
	},
	BlankIdGenerator, Context, Embed, Keyword, Loader, NoLoader, ProcessingMode, RemoteDocument,
};

/// JSON-LD Processor options.
#[derive(Clone, Debug)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "camelCase", default)
)]
pub struct Options {
	/// The base IRI to use when expanding or compacting the document.
	///
	/// If set, this overrides the input document's IRI.
	pub base: Option<IriBuf>,

	/// If set to true, the JSON-LD processor replaces arrays with just one element with that element during compaction.
	///
	/// If set to false, all arrays will remain arrays even if they have just one element.
	///
	/// Defaults to `true`.
	pub compact_arrays: bool,

	/// A context that is used to initialize the active context when expanding a document.
	pub expand_context: Option<Value>,

	/// If set to `true`, certain algorithm processing steps where indicated are
	/// ordered lexicographically.
	///
	/// Defaults to `true`.
	pub ordered: bool,

	/// Sets the processing mode.
	///
	/// In `ProcessingMode::JsonLd1_0`, contexts declaring `"@version": 1.1`
	/// are rejected. Defaults to `ProcessingMode::JsonLd1_1`.
	pub processing_mode: ProcessingMode,

	/// Default `@embed` policy of frames.
	pub embed: Embed,

	/// Default `@explicit` flag of frames.
	pub explicit: bool,

	/// Default `@omitDefault` flag of frames.
	pub omit_default: bool,

	/// Default `@requireAll` flag of frames.
	pub require_all: bool,
}

impl Options {
	/// Returns these options with the `ordered` flag set to `false`.
	///
	/// This means entries will not be ordered by keys before being processed.
	pub fn unordered(self) -> Self {
		Self {
			ordered: false,
			..self
		}
	}

	/// Returns these options with the `expand_context` set to the given
	/// `context`.
	pub fn with_expand_context(self, context: Value) -> Self {
		Self {
			expand_context: Some(context),
			..self
		}
	}

	/// Builds options for the context processing algorithm from these options.
	pub fn context_processing_options(&self) -> ContextProcessingOptions {
		ContextProcessingOptions {
			processing_mode: self.processing_mode,
			..Default::default()
		}
	}

	/// Builds options for the expansion algorithm from these options.
	pub fn expansion_options(&self) -> ExpansionOptions {
		ExpansionOptions {
			processing_mode: self.processing_mode,
			ordered: self.ordered,
			frame_expansion: false,
		}
	}

	/// Builds options for the compaction algorithm from these options.
	pub fn compaction_options(&self) -> CompactionOptions {
		CompactionOptions {
			processing_mode: self.processing_mode,
			compact_arrays: self.compact_arrays,
			ordered: self.ordered,
		}
	}

	/// Builds options for the framing algorithm from these options.
	pub fn framing_options(&self) -> FramingOptions {
		FramingOptions {
			processing_mode: self.processing_mode,
			embed: self.embed,
			explicit: self.explicit,
			omit_default: self.omit_default,
			require_all: self.require_all,
			compact_arrays: self.compact_arrays,
		}
	}
}

impl Default for Options {
	fn default() -> Self {
		Self {
			base: None,
			compact_arrays: true,
			expand_context: None,
			ordered: true,
			processing_mode: ProcessingMode::JsonLd1_1,
			embed: Embed::Last,
			explicit: false,
			omit_default: false,
			require_all: false,
		}
	}
}

/// Input of a processing function.
#[derive(Clone, Copy)]
pub struct Input<'a> {
	/// URL of the document, used as base IRI unless [`Options::base`] is set.
	pub url: Option<&'a Iri>,

	/// URL of a context to apply before processing the document.
	pub context_url: Option<&'a Iri>,

	pub document: &'a Value,
}

/// Application Programming Interface.
///
/// The `JsonLdProcessor` interface is the high-level programming structure that
/// developers use to access the JSON-LD transformation methods.
///
/// It is implemented for [`serde_json::Value`] and [`RemoteDocument`].
///
/// # Methods naming
///
/// Each processing function comes in two variants:
///
///   - `_with`: allows passing a custom [`Loader`] used to fetch remote
///     contexts and custom [`Options`].
///   - no suffix: remote contexts are not supported ([`NoLoader`]) and the
///     default options are used.
///
/// # Example
///
/// ```
/// use jsonld_transform::JsonLdProcessor;
/// use serde_json::json;
///
/// let input = json!({
///   "@context": { "name": "http://schema.org/name" },
///   "name": "A"
/// });
///
/// let expanded = input.expand().expect("expansion failed");
/// assert_eq!(expanded, json!([{ "http://schema.org/name": [{ "@value": "A" }] }]));
/// ```
pub trait JsonLdProcessor {
	/// Returns the document to process and its URLs.
	fn input(&self) -> Input<'_>;

	/// Expands the document with the given `loader` and `options`.
	///
	/// The result is always an array of node objects.
	fn expand_with(&self, loader: &impl Loader, options: &Options) -> Result<Value, Error> {
		let input = self.input();
		let (_, expanded) = expand_input(input, input.document, loader, options, false)?;
		Ok(Value::Array(expanded))
	}

	/// Expands the document.
	fn expand(&self) -> Result<Value, Error> {
		self.expand_with(&NoLoader, &Options::default())
	}

	/// Compacts the document with the given `context`, `loader` and
	/// `options`.
	///
	/// `context` is either a local context or an object with a `@context`
	/// entry.
	fn compact_with(
		&self,
		context: &Value,
		loader: &impl Loader,
		options: &Options,
	) -> Result<Value, Error> {
		let input = self.input();
		let (base, expanded) = expand_input(input, input.document, loader, options, false)?;

		let local_context = local_context(context);
		let active_context = process_context(local_context, base.as_deref(), loader, options)?;

		compaction::compact(
			&active_context,
			local_context,
			&expanded,
			options.compaction_options(),
		)
	}

	/// Compacts the document with the given `context`.
	fn compact(&self, context: &Value) -> Result<Value, Error> {
		self.compact_with(context, &NoLoader, &Options::default())
	}

	/// Flattens the document with the given `loader` and `options`.
	///
	/// If a `context` is given, the flattened document is compacted with it.
	fn flatten_with(
		&self,
		context: Option<&Value>,
		loader: &impl Loader,
		options: &Options,
	) -> Result<Value, Error> {
		let input = self.input();
		let (base, expanded) = expand_input(input, input.document, loader, options, false)?;

		let mut generator = BlankIdGenerator::new();
		let flattened = flattening::flatten(&expanded, &mut generator, options.ordered)?;

		match context {
			Some(context) => {
				let local_context = local_context(context);
				let active_context =
					process_context(local_context, base.as_deref(), loader, options)?;

				compact_graph(
					&active_context,
					local_context,
					&flattened,
					options.compaction_options(),
				)
			}
			None => Ok(Value::Array(flattened)),
		}
	}

	/// Flattens the document.
	fn flatten(&self, context: Option<&Value>) -> Result<Value, Error> {
		self.flatten_with(context, &NoLoader, &Options::default())
	}

	/// Frames the document with the given `frame`, `loader` and `options`.
	///
	/// The result is compacted with the context of the frame, and the framed
	/// nodes are listed in a `@graph` entry.
	fn frame_with(&self, frame: &Value, loader: &impl Loader, options: &Options) -> Result<Value, Error> {
		let input = self.input();
		let (base, expanded) = expand_input(input, input.document, loader, options, false)?;
		let (_, expanded_frame) = expand_input(input, frame, loader, options, true)?;

		let mut generator = BlankIdGenerator::new();
		let framed = framing::frame(
			&expanded,
			&expanded_frame,
			&mut generator,
			options.framing_options(),
		)?;

		let empty = Value::Object(Map::new());
		let local_context = frame.get(Keyword::Context.as_str()).unwrap_or(&empty);
		let active_context = process_context(local_context, base.as_deref(), loader, options)?;

		let mut compacted = compact_graph(
			&active_context,
			local_context,
			&framed,
			options.compaction_options(),
		)?;

		let graph = compact_iri(&active_context, Keyword::Graph.as_str(), None, true, false);
		if let Some(nodes) = compacted.get_mut(&graph) {
			*nodes = framing::remove_preserve(&active_context, nodes.take(), options.compact_arrays);

			if !nodes.is_array() {
				*nodes = Value::Array(vec![nodes.take()])
			}
		}

		Ok(compacted)
	}

	/// Frames the document with the given `frame`.
	fn frame(&self, frame: &Value) -> Result<Value, Error> {
		self.frame_with(frame, &NoLoader, &Options::default())
	}
}

impl JsonLdProcessor for Value {
	fn input(&self) -> Input<'_> {
		Input {
			url: None,
			context_url: None,
			document: self,
		}
	}
}

impl JsonLdProcessor for RemoteDocument {
	fn input(&self) -> Input<'_> {
		Input {
			url: self.url.as_deref(),
			context_url: self.context_url.as_deref(),
			document: &self.document,
		}
	}
}

/// Unwraps the `@context` entry of a context document.
fn local_context(context: &Value) -> &Value {
	match context {
		Value::Object(object) => object.get(Keyword::Context.as_str()).unwrap_or(context),
		context => context,
	}
}

fn process_context(
	local_context: &Value,
	base: Option<&Iri>,
	loader: &impl Loader,
	options: &Options,
) -> Result<Context, Error> {
	let mut env = loader;
	Context::new(base.map(ToOwned::to_owned)).process_with(
		&mut env,
		local_context,
		base,
		options.context_processing_options(),
	)
}

/// Expands `document`, within the initial context of `input`.
///
/// Returns the base IRI used for the expansion along with the expanded
/// document.
fn expand_input(
	input: Input<'_>,
	document: &Value,
	loader: &impl Loader,
	options: &Options,
	frame: bool,
) -> Result<(Option<IriBuf>, Vec<Value>), Error> {
	let base = options
		.base
		.clone()
		.or_else(|| input.url.map(ToOwned::to_owned));

	let mut env = loader;
	let mut active_context = Context::new(base.clone());

	if let Some(expand_context) = &options.expand_context {
		active_context = active_context.process_with(
			&mut env,
			local_context(expand_context),
			base.as_deref(),
			options.context_processing_options(),
		)?;
	}

	if let Some(context_url) = input.context_url {
		active_context = active_context.process_with(
			&mut env,
			&Value::String(context_url.as_str().to_owned()),
			base.as_deref(),
			options.context_processing_options(),
		)?;
	}

	let expansion_options = if frame {
		options.expansion_options().for_frame()
	} else {
		options.expansion_options()
	};

	let expanded = expansion::expand(
		&mut env,
		&active_context,
		document,
		base.as_deref(),
		expansion_options,
	)?;

	Ok((base, expanded))
}
