//! This crate is a Rust implementation of the transformation algorithms of
//! the [JSON-LD](https://www.w3.org/TR/json-ld/) data interchange format.
//!
//! JSON-LD brings Linked Data and JSON together, adding semantics to JSON
//! with a context mapping short terms to IRIs.
//! This crate can expand, compact, flatten and frame JSON-LD documents
//! represented as [`serde_json::Value`] trees.
//!
//! # Usage
//!
//! The entry point is the [`JsonLdProcessor`] trait, implemented by
//! [`serde_json::Value`] and [`RemoteDocument`].
//!
//! ```
//! use jsonld_transform::JsonLdProcessor;
//! use serde_json::json;
//!
//! let context = json!({ "name": "http://schema.org/name" });
//! let input = json!({ "@context": context, "name": "A" });
//!
//! let expanded = input.expand().expect("expansion failed");
//! let compacted = expanded.compact(&context).expect("compaction failed");
//!
//! assert_eq!(compacted, input);
//! ```
//!
//! Remote contexts are fetched through a [`Loader`], given to the `_with`
//! variants of the processing functions. No loader performs network
//! queries: [`FsLoader`] maps IRIs to local files, and `HashMap`s or
//! `BTreeMap`s of preloaded documents may be used directly.
//!
//! The individual algorithms are available in the [`algorithms`] module.
pub mod algorithms;
mod core;
pub mod processor;
pub mod syntax;
pub mod util;

pub use self::core::*;
pub use algorithms::*;
pub use processor::*;
pub use syntax::*;
