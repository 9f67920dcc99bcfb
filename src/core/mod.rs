//! Core types of the processing model.
pub mod blank;
pub mod context;
pub mod loader;
mod processing_mode;

pub use blank::BlankIdGenerator;
pub use context::{Context, InverseContext, TermDefinition};
pub use loader::{FsLoader, LoadError, Loader, NoLoader, RemoteDocument};
pub use processing_mode::*;
