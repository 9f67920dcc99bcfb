//! Syntactic building blocks shared by every algorithm.
mod container;
mod error;
mod keyword;
mod lang;
mod nullable;

pub use container::Container;
pub use error::*;
pub use keyword::*;
pub use lang::*;
pub use nullable::*;
