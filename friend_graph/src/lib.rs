//! # Friend Graph
//!
//! The data model of the friendship network analyzer. This crate owns the
//! rules for person names, the symmetric friendship graph, and the loader
//! that builds a graph from a seed file. It performs no console I/O.
//!
//! ## Core Components
//!
//! - **name**: Person name validation
//! - **graph**: The undirected friendship graph and its single mutation entry point
//! - **loader**: Seed file parsing (`name;friend_1;...;friend_n`)
//! - **error**: Fatal load errors and recoverable graph errors

pub mod error;
pub mod graph;
pub mod loader;
pub mod name;

pub use error::*;
pub use graph::*;
pub use loader::*;
pub use name::*;
