//! Error types for the friendship network.
//!
//! Loading and mutation fail in different ways: a bad seed file is fatal,
//! while a bad name passed to the graph is something the caller can report
//! and move past. Each tier gets its own type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal failure while reading a seed file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening '{}' failed: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading '{}' failed: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A relation line needs a subject and at least one friend.
    #[error("line {line_number} '{line}' has too few fields.")]
    TooFewFields { line_number: usize, line: String },

    #[error("'{name}' on line {line_number} is not a valid name.")]
    InvalidName { line_number: usize, name: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A recoverable failure raised by the graph itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("'{0}' is not a valid name: friendship not added.")]
    InvalidName(String),

    /// Raised when rebuilding a graph from serialized adjacency sets.
    #[error("'{0}' cannot be their own friend.")]
    SelfFriendship(String),

    #[error("'{to}' is listed as a friend of '{from}' but not the other way round.")]
    OneWayFriendship { from: String, to: String },
}
