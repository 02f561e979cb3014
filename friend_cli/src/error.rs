//! Error types for the command layer and the binary.

use friend_graph::{GraphError, LoadError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::command::CommandKind;

/// A recoverable failure while handling one command line.
///
/// The session reports it and keeps running with the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("an empty line is not a valid command.")]
    EmptyLine,

    #[error("unknown command '{0}'.")]
    UnknownCommand(String),

    #[error("there was extra text after {} command.", .command.usage())]
    ExtraArguments { command: CommandKind },

    #[error("{} command requires at least {required} names.", .command.usage())]
    TooFewNames { command: CommandKind, required: usize },

    #[error("{} command requires exactly {}.", .command.usage(), name_count(.expected))]
    WrongNameCount { command: CommandKind, expected: usize },

    #[error("'{0}' is not a valid name.")]
    InvalidName(String),

    #[error("'{0}' is an unknown name.")]
    UnknownName(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

fn name_count(count: &usize) -> String {
    match *count {
        1 => "one name".to_string(),
        2 => "two names".to_string(),
        n => format!("{n} names"),
    }
}

/// Failures that end the process.
#[derive(Debug, Error)]
pub enum CliError {
    /// The seed file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid configuration '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::ExtraArguments { command: CommandKind::Print }.to_string(),
            "there was extra text after [Pp]rint command."
        );
        assert_eq!(
            CommandError::TooFewNames { command: CommandKind::Add, required: 2 }.to_string(),
            "[Aa]dd command requires at least 2 names."
        );
        assert_eq!(
            CommandError::WrongNameCount { command: CommandKind::Friends, expected: 1 }.to_string(),
            "[Ff]riends command requires exactly one name."
        );
        assert_eq!(
            CommandError::WrongNameCount { command: CommandKind::Common, expected: 2 }.to_string(),
            "[Cc]ommon command requires exactly two names."
        );
        assert_eq!(
            CommandError::UnknownName("Dave".into()).to_string(),
            "'Dave' is an unknown name."
        );
    }

    #[test]
    fn test_graph_error_is_transparent() {
        let err: CommandError = GraphError::InvalidName("X1".into()).into();
        assert_eq!(err.to_string(), "'X1' is not a valid name: friendship not added.");
    }
}
