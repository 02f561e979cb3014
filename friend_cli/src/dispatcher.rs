//! Command dispatch.
//!
//! Handlers validate argument shape, name syntax and name existence before
//! touching the graph, so a failing command never leaves a partial edit.

use friend_graph::{is_valid_name, FriendshipGraph};
use tracing::debug;

use crate::command::{parse_line, Command, CommandKind};
use crate::error::CommandError;
use crate::output::{format_friend_list, format_network, format_no_common, format_self_common};

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines and keep running.
    Output(Vec<String>),
    /// End the session.
    Quit,
}

/// Parse and run one input line against the graph.
pub fn dispatch(graph: &mut FriendshipGraph, line: &str) -> Result<Reply, CommandError> {
    let command = parse_line(line)?;
    debug!(command = %command.kind, args = command.args.len(), "dispatching");
    execute(graph, &command)
}

/// Run an already tokenized command.
pub fn execute(graph: &mut FriendshipGraph, command: &Command<'_>) -> Result<Reply, CommandError> {
    let args = command.args.as_slice();
    match command.kind {
        CommandKind::Print => print_command(graph, args),
        CommandKind::Add => add_command(graph, args),
        CommandKind::Friends => friends_command(graph, args),
        CommandKind::Common => common_command(graph, args),
        // Trailing text after quit is ignored.
        CommandKind::Quit => Ok(Reply::Quit),
    }
}

fn print_command(graph: &FriendshipGraph, args: &[&str]) -> Result<Reply, CommandError> {
    if !args.is_empty() {
        return Err(CommandError::ExtraArguments {
            command: CommandKind::Print,
        });
    }

    Ok(Reply::Output(format_network(graph)))
}

fn add_command(graph: &mut FriendshipGraph, args: &[&str]) -> Result<Reply, CommandError> {
    let [subject, friends @ ..] = args else {
        return Err(too_few_names());
    };
    if friends.is_empty() {
        return Err(too_few_names());
    }

    validate_names(args)?;

    let mut added = 0;
    for friend in friends {
        if graph.add_friendship(subject, friend)? {
            added += 1;
        }
    }
    debug!(subject, added, "friendships added");

    Ok(Reply::Output(Vec::new()))
}

fn too_few_names() -> CommandError {
    CommandError::TooFewNames {
        command: CommandKind::Add,
        required: 2,
    }
}

fn friends_command(graph: &FriendshipGraph, args: &[&str]) -> Result<Reply, CommandError> {
    let &[name] = args else {
        return Err(CommandError::WrongNameCount {
            command: CommandKind::Friends,
            expected: 1,
        });
    };

    validate_names(args)?;
    require_known(graph, args)?;

    let friends = graph.sorted_friends_of(name);
    Ok(Reply::Output(format_friend_list(None, &friends, "")))
}

fn common_command(graph: &FriendshipGraph, args: &[&str]) -> Result<Reply, CommandError> {
    let &[name1, name2] = args else {
        return Err(CommandError::WrongNameCount {
            command: CommandKind::Common,
            expected: 2,
        });
    };

    validate_names(args)?;
    require_known(graph, args)?;

    if name1 == name2 {
        return Ok(Reply::Output(vec![format_self_common(name1)]));
    }

    let common = graph.common_friends(name1, name2);
    if common.is_empty() {
        return Ok(Reply::Output(vec![format_no_common(name1, name2)]));
    }

    Ok(Reply::Output(format_friend_list(None, &common, "")))
}

fn validate_names(names: &[&str]) -> Result<(), CommandError> {
    match names.iter().find(|name| !is_valid_name(name)) {
        Some(bad) => Err(CommandError::InvalidName(bad.to_string())),
        None => Ok(()),
    }
}

fn require_known(graph: &FriendshipGraph, names: &[&str]) -> Result<(), CommandError> {
    match names.iter().find(|name| !graph.has_person(name)) {
        Some(unknown) => Err(CommandError::UnknownName(unknown.to_string())),
        None => Ok(()),
    }
}
