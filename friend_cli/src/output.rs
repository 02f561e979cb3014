//! Text produced by the session.

use friend_graph::FriendshipGraph;

/// Prefix of each friend line in the network listing.
pub const LIST_MARKER: &str = "- ";

pub const DEFAULT_FILENAME: &str = "friendships.txt";

pub const FILE_PROMPT: &str = "Enter the name of the input file: ";

pub const COMMAND_PROMPT: &str = "Enter command: ";

pub const HELP_LINES: [&str; 2] = [
    "Enter one of the commands [Pp]rint/[Aa]dd/[Ff]riends/[Cc]ommon/[Qq]uit",
    "followed by one or more names if needed.",
];

pub const FAREWELL: &str = "Farewell cruel world...";

/// Format a friend list, optionally headed by the person's name.
///
/// Friends are emitted in the order given, each prefixed with `marker`.
pub fn format_friend_list(name: Option<&str>, friends: &[&str], marker: &str) -> Vec<String> {
    name.map(str::to_string)
        .into_iter()
        .chain(friends.iter().map(|friend| format!("{marker}{friend}")))
        .collect()
}

/// Format the whole network: every person in ascending order, each followed
/// by their sorted friends.
pub fn format_network(graph: &FriendshipGraph) -> Vec<String> {
    graph
        .sorted_persons()
        .into_iter()
        .flat_map(|person| {
            format_friend_list(Some(person), &graph.sorted_friends_of(person), LIST_MARKER)
        })
        .collect()
}

pub fn format_self_common(name: &str) -> String {
    format!("{name} has no common friends with themselves.")
}

pub fn format_no_common(name1: &str, name2: &str) -> String {
    format!("{name1} and {name2} have no common friends.")
}

pub fn format_error(message: impl std::fmt::Display) -> String {
    format!("Error: {message}")
}

pub fn format_fatal(message: impl std::fmt::Display) -> String {
    format!("Fatal Error: {message}")
}
