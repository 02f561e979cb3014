//! Seed file loader.
//!
//! A seed file holds one relation per line:
//!
//! ```text
//! # comment
//! name;friend_1;friend_2;...;friend_n
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Any structural or
//! name error aborts the whole load; no partial graph is ever returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::graph::FriendshipGraph;
use crate::name::is_valid_name;

/// Field separator within a relation line.
pub const FIELD_SEPARATOR: char = ';';

/// Marks a comment line when it is the first character.
pub const COMMENT_MARKER: char = '#';

/// Load a friendship network from a seed file on disk.
pub fn load_network(path: impl AsRef<Path>) -> Result<FriendshipGraph, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = parse_lines(BufReader::new(file), path)?;
    info!(
        path = %path.display(),
        persons = graph.person_count(),
        friendships = graph.friendship_count(),
        "friendship network loaded"
    );
    Ok(graph)
}

/// Parse a friendship network from any buffered reader.
pub fn parse_network(reader: impl BufRead) -> Result<FriendshipGraph, LoadError> {
    parse_lines(reader, Path::new("<input>"))
}

fn parse_lines(reader: impl BufRead, origin: &Path) -> Result<FriendshipGraph, LoadError> {
    let mut graph = FriendshipGraph::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| LoadError::Read {
            path: origin.to_path_buf(),
            source,
        })?;
        let line = line.trim_end();

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < 2 {
            return Err(LoadError::TooFewFields {
                line_number,
                line: line.to_string(),
            });
        }

        if let Some(bad) = fields.iter().find(|name| !is_valid_name(name)) {
            return Err(LoadError::InvalidName {
                line_number,
                name: bad.to_string(),
            });
        }

        let (subject, friends) = (fields[0], &fields[1..]);
        debug!(line_number, subject, friends = friends.len(), "relation line");

        for friend in friends {
            graph.add_friendship(subject, friend)?;
        }
    }

    Ok(graph)
}
