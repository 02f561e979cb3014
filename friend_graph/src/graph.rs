//! Friendship Graph - the core data structure of the network.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::name::validate_name;

/// An undirected friendship graph keyed by person name.
///
/// Every edge is stored in both directions. [`FriendshipGraph::add_friendship`]
/// is the only way to write an edge, so the relation stays symmetric and no
/// person is ever their own friend. Friend sets carry no order; the `sorted_*`
/// accessors produce the ascending sequence used for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdjacencySets")]
pub struct FriendshipGraph {
    /// Adjacency sets: person -> friends.
    friends: HashMap<String, HashSet<String>>,
}

/// Serialized form of a graph, checked before it becomes a [`FriendshipGraph`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdjacencySets {
    pub friends: HashMap<String, HashSet<String>>,
}

impl TryFrom<AdjacencySets> for FriendshipGraph {
    type Error = GraphError;

    /// Rebuild the graph edge by edge through [`FriendshipGraph::add_friendship`].
    ///
    /// Every listed edge must appear in both directions. A person with an
    /// empty friend set is dropped, since such an entry cannot be produced
    /// by adding friendships.
    fn try_from(raw: AdjacencySets) -> Result<Self, Self::Error> {
        let mut graph = FriendshipGraph::new();

        for (person, friends) in &raw.friends {
            for friend in friends {
                if friend == person {
                    return Err(GraphError::SelfFriendship(person.clone()));
                }
                let reverse = raw.friends.get(friend).is_some_and(|set| set.contains(person));
                if !reverse {
                    return Err(GraphError::OneWayFriendship {
                        from: person.clone(),
                        to: friend.clone(),
                    });
                }
                graph.add_friendship(person, friend)?;
            }
        }

        Ok(graph)
    }
}

impl FriendshipGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a two-way friendship between `name1` and `name2`.
    ///
    /// Both names are validated first; on failure the graph is left untouched.
    /// A pair of identical names and an already existing friendship are both
    /// silent no-ops. Returns `true` when a new edge was written.
    pub fn add_friendship(&mut self, name1: &str, name2: &str) -> Result<bool, GraphError> {
        validate_name(name1)?;
        validate_name(name2)?;

        if name1 == name2 {
            return Ok(false);
        }

        let added = self
            .friends
            .entry(name1.to_string())
            .or_default()
            .insert(name2.to_string());
        self.friends
            .entry(name2.to_string())
            .or_default()
            .insert(name1.to_string());

        Ok(added)
    }

    /// Check if a person exists in the graph.
    pub fn has_person(&self, name: &str) -> bool {
        self.friends.contains_key(name)
    }

    /// Get the friends of a person, in no particular order.
    ///
    /// Callers are expected to check [`has_person`](Self::has_person) first;
    /// an unknown name yields an empty list.
    pub fn friends_of(&self, name: &str) -> Vec<&str> {
        self.friends
            .get(name)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Get the friends of a person in ascending order.
    pub fn sorted_friends_of(&self, name: &str) -> Vec<&str> {
        let mut friends = self.friends_of(name);
        friends.sort_unstable();
        friends
    }

    /// Get all persons in the graph, in no particular order.
    pub fn all_persons(&self) -> impl Iterator<Item = &str> {
        self.friends.keys().map(String::as_str)
    }

    /// Get all persons in ascending order.
    pub fn sorted_persons(&self) -> Vec<&str> {
        let mut persons: Vec<_> = self.all_persons().collect();
        persons.sort_unstable();
        persons
    }

    /// Friends shared by `name1` and `name2`, in ascending order.
    pub fn common_friends(&self, name1: &str, name2: &str) -> Vec<&str> {
        let (Some(first), Some(second)) = (self.friends.get(name1), self.friends.get(name2)) else {
            return Vec::new();
        };

        let mut common: Vec<_> = first.intersection(second).map(String::as_str).collect();
        common.sort_unstable();
        common
    }

    /// Get the number of persons.
    pub fn person_count(&self) -> usize {
        self.friends.len()
    }

    /// Get the number of undirected friendships.
    pub fn friendship_count(&self) -> usize {
        self.friends.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// Check if the graph has no persons.
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
