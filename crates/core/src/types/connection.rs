//! Relay-style paginated connections as returned by the Storefront API.
//!
//! Only the first page of a connection is ever read, so cursors and page info
//! are not modelled. A connection is a list of edges and each edge wraps one
//! node.

use serde::{Deserialize, Serialize};

/// A paginated list of `T`, wrapped in edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// Edges in upstream order.
    pub edges: Vec<Edge<T>>,
}

/// A single entry in a [`Connection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The wrapped item.
    pub node: T,
}

impl<T> Connection<T> {
    /// Drop the edge wrappers and return the nodes in edge order.
    ///
    /// No filtering or deduplication happens here: N edges always produce N
    /// nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    /// Number of edges in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether this page has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<T> FromIterator<T> for Connection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().map(|node| Edge { node }).collect(),
        }
    }
}
