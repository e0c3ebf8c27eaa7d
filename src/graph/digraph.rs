//! Core keyed directed graph implementation.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::{
    graph::{
        algorithms::{bfs, postorder},
        node::Node,
        traits::{GraphBase, Predecessors, Successors},
    },
    Error, Result,
};

/// A mutable directed graph keyed by caller-supplied identifiers.
///
/// `Digraph` owns a collection of [`Node`]s addressed by unique scalar
/// identifiers. The caller chooses the identifiers; nothing is
/// auto-generated. Arcs are recorded on both endpoints - the source's
/// out-neighbor set and the target's in-neighbor set - so existence checks
/// and degree queries are O(1) in either direction, and node removal can
/// detach every incident arc without scanning the rest of the graph.
///
/// # Key Requirements
///
/// Identifiers must be `Copy + Eq + Hash` (stored and compared by value)
/// and `Display` (quoted in error diagnostics). Integers are the typical
/// choice.
///
/// # Invariant
///
/// For any two nodes `A` and `B`, `B ∈ out(A)` if and only if `A ∈ in(B)`.
/// Mutations validate all their preconditions before writing, so a failed
/// operation leaves the graph exactly as it was.
///
/// # Determinism
///
/// The node map and neighbor sets preserve insertion order. Iteration over
/// [`node_ids`](Digraph::node_ids), neighbor sets, and both traversals is
/// therefore reproducible: neighbors are visited in the order their arcs
/// were added.
///
/// # Examples
///
/// ```rust
/// use keygraph::Digraph;
///
/// let mut graph = Digraph::new();
/// graph.add_node('a')?;
/// graph.add_node('b')?;
/// graph.add_arc('a', 'b')?;
///
/// assert!(graph.has_arc('a', 'b')?);
/// assert!(!graph.has_arc('b', 'a')?);
/// # Ok::<(), keygraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Digraph<K> {
    /// Identifier-keyed node storage, in node insertion order.
    nodes: IndexMap<K, Node<K>>,
}

impl<K: Copy + Eq + Hash + fmt::Display> Default for Digraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash + fmt::Display> Digraph<K> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Digraph {
            nodes: IndexMap::new(),
        }
    }

    /// Creates a new empty graph with pre-allocated node capacity.
    ///
    /// Useful when the approximate node count is known in advance, to avoid
    /// rehashing during construction.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Digraph {
            nodes: IndexMap::with_capacity(nodes),
        }
    }

    /// Adds an isolated node with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if a node with this identifier is
    /// already present. The graph is unchanged on failure, and no other
    /// node is affected on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::{Digraph, Error};
    ///
    /// let mut graph = Digraph::new();
    /// graph.add_node(1)?;
    ///
    /// assert!(matches!(
    ///     graph.add_node(1),
    ///     Err(Error::DuplicateNode { .. })
    /// ));
    /// assert_eq!(graph.node_count(), 1);
    /// # Ok::<(), keygraph::Error>(())
    /// ```
    pub fn add_node(&mut self, uid: K) -> Result<()> {
        if self.nodes.contains_key(&uid) {
            return Err(Error::DuplicateNode {
                uid: uid.to_string(),
            });
        }
        self.nodes.insert(uid, Node::new(uid));
        Ok(())
    }

    /// Removes a node and every arc incident to it.
    ///
    /// Each in-neighbor loses `uid` from its out-neighbor set and each
    /// out-neighbor loses `uid` from its in-neighbor set; the neighbors
    /// themselves are kept. Self-loops are handled by detaching the node
    /// from the map before walking its neighbor sets, so the node's own
    /// entry is never touched mid-iteration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `uid` names no node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::Digraph;
    ///
    /// let mut graph = Digraph::new();
    /// graph.add_node(1)?;
    /// graph.add_node(2)?;
    /// graph.add_arc(1, 2)?;
    ///
    /// graph.remove_node(2)?;
    /// assert_eq!(graph.out_degree(1)?, 0);
    /// assert!(!graph.has_arc(1, 2)?);
    /// # Ok::<(), keygraph::Error>(())
    /// ```
    pub fn remove_node(&mut self, uid: K) -> Result<()> {
        let node = self
            .nodes
            .shift_remove(&uid)
            .ok_or_else(|| Error::NodeNotFound {
                operation: "remove_node",
                uid: uid.to_string(),
            })?;

        // A self-loop lists `uid` in both sets; the lookups below miss
        // because the node is already out of the map.
        for pred in node.incoming {
            if let Some(p) = self.nodes.get_mut(&pred) {
                p.outgoing.shift_remove(&uid);
            }
        }
        for succ in node.outgoing {
            if let Some(s) = self.nodes.get_mut(&succ) {
                s.incoming.shift_remove(&uid);
            }
        }
        Ok(())
    }

    /// Adds a directed arc from `from` to `to`.
    ///
    /// Recorded on both endpoints: `to` joins `from`'s out-neighbor set and
    /// `from` joins `to`'s in-neighbor set. Adding an arc that already
    /// exists is a no-op, not an error - neighbor sets have set semantics.
    /// Self-loops (`from == to`) are permitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] naming the first missing endpoint.
    /// Both endpoints are validated before either side is written.
    pub fn add_arc(&mut self, from: K, to: K) -> Result<()> {
        self.require("add_arc", from)?;
        self.require("add_arc", to)?;
        self.node_entry("add_arc", from)?.outgoing.insert(to);
        self.node_entry("add_arc", to)?.incoming.insert(from);
        Ok(())
    }

    /// Removes the directed arc from `from` to `to`, if present.
    ///
    /// Removing an arc that does not exist is a no-op, not an error,
    /// mirroring set-erase semantics. Both endpoints must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] naming the first missing endpoint.
    pub fn remove_arc(&mut self, from: K, to: K) -> Result<()> {
        self.require("remove_arc", from)?;
        self.require("remove_arc", to)?;
        self.node_entry("remove_arc", from)?.outgoing.shift_remove(&to);
        self.node_entry("remove_arc", to)?.incoming.shift_remove(&from);
        Ok(())
    }

    /// Returns `true` if an arc from `from` to `to` exists.
    ///
    /// Only `from` must name an existing node: the answer is membership of
    /// `to` in `from`'s out-neighbor set, and node removal cascades stale
    /// identifiers out of every neighbor set, so an unknown `to` simply
    /// answers `false`. This asymmetry is intentional - the query is
    /// read-only and `to` is never dereferenced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `from` names no node.
    pub fn has_arc(&self, from: K, to: K) -> Result<bool> {
        Ok(self.node_ref("has_arc", from)?.outgoing.contains(&to))
    }

    /// Returns the number of arcs leaving the given node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `uid` names no node.
    pub fn out_degree(&self, uid: K) -> Result<usize> {
        Ok(self.node_ref("out_degree", uid)?.outgoing.len())
    }

    /// Returns the number of arcs pointing at the given node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `uid` names no node.
    pub fn in_degree(&self, uid: K) -> Result<usize> {
        Ok(self.node_ref("in_degree", uid)?.incoming.len())
    }

    /// Returns `true` if `uid` names a node in the graph.
    #[must_use]
    pub fn contains_node(&self, uid: K) -> bool {
        self.nodes.contains_key(&uid)
    }

    /// Returns a read-only view of the node named `uid`, if present.
    #[must_use]
    pub fn node(&self, uid: K) -> Option<&Node<K>> {
        self.nodes.get(&uid)
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all node identifiers, in node insertion
    /// order.
    pub fn node_ids(&self) -> impl Iterator<Item = K> + '_ {
        self.nodes.keys().copied()
    }

    /// Traverses the graph breadth-first from `root`, following out-arcs.
    ///
    /// Returns identifiers in discovery order: the root first, then nodes
    /// in order of increasing distance. A visited set guarantees each
    /// reachable node appears exactly once, which is also what makes the
    /// traversal terminate on cyclic graphs. Neighbors are explored in arc
    /// insertion order; unreachable nodes are excluded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `root` names no node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::Digraph;
    ///
    /// let mut graph = Digraph::new();
    /// for uid in [1, 2, 3] {
    ///     graph.add_node(uid)?;
    /// }
    /// graph.add_arc(1, 2)?;
    /// graph.add_arc(2, 3)?;
    /// graph.add_arc(1, 3)?;
    ///
    /// // 3 is discovered from 1 before 2 can offer it again.
    /// assert_eq!(graph.breadth_first(1)?, vec![1, 2, 3]);
    /// # Ok::<(), keygraph::Error>(())
    /// ```
    pub fn breadth_first(&self, root: K) -> Result<Vec<K>> {
        self.require("breadth_first", root)?;
        Ok(bfs(self, root).collect())
    }

    /// Traverses the graph depth-first from `root`, following out-arcs,
    /// and returns identifiers in post-order.
    ///
    /// A node is appended only after every node reachable through its
    /// out-arcs has been fully processed, so the root finishes last. Nodes
    /// are marked when first entered and never revisited, which makes the
    /// traversal terminate on cyclic graphs. The implementation uses an
    /// explicit stack, so traversal depth is bounded by heap rather than by
    /// the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `root` names no node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::Digraph;
    ///
    /// let mut graph = Digraph::new();
    /// for uid in [1, 2, 3] {
    ///     graph.add_node(uid)?;
    /// }
    /// graph.add_arc(1, 2)?;
    /// graph.add_arc(2, 3)?;
    /// graph.add_arc(1, 3)?;
    ///
    /// // 3 finishes during 2's exploration; 1 finishes last.
    /// assert_eq!(graph.depth_first(1)?, vec![3, 2, 1]);
    /// # Ok::<(), keygraph::Error>(())
    /// ```
    pub fn depth_first(&self, root: K) -> Result<Vec<K>> {
        self.require("depth_first", root)?;
        Ok(postorder(self, root))
    }

    fn require(&self, operation: &'static str, uid: K) -> Result<()> {
        if self.nodes.contains_key(&uid) {
            Ok(())
        } else {
            Err(Error::NodeNotFound {
                operation,
                uid: uid.to_string(),
            })
        }
    }

    fn node_ref(&self, operation: &'static str, uid: K) -> Result<&Node<K>> {
        self.nodes.get(&uid).ok_or_else(|| Error::NodeNotFound {
            operation,
            uid: uid.to_string(),
        })
    }

    fn node_entry(&mut self, operation: &'static str, uid: K) -> Result<&mut Node<K>> {
        self.nodes.get_mut(&uid).ok_or_else(|| Error::NodeNotFound {
            operation,
            uid: uid.to_string(),
        })
    }
}

impl<K: Copy + Eq + Hash> GraphBase for Digraph<K> {
    type Id = K;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, id: K) -> bool {
        self.nodes.contains_key(&id)
    }

    fn node_ids(&self) -> impl Iterator<Item = K> {
        self.nodes.keys().copied()
    }
}

impl<K: Copy + Eq + Hash> Successors for Digraph<K> {
    fn successors(&self, node: K) -> impl Iterator<Item = K> {
        self.nodes
            .get(&node)
            .into_iter()
            .flat_map(|n| n.outgoing.iter().copied())
    }
}

impl<K: Copy + Eq + Hash> Predecessors for Digraph<K> {
    fn predecessors(&self, node: K) -> impl Iterator<Item = K> {
        self.nodes
            .get(&node)
            .into_iter()
            .flat_map(|n| n.incoming.iter().copied())
    }
}
