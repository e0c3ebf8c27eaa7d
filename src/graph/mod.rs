//! Keyed directed graph with symmetric adjacency bookkeeping.
//!
//! This module provides [`Digraph`], a mutable directed graph whose nodes
//! are addressed by caller-supplied identifiers rather than by dense
//! internal indices. Every node tracks both its in-neighbors and its
//! out-neighbors, which makes arc existence checks O(1) in either direction
//! and lets node removal clean up every incident arc reference without
//! scanning the whole graph.
//!
//! # Architecture
//!
//! - **Core types**: [`Digraph`] owns its [`Node`]s through an
//!   identifier-keyed map; nodes reference each other purely by identifier,
//!   never by pointer, so removal can never leave a dangling link and
//!   cyclic graphs never create cyclic ownership.
//! - **Algorithms**: [`algorithms`] holds breadth-first and depth-first
//!   traversal, written against the traits below rather than against
//!   [`Digraph`] directly.
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] are the
//!   minimal seam the algorithms need, so they can be reused over any graph
//!   representation with copyable node identifiers.
//!
//! # Invariant
//!
//! For any two nodes `A` and `B`, `B` appears in `A`'s out-neighbor set if
//! and only if `A` appears in `B`'s in-neighbor set. Every mutating
//! operation either preserves this symmetry or reports an error without
//! writing anything.
//!
//! # Examples
//!
//! ```rust
//! use keygraph::graph::Digraph;
//!
//! let mut graph = Digraph::new();
//! for uid in [10, 20, 30] {
//!     graph.add_node(uid)?;
//! }
//! graph.add_arc(10, 20)?;
//! graph.add_arc(20, 30)?;
//!
//! assert_eq!(graph.in_degree(30)?, 1);
//!
//! // Removing a node detaches it from every neighbor.
//! graph.remove_node(20)?;
//! assert_eq!(graph.out_degree(10)?, 0);
//! assert_eq!(graph.in_degree(30)?, 0);
//! # Ok::<(), keygraph::Error>(())
//! ```

mod digraph;
mod node;
mod traits;

pub mod algorithms;

pub use digraph::Digraph;
pub use node::Node;
pub use traits::{GraphBase, Predecessors, Successors};
