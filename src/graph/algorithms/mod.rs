//! Graph algorithms.
//!
//! Algorithms here are written against the graph traits rather than against
//! [`Digraph`](crate::graph::Digraph) directly, so they run over any graph
//! representation with copyable node identifiers.
//!
//! Currently: traversal, as [`bfs`], [`dfs`], and [`postorder`].

mod traversal;

pub use traversal::{bfs, dfs, postorder, Bfs, Dfs};
