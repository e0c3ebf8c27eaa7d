#![doc(html_no_source)]
#![deny(missing_docs)]

//! # keygraph
//!
//! Generic container data structures built around a keyed directed graph.
//!
//! The centerpiece is [`Digraph`], a mutable directed graph whose nodes are
//! addressed by caller-supplied scalar identifiers. Arcs are tracked in both
//! directions (every node knows its in-neighbors and out-neighbors), arc
//! existence checks are O(1), node removal cleans up every incident arc
//! reference, and breadth-first and depth-first traversals are built in.
//!
//! Two smaller companions round out the crate: [`Stack`], a LIFO container
//! over an exclusively-owned chain of items, and [`LinkedList`], a
//! singly-linked sequence with indexed insertion and removal. All three are
//! independent; none depends on the others.
//!
//! ## Features
//!
//! - **Identifier-keyed graph** - nodes named by your own keys, no handle
//!   bookkeeping required
//! - **Symmetric adjacency** - `B ∈ out(A)` if and only if `A ∈ in(B)`,
//!   maintained across every mutation including node removal
//! - **Deterministic traversal** - neighbor sets preserve arc insertion
//!   order, so BFS and DFS results are reproducible
//! - **No panics in the API** - routine failures (missing key, duplicate
//!   key, empty structure, bad index) surface as [`Result`] values
//!
//! ## Quick Start
//!
//! ```rust
//! use keygraph::prelude::*;
//!
//! let mut graph = Digraph::new();
//! graph.add_node(1)?;
//! graph.add_node(2)?;
//! graph.add_node(3)?;
//! graph.add_arc(1, 2)?;
//! graph.add_arc(2, 3)?;
//! graph.add_arc(1, 3)?;
//!
//! assert!(graph.has_arc(1, 2)?);
//! assert_eq!(graph.out_degree(1)?, 2);
//!
//! // Breadth-first: discovery order from the root.
//! assert_eq!(graph.breadth_first(1)?, vec![1, 2, 3]);
//!
//! // Depth-first: post-order, the root finishes last.
//! assert_eq!(graph.depth_first(1)?, vec![3, 2, 1]);
//! # Ok::<(), keygraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - the keyed directed graph, its traversal algorithms, and the
//!   traits ([`graph::Successors`] et al.) that let the algorithms run over
//!   other graph representations
//! - [`stack`] - the LIFO [`Stack`] container
//! - [`list`] - the singly-linked [`LinkedList`] container
//! - [`prelude`] - convenient re-exports of the commonly used types
//! - [`Error`] and [`Result`] - error handling for all structures

mod error;

pub mod graph;
pub mod list;
pub mod prelude;
pub mod stack;

pub use error::Error;
pub use graph::Digraph;
pub use list::LinkedList;
pub use stack::Stack;

/// Result type alias used throughout this crate.
///
/// All fallible operations return this alias with the crate-wide [`Error`]
/// enum as the failure type.
pub type Result<T> = std::result::Result<T, Error>;
