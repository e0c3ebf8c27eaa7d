//! Convenient re-exports of the most commonly used types and traits.
//!
//! ```rust
//! use keygraph::prelude::*;
//!
//! let mut graph = Digraph::new();
//! graph.add_node(1)?;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//!
//! let mut list = LinkedList::new();
//! list.append(1)?;
//! # Ok::<(), keygraph::Error>(())
//! ```

pub use crate::graph::{algorithms, Digraph, GraphBase, Node, Predecessors, Successors};
pub use crate::list::LinkedList;
pub use crate::stack::Stack;
pub use crate::{Error, Result};
