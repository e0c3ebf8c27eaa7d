use thiserror::Error;

/// The error type covering every failure this library can report.
///
/// All failures are routine, expected control flow - a key that is missing,
/// a key that already exists, a container with nothing left to give - and
/// are signalled synchronously at the violating call. No operation partially
/// mutates a structure before failing: precondition checks always precede
/// writes.
///
/// Each variant carries enough context to be diagnostic on its own: the
/// operation that failed and the offending identifier or index. Identifiers
/// are stored in their `Display` form so the error type stays independent of
/// the structure's key type.
///
/// # Examples
///
/// ```rust
/// use keygraph::{Digraph, Error};
///
/// let mut graph = Digraph::new();
/// graph.add_node(7)?;
///
/// let err = graph.add_node(7).unwrap_err();
/// assert_eq!(err, Error::DuplicateNode { uid: "7".into() });
/// # Ok::<(), keygraph::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node with this identifier is already present in the graph.
    ///
    /// Returned by node creation. The graph is left untouched; use a fresh
    /// identifier or mutate the existing node through arc operations.
    #[error("add_node: node {uid} already exists")]
    DuplicateNode {
        /// `Display` form of the identifier that was already taken.
        uid: String,
    },

    /// An operation referenced a node identifier that is not in the graph.
    ///
    /// Returned by every graph operation that requires its identifier
    /// arguments to name existing nodes.
    #[error("{operation}: node {uid} not found")]
    NodeNotFound {
        /// The operation that required the node.
        operation: &'static str,
        /// `Display` form of the missing identifier.
        uid: String,
    },

    /// The stack has no elements to pop or peek at.
    #[error("{operation}: stack is empty")]
    EmptyStack {
        /// The operation that required at least one element.
        operation: &'static str,
    },

    /// An index lies outside the valid range for the list.
    ///
    /// `insert` accepts indices up to and including the current length;
    /// `remove` and `get` require strictly smaller indices.
    #[error("{operation}: index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The operation that received the index.
        operation: &'static str,
        /// The requested index.
        index: usize,
        /// The structure's length at the time of the call.
        len: usize,
    },

    /// The structure is at its maximum representable size.
    #[error("{operation}: maximum size reached")]
    CapacityExceeded {
        /// The operation that would have grown the structure.
        operation: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_carries_operation_and_uid() {
        let err = Error::NodeNotFound {
            operation: "remove_node",
            uid: "42".into(),
        };
        assert_eq!(err.to_string(), "remove_node: node 42 not found");
    }

    #[test]
    fn display_duplicate_node() {
        let err = Error::DuplicateNode { uid: "3".into() };
        assert_eq!(err.to_string(), "add_node: node 3 already exists");
    }

    #[test]
    fn display_index_out_of_range() {
        let err = Error::IndexOutOfRange {
            operation: "insert",
            index: 9,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "insert: index 9 is out of range for length 4"
        );
    }

    #[test]
    fn errors_compare_by_value() {
        let a = Error::EmptyStack { operation: "pop" };
        let b = Error::EmptyStack { operation: "pop" };
        let c = Error::EmptyStack { operation: "peek" };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
