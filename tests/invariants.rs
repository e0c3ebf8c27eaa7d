//! Integration tests exercising the public API end to end, including a
//! property test for the graph's adjacency-symmetry invariant.

use keygraph::prelude::*;
use proptest::prelude::*;

/// Asserts that `B ∈ out(A)` iff `A ∈ in(B)` for every node pair, and that
/// neighbor sets only reference live nodes.
fn assert_symmetric(graph: &Digraph<u8>) {
    let ids: Vec<u8> = graph.node_ids().collect();
    for &uid in &ids {
        let node = graph.node(uid).expect("listed id must resolve");

        for succ in node.out_neighbors() {
            let other = graph
                .node(succ)
                .expect("out-neighbor must name a live node");
            assert!(
                other.in_neighbors().any(|p| p == uid),
                "arc {uid}->{succ} missing from in-set of {succ}"
            );
        }
        for pred in node.in_neighbors() {
            let other = graph
                .node(pred)
                .expect("in-neighbor must name a live node");
            assert!(
                other.out_neighbors().any(|s| s == uid),
                "arc {pred}->{uid} missing from out-set of {pred}"
            );
        }

        // Degree queries agree with the node view.
        assert_eq!(graph.out_degree(uid).unwrap(), node.out_degree());
        assert_eq!(graph.in_degree(uid).unwrap(), node.in_degree());
    }
}

#[derive(Debug, Clone)]
enum Op {
    AddNode(u8),
    RemoveNode(u8),
    AddArc(u8, u8),
    RemoveArc(u8, u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A small identifier universe so operations collide often.
    let uid = 0u8..8;
    prop_oneof![
        uid.clone().prop_map(Op::AddNode),
        uid.clone().prop_map(Op::RemoveNode),
        (uid.clone(), uid.clone()).prop_map(|(a, b)| Op::AddArc(a, b)),
        (uid.clone(), uid).prop_map(|(a, b)| Op::RemoveArc(a, b)),
    ]
}

proptest! {
    #[test]
    fn adjacency_stays_symmetric(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut graph = Digraph::new();
        for op in ops {
            // Individual operations may legitimately fail (missing or
            // duplicate ids); the invariant must hold either way.
            match op {
                Op::AddNode(u) => { let _ = graph.add_node(u); }
                Op::RemoveNode(u) => { let _ = graph.remove_node(u); }
                Op::AddArc(a, b) => { let _ = graph.add_arc(a, b); }
                Op::RemoveArc(a, b) => { let _ = graph.remove_arc(a, b); }
            }
            assert_symmetric(&graph);
        }
    }

    #[test]
    fn failed_operations_do_not_mutate(uid in 0u8..8, other in 0u8..8) {
        let mut graph = Digraph::new();
        graph.add_node(uid).unwrap();

        let before: Vec<u8> = graph.node_ids().collect();

        let _ = graph.add_node(uid); // duplicate
        if other != uid {
            let _ = graph.add_arc(uid, other); // missing endpoint
            let _ = graph.remove_node(other); // missing node
        }

        let after: Vec<u8> = graph.node_ids().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(graph.out_degree(uid).unwrap(), 0);
        assert_symmetric(&graph);
    }
}

#[test]
fn traversals_on_shared_target() {
    let mut graph = Digraph::new();
    for uid in [1u8, 2, 3] {
        graph.add_node(uid).unwrap();
    }
    graph.add_arc(1, 2).unwrap();
    graph.add_arc(2, 3).unwrap();
    graph.add_arc(1, 3).unwrap();

    // 3 is reachable from both 1 and 2 but appears exactly once.
    assert_eq!(graph.breadth_first(1).unwrap(), vec![1, 2, 3]);
    // Post-order: 3 finishes inside 2's exploration, the root last.
    assert_eq!(graph.depth_first(1).unwrap(), vec![3, 2, 1]);
}

#[test]
fn self_loop_lifecycle() {
    let mut graph = Digraph::new();
    graph.add_node(1u8).unwrap();
    graph.add_arc(1, 1).unwrap();
    assert_symmetric(&graph);

    graph.remove_node(1).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn two_cycle_traversal_terminates() {
    let mut graph = Digraph::new();
    graph.add_node(1u8).unwrap();
    graph.add_node(2).unwrap();
    graph.add_arc(1, 2).unwrap();
    graph.add_arc(2, 1).unwrap();

    assert_eq!(graph.breadth_first(1).unwrap(), vec![1, 2]);
}

#[test]
fn node_removal_updates_neighbor_degrees() {
    let mut graph = Digraph::new();
    for uid in [1u8, 2, 3, 4] {
        graph.add_node(uid).unwrap();
    }
    graph.add_arc(1, 2).unwrap();
    graph.add_arc(3, 2).unwrap();
    graph.add_arc(2, 4).unwrap();

    graph.remove_node(2).unwrap();

    assert_eq!(graph.out_degree(1).unwrap(), 0);
    assert_eq!(graph.out_degree(3).unwrap(), 0);
    assert_eq!(graph.in_degree(4).unwrap(), 0);
    assert_symmetric(&graph);
}

#[test]
fn stack_lifo_sequence() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.pop().unwrap(), 2);
    assert_eq!(stack.pop().unwrap(), 1);
    assert!(matches!(
        stack.pop(),
        Err(Error::EmptyStack { operation: "pop" })
    ));
}

#[test]
fn list_splice_sequence() {
    let mut list = LinkedList::new();
    list.append(1).unwrap();
    list.append(2).unwrap();
    list.insert(3, 1).unwrap();
    assert_eq!(list.iter().copied().collect::<Vec<i32>>(), vec![1, 3, 2]);

    assert_eq!(list.remove(0).unwrap(), 1);
    assert_eq!(list.iter().copied().collect::<Vec<i32>>(), vec![3, 2]);
}
