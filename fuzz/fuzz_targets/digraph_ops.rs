//! Fuzzes random operation sequences against the adjacency-symmetry
//! invariant: `B ∈ out(A)` iff `A ∈ in(B)`, after every mutation.

#![no_main]

use keygraph::Digraph;
use libfuzzer_sys::fuzz_target;

fn assert_symmetric(graph: &Digraph<u8>) {
    let ids: Vec<u8> = graph.node_ids().collect();
    for &uid in &ids {
        let node = graph.node(uid).expect("listed id must resolve");
        for succ in node.out_neighbors() {
            let other = graph.node(succ).expect("out-neighbor must be live");
            assert!(other.in_neighbors().any(|p| p == uid));
        }
        for pred in node.in_neighbors() {
            let other = graph.node(pred).expect("in-neighbor must be live");
            assert!(other.out_neighbors().any(|s| s == uid));
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut graph: Digraph<u8> = Digraph::new();

    // Each instruction is (opcode, a, b); ids collide often in a small
    // universe so deletions and cascades get exercised.
    for chunk in data.chunks_exact(3) {
        let a = chunk[1] % 16;
        let b = chunk[2] % 16;
        match chunk[0] % 6 {
            0 => {
                let _ = graph.add_node(a);
            }
            1 => {
                let _ = graph.remove_node(a);
            }
            2 => {
                let _ = graph.add_arc(a, b);
            }
            3 => {
                let _ = graph.remove_arc(a, b);
            }
            4 => {
                let _ = graph.breadth_first(a);
            }
            _ => {
                let _ = graph.depth_first(a);
            }
        }
        assert_symmetric(&graph);
    }
});
