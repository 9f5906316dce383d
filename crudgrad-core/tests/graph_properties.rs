use crudgrad_core::value::NodeId;
use crudgrad_core::Value;
use proptest::prelude::*;
use std::collections::HashMap;

/// Builds an expression from `leaves` by applying `instructions` to a growing
/// pool of nodes; operand indices wrap around the pool, so nodes get reused.
fn build_graph(leaves: &[f64], instructions: &[(u8, usize, usize)]) -> (Vec<Value>, Value) {
    let leaves = Value::from_slice(leaves);
    let mut pool = leaves.clone();
    for &(op, i, j) in instructions {
        let a = pool[i % pool.len()].clone();
        let b = pool[j % pool.len()].clone();
        let node = match op {
            0 => &a + &b,
            1 => &a * &b,
            2 => &a - &b,
            3 => &a / &b,
            4 => a.tanh(),
            _ => a.pow(2.0),
        };
        pool.push(node);
    }
    let root = pool.last().cloned().unwrap_or_else(|| Value::new(0.0));
    (leaves, root)
}

fn graph_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<(u8, usize, usize)>)> {
    (
        prop::collection::vec(-2.0f64..2.0, 1..5),
        prop::collection::vec((0u8..6, any::<usize>(), any::<usize>()), 1..40),
    )
}

proptest! {
    #[test]
    fn topological_order_is_sound((leaves, instructions) in graph_strategy()) {
        let (_, root) = build_graph(&leaves, &instructions);
        let order = root.topological_order();

        let positions: HashMap<NodeId, usize> =
            order.iter().enumerate().map(|(i, v)| (v.node_id(), i)).collect();
        // each node exactly once
        prop_assert_eq!(positions.len(), order.len());
        prop_assert!(order.last().map_or(false, |last| last.ptr_eq(&root)));

        for node in &order {
            for operand in node.operands() {
                let operand_pos = positions.get(&operand.node_id());
                prop_assert!(operand_pos.is_some());
                prop_assert!(operand_pos < positions.get(&node.node_id()));
            }
        }
    }

    #[test]
    fn rerun_after_zeroing_is_bit_identical((leaves, instructions) in graph_strategy()) {
        let (leaf_values, root) = build_graph(&leaves, &instructions);
        root.backward();
        let first: Vec<u64> = leaf_values.iter().map(|v| v.grad().to_bits()).collect();
        prop_assert_eq!(root.grad(), 1.0);

        for node in root.topological_order() {
            node.zero_grad();
        }
        root.backward();
        let second: Vec<u64> = leaf_values.iter().map(|v| v.grad().to_bits()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn accumulate_twice_doubles_gradients((leaves, instructions) in graph_strategy()) {
        let (leaf_values, root) = build_graph(&leaves, &instructions);
        root.backward();
        let single: Vec<f64> = leaf_values.iter().map(|v| v.grad()).collect();
        root.backward_accumulate();
        for (v, g) in leaf_values.iter().zip(&single) {
            if g.is_finite() {
                prop_assert_eq!(v.grad(), 2.0 * g);
            }
        }
    }
}
