use crate::autograd::graph::topological_sort;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

impl Value {
    /// Runs the backward pass from this node.
    ///
    /// Afterwards `grad()` on this node is 1.0 and on every node reachable
    /// from it holds d`self`/d`node`. Gradients left by earlier passes on
    /// those nodes are overwritten, which is the zero step of the pass.
    ///
    /// Numeric problems (NaN, infinities) are not trapped; they flow into
    /// the gradients like they flow through the forward values.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        let grad_map = Self::propagate(self, &sorted_nodes);
        for node in &sorted_nodes {
            node.write_data().grad = pass_grad(&grad_map, node);
        }
    }

    /// Runs the backward pass and adds its gradients to the existing ones.
    ///
    /// Use it to sum the gradients of several roots sharing parameters.
    /// Calling it twice on the same root doubles every gradient.
    pub fn backward_accumulate(&self) {
        let sorted_nodes = topological_sort(self);
        let grad_map = Self::propagate(self, &sorted_nodes);
        for node in &sorted_nodes {
            node.accumulate_grad(pass_grad(&grad_map, node));
        }
    }

    /// Seeds `root` with 1.0 and applies the local rules in reverse
    /// topological order, summing contributions per node.
    fn propagate(root: &Value, sorted_nodes: &[Value]) -> HashMap<NodeId, f64> {
        let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
        grad_map.insert(root.node_id(), 1.0);

        if root.is_leaf() {
            log::debug!("backward() called on a leaf value. No operation to perform.");
            return grad_map;
        }
        log::debug!("backward: propagating through {} nodes", sorted_nodes.len());

        for node in sorted_nodes.iter().rev() {
            let grad_output = pass_grad(&grad_map, node);
            let guard = node.read_data();
            if let Some(op) = guard.op.as_ref() {
                let contributions = op.backward(guard.data, grad_output);
                for (input, grad_to_add) in op.inputs().into_iter().zip(contributions) {
                    *grad_map.entry(input.node_id()).or_insert(0.0) += grad_to_add;
                }
            }
        }
        grad_map
    }

    /// Adds `grad_to_add` to this node's gradient.
    pub(crate) fn accumulate_grad(&self, grad_to_add: f64) {
        self.write_data().grad += grad_to_add;
    }

    /// Resets the gradient of this node only.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Resets the gradient of every node reachable from this one.
    pub fn zero_grad_graph(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }

    /// Nodes reachable from this one, operands before consumers, `self` last.
    pub fn topological_order(&self) -> Vec<Value> {
        topological_sort(self)
    }
}

fn pass_grad(grad_map: &HashMap<NodeId, f64>, node: &Value) -> f64 {
    grad_map.get(&node.node_id()).copied().unwrap_or(0.0)
}
