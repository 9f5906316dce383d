use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Builds a topological ordering of the graph rooted at `root`.
///
/// Every operand precedes the nodes it helped produce, each node appears
/// exactly once however many consumers it has, and `root` comes last.
/// The depth-first walk uses an explicit stack so long chains cannot
/// exhaust the call stack.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, operands already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        log::trace!(
            "[topological_sort] visiting {:?} ({} operands)",
            node.node_id(),
            operands.len()
        );
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for input in operands.into_iter().rev() {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
