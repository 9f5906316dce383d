use crate::autograd::backward_op::Op;
use crate::value::Value;
use std::rc::Rc;

/// Internal record of a node in the computation graph.
///
/// `data` is fixed at construction. `grad` is the only field that changes,
/// written by the backward pass and by the zeroing methods. `op` is `None`
/// for leaves; otherwise it holds the operation that produced the node
/// together with handles to its operands.
#[derive(Debug)]
pub struct ValueData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Option<Op>,
}

impl ValueData {
    /// Creates a leaf record (no producing operation, zero gradient).
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: None,
        }
    }

    /// Creates the record of a node produced by `op`.
    pub(crate) fn from_op(data: f64, op: Op) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Some(op),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.op.is_none()
    }
}

/// Releases the subgraph with an explicit worklist.
///
/// The default drop glue would recurse once per node of a chain. Here every
/// operand whose last handle is being released has its own `op` detached
/// and queued, so each record reaches its implicit drop with `op == None`.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending: Vec<Value> = match self.op.take() {
            Some(op) => op.into_inputs(),
            None => return,
        };
        while let Some(value) = pending.pop() {
            // Shared operands stay alive through their other handles.
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut node = cell.into_inner();
                if let Some(op) = node.op.take() {
                    pending.extend(op.into_inputs());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "value_data_test.rs"]
mod tests;
