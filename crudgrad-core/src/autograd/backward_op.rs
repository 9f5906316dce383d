use crate::value::Value;

/// Tag identifying which local-derivative rule produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Mul,
    Pow,
    Tanh,
    Exp,
    Log,
}

/// Operation that produced a non-leaf node, with handles to its operands.
///
/// Negation, subtraction and division have no variant of their own: they
/// are built from `Mul`, `Add` and `Pow` (see `ops::neg`, `ops::sub`,
/// `ops::div`), so this table is the complete set of rules.
#[derive(Debug, Clone)]
pub enum Op {
    Add(Value, Value),
    Mul(Value, Value),
    /// Power with a constant exponent.
    Pow(Value, f64),
    Tanh(Value),
    Exp(Value),
    Log(Value),
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Add(..) => OpKind::Add,
            Op::Mul(..) => OpKind::Mul,
            Op::Pow(..) => OpKind::Pow,
            Op::Tanh(_) => OpKind::Tanh,
            Op::Exp(_) => OpKind::Exp,
            Op::Log(_) => OpKind::Log,
        }
    }

    /// Returns the operands of the operation, in forward order.
    pub fn inputs(&self) -> Vec<&Value> {
        match self {
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Tanh(a) | Op::Exp(a) | Op::Log(a) => vec![a],
        }
    }

    /// Consumes the operation and hands back its operand handles.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Tanh(a) | Op::Exp(a) | Op::Log(a) => vec![a],
        }
    }

    /// Computes the contribution of `grad_output` (dL/dOutput) to each operand.
    ///
    /// `output_data` is the forward value of the node this operation produced;
    /// `tanh` and `exp` reuse it instead of recomputing the function.
    /// The returned vector is ordered like [`Op::inputs`]. Contributions are
    /// meant to be added to the operands' gradients, never assigned.
    pub fn backward(&self, output_data: f64, grad_output: f64) -> Vec<f64> {
        match self {
            Op::Add(_, _) => vec![grad_output, grad_output],
            Op::Mul(a, b) => vec![b.data() * grad_output, a.data() * grad_output],
            Op::Pow(a, k) => vec![(k * a.data().powf(k - 1.0)) * grad_output],
            Op::Tanh(_) => vec![(1.0 - output_data * output_data) * grad_output],
            Op::Exp(_) => vec![output_data * grad_output],
            Op::Log(a) => vec![(1.0 / a.data()) * grad_output],
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
