//! # The `Value` handle
//!
//! A [`Value`] is a cheap, clonable handle to one scalar node of the
//! computation graph. Cloning the handle shares the node: a value reused in
//! several expressions is a single node with several consumers, which is how
//! gradient contributions end up summed during [`Value::backward`].
//!
//! Plain accessors are defined here. `backward` and the zeroing helpers are
//! in [`autograd_methods`], `pow`/`tanh`/`exp`/`log` in [`math_methods`], and
//! the operator overloads in [`traits`].

use crate::autograd::backward_op::OpKind;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub mod autograd_methods;
pub mod math_methods;
pub mod traits;

/// Stable identity of a node, used as the key of visited sets during graph
/// traversal. Valid as long as some `Value` keeps the node alive.
pub type NodeId = *const RefCell<ValueData>;

/// Handle to a scalar node of the computation graph.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node wrapping a raw number, with zero gradient.
    pub fn new(data: f64) -> Self {
        Value::from_value_data(ValueData::leaf(data))
    }

    /// Wraps each number of `data` in its own leaf node.
    pub fn from_slice(data: &[f64]) -> Vec<Value> {
        data.iter().map(|&x| Value::new(x)).collect()
    }

    pub(crate) fn from_value_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Forward value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Gradient accumulated by the last backward pass that reached this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Tag of the operation that produced this node, `None` for leaves.
    pub fn op(&self) -> Option<OpKind> {
        self.read_data().op.as_ref().map(|op| op.kind())
    }

    /// Operands of the producing operation, in order. Empty for leaves.
    pub fn operands(&self) -> Vec<Value> {
        match self.read_data().op.as_ref() {
            Some(op) => op.inputs().into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
    }
}

impl fmt::Debug for Value {
    // Operands are not printed: deep graphs would render recursively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op.as_ref().map(|op| op.kind()))
            .finish()
    }
}
