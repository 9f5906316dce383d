//! # crudgrad-core
//!
//! A scalar reverse-mode automatic differentiation engine with a thin
//! feed-forward neural-network layer on top.
//!
//! Expressions are built by applying operations to [`Value`] handles; each
//! operation records its operands and the rule needed to differentiate it.
//! Calling [`Value::backward`] on the final node fills in the gradient of
//! every node it depends on.
//!
//! ```
//! use crudgrad_core::Value;
//!
//! let w = Value::new(2.0);
//! let x = Value::new(3.0);
//! let b = Value::new(1.0);
//! let y = &w * &x + &b;
//! y.backward();
//! assert_eq!(y.data(), 7.0);
//! assert_eq!(w.grad(), 3.0);
//! ```

// Core modules of the crate
pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;
pub(crate) mod value_data;

pub mod nn;
pub mod utils;

// Re-export the main types so they are reachable as `crudgrad_core::Value`
pub use error::CrudgradError;
pub use value::Value;
// Re-export traits required by public impls (Zero, Pow)
pub use num_traits;
