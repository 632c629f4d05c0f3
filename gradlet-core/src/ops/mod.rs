//! # Scalar Operations Module (`ops`)
//!
//! Every operator appends one node to the graph's tape and records an
//! [`Op`](crate::autograd::Op) tag so the backward pass can apply the local
//! derivative.
//!
//! ## Structure:
//!
//! - **`_op` functions:** each operator has a free function (e.g. `add_op`)
//!   that performs the forward computation and pushes the node.
//! - **`Graph` methods:** the user-facing API (`graph.add(a, b)`,
//!   `graph.tanh(x)`, ...) defined below delegates to those functions.
//! - **Operands:** every operand is `impl Into<Operand>`, so plain numbers
//!   are accepted wherever a node is.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div, sum.
//! - [`activation`]: tanh, exp, relu.

pub mod activation;
pub mod arithmetic;
pub mod operand;

pub use operand::Operand;

use crate::autograd::{Graph, Value};
use crate::error::GradletError;

impl Graph {
    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
        arithmetic::add_op(self, a, b)
    }

    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
        arithmetic::mul_op(self, a, b)
    }

    pub fn neg(&mut self, a: impl Into<Operand>) -> Value {
        arithmetic::neg_op(self, a)
    }

    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
        arithmetic::sub_op(self, a, b)
    }

    /// See [`arithmetic::pow_op`] for the domain rules.
    pub fn pow(&mut self, base: impl Into<Operand>, exponent: f64) -> Result<Value, GradletError> {
        arithmetic::pow_op(self, base, exponent)
    }

    pub fn div(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Value, GradletError> {
        arithmetic::div_op(self, a, b)
    }

    /// Left fold of `add` over `items`, seeded with `start`.
    pub fn sum<I>(&mut self, start: impl Into<Operand>, items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        arithmetic::sum_op(self, start, items)
    }

    pub fn tanh(&mut self, a: impl Into<Operand>) -> Value {
        activation::tanh_op(self, a)
    }

    pub fn exp(&mut self, a: impl Into<Operand>) -> Value {
        activation::exp_op(self, a)
    }

    pub fn relu(&mut self, a: impl Into<Operand>) -> Value {
        activation::relu_op(self, a)
    }
}
