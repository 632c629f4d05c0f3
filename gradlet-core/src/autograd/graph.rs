// gradlet-core/src/autograd/graph.rs

use super::op::Op;
use log::debug;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Which region of the [`Graph`] arena a node lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Store {
    /// Persistent region: parameters survive every `clear_tape`.
    Parameter,
    /// Per-step region: inputs, constants and intermediate results.
    Tape,
}

/// A lightweight handle to a scalar node stored in a [`Graph`].
///
/// Handles are `Copy` and compare by identity (owning graph, store, slot and
/// tape epoch), never by the number they hold. A tape handle becomes stale
/// once [`Graph::clear_tape`] runs; using it afterwards panics. Using a handle
/// with a graph other than the one that created it panics too.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value {
    graph: u64,
    store: Store,
    index: usize,
    epoch: u64,
}

impl Value {
    pub fn store(&self) -> Store {
        self.store
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_parameter(&self) -> bool {
        self.store == Store::Parameter
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.store {
            Store::Parameter => write!(f, "Value(param#{})", self.index),
            Store::Tape => write!(f, "Value(tape#{}@{})", self.index, self.epoch),
        }
    }
}

/// One scalar node: payload, accumulated gradient and the op that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
}

impl Node {
    fn new(value: f64, op: Op) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    /// Ordered operand handles; empty for leaves.
    pub fn operands(&self) -> Vec<Value> {
        self.op.operands()
    }
}

/// Arena owning every scalar node of a computation.
///
/// Parameters are allocated once in a persistent store. Everything else is
/// pushed on a tape that the trainer clears at the start of each step, so
/// intermediate nodes never outlive the forward/backward cycle that created
/// them.
#[derive(Debug)]
pub struct Graph {
    id: u64,
    parameters: Vec<Node>,
    tape: Vec<Node>,
    epoch: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            parameters: Vec::new(),
            tape: Vec::new(),
            epoch: 0,
        }
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a persistent leaf. Use [`Parameter::new`](crate::nn::Parameter::new)
    /// from outside the crate.
    pub(crate) fn alloc_parameter(&mut self, value: f64) -> Value {
        self.parameters.push(Node::new(value, Op::Leaf));
        Value {
            graph: self.id,
            store: Store::Parameter,
            index: self.parameters.len() - 1,
            epoch: 0,
        }
    }

    /// Pushes a new node on the tape and returns its handle.
    pub(crate) fn push(&mut self, value: f64, op: Op) -> Value {
        self.tape.push(Node::new(value, op));
        Value {
            graph: self.id,
            store: Store::Tape,
            index: self.tape.len() - 1,
            epoch: self.epoch,
        }
    }

    /// Creates a tape leaf holding `value` (an input or a constant).
    pub fn leaf(&mut self, value: f64) -> Value {
        self.push(value, Op::Leaf)
    }

    /// Lifts a slice of numbers into tape leaves, preserving order.
    pub fn leaves(&mut self, values: &[f64]) -> Vec<Value> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    pub fn node(&self, handle: impl Into<Value>) -> &Node {
        let handle = handle.into();
        self.assert_owned(handle);
        match handle.store {
            Store::Parameter => &self.parameters[handle.index],
            Store::Tape => {
                self.assert_live(handle);
                &self.tape[handle.index]
            }
        }
    }

    pub(crate) fn node_mut(&mut self, handle: impl Into<Value>) -> &mut Node {
        let handle = handle.into();
        self.assert_owned(handle);
        match handle.store {
            Store::Parameter => &mut self.parameters[handle.index],
            Store::Tape => {
                self.assert_live(handle);
                &mut self.tape[handle.index]
            }
        }
    }

    fn assert_owned(&self, handle: Value) {
        if handle.graph != self.id {
            panic!(
                "foreign handle {:?}: created by graph {}, used with graph {}",
                handle, handle.graph, self.id
            );
        }
    }

    fn assert_live(&self, handle: Value) {
        if handle.epoch != self.epoch {
            panic!(
                "stale handle {:?}: the tape was cleared (current epoch {})",
                handle, self.epoch
            );
        }
    }

    pub fn value(&self, handle: impl Into<Value>) -> f64 {
        self.node(handle).value
    }

    pub fn grad(&self, handle: impl Into<Value>) -> f64 {
        self.node(handle).grad
    }

    /// Overwrites a node's payload. Dependents are not recomputed.
    pub fn set_value(&mut self, handle: impl Into<Value>, value: f64) {
        self.node_mut(handle).value = value;
    }

    pub(crate) fn accumulate_grad(&mut self, handle: Value, delta: f64) {
        self.node_mut(handle).grad += delta;
    }

    pub fn zero_grad(&mut self, handle: impl Into<Value>) {
        self.node_mut(handle).grad = 0.0;
    }

    /// Resets the gradient of every node, parameters and tape alike.
    pub fn zero_all_grads(&mut self) {
        for node in self.parameters.iter_mut().chain(self.tape.iter_mut()) {
            node.grad = 0.0;
        }
    }

    /// Discards every tape node and invalidates their handles.
    pub fn clear_tape(&mut self) {
        debug!(
            "clearing tape: {} nodes dropped (epoch {})",
            self.tape.len(),
            self.epoch
        );
        self.tape.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub fn tape_len(&self) -> usize {
        self.tape.len()
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Current tape epoch; bumped by every [`Graph::clear_tape`].
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns `true` when `handle` can still be dereferenced.
    pub fn is_live(&self, handle: impl Into<Value>) -> bool {
        let handle = handle.into();
        if handle.graph != self.id {
            return false;
        }
        match handle.store {
            Store::Parameter => handle.index < self.parameters.len(),
            Store::Tape => handle.epoch == self.epoch && handle.index < self.tape.len(),
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
