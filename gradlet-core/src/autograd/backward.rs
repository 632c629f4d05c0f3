// gradlet-core/src/autograd/backward.rs

use super::graph::{Graph, Value};
use log::debug;
use std::collections::HashSet;

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first, operands before the node that uses them, each node once.
/// Memoized by handle identity, so two nodes holding the same number are
/// still distinct. Iterative to keep long chains (e.g. a loss summed over
/// many samples) off the call stack.
pub(crate) fn build_topo(graph: &Graph, root: Value) -> Vec<Value> {
    let mut sorted = Vec::new();
    let mut visited: HashSet<Value> = HashSet::new();
    let mut stack: Vec<(Value, bool)> = vec![(root, false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node) {
            continue;
        }
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for operand in graph.node(node).operands().into_iter().rev() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }
    sorted
}

impl Graph {
    /// Backpropagates from `root`, accumulating into every reachable node.
    ///
    /// The root's gradient is set to 1.0; every other gradient is added to.
    /// Gradients left over from an earlier pass are not cleared, so call
    /// [`Graph::zero_all_grads`] (or zero the parameters) first.
    pub fn backward(&mut self, root: impl Into<Value>) {
        let root = root.into();
        let order = build_topo(self, root);
        self.node_mut(root).grad = 1.0;

        for &handle in order.iter().rev() {
            let node = self.node(handle);
            let (op, value, grad) = (node.op, node.value, node.grad);
            op.propagate(self, value, grad);
        }
        debug!("backward from {:?} visited {} nodes", root, order.len());
    }

    /// Topological order from `root`, operands first.
    pub fn topological_order(&self, root: impl Into<Value>) -> Vec<Value> {
        build_topo(self, root.into())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
