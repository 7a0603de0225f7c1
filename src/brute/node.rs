//! Search tree node.
//!
//! The tree is a plain owned tree: each child lives in exactly one parent's
//! action-indexed slot, with no parent pointers and no sharing.

use rustc_hash::FxHashMap;

use crate::core::ActionId;

/// A vertex of the search tree, standing for one action prefix.
#[derive(Clone, Debug)]
pub struct Node {
    /// Best cumulative reward of any rollout whose executed prefix passed
    /// through this node. Negative infinity until the first visit.
    pub value: f64,

    /// Rollouts that passed through this node.
    pub visits: u32,

    /// Children keyed by the action that leads to them, created lazily.
    pub children: FxHashMap<ActionId, Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl Node {
    /// Create an unvisited node with no children.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: f64::NEG_INFINITY,
            visits: 0,
            children: FxHashMap::default(),
        }
    }

    /// Child reached by `action`, if it has been recorded.
    #[inline]
    #[must_use]
    pub fn child(&self, action: ActionId) -> Option<&Node> {
        self.children.get(&action)
    }

    /// Value of the child reached by `action`, or negative infinity.
    #[inline]
    #[must_use]
    pub fn child_value(&self, action: ActionId) -> f64 {
        self.child(action).map_or(f64::NEG_INFINITY, |c| c.value)
    }

    /// No children recorded yet.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Follow an action path from this node.
    ///
    /// Returns `None` as soon as the path leaves the recorded tree.
    #[must_use]
    pub fn descend(&self, path: &[ActionId]) -> Option<&Node> {
        path.iter().try_fold(self, |node, &a| node.child(a))
    }

    /// Visit every node of this subtree depth-first, with its depth.
    pub fn for_each<F: FnMut(&Node, usize)>(&self, mut f: F) {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            f(node, depth);
            stack.extend(node.children.values().map(|c| (c, depth + 1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let node = Node::new();

        assert_eq!(node.value, f64::NEG_INFINITY);
        assert_eq!(node.visits, 0);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_child_value() {
        let mut node = Node::new();
        let mut child = Node::new();
        child.value = 3.5;
        node.children.insert(2, child);

        assert_eq!(node.child_value(2), 3.5);
        assert_eq!(node.child_value(0), f64::NEG_INFINITY);
        assert!(node.child(2).is_some());
        assert!(node.child(1).is_none());
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_descend() {
        let mut root = Node::new();
        let mut a = Node::new();
        let mut b = Node::new();
        b.visits = 7;
        a.children.insert(1, b);
        root.children.insert(0, a);

        assert_eq!(root.descend(&[0, 1]).map(|n| n.visits), Some(7));
        assert!(root.descend(&[]).is_some());
        assert!(root.descend(&[1]).is_none());
        assert!(root.descend(&[0, 1, 0]).is_none());
    }

    #[test]
    fn test_for_each_counts_and_depths() {
        let mut root = Node::new();
        let mut a = Node::new();
        a.children.insert(0, Node::new());
        a.children.insert(1, Node::new());
        root.children.insert(0, a);
        root.children.insert(1, Node::new());

        let mut count = 0;
        let mut max_depth = 0;
        root.for_each(|_, depth| {
            count += 1;
            max_depth = max_depth.max(depth);
        });

        assert_eq!(count, 5);
        assert_eq!(max_depth, 2);
    }
}
