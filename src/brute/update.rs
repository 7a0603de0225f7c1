//! Tree update after a rollout.
//!
//! The only code that mutates the tree.

use crate::core::ActionId;

use super::node::Node;

/// Record a rollout along its executed prefix.
///
/// The root and every node on `executed` get `value = max(value, reward)`
/// and one more visit; missing nodes are created on the way down. That is
/// `executed.len() + 1` visit increments per call.
///
/// Returns the number of nodes created, at most `executed.len()`.
pub fn update_tree(root: &mut Node, executed: &[ActionId], reward: f64) -> usize {
    root.value = root.value.max(reward);
    root.visits += 1;

    let mut new_nodes = 0;
    let mut node = root;

    for &action in executed {
        node = node.children.entry(action).or_insert_with(|| {
            new_nodes += 1;
            Node::new()
        });
        node.value = node.value.max(reward);
        node.visits += 1;
    }

    new_nodes
}
