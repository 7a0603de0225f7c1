//! Candidate plan selection.
//!
//! Walks the tree from the root, picking one action per step:
//!
//! - On recorded nodes: epsilon-greedy over child values, with
//!   `epsilon = scale / ln(visits + 2)` and uniform tie-breaking.
//! - Past the frontier: uniform random for every remaining step.
//!
//! The plan is always `max_steps` long, however shallow the tree is.

use smallvec::SmallVec;

use crate::core::{ActionId, ActionSpace, SearchRng};

use super::node::Node;

/// Exploration probability at a node with `visits` recorded rollouts.
///
/// Decays with visits. Not clamped to `[0, 1]`.
#[inline]
#[must_use]
pub fn exploration_probability(scale: f64, visits: u32) -> f64 {
    scale / (f64::from(visits) + 2.0).ln()
}

/// Actions whose child value equals the best child value at `node`.
///
/// Unrecorded actions count as negative infinity, so a node without
/// children ties every action. The maximum is computed before filtering,
/// so the result never depends on map iteration order.
#[must_use]
pub fn best_actions(node: &Node, n: usize) -> SmallVec<[ActionId; 8]> {
    let best = (0..n)
        .map(|a| node.child_value(a))
        .fold(f64::NEG_INFINITY, f64::max);

    (0..n).filter(|&a| node.child_value(a) == best).collect()
}

/// Builds full-length candidate plans from the tree.
#[derive(Clone, Copy, Debug)]
pub struct ActionSelector {
    exploration_scale: f64,
}

impl Default for ActionSelector {
    fn default() -> Self {
        Self::new(0.005)
    }
}

impl ActionSelector {
    /// Create a selector with the given exploration scale.
    #[must_use]
    pub fn new(exploration_scale: f64) -> Self {
        Self { exploration_scale }
    }

    /// The exploration scale in use.
    #[must_use]
    pub fn exploration_scale(&self) -> f64 {
        self.exploration_scale
    }

    /// Produce exactly `max_steps` actions starting from `root`.
    ///
    /// `space` must contain at least one action.
    pub fn select(
        &self,
        root: &Node,
        space: ActionSpace,
        max_steps: usize,
        rng: &mut SearchRng,
    ) -> Vec<ActionId> {
        let n = space.n();
        let mut moves = Vec::with_capacity(max_steps);
        let mut current = Some(root);

        for _ in 0..max_steps {
            let action = match current {
                None => space.sample(rng),
                Some(node) => {
                    let action = self.choose_at(node, space, rng);
                    debug_assert!(action < n);
                    current = node.child(action);
                    action
                }
            };
            moves.push(action);
        }

        moves
    }

    /// One epsilon-greedy choice at a recorded node.
    fn choose_at(&self, node: &Node, space: ActionSpace, rng: &mut SearchRng) -> ActionId {
        let epsilon = exploration_probability(self.exploration_scale, node.visits);
        if rng.gen_unit() < epsilon {
            return space.sample(rng);
        }

        let ties = best_actions(node, space.n());
        match rng.choose(&ties) {
            Some(&action) => action,
            // Only reachable when every value is NaN.
            None => space.sample(rng),
        }
    }
}
