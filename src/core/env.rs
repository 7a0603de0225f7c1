//! Environment capability trait.
//!
//! The search never looks inside an environment. It resets it, steps it
//! with action ids, and reads back reward and end-of-episode flags.
//!
//! ## Implementation Notes
//!
//! - `reset`: the returned observation is ignored by the search
//! - `step`: `action` is always a valid id in `0..action_space().n()`
//! - `Error`: returned unchanged to whoever drives the search

use serde::{Deserialize, Serialize};

use super::rng::SearchRng;

/// Index of a discrete action, in `0..n`.
pub type ActionId = usize;

/// A finite set of mutually exclusive actions indexed `0..n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSpace {
    Discrete { n: usize },
}

impl ActionSpace {
    /// Create a discrete space with `n` actions.
    #[must_use]
    pub const fn discrete(n: usize) -> Self {
        ActionSpace::Discrete { n }
    }

    /// Number of available actions.
    #[inline]
    #[must_use]
    pub const fn n(&self) -> usize {
        match self {
            ActionSpace::Discrete { n } => *n,
        }
    }

    /// Check whether `action` is a valid id in this space.
    #[inline]
    #[must_use]
    pub const fn contains(&self, action: ActionId) -> bool {
        action < self.n()
    }

    /// Sample a uniformly random valid action.
    ///
    /// # Panics
    ///
    /// Panics on an empty space.
    pub fn sample(&self, rng: &mut SearchRng) -> ActionId {
        rng.gen_index(self.n())
    }
}

/// Result of a single environment step.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<O> {
    /// Observation after the step (unused by the search).
    pub observation: O,

    /// Reward for this step.
    pub reward: f64,

    /// The episode ended on its own terms.
    pub terminated: bool,

    /// The episode was cut off by an external step limit.
    pub truncated: bool,
}

impl<O> Step<O> {
    /// A step that keeps the episode running.
    pub fn running(observation: O, reward: f64) -> Self {
        Self {
            observation,
            reward,
            terminated: false,
            truncated: false,
        }
    }

    /// Either end-of-episode flag is set.
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// An episodic, discrete-action environment.
pub trait Environment {
    /// What `reset` and `step` observe. Ignored by the search.
    type Observation;

    /// Failure raised by `reset` or `step`.
    type Error: std::error::Error;

    /// The action space. Must stay fixed for the life of the environment.
    fn action_space(&self) -> ActionSpace;

    /// Start a fresh episode.
    fn reset(&mut self) -> Result<Self::Observation, Self::Error>;

    /// Advance the episode by one action.
    fn step(&mut self, action: ActionId) -> Result<Step<Self::Observation>, Self::Error>;
}
