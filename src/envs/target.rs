//! Reference environments with known optima.

use std::convert::Infallible;

use crate::core::{ActionId, ActionSpace, Environment, Step};

/// Pays `reward` only for one exact action sequence.
///
/// The episode terminates after `target.len()` steps. The reward is paid on
/// the final step when every action matched, otherwise nothing.
#[derive(Clone, Debug)]
pub struct TargetSequence {
    actions: usize,
    target: Vec<ActionId>,
    reward: f64,
    position: usize,
    on_target: bool,
}

impl TargetSequence {
    /// Create the environment.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty or names an action outside `0..actions`.
    pub fn new(actions: usize, target: Vec<ActionId>, reward: f64) -> Self {
        assert!(!target.is_empty(), "target sequence must not be empty");
        assert!(
            target.iter().all(|&a| a < actions),
            "target actions must be in 0..{}",
            actions
        );
        Self {
            actions,
            target,
            reward,
            position: 0,
            on_target: true,
        }
    }

    /// The rewarded sequence.
    pub fn target(&self) -> &[ActionId] {
        &self.target
    }

    /// Episode length.
    pub fn horizon(&self) -> usize {
        self.target.len()
    }
}

impl Environment for TargetSequence {
    type Observation = usize;
    type Error = Infallible;

    fn action_space(&self) -> ActionSpace {
        ActionSpace::discrete(self.actions)
    }

    fn reset(&mut self) -> Result<usize, Infallible> {
        self.position = 0;
        self.on_target = true;
        Ok(0)
    }

    fn step(&mut self, action: ActionId) -> Result<Step<usize>, Infallible> {
        self.on_target &= self.target.get(self.position) == Some(&action);
        self.position += 1;

        let done = self.position >= self.target.len();
        let reward = if done && self.on_target { self.reward } else { 0.0 };

        let mut step = Step::running(self.position, reward);
        step.terminated = done;
        Ok(step)
    }
}

/// Walk along a ledge: action 0 advances for a reward of 1, anything else
/// falls off and terminates the episode with nothing.
#[derive(Clone, Debug)]
pub struct Cliff {
    actions: usize,
    position: usize,
}

impl Cliff {
    /// Create a cliff with `actions` discrete actions.
    pub fn new(actions: usize) -> Self {
        Self {
            actions,
            position: 0,
        }
    }
}

impl Environment for Cliff {
    type Observation = usize;
    type Error = Infallible;

    fn action_space(&self) -> ActionSpace {
        ActionSpace::discrete(self.actions)
    }

    fn reset(&mut self) -> Result<usize, Infallible> {
        self.position = 0;
        Ok(0)
    }

    fn step(&mut self, action: ActionId) -> Result<Step<usize>, Infallible> {
        if action != 0 {
            let mut step = Step::running(self.position, 0.0);
            step.terminated = true;
            return Ok(step);
        }
        self.position += 1;
        Ok(Step::running(self.position, 1.0))
    }
}
