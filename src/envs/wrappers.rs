//! Environment wrappers.
//!
//! Both wrappers are themselves `Environment`s, so they stack:
//! `TimeLimit::new(Frameskip::new(env, 4), 4500)`.

use crate::core::{ActionId, ActionSpace, Environment, Step};

/// Repeats each action `skip` times, summing the rewards.
///
/// Stops repeating as soon as an inner step ends the episode.
#[derive(Clone, Debug)]
pub struct Frameskip<E> {
    inner: E,
    skip: usize,
}

impl<E: Environment> Frameskip<E> {
    /// Default repeat count.
    pub const DEFAULT_SKIP: usize = 4;

    /// Wrap `inner`, repeating each action `skip` times.
    ///
    /// # Panics
    ///
    /// Panics if `skip == 0`.
    pub fn new(inner: E, skip: usize) -> Self {
        assert!(skip > 0, "frameskip must be at least 1");
        Self { inner, skip }
    }

    /// The wrapped environment.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Environment> Environment for Frameskip<E> {
    type Observation = E::Observation;
    type Error = E::Error;

    fn action_space(&self) -> ActionSpace {
        self.inner.action_space()
    }

    fn reset(&mut self) -> Result<Self::Observation, Self::Error> {
        self.inner.reset()
    }

    fn step(&mut self, action: ActionId) -> Result<Step<Self::Observation>, Self::Error> {
        let mut step = self.inner.step(action)?;
        let mut reward = step.reward;

        for _ in 1..self.skip {
            if step.is_done() {
                break;
            }
            step = self.inner.step(action)?;
            reward += step.reward;
        }

        step.reward = reward;
        Ok(step)
    }
}

/// Truncates episodes after `max_episode_steps` steps.
#[derive(Clone, Debug)]
pub struct TimeLimit<E> {
    inner: E,
    max_episode_steps: usize,
    elapsed: usize,
}

impl<E: Environment> TimeLimit<E> {
    /// Wrap `inner` with a per-episode step limit.
    pub fn new(inner: E, max_episode_steps: usize) -> Self {
        Self {
            inner,
            max_episode_steps,
            elapsed: 0,
        }
    }

    /// Steps taken since the last reset.
    pub fn elapsed(&self) -> usize {
        self.elapsed
    }

    /// The wrapped environment.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Environment> Environment for TimeLimit<E> {
    type Observation = E::Observation;
    type Error = E::Error;

    fn action_space(&self) -> ActionSpace {
        self.inner.action_space()
    }

    fn reset(&mut self) -> Result<Self::Observation, Self::Error> {
        self.elapsed = 0;
        self.inner.reset()
    }

    fn step(&mut self, action: ActionId) -> Result<Step<Self::Observation>, Self::Error> {
        let mut step = self.inner.step(action)?;
        self.elapsed += 1;
        if self.elapsed >= self.max_episode_steps {
            step.truncated = true;
        }
        Ok(step)
    }
}
