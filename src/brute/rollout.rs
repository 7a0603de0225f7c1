//! Plan execution against the environment.

use crate::core::{ActionId, Environment};

/// What one rollout actually did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rollout {
    /// Actions executed before the plan ran out or the episode ended.
    pub steps: usize,

    /// Sum of the per-step rewards over the executed steps.
    pub reward: f64,

    /// The episode ended (terminated or truncated) before the plan ran out.
    pub stopped_early: bool,
}

/// Reset `env` and execute `moves` in order.
///
/// Stops right after the first step that reports termination or truncation,
/// so `steps <= moves.len()`. Environment errors are returned unchanged.
pub fn rollout<E: Environment>(env: &mut E, moves: &[ActionId]) -> Result<Rollout, E::Error> {
    env.reset()?;

    let mut reward = 0.0;
    let mut steps = 0;

    for &action in moves {
        let step = env.step(action)?;
        steps += 1;
        reward += step.reward;
        if step.is_done() {
            return Ok(Rollout {
                steps,
                reward,
                stopped_early: steps < moves.len(),
            });
        }
    }

    Ok(Rollout {
        steps,
        reward,
        stopped_early: false,
    })
}
