//! Budgeted driving loop around `BruteSearch`.
//!
//! Runs iterations until the timestep budget is spent, tracks the best
//! trajectory seen, and hands every strict improvement to a sink.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{ActionId, Environment};

use super::rollout::rollout;
use super::search::BruteSearch;

/// The best executed trajectory found so far.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestTrajectory {
    /// Executed actions, in order.
    pub actions: Vec<ActionId>,

    /// Cumulative reward of the trajectory.
    pub reward: f64,

    /// Iteration (1-based) that produced it.
    pub iteration: u64,

    /// Total timesteps spent when it was found.
    pub timestep: u64,
}

/// Receives each new best trajectory.
///
/// The sink gets the environment so it can replay the trajectory, e.g.
/// while recording.
pub trait TrajectorySink<E: Environment> {
    fn on_improvement(&mut self, env: &mut E, best: &BestTrajectory) -> Result<(), E::Error>;
}

impl<E: Environment> TrajectorySink<E> for () {
    fn on_improvement(&mut self, _env: &mut E, _best: &BestTrajectory) -> Result<(), E::Error> {
        Ok(())
    }
}

/// Replays every new best trajectory from a fresh reset.
#[derive(Clone, Debug, Default)]
pub struct ReplaySink {
    /// Rewards observed on the last replay.
    pub replayed_reward: Option<f64>,

    /// Number of replays performed.
    pub replays: u32,
}

impl<E: Environment> TrajectorySink<E> for ReplaySink {
    fn on_improvement(&mut self, env: &mut E, best: &BestTrajectory) -> Result<(), E::Error> {
        let result = rollout(env, &best.actions)?;
        self.replayed_reward = Some(result.reward);
        self.replays += 1;
        Ok(())
    }
}

/// Summary of a finished `Runner::run`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Best trajectory, `None` only if every reward was NaN.
    pub best: Option<BestTrajectory>,

    /// Iterations run.
    pub iterations: u64,

    /// Environment steps spent.
    pub timesteps: u64,

    /// Nodes in the tree at the end, root included.
    pub node_count: u64,
}

/// Drives a search under its configured timestep budget.
pub struct Runner<E: Environment, S: TrajectorySink<E> = ()> {
    search: BruteSearch<E>,
    sink: S,
}

impl<E: Environment> Runner<E> {
    /// Runner that keeps no record of improvements.
    pub fn new(search: BruteSearch<E>) -> Self {
        Self { search, sink: () }
    }
}

impl<E: Environment, S: TrajectorySink<E>> Runner<E, S> {
    /// Runner that reports improvements to `sink`.
    pub fn with_sink(search: BruteSearch<E>, sink: S) -> Self {
        Self { search, sink }
    }

    /// Iterate until more than `timestep_limit` steps have been spent.
    ///
    /// At least one iteration always runs. Environment errors abort the
    /// loop and are returned unchanged.
    pub fn run(&mut self) -> Result<RunReport, E::Error> {
        let limit = self.search.config().timestep_limit;
        let mut best_reward = f64::NEG_INFINITY;
        let mut best: Option<BestTrajectory> = None;
        let mut iterations = 0u64;
        let mut timesteps = 0u64;

        loop {
            let outcome = self.search.run()?;
            iterations += 1;
            timesteps += outcome.actions.len() as u64;

            if outcome.reward > best_reward {
                info!(
                    "new best reward {} => {} (iteration {}, timestep {})",
                    best_reward, outcome.reward, iterations, timesteps
                );
                best_reward = outcome.reward;
                let trajectory = BestTrajectory {
                    actions: outcome.actions,
                    reward: outcome.reward,
                    iteration: iterations,
                    timestep: timesteps,
                };
                self.sink
                    .on_improvement(self.search.env_mut(), &trajectory)?;
                best = Some(trajectory);
            }

            if timesteps > limit {
                info!(
                    "timestep limit exceeded: {} > {} after {} iterations, best {}",
                    timesteps, limit, iterations, best_reward
                );
                break;
            }
        }

        Ok(RunReport {
            best,
            iterations,
            timesteps,
            node_count: self.search.node_count(),
        })
    }

    /// The wrapped search.
    pub fn search(&self) -> &BruteSearch<E> {
        &self.search
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Split back into search and sink.
    pub fn into_parts(self) -> (BruteSearch<E>, S) {
        (self.search, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute::config::BruteConfig;
    use crate::core::{ActionSpace, Step};
    use std::convert::Infallible;

    /// Reward equals the action id; fixed horizon.
    struct Echo {
        horizon: usize,
        taken: usize,
    }

    impl Environment for Echo {
        type Observation = ();
        type Error = Infallible;

        fn action_space(&self) -> ActionSpace {
            ActionSpace::discrete(3)
        }

        fn reset(&mut self) -> Result<(), Infallible> {
            self.taken = 0;
            Ok(())
        }

        fn step(&mut self, action: ActionId) -> Result<Step<()>, Infallible> {
            self.taken += 1;
            let mut step = Step::running((), action as f64);
            step.truncated = self.taken >= self.horizon;
            Ok(step)
        }
    }

    fn search(limit: u64) -> BruteSearch<Echo> {
        let config = BruteConfig::default()
            .with_max_episode_steps(5)
            .with_timestep_limit(limit)
            .with_seed(8);
        BruteSearch::new(Echo { horizon: 5, taken: 0 }, config).unwrap()
    }

    #[test]
    fn test_runner_respects_limit() {
        let mut runner = Runner::new(search(100));
        let report = runner.run().unwrap();

        // 5 steps per iteration: stops once 100 is exceeded
        assert_eq!(report.timesteps, 105);
        assert_eq!(report.iterations, 21);
        assert_eq!(report.node_count, runner.search().node_count());
    }

    #[test]
    fn test_runner_always_runs_once() {
        let mut runner = Runner::new(search(0));
        let report = runner.run().unwrap();

        assert_eq!(report.iterations, 1);
        assert!(report.best.is_some());
    }

    #[test]
    fn test_runner_best_matches_tree() {
        let mut runner = Runner::new(search(500));
        let report = runner.run().unwrap();

        let best = report.best.unwrap();
        assert_eq!(best.reward, runner.search().best_value());
        assert_eq!(best.actions.len(), 5);
        let sum: f64 = best.actions.iter().map(|&a| a as f64).sum();
        assert_eq!(sum, best.reward);
    }

    #[test]
    fn test_replay_sink_reproduces_reward() {
        let mut runner = Runner::with_sink(search(300), ReplaySink::default());
        let report = runner.run().unwrap();

        let sink = runner.sink();
        assert!(sink.replays >= 1);
        assert_eq!(sink.replayed_reward, report.best.map(|b| b.reward));
    }

    #[test]
    fn test_report_serialization() {
        let mut runner = Runner::new(search(20));
        let report = runner.run().unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
