//! The brute search driver.
//!
//! Each `run` call is one independent cycle over the shared, ever-growing
//! tree: select a full-length plan, roll it out, record the executed
//! prefix. The driver never stops itself; budgets belong to the caller.

use std::time::Instant;

use log::debug;

use crate::core::error::{ConfigError, Result};
use crate::core::{ActionId, ActionSpace, Environment, SearchRng};

use super::config::BruteConfig;
use super::node::Node;
use super::rollout::rollout;
use super::select::ActionSelector;
use super::stats::{SearchStats, TreeStats};
use super::update::update_tree;

/// Executed actions and reward of one `run` call.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// The plan prefix that was actually executed.
    pub actions: Vec<ActionId>,

    /// Cumulative reward of the rollout.
    pub reward: f64,
}

/// Brute search context.
///
/// Generic over the environment. Owns the tree root, the RNG and the
/// environment handle for the life of the search.
pub struct BruteSearch<E: Environment> {
    /// The environment rolled out against.
    env: E,

    /// Search configuration.
    config: BruteConfig,

    /// Cached action space.
    space: ActionSpace,

    /// Root of the tree (the empty prefix).
    root: Node,

    /// Nodes in the tree, root included.
    node_count: u64,

    /// RNG for selection.
    rng: SearchRng,

    /// Plan builder.
    selector: ActionSelector,

    /// Search statistics.
    stats: SearchStats,
}

impl<E: Environment> BruteSearch<E> {
    /// Create a new search context.
    ///
    /// Fails if the configuration is invalid or the environment exposes no
    /// actions.
    pub fn new(env: E, config: BruteConfig) -> Result<Self> {
        config.validate()?;

        let space = env.action_space();
        if space.n() == 0 {
            return Err(ConfigError::EmptyActionSpace);
        }

        Ok(Self {
            env,
            space,
            root: Node::new(),
            node_count: 1,
            rng: SearchRng::new(config.seed),
            selector: ActionSelector::new(config.exploration_scale),
            stats: SearchStats::default(),
            config,
        })
    }

    /// Run one select/rollout/update cycle.
    ///
    /// Environment errors are returned unchanged; the tree is left as it
    /// was before the call when the rollout fails.
    pub fn run(&mut self) -> std::result::Result<Outcome, E::Error> {
        let start = Instant::now();

        let mut moves = self.selector.select(
            &self.root,
            self.space,
            self.config.max_episode_steps,
            &mut self.rng,
        );

        let result = rollout(&mut self.env, &moves)?;
        moves.truncate(result.steps);

        let created = update_tree(&mut self.root, &moves, result.reward);
        self.node_count += created as u64;

        self.stats.iterations += 1;
        self.stats.timesteps += result.steps as u64;
        self.stats.nodes_created += created as u64;
        if result.stopped_early {
            self.stats.early_stops += 1;
        }
        self.stats.time_us += start.elapsed().as_micros() as u64;

        debug!(
            "iteration {}: reward={} steps={} new_nodes={} nodes={}",
            self.stats.iterations, result.reward, result.steps, created, self.node_count
        );

        Ok(Outcome {
            actions: moves,
            reward: result.reward,
        })
    }

    /// Best cumulative reward recorded so far (negative infinity before the
    /// first run).
    #[must_use]
    pub fn best_value(&self) -> f64 {
        self.root.value
    }

    /// Nodes in the tree, root included.
    #[must_use]
    pub fn node_count(&self) -> u64 {
        self.node_count
    }

    /// Root of the search tree.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk the tree and summarize its shape.
    #[must_use]
    pub fn tree_stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &BruteConfig {
        &self.config
    }

    /// The action space the search selects from.
    pub fn action_space(&self) -> ActionSpace {
        self.space
    }

    /// Get the environment reference.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Mutable environment access, e.g. to replay a trajectory.
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Give the environment back, dropping the tree.
    pub fn into_env(self) -> E {
        self.env
    }
}
