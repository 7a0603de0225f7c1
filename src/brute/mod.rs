//! Brute tree search.
//!
//! ## Overview
//!
//! The search keeps a tree of every executed action prefix together with
//! the best cumulative reward seen through it. Each iteration:
//!
//! - **Select**: walk the tree epsilon-greedily on recorded values, then
//!   sample uniformly once off the tree, for a full-horizon plan
//! - **Roll out**: execute the plan from a fresh reset until it runs out or
//!   the episode ends
//! - **Update**: record the executed prefix and its reward
//!
//! There is no value function; the tree alone biases exploration.
//!
//! ## Usage
//!
//! ```rust
//! use brute_search::brute::{BruteConfig, BruteSearch, Runner};
//! use brute_search::envs::TargetSequence;
//!
//! let env = TargetSequence::new(2, vec![1, 1, 1], 10.0);
//! let config = BruteConfig::default()
//!     .with_max_episode_steps(3)
//!     .with_timestep_limit(300);
//!
//! let search = BruteSearch::new(env, config).unwrap();
//! let mut runner = Runner::new(search);
//! let report = runner.run().unwrap();
//!
//! if let Some(best) = report.best {
//!     println!("best {} via {:?}", best.reward, best.actions);
//! }
//! ```

pub mod config;
pub mod node;
pub mod rollout;
pub mod runner;
pub mod search;
pub mod select;
pub mod stats;
pub mod update;

// Re-export main types
pub use config::BruteConfig;
pub use node::Node;
pub use rollout::{rollout, Rollout};
pub use runner::{BestTrajectory, ReplaySink, RunReport, Runner, TrajectorySink};
pub use search::{BruteSearch, Outcome};
pub use select::{best_actions, exploration_probability, ActionSelector};
pub use stats::{SearchStats, TreeStats};
pub use update::update_tree;
