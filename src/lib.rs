//! # brute-search
//!
//! Brute-force tree search for discrete-action, episodic environments.
//!
//! ## Design Principles
//!
//! 1. **No Value Function**: The tree records the best reward ever seen
//!    through each action prefix. Nothing is learned.
//!
//! 2. **Environment-Agnostic**: Environments are reached only through the
//!    `Environment` trait: reset, step, and a discrete action space.
//!
//! 3. **Reproducible**: All randomness flows through one seeded
//!    `SearchRng`.
//!
//! ## Modules
//!
//! - `core`: Action ids, environment contract, RNG, errors
//! - `brute`: Tree, selection, rollout, update, driver and runner
//! - `envs`: Reference environments and wrappers

pub mod brute;
pub mod core;
pub mod envs;

// Re-export commonly used types
pub use crate::core::{ActionId, ActionSpace, ConfigError, Environment, SearchRng, Step};

pub use crate::brute::{
    ActionSelector, BestTrajectory, BruteConfig, BruteSearch, Node, Outcome, ReplaySink,
    RunReport, Runner, SearchStats, TrajectorySink, TreeStats,
};

pub use crate::envs::{Cliff, Frameskip, TargetSequence, TimeLimit};
