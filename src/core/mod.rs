//! Core types: action ids, the environment contract, RNG, errors.
//!
//! Nothing here knows about the search tree; `brute` builds on these.

pub mod env;
pub mod error;
pub mod rng;

pub use env::{ActionId, ActionSpace, Environment, Step};
pub use error::ConfigError;
pub use rng::SearchRng;
