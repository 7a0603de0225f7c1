//! Reference environments and wrappers.
//!
//! - `TargetSequence`: one rewarded action sequence, fixed horizon
//! - `Cliff`: early termination on any wrong move
//! - `Frameskip`, `TimeLimit`: wrappers for any `Environment`

mod target;
mod wrappers;

pub use target::{Cliff, TargetSequence};
pub use wrappers::{Frameskip, TimeLimit};
