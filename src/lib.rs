//! Cycle detection and extrapolation for deterministic processes.
//!
//! Feed a (possibly infinite) sequence of states to one of the `find_cycle*` entry points; the
//! resulting [`CycleAnalysis`] answers "which state is at index N" in O(1) for any N, without
//! simulating the steps in between.

pub mod analysis;
pub mod config;
pub mod detect;
pub mod error;
pub mod eval;
pub mod process;

pub use analysis::{CycleAnalysis, CycleSummary};
pub use config::DetectLimits;
pub use detect::{
    find_cycle, find_cycle_by, find_cycle_by_key, find_cycle_by_key_with_limits,
    find_cycle_by_with_limits, find_cycle_with_limits, CycleDetector,
};
pub use error::CycleError;
