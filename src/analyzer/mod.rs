//! Analysis engine: trigger counting and next-version calculation

pub mod bump_counter;
pub mod next_version;

pub use bump_counter::{BumpCount, BumpCounter, Increment, IncrementCounters};
pub use next_version::next_version;
