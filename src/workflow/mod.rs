//! End-to-end tag workflows
//!
//! Each step takes the data an external collaborator read from the
//! repository (tag names, commit messages, branch) and returns a typed
//! outcome. Outcomes flatten to `key -> value` outputs for CI steps. No
//! step touches git or the filesystem.

pub mod create_tag;
pub mod latest_tag;
pub mod next_tag;

pub use create_tag::{run_create_tag, CreateTagArgs, CreateTagOutcome};
pub use latest_tag::{run_latest_tag, LatestTagArgs, LatestTagOutcome};
pub use next_tag::{run_next_tag, NextTagArgs, NextTagOutcome};

use std::collections::BTreeMap;

/// Flat step outputs, ordered by key
pub type Outputs = BTreeMap<String, String>;

fn insert(outputs: &mut Outputs, key: &str, value: impl ToString) {
    outputs.insert(key.to_string(), value.to_string());
}
