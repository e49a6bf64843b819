use crate::analyzer::bump_counter::{Increment, IncrementCounters};
use crate::domain::Version;
use crate::error::Result;

/// Compute the next version from the last release, the last matching
/// pre-release and the trigger counters
///
/// In pre-release mode an existing pre-release is the base and only its build
/// number moves, unless a major trigger arrives while the pre-release is still
/// on the release's major line. Zero counters return the base unchanged.
///
/// The prefix of the result follows the base; callers apply or strip it.
/// Work happens on a copy, so an error never leaves a half-bumped value.
pub fn next_version(
    last_prerelease: Option<&Version>,
    last_release: &Version,
    prerelease_mode: bool,
    suffix: &str,
    counters: &IncrementCounters,
) -> Result<Version> {
    let on_prerelease = prerelease_mode && last_prerelease.is_some();
    let mut next = match last_prerelease {
        Some(pre) if prerelease_mode => pre.clone(),
        _ => last_release.clone(),
    };

    match counters.effective() {
        Increment::Major => {
            if prerelease_mode && next.major() <= last_release.major() {
                next.bump_major();
                if !next.is_prerelease() {
                    next.must_bump_prerelease(suffix)?;
                }
            } else if prerelease_mode {
                next.must_bump_prerelease(suffix)?;
            } else {
                next.bump_major();
                next.clear_prerelease();
            }
        }
        Increment::Minor => {
            if on_prerelease {
                next.must_bump_prerelease(suffix)?;
            } else if prerelease_mode {
                next.bump_minor();
                next.must_bump_prerelease(suffix)?;
            } else {
                next.bump_minor();
                next.clear_prerelease();
            }
        }
        Increment::Patch => {
            if on_prerelease {
                next.must_bump_prerelease(suffix)?;
            } else if prerelease_mode {
                next.bump_patch();
                next.must_bump_prerelease(suffix)?;
            } else {
                next.bump_patch();
                next.clear_prerelease();
            }
            // a patch-triggered result never ends on patch 0
            if next.patch().is_zero() {
                next.bump_patch();
            }
        }
        Increment::None => {
            log::debug!("no increment requested, keeping {}", next);
        }
    }

    log::debug!(
        "next version {} from release {} / prerelease {:?} (prerelease mode: {})",
        next,
        last_release,
        last_prerelease.map(|v| v.to_string()),
        prerelease_mode
    );
    Ok(next)
}
