use super::{insert, Outputs};
use crate::analyzer::{next_version, BumpCounter, Increment, IncrementCounters};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::Version;
use crate::error::Result;

/// Inputs for computing the next tag
#[derive(Debug, Clone, PartialEq)]
pub struct NextTagArgs {
    /// Commit messages between the base and head references
    pub messages: Vec<String>,

    pub prerelease: bool,

    /// Leading pre-release identifier (e.g. `beta`)
    pub suffix: String,

    /// Last matching pre-release; empty when there is none
    pub last_prerelease: String,

    /// Last release; empty means `0.0.0`
    pub last_release: String,

    /// Increment used when no trigger is found
    pub default_bump: Increment,

    /// Prefix the result with `v` (otherwise any prefix is removed)
    pub with_v: bool,
}

impl NextTagArgs {
    /// Build arguments with suffix, default increment and prefix taken from `config`
    pub fn from_config(
        messages: Vec<String>,
        prerelease: bool,
        last_prerelease: &str,
        last_release: &str,
        config: &Config,
    ) -> Self {
        NextTagArgs {
            messages,
            prerelease,
            suffix: config.prerelease_suffix.clone(),
            last_prerelease: last_prerelease.to_string(),
            last_release: last_release.to_string(),
            default_bump: config.default_bump,
            with_v: config.with_v,
        }
    }
}

/// Result of the next-tag step
#[derive(Debug, Clone, PartialEq)]
pub struct NextTagOutcome {
    pub next: Version,
    pub bumped_by: Increment,
    pub counters: IncrementCounters,
    pub last_release: Version,
    pub last_prerelease: Option<Version>,
    pub warnings: Vec<BoundaryWarning>,
    args: NextTagArgs,
}

impl NextTagOutcome {
    pub fn outputs(&self) -> Outputs {
        let mut outputs = Outputs::new();
        let last_prerelease = self
            .last_prerelease
            .as_ref()
            .map(Version::to_string)
            .unwrap_or_default();

        insert(&mut outputs, "next_tag", &self.next);
        insert(&mut outputs, "bumped_by", self.bumped_by);
        insert(&mut outputs, "last_release", &self.last_release);
        insert(&mut outputs, "last_prerelease", last_prerelease);
        insert(&mut outputs, "majors", self.counters.major);
        insert(&mut outputs, "minors", self.counters.minor);
        insert(&mut outputs, "patches", self.counters.patch);
        insert(&mut outputs, "prerelease", self.args.prerelease);
        insert(&mut outputs, "prerelease_suffix", &self.args.suffix);
        insert(&mut outputs, "with_v", self.args.with_v);
        insert(&mut outputs, "default_bump", self.args.default_bump);
        outputs
    }
}

fn parse_optional(raw: &str) -> Result<Option<Version>> {
    let raw = raw.trim();
    if raw.is_empty() {
        Ok(None)
    } else {
        Version::parse(raw).map(Some)
    }
}

/// Count triggers in the commits and compute the next tag
///
/// # Returns
/// * `Ok(NextTagOutcome)` - The next version and the counts behind it
/// * `Err(InvalidVersion)` - If a non-empty last release or pre-release is not a version
pub fn run_next_tag(args: &NextTagArgs) -> Result<NextTagOutcome> {
    let last_release = parse_optional(&args.last_release)?.unwrap_or_default();
    let last_prerelease = parse_optional(&args.last_prerelease)?;

    let count = BumpCounter::new(args.default_bump).count_detailed(&args.messages);
    let bumped_by = count.counters.effective();

    let mut warnings = Vec::new();
    if count.default_applied {
        warnings.push(BoundaryWarning::DefaultBumpApplied {
            increment: args.default_bump.to_string(),
        });
    }

    let mut next = next_version(
        last_prerelease.as_ref(),
        &last_release,
        args.prerelease,
        &args.suffix,
        &count.counters,
    )?;

    if args.with_v {
        next.set_prefix('v')?;
    } else {
        next.remove_prefix();
    }

    if bumped_by == Increment::None {
        warnings.push(BoundaryWarning::NoBump {
            tag: next.to_string(),
        });
    }

    log::info!(
        "next tag {} (bumped by {}, major={} minor={} patch={})",
        next,
        bumped_by,
        count.counters.major,
        count.counters.minor,
        count.counters.patch
    );
    for warning in &warnings {
        warning.log();
    }

    Ok(NextTagOutcome {
        next,
        bumped_by,
        counters: count.counters,
        last_release,
        last_prerelease,
        warnings,
        args: args.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SemverTagError;

    fn args(messages: &[&str], prerelease: bool, lp: &str, lr: &str) -> NextTagArgs {
        NextTagArgs {
            messages: messages.iter().map(|m| m.to_string()).collect(),
            prerelease,
            suffix: "beta".to_string(),
            last_prerelease: lp.to_string(),
            last_release: lr.to_string(),
            default_bump: Increment::Patch,
            with_v: false,
        }
    }

    #[test]
    fn test_first_release_defaults_to_zero() {
        let outcome = run_next_tag(&args(&["initial commit"], false, "", "")).unwrap();
        let outputs = outcome.outputs();
        assert_eq!(outputs["next_tag"], "0.0.1");
        assert_eq!(outputs["last_release"], "0.0.0");
        assert_eq!(outputs["last_prerelease"], "");
        assert_eq!(outputs["bumped_by"], "patch");
        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::DefaultBumpApplied {
                increment: "patch".to_string()
            }]
        );
    }

    #[test]
    fn test_counts_in_outputs() {
        let outcome = run_next_tag(&args(
            &["feat: x #minor", "fix: y #patch", "fix: z #patch"],
            true,
            "1.1.0-beta.3",
            "1.0.0",
        ))
        .unwrap();
        let outputs = outcome.outputs();
        assert_eq!(outputs["next_tag"], "1.1.0-beta.4");
        assert_eq!(outputs["bumped_by"], "minor");
        assert_eq!(outputs["majors"], "0");
        assert_eq!(outputs["minors"], "1");
        assert_eq!(outputs["patches"], "2");
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_with_v_adds_prefix() {
        let mut a = args(&["#major"], true, "v1.0.0-beta.0", "0.0.1");
        a.with_v = true;
        let outcome = run_next_tag(&a).unwrap();
        assert_eq!(outcome.next.to_string(), "v1.0.0-beta.1");
    }

    #[test]
    fn test_without_v_strips_prefix() {
        let outcome = run_next_tag(&args(&["#minor"], false, "", "v2.3.4")).unwrap();
        assert_eq!(outcome.next.to_string(), "2.4.0");
    }

    #[test]
    fn test_no_bump_reuses_release() {
        let mut a = args(&["docs only"], false, "", "1.2.3");
        a.default_bump = Increment::None;
        let outcome = run_next_tag(&a).unwrap();
        assert_eq!(outcome.next.to_string(), "1.2.3");
        assert_eq!(outcome.outputs()["bumped_by"], "none");
        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::NoBump {
                tag: "1.2.3".to_string()
            }]
        );
    }

    #[test]
    fn test_invalid_last_release() {
        let err = run_next_tag(&args(&["#patch"], false, "", "1.0")).unwrap_err();
        assert!(matches!(err, SemverTagError::InvalidVersion(_)));
    }

    #[test]
    fn test_invalid_last_prerelease() {
        let err = run_next_tag(&args(&["#patch"], true, "1.0.0-beta.01", "1.0.0")).unwrap_err();
        assert!(matches!(err, SemverTagError::InvalidVersion(_)));
    }
}
