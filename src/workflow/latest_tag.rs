use super::{insert, Outputs};
use crate::boundary::BoundaryWarning;
use crate::config::{is_release_branch, Config};
use crate::domain::tag::{join, TagSet};
use crate::domain::Version;

/// Inputs for finding the latest release and pre-release of a branch
#[derive(Debug, Clone, PartialEq)]
pub struct LatestTagArgs {
    /// Every tag name in the repository
    pub tags: Vec<String>,

    /// Branch being built
    pub branch: String,

    /// Look for pre-releases matching `suffix`
    pub prerelease: bool,

    /// Leading pre-release identifier (e.g. `beta`)
    pub suffix: String,

    /// Branches that always produce releases
    pub release_branches: Vec<String>,
}

impl LatestTagArgs {
    /// Build arguments with suffix and release branches taken from `config`
    pub fn from_config(tags: Vec<String>, branch: &str, prerelease: bool, config: &Config) -> Self {
        LatestTagArgs {
            tags,
            branch: branch.to_string(),
            prerelease,
            suffix: config.prerelease_suffix.clone(),
            release_branches: config.release_branches.clone(),
        }
    }
}

/// Result of the latest-tag step
#[derive(Debug, Clone, PartialEq)]
pub struct LatestTagOutcome {
    pub last_release: Option<Version>,
    pub last_prerelease: Option<Version>,
    pub releases: Vec<Version>,
    pub prereleases: Vec<Version>,
    pub relevant_prereleases: Vec<Version>,
    /// Pre-release mode after the release-branch override
    pub prerelease: bool,
    /// Whether the selected tags carry a prefix
    pub with_v: bool,
    pub warnings: Vec<BoundaryWarning>,
    args: LatestTagArgs,
}

impl LatestTagOutcome {
    pub fn outputs(&self) -> Outputs {
        let mut outputs = Outputs::new();
        let name = |v: &Option<Version>| v.as_ref().map(Version::to_string).unwrap_or_default();

        insert(&mut outputs, "last_release", name(&self.last_release));
        insert(&mut outputs, "last_prerelease", name(&self.last_prerelease));
        insert(&mut outputs, "all_releases", join(&self.releases));
        insert(&mut outputs, "all_prereleases", join(&self.prereleases));
        insert(&mut outputs, "relevant_prereleases", join(&self.relevant_prereleases));
        insert(&mut outputs, "with_v", self.with_v);
        insert(&mut outputs, "prerelease", self.prerelease);
        insert(&mut outputs, "original_prerelease", self.args.prerelease);
        insert(&mut outputs, "branch_name", &self.args.branch);
        insert(&mut outputs, "prerelease_suffix", &self.args.suffix);
        outputs
    }
}

/// Find the latest release and the latest pre-release relevant to a branch
///
/// A release branch never looks for pre-releases, whatever was requested.
pub fn run_latest_tag(args: &LatestTagArgs) -> LatestTagOutcome {
    let mut warnings = Vec::new();
    let tags = TagSet::new(args.tags.iter().map(String::as_str));

    for tag in tags.unparsable() {
        warnings.push(BoundaryWarning::UnparsableTag {
            tag: tag.to_string(),
        });
    }

    let mut prerelease = args.prerelease;
    if prerelease && is_release_branch(&args.release_branches, &args.branch) {
        prerelease = false;
        warnings.push(BoundaryWarning::ReleaseBranchOverride {
            branch: args.branch.clone(),
        });
    }

    let releases = tags.releases();
    let last_release = releases.last().cloned();

    let relevant_prereleases = if prerelease && !args.suffix.is_empty() {
        tags.matching_prereleases(&args.suffix)
    } else {
        Vec::new()
    };
    let last_prerelease = relevant_prereleases.last().cloned();

    let with_v = last_release.as_ref().is_some_and(Version::has_prefix)
        || last_prerelease.as_ref().is_some_and(Version::has_prefix);

    log::info!(
        "latest release {:?}, latest prerelease {:?} on branch '{}' (prerelease: {})",
        last_release.as_ref().map(Version::to_string),
        last_prerelease.as_ref().map(Version::to_string),
        args.branch,
        prerelease
    );
    for warning in &warnings {
        warning.log();
    }

    LatestTagOutcome {
        last_release,
        last_prerelease,
        releases,
        prereleases: tags.prereleases(),
        relevant_prereleases,
        prerelease,
        with_v,
        warnings,
        args: args.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tags: &[&str], branch: &str, prerelease: bool) -> LatestTagArgs {
        LatestTagArgs {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            branch: branch.to_string(),
            prerelease,
            suffix: "beta".to_string(),
            release_branches: vec!["master".to_string(), "main".to_string()],
        }
    }

    #[test]
    fn test_latest_prerelease_with_prefix() {
        let outcome = run_latest_tag(&args(
            &["0.0.0", "1.0.0", "0.1.0", "v1.0.0-beta.0"],
            "beta",
            true,
        ));
        let outputs = outcome.outputs();
        assert_eq!(outputs["last_prerelease"], "v1.0.0-beta.0");
        assert_eq!(outputs["last_release"], "1.0.0");
        assert_eq!(outputs["with_v"], "true");
        assert_eq!(outputs["prerelease"], "true");
    }

    #[test]
    fn test_no_matching_prerelease() {
        let outcome = run_latest_tag(&args(
            &["0.0.0", "1.0.0", "0.1.0", "v1.0.0-test.0"],
            "beta",
            true,
        ));
        assert!(outcome.last_prerelease.is_none());
        assert_eq!(outcome.outputs()["last_prerelease"], "");
        assert_eq!(outcome.outputs()["all_prereleases"], "v1.0.0-test.0");
    }

    #[test]
    fn test_release_branch_disables_prerelease() {
        let outcome = run_latest_tag(&args(&["1.0.0", "1.1.0-beta.0"], "main", true));
        assert!(!outcome.prerelease);
        assert!(outcome.last_prerelease.is_none());
        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::ReleaseBranchOverride {
                branch: "main".to_string()
            }]
        );
        assert_eq!(outcome.outputs()["original_prerelease"], "true");
    }

    #[test]
    fn test_release_branches_from_config() {
        let config = Config {
            release_branches: vec!["trunk".to_string()],
            ..Config::default()
        };
        let tags = vec!["1.0.0".to_string(), "1.1.0-beta.0".to_string()];

        let outcome = run_latest_tag(&LatestTagArgs::from_config(tags.clone(), "trunk", true, &config));
        assert!(!outcome.prerelease);

        let outcome = run_latest_tag(&LatestTagArgs::from_config(tags, "main", true, &config));
        assert!(outcome.prerelease);
        assert_eq!(outcome.outputs()["last_prerelease"], "1.1.0-beta.0");
    }

    #[test]
    fn test_unparsable_tags_warn() {
        let outcome = run_latest_tag(&args(&["1.0.0", "nightly"], "feature", false));
        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::UnparsableTag {
                tag: "nightly".to_string()
            }]
        );
        assert_eq!(outcome.outputs()["last_release"], "1.0.0");
    }

    #[test]
    fn test_empty_repository() {
        let outcome = run_latest_tag(&args(&[], "feature", true));
        let outputs = outcome.outputs();
        assert_eq!(outputs["last_release"], "");
        assert_eq!(outputs["last_prerelease"], "");
        assert_eq!(outputs["with_v"], "false");
        assert!(outcome.warnings.is_empty());
    }
}
