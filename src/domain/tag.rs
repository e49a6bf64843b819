use crate::domain::natural::{sort_versions, SortOrder};
use crate::domain::version::Version;
use std::collections::HashSet;

/// The set of tag names found in a repository
///
/// Names that are not valid versions are kept for collision checks but are
/// ignored when selecting releases and pre-releases.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    names: Vec<String>,
    lookup: HashSet<String>,
}

impl TagSet {
    /// Create a tag set from raw names; duplicates collapse to one entry
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = TagSet::default();
        for name in names {
            set.insert(name);
        }
        set
    }

    /// Add a name, returning false if it was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.lookup.insert(name.clone()) {
            self.names.push(name);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    /// Names that do not parse as versions, in insertion order
    pub fn unparsable(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| Version::parse(name).is_err())
            .collect()
    }

    fn sorted_where(&self, keep: impl Fn(&Version) -> bool) -> Vec<Version> {
        sort_versions(&self.names, SortOrder::Ascending)
            .into_iter()
            .filter(|v| keep(v))
            .collect()
    }

    /// Valid versions without a pre-release, natural-sorted ascending
    pub fn releases(&self) -> Vec<Version> {
        self.sorted_where(|v| !v.is_prerelease())
    }

    /// Valid versions with any pre-release, natural-sorted ascending
    pub fn prereleases(&self) -> Vec<Version> {
        self.sorted_where(Version::is_prerelease)
    }

    /// Pre-releases whose leading identifier equals `suffix`
    pub fn matching_prereleases(&self, suffix: &str) -> Vec<Version> {
        self.sorted_where(|v| v.is_prerelease_match(suffix))
    }

    /// The last release in ascending natural order
    pub fn latest_release(&self) -> Option<Version> {
        self.releases().pop()
    }

    /// The last pre-release for `suffix` in ascending natural order
    pub fn latest_prerelease(&self, suffix: &str) -> Option<Version> {
        self.matching_prereleases(suffix).pop()
    }
}

/// Join versions for display (`1.0.0, 1.1.0`)
pub fn join(versions: &[Version]) -> String {
    versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(versions: &[Version]) -> Vec<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_tag_set_dedup_and_contains() {
        let mut tags = TagSet::new(["1.0.0", "others", "1.0.0"]);
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("others"));
        assert!(!tags.contains("1.0.1"));
        assert!(tags.insert("1.0.1"));
        assert!(!tags.insert("1.0.1"));
    }

    #[test]
    fn test_prereleases_count() {
        let tags = TagSet::new(["1.0.0", "v1.0.0", "v1.0.1-beta.1", "test-normal-string"]);
        assert_eq!(tags.prereleases().len(), 1);

        let tags = TagSet::new(["1.0.0", "v1.0.0", "v1.0.1-beta.01", "test-normal-string"]);
        assert_eq!(tags.prereleases().len(), 0);

        let tags = TagSet::new([
            "1.0.0",
            "v1.0.0",
            "v1.0.1-beta.0+b1",
            "test-normal-string",
            "10.1.1-beta.0+b1",
            "10.1.1-beta-with-extras--",
        ]);
        assert_eq!(tags.prereleases().len(), 3);
    }

    #[test]
    fn test_matching_prereleases() {
        let tags = TagSet::new([
            "1.0.0",
            "v1.0.0",
            "v1.0.1-beta.1",
            "v1.0.1-beta.0",
            "v1.0.1-test.0",
            "test-normal-string",
        ]);
        assert_eq!(
            strings(&tags.matching_prereleases("beta")),
            vec!["v1.0.1-beta.0", "v1.0.1-beta.1"]
        );

        let tags = TagSet::new([
            "v1.0.1----beta.1",
            "v1.0.1-notbeta.1",
            "11.0.1-beta--what.0",
            "v1.0.1-test.0",
        ]);
        assert!(tags.matching_prereleases("beta").is_empty());
    }

    #[test]
    fn test_latest_release_and_prerelease() {
        let tags = TagSet::new([
            "0.0.0",
            "1.0.0",
            "9.1.1-beta.0",
            "10.0.1-beta.0",
            "10.0.1-beta.9+b1",
            "10.0.1-beta.10",
        ]);
        assert_eq!(tags.latest_release().unwrap().to_string(), "1.0.0");
        assert_eq!(
            tags.latest_prerelease("beta").unwrap().to_string(),
            "10.0.1-beta.10"
        );
        assert!(tags.latest_prerelease("alpha").is_none());
    }

    #[test]
    fn test_latest_release_ignores_invalid() {
        let tags = TagSet::new(["release-99", "2.0.0", "10.10.1", "10.9.1", "main"]);
        assert_eq!(tags.latest_release().unwrap().to_string(), "10.10.1");
        assert_eq!(tags.unparsable(), vec!["release-99", "main"]);
    }

    #[test]
    fn test_empty_set() {
        let tags = TagSet::default();
        assert!(tags.is_empty());
        assert!(tags.latest_release().is_none());
    }

    #[test]
    fn test_join() {
        let tags = TagSet::new(["2.0.0", "1.0.0"]);
        assert_eq!(join(&tags.releases()), "1.0.0, 2.0.0");
        assert_eq!(join(&[]), "");
    }
}
