//! Version values: the semver.org grammar extended with an optional
//! single-letter prefix (`v1.2.3-beta.0+build.7`).

use crate::domain::numeric::Numeric;
use crate::domain::prerelease::PreRelease;
use crate::error::{Result, SemverTagError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// The semver.org suggested expression with a `prefix` group in front.
/// `\d` is spelled `[0-9]` so non-ASCII digits are rejected.
const VERSION_PATTERN: &str = concat!(
    r"^(?P<prefix>[A-Za-z]?)",
    r"(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("version pattern compiles"));

/// Check whether `s` matches the full version grammar
pub fn is_valid(s: &str) -> bool {
    let valid = VERSION_RE.is_match(s);
    log::debug!("version '{}' valid = {}", s, valid);
    valid
}

/// Check whether `s` is a valid version that carries a prefix (e.g. `v1.0.0`)
pub fn has_prefix(s: &str) -> bool {
    Version::parse(s).map(|v| v.has_prefix()).unwrap_or(false)
}

/// Semantic version with optional prefix, pre-release and build metadata
///
/// Instances only exist for strings that matched the whole grammar. Every
/// mutator keeps the fields canonical, so `to_string()` always yields a
/// string that parses back to the same value.
#[derive(Debug, Clone)]
pub struct Version {
    original: String,
    prefix: Option<char>,
    major: Numeric,
    minor: Numeric,
    patch: Numeric,
    prerelease: Option<PreRelease>,
    build_metadata: Option<String>,
}

impl Version {
    /// The `0.0.0` baseline used when no release exists yet
    pub fn zero() -> Self {
        Version {
            original: "0.0.0".to_string(),
            prefix: None,
            major: Numeric::zero(),
            minor: Numeric::zero(),
            patch: Numeric::zero(),
            prerelease: None,
            build_metadata: None,
        }
    }

    /// Parse a version string such as `v1.2.3` or `1.0.0-beta.1+b7`
    ///
    /// # Returns
    /// * `Ok(Version)` - The string matched the full grammar
    /// * `Err(InvalidVersion)` - Otherwise; nothing is partially parsed
    pub fn parse(s: &str) -> Result<Self> {
        let caps = VERSION_RE
            .captures(s)
            .ok_or_else(|| SemverTagError::invalid_version(s))?;

        let field = |name: &str| caps.name(name).map(|m| m.as_str()).unwrap_or_default();

        let prefix = field("prefix").chars().next();
        let major = Numeric::parse(field("major"))?;
        let minor = Numeric::parse(field("minor"))?;
        let patch = Numeric::parse(field("patch"))?;
        let prerelease = match caps.name("prerelease") {
            Some(m) => Some(PreRelease::parse(m.as_str())?),
            None => None,
        };
        let build_metadata = caps.name("buildmetadata").map(|m| m.as_str().to_string());

        Ok(Version {
            original: s.to_string(),
            prefix,
            major,
            minor,
            patch,
            prerelease,
            build_metadata,
        })
    }

    /// The raw text this version was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn prefix(&self) -> Option<char> {
        self.prefix
    }

    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    /// Set a single-letter prefix such as `v`
    pub fn set_prefix(&mut self, prefix: char) -> Result<()> {
        if !prefix.is_ascii_alphabetic() {
            return Err(SemverTagError::InvalidPrefix(prefix));
        }
        self.prefix = Some(prefix);
        Ok(())
    }

    pub fn remove_prefix(&mut self) {
        self.prefix = None;
    }

    pub fn major(&self) -> &Numeric {
        &self.major
    }

    pub fn minor(&self) -> &Numeric {
        &self.minor
    }

    pub fn patch(&self) -> &Numeric {
        &self.patch
    }

    pub fn set_major(&mut self, major: Numeric) {
        self.major = major;
    }

    pub fn set_minor(&mut self, minor: Numeric) {
        self.minor = minor;
    }

    pub fn set_patch(&mut self, patch: Numeric) {
        self.patch = patch;
    }

    /// Increment major and reset minor and patch to zero
    pub fn bump_major(&mut self) {
        self.major.increment();
        self.minor = Numeric::zero();
        self.patch = Numeric::zero();
    }

    /// Increment minor and reset patch to zero
    pub fn bump_minor(&mut self) {
        self.minor.increment();
        self.patch = Numeric::zero();
    }

    pub fn bump_patch(&mut self) {
        self.patch.increment();
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// True when the pre-release leading identifier equals `token` exactly
    ///
    /// `1.0.0-beta.1` matches `beta`; `1.0.0-beta--what.0` does not.
    pub fn is_prerelease_match(&self, token: &str) -> bool {
        self.prerelease
            .as_ref()
            .is_some_and(|pr| pr.identifier() == token)
    }

    pub fn prerelease(&self) -> Option<&PreRelease> {
        self.prerelease.as_ref()
    }

    /// Leading identifier of the pre-release (`beta` for `1.0.0-beta.1`)
    pub fn prerelease_prefix(&self) -> Option<&str> {
        self.prerelease.as_ref().map(PreRelease::identifier)
    }

    pub fn build_number(&self) -> Option<&Numeric> {
        self.prerelease.as_ref().and_then(PreRelease::build_number)
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// Replace the whole pre-release segment
    pub fn set_prerelease(&mut self, raw: &str) -> Result<()> {
        self.prerelease = Some(PreRelease::parse(raw)?);
        Ok(())
    }

    /// Drop the pre-release segment, turning this into a release
    pub fn clear_prerelease(&mut self) {
        self.prerelease = None;
    }

    /// Replace only the leading pre-release identifier
    ///
    /// `1.0.0-beta.0+b1` with `test` becomes `1.0.0-test.0+b1`. A release
    /// gains a pre-release made of just `token`. Tokens containing `.` are
    /// rejected with `InvalidPrerelease`.
    pub fn set_prerelease_prefix(&mut self, token: &str) -> Result<()> {
        // a dotted token would move the identifier/build split
        if token.contains('.') {
            return Err(SemverTagError::invalid_prerelease(format!(
                "prefix '{}' must be a single identifier",
                token
            )));
        }
        match self.prerelease.as_mut() {
            Some(pr) => pr.set_identifier(token),
            None => {
                self.prerelease = Some(PreRelease::parse(token)?);
                Ok(())
            }
        }
    }

    /// Increment the pre-release build number
    ///
    /// Fails with `NoBuildNumber` for releases and for pre-releases whose last
    /// identifier is not numeric.
    pub fn bump_prerelease(&mut self) -> Result<()> {
        match self.prerelease.as_mut() {
            Some(pr) => pr.bump(),
            None => Err(SemverTagError::no_build_number(self.to_string())),
        }
    }

    /// Increment the pre-release build number, seeding one when missing
    ///
    /// A release gains `-<identifier>.0`; a pre-release without a build
    /// number gains `.0`. Only an invalid `identifier` is an error.
    pub fn must_bump_prerelease(&mut self, identifier: &str) -> Result<()> {
        match self.prerelease.as_mut() {
            Some(pr) => pr.must_bump(),
            None => {
                log::debug!("seeding prerelease '{}.0' on {}", identifier, self);
                self.prerelease = Some(PreRelease::seed(identifier)?);
            }
        }
        Ok(())
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::zero()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
            && self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
            && self.build_metadata == other.build_metadata
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = SemverTagError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{}", prefix)?;
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pr) = &self.prerelease {
            write!(f, "-{}", pr)?;
        }
        if let Some(meta) = &self.build_metadata {
            write!(f, "+{}", meta)?;
        }
        Ok(())
    }
}
