//! Pre-release segment handling for semantic versioning
//!
//! A pre-release such as `beta.4` is split into a leading identifier (`beta`)
//! and a trailing numeric build number (`4`). Only the last dot-separated
//! identifier is ever treated as the build number, so `rc.2024.01.9` reads as
//! identifier `rc.2024.01` with build number `9`.
//!
//! See semver.org: https://semver.org/#spec-item-9

use crate::domain::numeric::Numeric;
use crate::error::{Result, SemverTagError};
use std::fmt;
use std::str::FromStr;

/// Check a single dot-separated pre-release identifier
///
/// Numeric identifiers must not carry leading zeros; alphanumeric ones may
/// only contain ASCII letters, digits and hyphens.
pub fn is_valid_identifier(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return Numeric::is_canonical(s);
    }
    s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Check a full dot-separated pre-release string (e.g. `alpha.1`)
pub fn is_valid_prerelease(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_valid_identifier)
}

/// Pre-release segment with an optional trailing build number
///
/// # Examples
/// - "alpha" -> PreRelease { identifier: "alpha", build_number: None }
/// - "beta.1" -> PreRelease { identifier: "beta", build_number: Some(1) }
/// - "0" -> PreRelease { identifier: "0", build_number: None }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    identifier: String,
    build_number: Option<Numeric>,
}

impl PreRelease {
    /// Parse a pre-release segment (the part after `-` in a version)
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - Parsed segment
    /// * `Err` - If any identifier breaks the semver grammar
    pub fn parse(s: &str) -> Result<Self> {
        if !is_valid_prerelease(s) {
            return Err(SemverTagError::invalid_prerelease(format!(
                "'{}' is not a valid pre-release segment",
                s
            )));
        }

        let segment = match s.rsplit_once('.') {
            Some((head, tail)) if tail.bytes().all(|b| b.is_ascii_digit()) => PreRelease {
                identifier: head.to_string(),
                build_number: Some(Numeric::parse(tail)?),
            },
            _ => PreRelease {
                identifier: s.to_string(),
                build_number: None,
            },
        };

        log::debug!(
            "prerelease '{}' split into identifier '{}' and build {:?}",
            s,
            segment.identifier,
            segment.build_number.as_ref().map(Numeric::as_str)
        );
        Ok(segment)
    }

    /// Seed a fresh `<identifier>.0` segment
    pub fn seed(identifier: &str) -> Result<Self> {
        PreRelease::parse(&format!("{}.0", identifier))
    }

    /// The leading identifier (everything before the build number)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn build_number(&self) -> Option<&Numeric> {
        self.build_number.as_ref()
    }

    /// Replace the leading identifier, keeping the build number
    ///
    /// The segment is re-read from its new text so the identifier/build split
    /// always matches what a fresh parse would produce.
    pub fn set_identifier(&mut self, identifier: &str) -> Result<()> {
        let candidate = match &self.build_number {
            Some(build) => format!("{}.{}", identifier, build),
            None => identifier.to_string(),
        };
        *self = PreRelease::parse(&candidate)?;
        Ok(())
    }

    /// Increment the build number
    ///
    /// Fails with `NoBuildNumber` when the last identifier is not numeric.
    pub fn bump(&mut self) -> Result<()> {
        match self.build_number.as_mut() {
            Some(build) => {
                build.increment();
                Ok(())
            }
            None => Err(SemverTagError::no_build_number(self.to_string())),
        }
    }

    /// Increment the build number, or start one at `0` when there is none
    pub fn must_bump(&mut self) {
        if self.bump().is_err() {
            log::debug!("prerelease '{}' has no build number, seeding 0", self);
            self.build_number = Some(Numeric::zero());
        }
    }
}

impl FromStr for PreRelease {
    type Err = SemverTagError;

    fn from_str(s: &str) -> Result<Self> {
        PreRelease::parse(s)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(build) = &self.build_number {
            write!(f, ".{}", build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_validation() {
        assert!(is_valid_identifier("beta"));
        assert!(is_valid_identifier("0"));
        assert!(is_valid_identifier("0A"));
        assert!(is_valid_identifier("--"));
        assert!(!is_valid_identifier("0123"));
        assert!(!is_valid_identifier("alpha_beta"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_prerelease_validation() {
        assert!(is_valid_prerelease("prerelease"));
        assert!(is_valid_prerelease("prerelease.0"));
        assert!(is_valid_prerelease("alpha-a.b-c-somethinglong"));
        assert!(is_valid_prerelease("---RC-SNAPSHOT.0.9.1--.12"));
        assert!(!is_valid_prerelease("alpha.."));
        assert!(!is_valid_prerelease("alpha."));
        assert!(!is_valid_prerelease(""));
    }

    #[test]
    fn test_parse_with_build_number() {
        let pr = PreRelease::parse("beta.1").unwrap();
        assert_eq!(pr.identifier(), "beta");
        assert_eq!(pr.build_number(), Some(&Numeric::from(1)));
    }

    #[test]
    fn test_parse_without_build_number() {
        let pr = PreRelease::parse("alpha-a.b-c-somethinglong").unwrap();
        assert_eq!(pr.identifier(), "alpha-a.b-c-somethinglong");
        assert_eq!(pr.build_number(), None);
    }

    #[test]
    fn test_parse_uses_last_identifier_only() {
        let pr = PreRelease::parse("---RC-SNAPSHOT.1.2.3--.10").unwrap();
        assert_eq!(pr.identifier(), "---RC-SNAPSHOT.1.2.3--");
        assert_eq!(pr.build_number(), Some(&Numeric::from(10)));
    }

    #[test]
    fn test_parse_lone_numeric_is_identifier() {
        let pr = PreRelease::parse("0").unwrap();
        assert_eq!(pr.identifier(), "0");
        assert_eq!(pr.build_number(), None);
    }

    #[test]
    fn test_parse_mixed_last_identifier_has_no_build() {
        let pr = PreRelease::parse("alpha.0valid").unwrap();
        assert_eq!(pr.identifier(), "alpha.0valid");
        assert_eq!(pr.build_number(), None);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(PreRelease::parse("").is_err());
        assert!(PreRelease::parse("beta.01").is_err());
        assert!(PreRelease::parse("beta_1").is_err());
    }

    #[test]
    fn test_bump_increments_build() {
        let mut pr = PreRelease::parse("beta.9").unwrap();
        pr.bump().unwrap();
        assert_eq!(pr.to_string(), "beta.10");
    }

    #[test]
    fn test_bump_without_build_fails() {
        let mut pr = PreRelease::parse("beta").unwrap();
        let err = pr.bump().unwrap_err();
        assert!(matches!(err, SemverTagError::NoBuildNumber(_)));
        assert_eq!(pr.to_string(), "beta");
    }

    #[test]
    fn test_must_bump() {
        let cases = vec![
            ("beta", "beta.0"),
            ("test.0", "test.1"),
            (
                "alpha-a.b-c-somethinglong",
                "alpha-a.b-c-somethinglong.0",
            ),
        ];

        for (input, expected) in cases {
            let mut pr = PreRelease::parse(input).unwrap();
            pr.must_bump();
            assert_eq!(pr.to_string(), expected, "must_bump of '{}'", input);
        }
    }

    #[test]
    fn test_seed() {
        let pr = PreRelease::seed("beta").unwrap();
        assert_eq!(pr.to_string(), "beta.0");
        assert!(PreRelease::seed("bad_suffix").is_err());
    }

    #[test]
    fn test_set_identifier_keeps_build() {
        let mut pr = PreRelease::parse("beta.3").unwrap();
        pr.set_identifier("test").unwrap();
        assert_eq!(pr.to_string(), "test.3");
        assert_eq!(pr.identifier(), "test");
    }

    #[test]
    fn test_set_identifier_rejects_invalid() {
        let mut pr = PreRelease::parse("beta.3").unwrap();
        assert!(pr.set_identifier("01234").is_err());
        assert_eq!(pr.to_string(), "beta.3");
    }

    #[test]
    fn test_display_roundtrip() {
        for input in ["rc.2", "alpha", "staging.3", "1.2.3"] {
            assert_eq!(PreRelease::parse(input).unwrap().to_string(), input);
        }
    }
}
