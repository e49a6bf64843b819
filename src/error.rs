use thiserror::Error;

/// Unified error type for semver tag operations
#[derive(Error, Debug)]
pub enum SemverTagError {
    #[error("Invalid version: '{0}' is not a valid semver")]
    InvalidVersion(String),

    #[error("Invalid prerelease: {0}")]
    InvalidPrerelease(String),

    #[error("Invalid prefix: '{0}' is not a single ASCII letter")]
    InvalidPrefix(char),

    #[error("No build number: '{0}' has no trailing numeric identifier")]
    NoBuildNumber(String),

    #[error("Invalid increment kind: '{0}' (expected major, minor, patch or none)")]
    InvalidIncrementKind(String),

    #[error("Could not find a unique name for '{name}' after {attempts} attempts")]
    UniqueNameExhausted { name: String, attempts: usize },

    #[error("Tag already exists: {0}")]
    TagExists(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SemverTagError>;

impl SemverTagError {
    /// Create an invalid version error for the given input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        SemverTagError::InvalidVersion(input.into())
    }

    /// Create an invalid prerelease error with context
    pub fn invalid_prerelease(msg: impl Into<String>) -> Self {
        SemverTagError::InvalidPrerelease(msg.into())
    }

    /// Create a missing build number error for the given prerelease
    pub fn no_build_number(prerelease: impl Into<String>) -> Self {
        SemverTagError::NoBuildNumber(prerelease.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverTagError::Config(msg.into())
    }
}
