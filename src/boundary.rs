use std::fmt;

/// Warnings raised while computing tags from repository data.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String },
    /// No trigger was found in the commits, so the default increment was used
    DefaultBumpApplied { increment: String },
    /// Pre-release mode was requested on a release branch and switched off
    ReleaseBranchOverride { branch: String },
    /// Nothing requested an increment, so the base version is reused
    NoBump { tag: String },
}

impl BoundaryWarning {
    /// Emit the warning through the `log` facade
    pub fn log(&self) {
        log::warn!("{}", self);
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag } => {
                write!(f, "Cannot parse tag '{}' as a semantic version, ignoring it", tag)
            }
            BoundaryWarning::DefaultBumpApplied { increment } => {
                write!(
                    f,
                    "No #major, #minor or #patch trigger found in commits, using default '{}'",
                    increment
                )
            }
            BoundaryWarning::ReleaseBranchOverride { branch } => {
                write!(
                    f,
                    "Branch '{}' is a release branch, pre-release mode disabled",
                    branch
                )
            }
            BoundaryWarning::NoBump { tag } => {
                write!(f, "No version increment requested, reusing '{}'", tag)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_clone_and_eq() {
        let warning = BoundaryWarning::NoBump {
            tag: "1.0.0".to_string(),
        };
        assert_eq!(warning.clone(), warning);
    }
}
