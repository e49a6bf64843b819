use crate::error::{Result, SemverTagError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of version increment requested by a trigger token or a default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Increment {
    Major,
    Minor,
    #[default]
    Patch,
    None,
}

impl Increment {
    /// The literal token that requests this increment in commit text
    pub fn trigger(&self) -> Option<&'static str> {
        match self {
            Increment::Major => Some("#major"),
            Increment::Minor => Some("#minor"),
            Increment::Patch => Some("#patch"),
            Increment::None => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Increment::Major => "major",
            Increment::Minor => "minor",
            Increment::Patch => "patch",
            Increment::None => "none",
        }
    }
}

impl FromStr for Increment {
    type Err = SemverTagError;

    /// Accepts `major`, `minor`, `patch` or `none`, with or without a leading `#`
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().trim_start_matches('#').to_lowercase().as_str() {
            "major" => Ok(Increment::Major),
            "minor" => Ok(Increment::Minor),
            "patch" => Ok(Increment::Patch),
            "none" => Ok(Increment::None),
            _ => Err(SemverTagError::InvalidIncrementKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for Increment {
    type Error = SemverTagError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Increment> for String {
    fn from(value: Increment) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger totals for one batch of commit messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IncrementCounters {
    pub major: usize,
    pub minor: usize,
    pub patch: usize,
}

impl IncrementCounters {
    pub fn new(major: usize, minor: usize, patch: usize) -> Self {
        IncrementCounters {
            major,
            minor,
            patch,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }

    /// The increment that wins: major, then minor, then patch
    pub fn effective(&self) -> Increment {
        if self.major > 0 {
            Increment::Major
        } else if self.minor > 0 {
            Increment::Minor
        } else if self.patch > 0 {
            Increment::Patch
        } else {
            Increment::None
        }
    }
}

/// Result of counting triggers, noting whether the default was used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpCount {
    pub counters: IncrementCounters,
    pub default_applied: bool,
}

/// Scans commit messages for `#major`, `#minor` and `#patch` triggers
pub struct BumpCounter {
    default: Increment,
}

impl BumpCounter {
    /// Create a counter that falls back to `default` when no trigger is found
    pub fn new(default: Increment) -> Self {
        BumpCounter { default }
    }

    /// Count every trigger occurrence across all messages, case-insensitively
    pub fn count<S: AsRef<str>>(&self, messages: &[S]) -> IncrementCounters {
        self.count_detailed(messages).counters
    }

    /// Same as [`count`](Self::count), also reporting whether the default kind was synthesized
    pub fn count_detailed<S: AsRef<str>>(&self, messages: &[S]) -> BumpCount {
        let mut counters = IncrementCounters::default();

        for message in messages {
            let lowered = message.as_ref().to_lowercase();
            counters.major += lowered.matches("#major").count();
            counters.minor += lowered.matches("#minor").count();
            counters.patch += lowered.matches("#patch").count();
        }

        let mut default_applied = false;
        if counters.is_zero() {
            default_applied = true;
            match self.default {
                Increment::Major => counters.major = 1,
                Increment::Minor => counters.minor = 1,
                Increment::Patch => counters.patch = 1,
                Increment::None => default_applied = false,
            }
        }

        log::debug!(
            "counted {} messages: major={} minor={} patch={} (default applied: {})",
            messages.len(),
            counters.major,
            counters.minor,
            counters.patch,
            default_applied
        );

        BumpCount {
            counters,
            default_applied,
        }
    }
}
