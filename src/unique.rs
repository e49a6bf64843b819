//! Collision-free tag naming
//!
//! When a requested tag already exists the name is regenerated:
//!
//! - a release (`1.0.0`) has its patch bumped until free (`1.0.1`)
//! - a pre-release (`1.0.0-beta.0`) gets a random leading identifier (`1.0.0-k3x9a.0`)
//! - any other name gets a random suffix (`nightly.k3x9a`)
//!
//! Randomness comes from a [`TokenSource`] so tests can script the tokens.

use crate::config::UniqueConfig;
use crate::domain::{TagSet, Version};
use crate::error::{Result, SemverTagError};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::VecDeque;

/// Supplies the random tokens used to regenerate colliding names
pub trait TokenSource {
    /// Produce a lowercase alphanumeric token of `len` characters
    fn token(&mut self, len: usize) -> String;
}

/// Tokens drawn from the thread-local random generator
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokens;

impl TokenSource for RandomTokens {
    fn token(&mut self, len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect()
    }
}

/// Predetermined tokens for testing, handed out in order and then repeated
#[derive(Debug, Default, Clone)]
pub struct ScriptedTokens {
    tokens: VecDeque<String>,
}

impl ScriptedTokens {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedTokens {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl TokenSource for ScriptedTokens {
    fn token(&mut self, _len: usize) -> String {
        match self.tokens.pop_front() {
            Some(token) => {
                self.tokens.push_back(token.clone());
                token
            }
            None => String::new(),
        }
    }
}

/// Final name chosen for a requested tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueTag {
    pub name: String,
    pub regenerated: bool,
}

/// Resolves tag name collisions against an existing tag set
pub struct TagUniquifier<T: TokenSource> {
    tokens: T,
    max_attempts: usize,
    token_length: usize,
}

impl TagUniquifier<RandomTokens> {
    /// Uniquifier backed by random tokens
    pub fn random(max_attempts: usize, token_length: usize) -> Self {
        TagUniquifier::new(RandomTokens, max_attempts, token_length)
    }

    pub fn from_config(config: &UniqueConfig) -> Self {
        TagUniquifier::random(config.max_attempts, config.token_length)
    }
}

impl<T: TokenSource> TagUniquifier<T> {
    pub fn new(tokens: T, max_attempts: usize, token_length: usize) -> Self {
        TagUniquifier {
            tokens,
            max_attempts,
            token_length,
        }
    }

    /// Return `requested` if it is free, otherwise a regenerated free name
    ///
    /// # Returns
    /// * `Ok(UniqueTag)` - The free name and whether it differs from `requested`
    /// * `Err(UniqueNameExhausted)` - If no free name was found within the retry cap
    pub fn unique(&mut self, requested: &str, existing: &TagSet) -> Result<UniqueTag> {
        if !existing.contains(requested) {
            return Ok(UniqueTag {
                name: requested.to_string(),
                regenerated: false,
            });
        }

        log::debug!("tag '{}' already exists, regenerating", requested);
        let mut version = Version::parse(requested).ok();

        for attempt in 1..=self.max_attempts {
            let candidate = match version.as_mut() {
                Some(v) if v.is_prerelease() => {
                    let token = self.tokens.token(self.token_length);
                    if let Err(e) = v.set_prerelease_prefix(&token) {
                        log::debug!("attempt {}: token '{}' rejected: {}", attempt, token, e);
                        continue;
                    }
                    v.to_string()
                }
                Some(v) => {
                    v.bump_patch();
                    v.to_string()
                }
                None => format!("{}.{}", requested, self.tokens.token(self.token_length)),
            };

            if !existing.contains(&candidate) {
                log::info!(
                    "regenerated tag '{}' as '{}' after {} attempt(s)",
                    requested,
                    candidate,
                    attempt
                );
                return Ok(UniqueTag {
                    name: candidate,
                    regenerated: true,
                });
            }
        }

        Err(SemverTagError::UniqueNameExhausted {
            name: requested.to_string(),
            attempts: self.max_attempts,
        })
    }
}
