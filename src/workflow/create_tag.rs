use super::{insert, Outputs};
use crate::config::Config;
use crate::domain::TagSet;
use crate::error::{Result, SemverTagError};
use crate::unique::{TagUniquifier, TokenSource};

/// Inputs for choosing the name of a tag about to be created
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTagArgs {
    /// Tag name the caller wants
    pub requested: String,

    /// Every tag name already in the repository
    pub existing: Vec<String>,

    /// Regenerate a colliding name instead of failing
    pub regenerate: bool,
}

impl CreateTagArgs {
    pub fn from_config(requested: &str, existing: Vec<String>, config: &Config) -> Self {
        CreateTagArgs {
            requested: requested.to_string(),
            existing,
            regenerate: config.unique.regenerate,
        }
    }
}

/// Result of the create-tag step; creating the tag itself is up to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTagOutcome {
    pub requested: String,
    pub created: String,
    pub regenerated: bool,
    regenerate: bool,
}

impl CreateTagOutcome {
    pub fn outputs(&self) -> Outputs {
        let mut outputs = Outputs::new();
        insert(&mut outputs, "requested_tag", &self.requested);
        insert(&mut outputs, "created_tag", &self.created);
        insert(&mut outputs, "regenerated", self.regenerated);
        insert(&mut outputs, "regen", self.regenerate);
        outputs
    }
}

/// Decide the final name for a new tag
///
/// # Returns
/// * `Ok(CreateTagOutcome)` - The name to create
/// * `Err(TagExists)` - If the name is taken and regeneration is off
/// * `Err(UniqueNameExhausted)` - If no free name was found
pub fn run_create_tag<T: TokenSource>(
    args: &CreateTagArgs,
    uniquifier: &mut TagUniquifier<T>,
) -> Result<CreateTagOutcome> {
    let existing = TagSet::new(args.existing.iter().map(String::as_str));

    if existing.contains(&args.requested) && !args.regenerate {
        return Err(SemverTagError::TagExists(args.requested.clone()));
    }

    let unique = uniquifier.unique(&args.requested, &existing)?;
    log::info!(
        "tag to create: '{}' (requested '{}', regenerated: {})",
        unique.name,
        args.requested,
        unique.regenerated
    );

    Ok(CreateTagOutcome {
        requested: args.requested.clone(),
        created: unique.name,
        regenerated: unique.regenerated,
        regenerate: args.regenerate,
    })
}
