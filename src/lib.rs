pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod unique;
pub mod workflow;

pub use error::{Result, SemverTagError};
