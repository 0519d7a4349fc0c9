//! Skill-gap advisor library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::{AdvisorError, Result};
pub use input::{CatalogLoader, InMemoryCatalog};
pub use processing::{RecommendationEngine, RecommendationResult, SkillSet, UserQuery};
