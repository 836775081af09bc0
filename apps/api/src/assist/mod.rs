// AI-assisted text helpers for portfolio projects.
// Every use case runs the same pipeline (pipeline.rs) with its own schemas and template.
// All model calls go through llm_client::GenerationClient.

pub mod error;
pub mod generate;
pub mod handlers;
pub mod optimize;
pub mod pipeline;
pub mod prompts;
pub mod schema;
pub mod suggest;
pub mod template;

#[cfg(test)]
pub mod testing;

use crate::assist::error::TemplateError;
use crate::assist::pipeline::{UseCase, UseCaseConfig};

/// Configs for every registered use case.
pub const USE_CASES: [UseCaseConfig; 3] = [
    generate::GenerateDescription::CONFIG,
    suggest::SuggestKeywords::CONFIG,
    optimize::OptimizeTone::CONFIG,
];

/// Checks every template against its input schema. Run once at startup.
pub fn check_use_cases() -> Result<(), TemplateError> {
    USE_CASES.iter().try_for_each(UseCaseConfig::check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_use_cases_are_well_formed() {
        assert!(check_use_cases().is_ok());
    }

    #[test]
    fn test_use_case_names_are_unique() {
        let mut names: Vec<_> = USE_CASES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), USE_CASES.len());
    }
}
