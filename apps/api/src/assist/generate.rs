//! Generate an engaging 150–200 word project description.

use serde::{Deserialize, Serialize};

use crate::assist::pipeline::{UseCase, UseCaseConfig};
use crate::assist::prompts::GENERATE_DESCRIPTION_TEMPLATE;
use crate::assist::schema::{FieldKind, InputSchema, OutputField, OutputSchema};
use crate::content::models::ProjectRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDescriptionRequest {
    pub project_name: String,
    pub project_description: String,
    /// Comma-separated.
    pub skills_used: String,
    /// Comma-separated.
    pub achievements: String,
}

impl From<&ProjectRecord> for GenerateDescriptionRequest {
    fn from(project: &ProjectRecord) -> Self {
        Self {
            project_name: project.title.clone(),
            project_description: project.description.clone(),
            skills_used: project.skills.join(", "),
            achievements: project.achievements.join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDescriptionResult {
    pub generated_description: String,
}

pub struct GenerateDescription;

impl UseCase for GenerateDescription {
    type Output = GenerateDescriptionResult;

    const CONFIG: UseCaseConfig = UseCaseConfig {
        name: "generate_description",
        input: InputSchema {
            fields: &[
                "projectName",
                "projectDescription",
                "skillsUsed",
                "achievements",
            ],
        },
        output: OutputSchema {
            fields: &[OutputField {
                name: "generatedDescription",
                kind: FieldKind::Text,
                description: "The AI-generated project description.",
            }],
        },
        template: GENERATE_DESCRIPTION_TEMPLATE,
    };
}
