//! Suggest an improved description plus SEO keywords.

use serde::{Deserialize, Serialize};

use crate::assist::pipeline::{UseCase, UseCaseConfig};
use crate::assist::prompts::SUGGEST_KEYWORDS_TEMPLATE;
use crate::assist::schema::{FieldKind, InputSchema, OutputField, OutputSchema};
use crate::content::models::ProjectRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestKeywordsRequest {
    pub project_name: String,
    pub project_description: String,
}

impl From<&ProjectRecord> for SuggestKeywordsRequest {
    fn from(project: &ProjectRecord) -> Self {
        Self {
            project_name: project.title.clone(),
            project_description: project.long_description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestKeywordsResult {
    pub keywords: Vec<String>,
    pub improved_description: String,
}

pub struct SuggestKeywords;

impl UseCase for SuggestKeywords {
    type Output = SuggestKeywordsResult;

    const CONFIG: UseCaseConfig = UseCaseConfig {
        name: "suggest_keywords",
        input: InputSchema {
            fields: &["projectName", "projectDescription"],
        },
        output: OutputSchema {
            fields: &[
                OutputField {
                    name: "keywords",
                    kind: FieldKind::TextList,
                    description: "An array of suggested keywords for the project description.",
                },
                OutputField {
                    name: "improvedDescription",
                    kind: FieldKind::Text,
                    description: "An improved version of the project description.",
                },
            ],
        },
        template: SUGGEST_KEYWORDS_TEMPLATE,
    };
}
