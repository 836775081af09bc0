//! Optimize the tone of a description, extract keywords, and compare tones.
//!
//! Unlike `suggest`, `keywords` here is a single free-text string.

use serde::{Deserialize, Serialize};

use crate::assist::pipeline::{UseCase, UseCaseConfig};
use crate::assist::prompts::OPTIMIZE_TONE_TEMPLATE;
use crate::assist::schema::{FieldKind, InputSchema, OutputField, OutputSchema};
use crate::content::models::ProjectRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeToneRequest {
    pub description: String,
}

impl From<&ProjectRecord> for OptimizeToneRequest {
    fn from(project: &ProjectRecord) -> Self {
        Self {
            description: project.long_description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeToneResult {
    pub optimized_description: String,
    pub keywords: String,
    pub tone_analysis: String,
}

pub struct OptimizeTone;

impl UseCase for OptimizeTone {
    type Output = OptimizeToneResult;

    const CONFIG: UseCaseConfig = UseCaseConfig {
        name: "optimize_tone",
        input: InputSchema {
            fields: &["description"],
        },
        output: OutputSchema {
            fields: &[
                OutputField {
                    name: "optimizedDescription",
                    kind: FieldKind::Text,
                    description: "The AI-optimized project description.",
                },
                OutputField {
                    name: "keywords",
                    kind: FieldKind::Text,
                    description: "Relevant keywords extracted from the description.",
                },
                OutputField {
                    name: "toneAnalysis",
                    kind: FieldKind::Text,
                    description: "An analysis of the original and optimized tone.",
                },
            ],
        },
        template: OPTIMIZE_TONE_TEMPLATE,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::error::PipelineError;
    use crate::assist::pipeline::run;
    use crate::assist::testing::StubClient;
    use serde_json::json;

    fn dashboard() -> OptimizeToneRequest {
        OptimizeToneRequest {
            description: "Built a dashboard".to_string(),
        }
    }

    #[tokio::test]
    async fn test_all_three_fields_returned_intact_and_in_order() {
        let client = StubClient::replying(json!({
            "optimizedDescription": "Designed and shipped an interactive analytics dashboard.",
            "keywords": "dashboards",
            "toneAnalysis": "Original is terse; optimized is confident and specific."
        }));

        let result = run::<OptimizeTone>(&client, &json!(dashboard())).await.unwrap();

        assert_eq!(
            result,
            OptimizeToneResult {
                optimized_description: "Designed and shipped an interactive analytics dashboard."
                    .to_string(),
                keywords: "dashboards".to_string(),
                tone_analysis: "Original is terse; optimized is confident and specific."
                    .to_string(),
            }
        );

        let serialized = serde_json::to_string(&result).unwrap();
        let optimized = serialized.find("optimizedDescription").unwrap();
        let keywords = serialized.find("\"keywords\"").unwrap();
        let tone = serialized.find("toneAnalysis").unwrap();
        assert!(optimized < keywords && keywords < tone);
    }

    #[tokio::test]
    async fn test_keywords_array_is_schema_mismatch() {
        let client = StubClient::replying(json!({
            "optimizedDescription": "x",
            "keywords": ["dashboards"],
            "toneAnalysis": "y"
        }));
        let err = run::<OptimizeTone>(&client, &json!(dashboard()))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn test_service_failure_yields_generation_error() {
        let client = StubClient::failing(500);
        let err = run::<OptimizeTone>(&client, &json!(dashboard()))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Generation(_)));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_prompt_is_deterministic() {
        let client = StubClient::replying(json!({
            "optimizedDescription": "x",
            "keywords": "k",
            "toneAnalysis": "y"
        }));
        for _ in 0..3 {
            run::<OptimizeTone>(&client, &json!(dashboard())).await.unwrap();
        }
        let prompts = client.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts.iter().all(|p| p == &prompts[0]));
        assert!(prompts[0].contains("Project Description: Built a dashboard"));
    }

    #[test]
    fn test_config_template_matches_schema() {
        assert!(OptimizeTone::CONFIG.check().is_ok());
    }
}
