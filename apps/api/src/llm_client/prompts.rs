// Shared prompt constants and prompt-building utilities.
// Each assist use case defines its own template in assist/prompts.rs.
// This file contains cross-cutting prompt fragments.

use crate::assist::schema::OutputSchema;

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Builds the system prompt for a structured reply: JSON-only rules plus the
/// reply schema the model must satisfy.
pub fn structured_system(schema: &OutputSchema) -> String {
    format!("{JSON_ONLY_SYSTEM}\n\n{}", schema.describe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::schema::{FieldKind, OutputField};

    #[test]
    fn test_structured_system_embeds_schema() {
        let schema = OutputSchema {
            fields: &[OutputField {
                name: "generatedDescription",
                kind: FieldKind::Text,
                description: "The AI-generated project description.",
            }],
        };
        let system = structured_system(&schema);
        assert!(system.starts_with(JSON_ONLY_SYSTEM));
        assert!(system.contains("\"generatedDescription\" (string)"));
    }
}
