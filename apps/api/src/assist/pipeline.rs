//! The generic assist pipeline: validate input → render prompt → call the model →
//! validate output. Each use case is one `UseCase` impl; nothing is shared between runs.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::assist::error::{PipelineError, SchemaMismatchError, TemplateError};
use crate::assist::schema::{validate_input, validate_output, InputSchema, OutputSchema};
use crate::assist::template;
use crate::llm_client::GenerationClient;

/// Everything that distinguishes one use case from another.
#[derive(Debug, Clone, Copy)]
pub struct UseCaseConfig {
    pub name: &'static str,
    pub input: InputSchema,
    pub output: OutputSchema,
    pub template: &'static str,
}

impl UseCaseConfig {
    /// Confirms the template names exactly the declared input fields.
    pub fn check(&self) -> Result<(), TemplateError> {
        template::check(self.template, &self.input)
    }
}

pub trait UseCase: Send + Sync + 'static {
    type Output: Serialize + DeserializeOwned + Send + 'static;

    const CONFIG: UseCaseConfig;
}

/// Runs one use case end to end on a raw request body. The client is only reached
/// once every declared field is a non-blank string, and callers only ever see a
/// fully validated output.
pub async fn run<U: UseCase>(
    client: &dyn GenerationClient,
    candidate: &Value,
) -> Result<U::Output, PipelineError> {
    let config = U::CONFIG;

    let fields = validate_input(&config.input, candidate)?;

    let prompt = template::render(config.template, &fields)?;
    debug!(
        "{}: rendered prompt ({} bytes), calling model",
        config.name,
        prompt.len()
    );

    let reply = client.generate(&prompt, &config.output).await?;
    let checked = validate_output(&config.output, &reply)?;

    serde_json::from_value(checked)
        .map_err(|e| SchemaMismatchError::Malformed(e.to_string()).into())
}
