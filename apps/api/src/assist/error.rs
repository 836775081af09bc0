use thiserror::Error;

use crate::assist::schema::FieldKind;
use crate::llm_client::LlmError;

/// A required request field is absent or blank. Raised before any LLM call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is required")]
pub struct ValidationError {
    pub field: &'static str,
}

/// The generation service could not produce a reply.
#[derive(Debug, Error)]
#[error("generation failed: {0}")]
pub struct GenerationError(#[source] pub LlmError);

/// A reply arrived but does not match the expected output shape.
#[derive(Debug, Error)]
pub enum SchemaMismatchError {
    #[error("reply is not valid JSON: {0}")]
    Malformed(String),

    #[error("reply is not a JSON object")]
    NotAnObject,

    #[error("reply is missing field '{0}'")]
    MissingField(&'static str),

    #[error("reply field '{field}' is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: FieldKind,
    },
}

/// A prompt template does not line up with its input schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template placeholder '{{{0}}}' is not a declared field")]
    UnknownPlaceholder(String),

    #[error("declared field '{0}' has no placeholder in the template")]
    UnusedField(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl PipelineError {
    /// Short label used when logging failures.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Validation(_) => "validation",
            PipelineError::Generation(_) => "generation",
            PipelineError::SchemaMismatch(_) => "schema_mismatch",
            PipelineError::Template(_) => "template",
        }
    }
}

impl From<LlmError> for PipelineError {
    /// An unparseable reply is a shape problem; everything else is a failed call.
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => SchemaMismatchError::Malformed(e.to_string()).into(),
            other => GenerationError(other).into(),
        }
    }
}
