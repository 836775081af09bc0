//! Stub `GenerationClient` for tests: canned reply plus a call log.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::assist::schema::OutputSchema;
use crate::llm_client::{GenerationClient, LlmError};

enum Reply {
    Json(Value),
    Fail(u16),
    Malformed(&'static str),
}

pub struct StubClient {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubClient {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(value: Value) -> Self {
        Self::new(Reply::Json(value))
    }

    pub fn failing(status: u16) -> Self {
        Self::new(Reply::Fail(status))
    }

    pub fn malformed(text: &'static str) -> Self {
        Self::new(Reply::Malformed(text))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for StubClient {
    async fn generate(&self, prompt: &str, _schema: &OutputSchema) -> Result<Value, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Fail(status) => Err(LlmError::Api {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
            Reply::Malformed(text) => serde_json::from_str(text).map_err(LlmError::Parse),
        }
    }
}
