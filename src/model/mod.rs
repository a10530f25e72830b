use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};

use crate::assistant::{AnswerService, AssistantError};
use crate::catalog;
use crate::config::Settings;
use crate::web::models::{ChatMessage, Role};

// Answers widget questions through an OpenAI-compatible chat completions server
pub struct DealershipModel {
    server_url: String,
    client: Client,
    temperature: f32,
    top_p: f32,
    max_tokens: usize,
    system_prompt: String,
}

impl DealershipModel {
    pub fn new(settings: &Settings) -> Result<Self> {
        info!("Using assistant model server at: {}", settings.server_url);

        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            server_url: settings.server_url.trim_end_matches('/').to_string(),
            client,
            temperature: settings.temperature,
            top_p: settings.top_p,
            max_tokens: settings.max_tokens,
            system_prompt: system_prompt(),
        })
    }

    fn payload(&self, query: &str) -> Value {
        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: self.system_prompt.clone(),
            },
            ChatMessage {
                role: Role::User,
                content: query.to_string(),
            },
        ];

        json!({
            "model": "local-model", // arbitrary for a single-model server
            "messages": messages,
            "temperature": self.temperature,
            "top_p": self.top_p,
            "max_tokens": self.max_tokens
        })
    }
}

#[async_trait]
impl AnswerService for DealershipModel {
    async fn ask(&self, query: &str) -> Result<String, AssistantError> {
        info!("Generating answer with max_tokens: {}", self.max_tokens);
        debug!("Query: {}", query);

        let url = format!("{}/v1/chat/completions", self.server_url);
        let payload = self.payload(query);
        debug!("Payload: {}", payload);

        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| AssistantError::Malformed(e.to_string()))?;
        debug!("Response JSON: {}", response_json);

        let content = extract_answer(&response_json)?;
        info!("Answer length: {} characters", content.len());
        Ok(content)
    }
}

fn system_prompt() -> String {
    format!(
        "You are the friendly assistant on the Sai Motors website. Answer questions about \
         our car models, services, and policies briefly and accurately, using only the facts \
         below. If you do not know, suggest contacting the showroom.\n\n{}",
        catalog::knowledge_base()
    )
}

fn extract_answer(response_json: &Value) -> Result<String, AssistantError> {
    response_json
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(str::to_string)
        .ok_or_else(|| AssistantError::Malformed("missing choices[0].message.content".to_string()))
}

// Shared handle to the answering model
pub struct ModelManager {
    pub model: Arc<dyn AnswerService>,
}

impl ModelManager {
    pub fn new(settings: &Settings) -> Result<Self> {
        let model = DealershipModel::new(settings)?;
        Ok(Self::from_service(Arc::new(model)))
    }

    pub fn from_service(model: Arc<dyn AnswerService>) -> Self {
        Self { model }
    }
}
