use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;

use crate::api::models::{ChatOptions, ChatRequest, ChatResponse, CityInfo};
use crate::config::Config;
use crate::error::{QueryError, Result};
use crate::prompt;

/// Thin wrapper around an Ollama server's chat endpoint that asks for the
/// capital of a country.
pub struct CapitalLocator {
    chat_url: String,
    model: String,
    client: Client,
}

impl CapitalLocator {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(QueryError::Client)?;

        let chat_url = config.chat_url();
        info!("Using chat endpoint at: {}", chat_url);

        Ok(Self {
            chat_url,
            model: config.model.clone(),
            client,
        })
    }

    pub fn build_request(&self, country: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: prompt::build_messages(country),
            format: "json".to_string(),
            stream: false,
            options: ChatOptions { temperature: 0.0 },
        }
    }

    /// Returns the model's reply exactly as decoded: key order and number
    /// formatting are the model's own.
    pub async fn locate(&self, country: &str) -> Result<Value> {
        let payload = self.build_request(country);

        info!("Asking {} for the capital of {:?}", self.model, country);
        debug!("Payload: {:?}", payload);

        let response = self.client.post(&self.chat_url).json(&payload).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(QueryError::Status { status, body });
        }

        let envelope = decode_envelope(&body)?;
        debug!(
            "Envelope: model={:?} done={:?} total_duration={:?} eval_count={:?}",
            envelope.model, envelope.done, envelope.total_duration, envelope.eval_count
        );
        debug!("Content ({:?}): {}", envelope.message.role, envelope.message.content);

        let reply = decode_content(&envelope.message.content)?;
        match CityInfo::from_reply(&reply) {
            Ok(info) => debug!("Located {} at ({}, {})", info.city, info.lat, info.lon),
            Err(e) => warn!("Model reply does not follow the city schema: {}", e),
        }
        Ok(reply)
    }
}

/// First decode step: the HTTP body into the chat envelope.
pub fn decode_envelope(body: &str) -> Result<ChatResponse> {
    serde_json::from_str(body).map_err(QueryError::Envelope)
}

/// Second decode step: the model's message text into JSON.
pub fn decode_content(content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(QueryError::Content)
}
