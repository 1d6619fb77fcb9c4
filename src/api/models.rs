use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChatOptions {
    pub temperature: f32,
}

/// Body of a POST to Ollama's `/api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub format: String,
    pub stream: bool,
    pub options: ChatOptions,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<Role>,
    pub content: String,
}

/// Non-streaming reply from `/api/chat`. Only `message.content` is required,
/// the rest is bookkeeping Ollama attaches when it has it.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub message: ResponseMessage,
    #[serde(default)]
    pub done: Option<bool>,
    /// Nanoseconds.
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
}

/// Shape the model is asked to reply with. Only used to check a reply; what
/// gets printed is the reply itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityInfo {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

impl CityInfo {
    pub fn from_reply(reply: &Value) -> serde_json::Result<Self> {
        Self::deserialize(reply)
    }
}
