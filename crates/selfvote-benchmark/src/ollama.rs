use async_trait::async_trait;
use selfvote_core::{Result, SelfVoteError};
use serde::{Deserialize, Serialize};

use crate::completer::Completer;

/// Local backend talking to an Ollama server's `/api/chat`.
#[derive(Debug, Clone)]
pub struct OllamaCompleter {
    host: String,
    model: String,
    max_tokens: u32,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaCompleter {
    pub fn new(host: &str, model: &str, max_tokens: u32) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            model: model.to_string(),
            max_tokens,
            client: reqwest::Client::new(),
        }
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.host)
    }

    fn request(&self, prompt: &str, temperature: f32) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
            options: ChatOptions {
                temperature,
                num_predict: self.max_tokens,
            },
        }
    }
}

fn parse_chat_body(body: &str) -> Result<String> {
    let chat_resp: ChatResponse = serde_json::from_str(body).map_err(|e| {
        SelfVoteError::Http(format!(
            "Failed to parse response: {} - Body: {}",
            e,
            body.chars().take(500).collect::<String>()
        ))
    })?;

    chat_resp
        .message
        .map(|m| m.content)
        .ok_or_else(|| SelfVoteError::Completion("No response content".into()))
}

#[async_trait]
impl Completer for OllamaCompleter {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let resp = self
            .client
            .post(self.chat_url())
            .json(&self.request(prompt, temperature))
            .send()
            .await
            .map_err(|e| SelfVoteError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SelfVoteError::Completion(format!(
                "Chat failed: {} - {}",
                status, body
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SelfVoteError::Http(e.to_string()))?;

        parse_chat_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let completer = OllamaCompleter::new("http://localhost:11434/", "llama3.1:8b", 300);
        assert_eq!(completer.chat_url(), "http://localhost:11434/api/chat");

        let value = serde_json::to_value(completer.request("Solve: 1+1", 1.1)).unwrap();
        assert_eq!(value["model"], "llama3.1:8b");
        assert_eq!(value["stream"], false);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Solve: 1+1");
        assert_eq!(value["options"]["num_predict"], 300);
        assert!((value["options"]["temperature"].as_f64().unwrap() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_parse_chat_body() {
        let body = r#"{"model":"llama3.1:8b","message":{"role":"assistant","content":"So 60 dollars remain."},"done":true,"eval_count":12}"#;
        assert_eq!(parse_chat_body(body).unwrap(), "So 60 dollars remain.");
    }

    #[test]
    fn test_parse_chat_body_errors() {
        assert!(matches!(parse_chat_body("<html>"), Err(SelfVoteError::Http(_))));
        assert!(matches!(
            parse_chat_body(r#"{"done":true}"#),
            Err(SelfVoteError::Completion(_))
        ));
    }
}
