use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};
use async_trait::async_trait;
use selfvote_core::{Result, SelfVoteError};

use crate::completer::Completer;

fn completion_err(e: impl ToString) -> SelfVoteError {
    SelfVoteError::Completion(e.to_string())
}

fn first_choice_text(response: CreateChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| SelfVoteError::Completion("No response content".into()))
}

/// Chat-completions backend for the OpenAI API (or a compatible base URL).
pub struct OpenAiCompleter {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u32,
}

impl OpenAiCompleter {
    pub fn new(api_key: &str, api_base: Option<&str>, model: &str, max_tokens: u32) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }
        Self {
            client: Client::with_config(config),
            model: model.to_string(),
            max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Completer for OpenAiCompleter {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()
                    .map_err(completion_err)?,
            )])
            .temperature(temperature)
            .max_completion_tokens(self.max_tokens)
            .build()
            .map_err(completion_err)?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(completion_err)?;
        first_choice_text(response)
    }
}
