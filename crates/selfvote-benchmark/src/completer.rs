use async_trait::async_trait;
use selfvote_core::problem::build_prompt;
use selfvote_core::{Completion, EvalConfig, ProviderKind, Result, SelfVoteError};

use crate::ollama::OllamaCompleter;
use crate::openai::OpenAiCompleter;

/// A text-completion service: prompt and temperature in, response text out.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String>;
}

#[async_trait]
impl<C: Completer + ?Sized> Completer for Box<C> {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        (**self).complete(prompt, temperature).await
    }
}

/// Asks `completer` to solve `problem` and extracts its numeric answer.
pub async fn request_completion<C: Completer + ?Sized>(
    completer: &C,
    problem: &str,
    temperature: f32,
) -> Result<Completion> {
    let prompt = build_prompt(problem);
    let text = completer.complete(&prompt, temperature).await?;
    let completion = Completion::from_text(text);
    tracing::debug!(
        "temperature={} answer={:?} chars={}",
        temperature,
        completion.answer,
        completion.raw_text.len()
    );
    Ok(completion)
}

/// Builds the backend selected in `config`.
///
/// `api_key` is required for OpenAI and ignored for Ollama.
pub fn build_completer(config: &EvalConfig, api_key: Option<&str>) -> Result<Box<dyn Completer>> {
    let provider = &config.provider;
    let max_tokens = config.sampling.max_tokens;

    match provider.kind {
        ProviderKind::OpenAi => {
            let key = api_key.ok_or_else(|| {
                SelfVoteError::Config("OpenAI provider needs an API key".into())
            })?;
            Ok(Box::new(OpenAiCompleter::new(
                key,
                provider.api_base.as_deref(),
                &provider.model,
                max_tokens,
            )))
        }
        ProviderKind::Ollama => Ok(Box::new(OllamaCompleter::new(
            &provider.ollama_host,
            &provider.model,
            max_tokens,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        reply: String,
        seen: Mutex<Vec<(String, f32)>>,
    }

    #[async_trait]
    impl Completer for Recording {
        async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
            self.seen.lock().unwrap().push((prompt.to_string(), temperature));
            Ok(self.reply.clone())
        }
    }

    struct Failing;

    #[async_trait]
    impl Completer for Failing {
        async fn complete(&self, _prompt: &str, _temperature: f32) -> Result<String> {
            Err(SelfVoteError::Completion("rate limited".into()))
        }
    }

    #[tokio::test]
    async fn test_request_builds_prompt_and_extracts() {
        let completer = Recording {
            reply: "35 / 5 = 7, 7 * 2 = 14 motorcycles".into(),
            seen: Mutex::new(Vec::new()),
        };

        let completion = request_completion(&completer, "Car to motorcycle ratio 5:2?", 1.1)
            .await
            .unwrap();

        assert_eq!(completion.answer, Some(14.0));
        let seen = completer.seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[(
                "Solve: Car to motorcycle ratio 5:2?\n\nLet's think step-by-step:".to_string(),
                1.1
            )]
        );
    }

    #[tokio::test]
    async fn test_request_propagates_errors() {
        let err = request_completion(&Failing, "anything", 0.0).await.unwrap_err();
        assert!(matches!(err, SelfVoteError::Completion(_)));
    }

    #[test]
    fn test_openai_requires_key() {
        let config = EvalConfig::default();
        assert!(matches!(
            build_completer(&config, None),
            Err(SelfVoteError::Config(_))
        ));
        assert!(build_completer(&config, Some("sk-test")).is_ok());
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let mut config = EvalConfig::default();
        config.provider.kind = ProviderKind::Ollama;
        assert!(build_completer(&config, None).is_ok());
    }
}
