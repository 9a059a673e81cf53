use crate::{Result, SelfVoteError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const OLLAMA_HOST_VAR: &str = "OLLAMA_HOST";
pub const MODEL_VAR: &str = "SELFVOTE_MODEL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Stochastic completions requested per problem.
    pub samples: u32,
    pub deterministic_temperature: f32,
    pub sampling_temperature: f32,
    pub max_tokens: u32,
    /// Answers strictly closer than this to the expected value count as correct.
    pub tolerance: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples: 10,
            deterministic_temperature: 0.0,
            sampling_temperature: 1.1,
            max_tokens: 300,
            tolerance: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Ollama,
}

impl ProviderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Ollama => "ollama",
        }
    }

    /// Whether the provider refuses to run without `OPENAI_API_KEY`.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, ProviderKind::OpenAi)
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(format!("unknown provider '{}', expected openai or ollama", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub model: String,
    pub ollama_host: String,
    #[serde(default)]
    pub api_base: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::OpenAi,
            model: "gpt-3.5-turbo".to_string(),
            ollama_host: "http://localhost:11434".to_string(),
            api_base: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub results_path: PathBuf,
    pub chart_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from("problems.json"),
            chart_path: PathBuf::from("accuracy.png"),
        }
    }
}

impl EvalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the default config and applies overrides from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(model) = non_empty(MODEL_VAR) {
            config.provider.model = model;
        }
        if let Some(host) = non_empty(OLLAMA_HOST_VAR) {
            config.provider.ollama_host = host;
        }
        config.provider.api_base = non_empty(OPENAI_BASE_URL_VAR);

        config
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.sampling;
        if !(s.tolerance.is_finite() && s.tolerance > 0.0) {
            return Err(SelfVoteError::Config(format!(
                "tolerance must be a positive number, got {}",
                s.tolerance
            )));
        }
        for (name, t) in [
            ("deterministic_temperature", s.deterministic_temperature),
            ("sampling_temperature", s.sampling_temperature),
        ] {
            if !(0.0..=2.0).contains(&t) {
                return Err(SelfVoteError::Config(format!(
                    "{} must be within 0.0..=2.0, got {}",
                    name, t
                )));
            }
        }
        if s.max_tokens == 0 {
            return Err(SelfVoteError::Config("max_tokens must be at least 1".into()));
        }
        if self.provider.model.trim().is_empty() {
            return Err(SelfVoteError::Config("model must not be empty".into()));
        }
        Ok(())
    }
}
