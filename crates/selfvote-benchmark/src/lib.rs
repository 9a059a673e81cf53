pub mod chart;
pub mod completer;
pub mod ollama;
pub mod openai;
pub mod runner;

pub use chart::{generate_report, render_accuracy_chart, ChartOutcome, CHART_TITLE, METHOD_LABELS};
pub use completer::{build_completer, request_completion, Completer};
pub use ollama::OllamaCompleter;
pub use openai::OpenAiCompleter;
pub use runner::{EvaluationRunner, RunEvent};
