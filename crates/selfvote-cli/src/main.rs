use anyhow::Result;
use clap::Parser;
use selfvote_benchmark::{build_completer, EvaluationRunner, RunEvent};
use selfvote_core::config::OPENAI_API_KEY_VAR;
use selfvote_core::report::{format_percent, format_signed_percent};
use selfvote_core::{
    save_results, AccuracyReport, EvalConfig, Problem, ProblemResult, ProviderKind, PROBLEMS,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selfvote")]
#[command(about = "Compare a single deterministic answer against a majority vote of sampled answers", long_about = None)]
struct Cli {
    /// Model to query
    #[arg(short, long)]
    model: Option<String>,

    /// Completion backend (openai, ollama)
    #[arg(short, long)]
    provider: Option<ProviderKind>,

    /// Ollama host URL
    #[arg(long)]
    ollama_host: Option<String>,

    /// Sampled completions per problem
    #[arg(short, long)]
    samples: Option<u32>,

    /// Where to write per-problem results
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut EvalConfig) {
        if let Some(model) = self.model {
            config.provider.model = model;
        }
        if let Some(kind) = self.provider {
            config.provider.kind = kind;
        }
        if let Some(host) = self.ollama_host {
            config.provider.ollama_host = host;
        }
        if let Some(samples) = self.samples {
            config.sampling.samples = samples;
        }
        if let Some(output) = self.output {
            config.output.results_path = output;
        }
    }
}

fn mark(correct: bool) -> &'static str {
    if correct {
        "✓"
    } else {
        "✗"
    }
}

fn fmt_answer(answer: Option<f64>) -> String {
    answer.map_or_else(|| "None".to_string(), |a| a.to_string())
}

fn print_problem_header(current: usize, total: usize, problem: &Problem) {
    println!();
    println!("{:=<50}", "");
    println!("Problem {}/{}", current, total);
    println!();
    println!("Problem: {}", problem.text);
    println!("Correct: {}", problem.correct_answer);
}

fn print_problem_result(result: &ProblemResult) {
    println!(
        "Deterministic: {} ({})",
        fmt_answer(result.deterministic_answer),
        mark(result.deterministic_correct)
    );

    match result.majority_answer {
        Some(answer) => {
            println!("Majority vote: {} ({})", answer, mark(result.majority_correct));
            let all: Vec<String> = result.all_answers.iter().map(|a| a.to_string()).collect();
            println!("All answers: [{}]", all.join(", "));
        }
        None => println!("Majority vote: Failed to extract answers"),
    }
}

fn print_summary(report: &AccuracyReport) {
    println!();
    println!("{:=<50}", "");
    println!("RESULTS");
    println!("{:=<50}", "");
    println!(
        "Deterministic accuracy: {}/{} ({})",
        report.deterministic_correct,
        report.total,
        format_percent(report.deterministic_accuracy())
    );
    println!(
        "Majority vote accuracy: {}/{} ({})",
        report.majority_correct,
        report.total,
        format_percent(report.majority_accuracy())
    );
    println!("Improvement: {}", format_signed_percent(report.improvement()));
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = EvalConfig::from_env();
    Cli::parse().apply(&mut config);
    config.validate()?;

    let api_key = std::env::var(OPENAI_API_KEY_VAR)
        .ok()
        .filter(|k| !k.trim().is_empty());
    if config.provider.kind.requires_api_key() && api_key.is_none() {
        println!("Set {} environment variable", OPENAI_API_KEY_VAR);
        return Ok(());
    }

    tracing::info!(
        "Evaluating {} problems with {} ({})",
        PROBLEMS.len(),
        config.provider.model,
        config.provider.kind.label()
    );

    let completer = build_completer(&config, api_key.as_deref())?;
    let runner = EvaluationRunner::new(completer, config.sampling.clone());

    let (results, board) = runner
        .run(&PROBLEMS, |event| match event {
            RunEvent::Problem {
                current,
                total,
                problem,
            } => print_problem_header(current, total, problem),
            RunEvent::ProblemComplete { result, .. } => print_problem_result(result),
        })
        .await?;

    print_summary(&AccuracyReport::from(board));

    let results_path = &config.output.results_path;
    save_results(results_path, &results)?;
    println!();
    println!("Results saved to {}", results_path.display());

    Ok(())
}
