use anyhow::Result;
use clap::Parser;
use selfvote_benchmark::{generate_report, ChartOutcome};
use selfvote_core::EvalConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selfvote-chart")]
#[command(about = "Render the accuracy chart from a selfvote results file", long_about = None)]
struct Cli {
    /// Results file written by selfvote
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Chart image path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let defaults = EvalConfig::default().output;
    let results_path = cli.input.unwrap_or(defaults.results_path);
    let chart_path = cli.output.unwrap_or(defaults.chart_path);

    let report = match generate_report(&results_path, &chart_path)? {
        ChartOutcome::MissingResults => {
            println!("Run selfvote first to generate results");
            return Ok(());
        }
        ChartOutcome::Rendered(report) => report,
    };

    println!("Accuracy chart saved as {}", chart_path.display());
    println!();
    for line in report.summary_lines() {
        println!("{}", line);
    }

    Ok(())
}
