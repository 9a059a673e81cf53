pub mod config;
pub mod error;
pub mod extract;
pub mod problem;
pub mod report;
pub mod result;
pub mod results_file;
pub mod scoring;

pub use config::{EvalConfig, OutputConfig, ProviderConfig, ProviderKind, SamplingConfig};
pub use error::{Result, SelfVoteError};
pub use extract::extract_number;
pub use problem::{Problem, PROBLEMS};
pub use report::AccuracyReport;
pub use result::{Completion, ProblemResult};
pub use results_file::{load_results, save_results};
pub use scoring::{is_correct, majority_vote, Scoreboard};
