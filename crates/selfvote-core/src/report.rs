use serde::{Deserialize, Serialize};

use crate::result::ProblemResult;
use crate::scoring::Scoreboard;

/// Correct counts for both methods over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub total: u32,
    pub deterministic_correct: u32,
    pub majority_correct: u32,
}

impl AccuracyReport {
    pub fn from_results(results: &[ProblemResult]) -> Self {
        let count = |f: fn(&ProblemResult) -> bool| results.iter().filter(|r| f(r)).count() as u32;
        Self {
            total: results.len() as u32,
            deterministic_correct: count(|r| r.deterministic_correct),
            majority_correct: count(|r| r.majority_correct),
        }
    }

    pub fn deterministic_accuracy(&self) -> f64 {
        self.ratio(self.deterministic_correct as f64)
    }

    pub fn majority_accuracy(&self) -> f64 {
        self.ratio(self.majority_correct as f64)
    }

    /// Majority accuracy minus deterministic accuracy, as a fraction.
    pub fn improvement(&self) -> f64 {
        self.ratio(self.majority_correct as f64 - self.deterministic_correct as f64)
    }

    // Empty runs report 0 rather than NaN.
    fn ratio(&self, n: f64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        n / self.total as f64
    }

    /// The accuracy block printed after a chart is rendered.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            "Accuracy Results:".to_string(),
            format!(
                "Deterministic: {}/{} ({})",
                self.deterministic_correct,
                self.total,
                format_percent(self.deterministic_accuracy())
            ),
            format!(
                "Majority Vote: {}/{} ({})",
                self.majority_correct,
                self.total,
                format_percent(self.majority_accuracy())
            ),
            format!("Improvement: {}", format_signed_percent(self.improvement())),
        ]
    }
}

impl From<Scoreboard> for AccuracyReport {
    fn from(board: Scoreboard) -> Self {
        Self {
            total: board.total,
            deterministic_correct: board.deterministic_correct,
            majority_correct: board.majority_correct,
        }
    }
}

/// `0.7` -> `"70.0%"`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// `0.2` -> `"+20.0%"`
pub fn format_signed_percent(fraction: f64) -> String {
    format!("{:+.1}%", fraction * 100.0)
}
