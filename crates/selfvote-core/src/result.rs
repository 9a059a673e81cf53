use serde::{Deserialize, Serialize};

use crate::extract::extract_number;

/// One model response and the answer read out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub answer: Option<f64>,
    pub raw_text: String,
}

impl Completion {
    pub fn from_text(raw_text: String) -> Self {
        Self {
            answer: extract_number(&raw_text),
            raw_text,
        }
    }
}

/// Outcome of both methods on one problem, as written to the results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemResult {
    pub problem: String,
    pub correct_answer: f64,
    pub deterministic_answer: Option<f64>,
    pub deterministic_correct: bool,
    pub majority_answer: Option<f64>,
    pub majority_correct: bool,
    pub all_answers: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completion_extracts_answer() {
        let c = Completion::from_text("15 * 0.8 = 12, so 12 * 9 = 108".to_string());
        assert_eq!(c.answer, Some(108.0));

        let c = Completion::from_text("no idea".to_string());
        assert_eq!(c.answer, None);
        assert_eq!(c.raw_text, "no idea");
    }

    #[test]
    fn test_field_names_and_nulls() {
        let result = ProblemResult {
            problem: "Pool filled by pipe A in 6 hours".to_string(),
            correct_answer: 3.43,
            deterministic_answer: None,
            deterministic_correct: false,
            majority_answer: Some(3.43),
            majority_correct: true,
            all_answers: vec![3.43, 3.4, 3.43],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "problem": "Pool filled by pipe A in 6 hours",
                "correct_answer": 3.43,
                "deterministic_answer": null,
                "deterministic_correct": false,
                "majority_answer": 3.43,
                "majority_correct": true,
                "all_answers": [3.43, 3.4, 3.43]
            })
        );
    }

    #[test]
    fn test_reads_integer_literals() {
        let raw = r#"{"problem": "p", "correct_answer": 1100, "deterministic_answer": 1100.0,
            "deterministic_correct": true, "majority_answer": null, "majority_correct": false,
            "all_answers": []}"#;
        let result: ProblemResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.correct_answer, 1100.0);
        assert_eq!(result.majority_answer, None);
    }
}
