use crate::result::ProblemResult;

/// `true` only when an answer exists and sits strictly within `tolerance` of `expected`.
pub fn is_correct(answer: Option<f64>, expected: f64, tolerance: f64) -> bool {
    answer.is_some_and(|a| (a - expected).abs() < tolerance)
}

/// Most frequent value in `answers`; ties go to the value seen first.
pub fn majority_vote(answers: &[f64]) -> Option<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &answer in answers {
        match counts.iter_mut().find(|(value, _)| *value == answer) {
            Some((_, count)) => *count += 1,
            None => counts.push((answer, 1)),
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Running totals kept while problems are evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub total: u32,
    pub deterministic_correct: u32,
    pub majority_correct: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &ProblemResult) {
        self.total += 1;
        if result.deterministic_correct {
            self.deterministic_correct += 1;
        }
        if result.majority_correct {
            self.majority_correct += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_is_strict() {
        assert!(is_correct(Some(63.65), 63.6, 0.1));
        assert!(!is_correct(Some(63.5), 63.6, 0.1));
        assert!(is_correct(Some(108.0), 108.0, 0.1));
        assert!(!is_correct(None, 108.0, 0.1));
    }

    #[test]
    fn test_zero_is_a_real_answer() {
        assert!(is_correct(Some(0.0), 0.0, 0.1));
    }

    #[test]
    fn test_majority_picks_mode() {
        assert_eq!(majority_vote(&[14.0, 14.0, 15.0, 14.0, 20.0]), Some(14.0));
    }

    #[test]
    fn test_majority_empty() {
        let majority = majority_vote(&[]);
        assert_eq!(majority, None);
        assert!(!is_correct(majority, 14.0, 0.1));
    }

    #[test]
    fn test_majority_tie_keeps_first_seen() {
        assert_eq!(majority_vote(&[60.0, 40.0, 40.0, 60.0]), Some(60.0));
        assert_eq!(majority_vote(&[3.0, 1.0, 2.0]), Some(3.0));
    }

    #[test]
    fn test_majority_uses_exact_values() {
        // 3.43 and 3.4 are distinct votes even though both are near the answer.
        assert_eq!(majority_vote(&[3.4, 3.43, 3.43]), Some(3.43));
    }

    #[test]
    fn test_scoreboard_counts() {
        let mut board = Scoreboard::new();
        let base = ProblemResult {
            problem: "p".into(),
            correct_answer: 1.0,
            deterministic_answer: Some(1.0),
            deterministic_correct: true,
            majority_answer: Some(2.0),
            majority_correct: false,
            all_answers: vec![2.0],
        };
        board.record(&base);
        board.record(&ProblemResult {
            majority_correct: true,
            ..base.clone()
        });

        assert_eq!(
            board,
            Scoreboard {
                total: 2,
                deterministic_correct: 2,
                majority_correct: 1
            }
        );
    }
}
