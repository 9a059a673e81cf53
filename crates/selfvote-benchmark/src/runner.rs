use selfvote_core::{
    is_correct, majority_vote, Problem, ProblemResult, Result, SamplingConfig, Scoreboard,
};

use crate::completer::{request_completion, Completer};

/// Progress reported by [`EvaluationRunner::run`].
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    /// Emitted before any request for the problem is sent.
    Problem {
        current: usize,
        total: usize,
        problem: &'a Problem,
    },
    ProblemComplete {
        current: usize,
        total: usize,
        result: &'a ProblemResult,
    },
}

/// Runs both answering methods over a problem set, one request at a time.
pub struct EvaluationRunner<C> {
    completer: C,
    sampling: SamplingConfig,
}

impl<C: Completer> EvaluationRunner<C> {
    pub fn new(completer: C, sampling: SamplingConfig) -> Self {
        Self {
            completer,
            sampling,
        }
    }

    pub async fn evaluate_problem(&self, problem: &Problem) -> Result<ProblemResult> {
        let s = &self.sampling;

        let deterministic =
            request_completion(&self.completer, problem.text, s.deterministic_temperature).await?;
        let deterministic_correct =
            is_correct(deterministic.answer, problem.correct_answer, s.tolerance);

        let mut all_answers = Vec::with_capacity(s.samples as usize);
        for i in 0..s.samples {
            tracing::debug!("Sample {}/{}", i + 1, s.samples);
            let sampled =
                request_completion(&self.completer, problem.text, s.sampling_temperature).await?;
            if let Some(answer) = sampled.answer {
                all_answers.push(answer);
            }
        }

        let majority_answer = majority_vote(&all_answers);
        let majority_correct = is_correct(majority_answer, problem.correct_answer, s.tolerance);

        Ok(ProblemResult {
            problem: problem.text.to_string(),
            correct_answer: problem.correct_answer,
            deterministic_answer: deterministic.answer,
            deterministic_correct,
            majority_answer,
            majority_correct,
            all_answers,
        })
    }

    /// Evaluates `problems` in order, reporting each step to `on_event`.
    ///
    /// The first request error aborts the run; nothing is salvaged.
    pub async fn run<F>(&self, problems: &[Problem], mut on_event: F) -> Result<(Vec<ProblemResult>, Scoreboard)>
    where
        F: FnMut(RunEvent<'_>),
    {
        let total = problems.len();
        let mut results = Vec::with_capacity(total);
        let mut board = Scoreboard::new();

        for (idx, problem) in problems.iter().enumerate() {
            tracing::info!("Problem {}/{}", idx + 1, total);
            on_event(RunEvent::Problem {
                current: idx + 1,
                total,
                problem,
            });

            let result = self.evaluate_problem(problem).await?;
            board.record(&result);
            on_event(RunEvent::ProblemComplete {
                current: idx + 1,
                total,
                result: &result,
            });
            results.push(result);
        }

        Ok((results, board))
    }
}
