use ds_fixture::Step;

use crate::error::Result;
use crate::rank::rank_by;
use crate::trace::{RankedToken, StepTrace};
use crate::validate::validate_steps;

/// Greedy decoding: at every step, take the single highest-probability
/// token.
///
/// The run is a finite lazy iterator, one [`StepTrace`] per step. It is
/// fully deterministic: ranking is stable and the top rank is always
/// chosen, so the same fixture yields the same trace on every run.
pub struct GreedyRun {
    steps: Vec<Step>,
    next_step: usize,
}

impl GreedyRun {
    /// Validate the fixture and set up a run over it.
    pub fn new(steps: &[Step]) -> Result<Self> {
        validate_steps(steps)?;
        Ok(GreedyRun {
            steps: steps.to_vec(),
            next_step: 0,
        })
    }
}

impl Iterator for GreedyRun {
    type Item = StepTrace;

    fn next(&mut self) -> Option<StepTrace> {
        let step = self.steps.get(self.next_step)?;
        let index = self.next_step;
        self.next_step += 1;

        // Steps were validated non-empty at construction.
        let ranked = rank_by(&step.tokens, |t| t.probability).ok()?;
        let chosen = ranked[0].clone();

        let ranked = ranked
            .iter()
            .enumerate()
            .map(|(rank, t)| RankedToken {
                word: t.word.clone(),
                probability: t.probability,
                kept: rank == 0,
                cumulative: None,
            })
            .collect();

        Some(StepTrace {
            step_index: index,
            context: step.context.clone(),
            ranked,
            score: chosen.probability,
            chosen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_fixture::demo::sample_steps;
    use ds_fixture::Token;

    #[test]
    fn test_selects_maximum_probability_token() {
        let steps = vec![Step::new(
            "The cat sat on the",
            vec![
                Token::new("mat", 0.45),
                Token::new("floor", 0.25),
                Token::new("chair", 0.15),
                Token::new("table", 0.08),
                Token::new("bed", 0.04),
                Token::new("couch", 0.02),
                Token::new("rug", 0.01),
            ],
        )];
        let trace: Vec<StepTrace> = GreedyRun::new(&steps).unwrap().collect();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].chosen.word, "mat");
        assert_eq!(trace[0].kept().count(), 1);
        assert_eq!(trace[0].ranked.len(), 7);
    }

    #[test]
    fn test_demo_fixture_sentence() {
        let words: Vec<String> = GreedyRun::new(&sample_steps())
            .unwrap()
            .map(|t| t.chosen.word)
            .collect();
        assert_eq!(words, ["mat", "watched", "birds", "peacefully"]);
    }

    #[test]
    fn test_repeated_runs_identical() {
        let steps = sample_steps();
        let first: Vec<StepTrace> = GreedyRun::new(&steps).unwrap().collect();
        let second: Vec<StepTrace> = GreedyRun::new(&steps).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_fixture_rejected() {
        assert!(GreedyRun::new(&[]).is_err());
    }

    #[test]
    fn test_trace_indices_ordered() {
        let indices: Vec<usize> = GreedyRun::new(&sample_steps())
            .unwrap()
            .map(|t| t.step_index)
            .collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }
}
