use ds_fixture::Step;

use crate::error::{DecodeError, Result};
use crate::rank::rank_by;
use crate::sample::{SamplingMode, Selector};
use crate::trace::{RankedToken, StepTrace};
use crate::validate::validate_steps;

/// Nucleus (top-p) sampling.
///
/// Per step: rank by probability descending, accumulate in rank order, and
/// stop after the token that brings the cumulative sum to at least `p`
/// (the crossing token is included). Selection over the nucleus follows
/// the run's [`SamplingMode`].
pub struct NucleusRun {
    steps: Vec<Step>,
    p: f64,
    selector: Selector,
    next_step: usize,
}

impl NucleusRun {
    /// Requires `0 < p <= 1` and a valid step fixture.
    pub fn new(steps: &[Step], p: f64, mode: SamplingMode) -> Result<Self> {
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(DecodeError::InvalidParameter {
                name: "p",
                value: p,
            });
        }
        validate_steps(steps)?;
        Ok(NucleusRun {
            steps: steps.to_vec(),
            p,
            selector: Selector::new(mode),
            next_step: 0,
        })
    }

    fn emit(&mut self, index: usize, step: &Step) -> Result<StepTrace> {
        let ranked = rank_by(&step.tokens, |t| t.probability)?;

        // Walk the ranking until the cumulative sum crosses p.
        let mut cumulative = 0.0;
        let mut totals = Vec::new();
        for token in &ranked {
            cumulative += token.probability;
            totals.push(cumulative);
            if cumulative >= self.p {
                break;
            }
        }
        let nucleus_len = totals.len();

        let chosen = self.selector.choose(step, &ranked[..nucleus_len])?;
        let ranked = ranked
            .iter()
            .enumerate()
            .map(|(rank, t)| RankedToken {
                word: t.word.clone(),
                probability: t.probability,
                kept: rank < nucleus_len,
                cumulative: totals.get(rank).copied(),
            })
            .collect();

        Ok(StepTrace {
            step_index: index,
            context: step.context.clone(),
            ranked,
            score: chosen.probability,
            chosen,
        })
    }
}

impl Iterator for NucleusRun {
    type Item = Result<StepTrace>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.get(self.next_step)?.clone();
        let index = self.next_step;
        self.next_step += 1;
        Some(self.emit(index, &step))
    }
}
