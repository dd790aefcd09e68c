use ds_fixture::Step;

use crate::error::{DecodeError, Result};
use crate::rank::rank_by;
use crate::sample::{SamplingMode, Selector};
use crate::trace::{RankedToken, StepTrace};
use crate::validate::validate_steps;

/// Top-k sampling.
///
/// Per step: rank by probability descending, keep the first
/// `min(k, len)` tokens, and select from the kept set per the run's
/// [`SamplingMode`].
pub struct TopKRun {
    steps: Vec<Step>,
    k: usize,
    selector: Selector,
    next_step: usize,
}

impl TopKRun {
    /// Requires `k >= 1` and a valid step fixture.
    pub fn new(steps: &[Step], k: usize, mode: SamplingMode) -> Result<Self> {
        if k == 0 {
            return Err(DecodeError::InvalidParameter {
                name: "k",
                value: k as f64,
            });
        }
        validate_steps(steps)?;
        Ok(TopKRun {
            steps: steps.to_vec(),
            k,
            selector: Selector::new(mode),
            next_step: 0,
        })
    }

    fn emit(&mut self, index: usize, step: &Step) -> Result<StepTrace> {
        let ranked = rank_by(&step.tokens, |t| t.probability)?;
        let kept_len = self.k.min(ranked.len());

        let chosen = self.selector.choose(step, &ranked[..kept_len])?;
        let ranked = ranked
            .iter()
            .enumerate()
            .map(|(rank, t)| RankedToken {
                word: t.word.clone(),
                probability: t.probability,
                kept: rank < kept_len,
                cumulative: None,
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

impl Iterator for TopKRun {
    type Item = Result<StepTrace>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.get(self.next_step)?.clone();
        let index = self.next_step;
        self.next_step += 1;
        Some(self.emit(index, &step))
    }
}
