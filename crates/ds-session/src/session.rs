use std::cell::Cell;

use ds_decode::{
    BeamRun, BeamTrace, GreedyRun, NucleusRun, Result, SamplingMode, StepTrace, TopKRun,
};
use ds_fixture::{BeamFixture, Step};

use crate::cancel::CancelToken;
use crate::state::{Algorithm, RunState, ALGORITHM_COUNT};

/// What became of a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run emitted every trace record.
    Completed,
    /// The cancel token fired; the run stopped at the next record boundary.
    Cancelled,
    /// The algorithm was already running; the request was a no-op.
    Ignored,
}

/// Drives decoding runs for one renderer instance.
///
/// The session owns an `Idle | Running` state per algorithm. Starting an
/// algorithm that is already running is ignored rather than queued, which
/// is what a double-clicked start button should do. The four algorithms
/// share nothing else; a failed or cancelled run leaves the others
/// untouched, and the state returns to `Idle` on every exit path.
///
/// Each `run_*` method pulls the corresponding lazy iterator and hands
/// every record to `sink` in step order, checking `cancel` between
/// records. Pacing (sleeps between paint phases) belongs to the sink.
#[derive(Debug, Default)]
pub struct Session {
    states: [Cell<RunState>; ALGORITHM_COUNT],
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current run state of one algorithm.
    pub fn state(&self, algorithm: Algorithm) -> RunState {
        self.states[algorithm.index()].get()
    }

    pub fn run_greedy<F>(
        &self,
        steps: &[Step],
        cancel: &CancelToken,
        mut sink: F,
    ) -> Result<RunOutcome>
    where
        F: FnMut(&StepTrace),
    {
        let Some(_guard) = self.try_begin(Algorithm::Greedy) else {
            return Ok(RunOutcome::Ignored);
        };
        let mut run = GreedyRun::new(steps)?;
        loop {
            if cancel.is_cancelled() {
                return Ok(RunOutcome::Cancelled);
            }
            match run.next() {
                Some(record) => sink(&record),
                None => return Ok(RunOutcome::Completed),
            }
        }
    }

    pub fn run_beam<F>(
        &self,
        fixture: &BeamFixture,
        width: usize,
        cancel: &CancelToken,
        mut sink: F,
    ) -> Result<RunOutcome>
    where
        F: FnMut(&BeamTrace),
    {
        let Some(_guard) = self.try_begin(Algorithm::Beam) else {
            return Ok(RunOutcome::Ignored);
        };
        let mut run = BeamRun::new(fixture, width)?;
        loop {
            if cancel.is_cancelled() {
                return Ok(RunOutcome::Cancelled);
            }
            match run.next() {
                Some(record) => sink(&record?),
                None => return Ok(RunOutcome::Completed),
            }
        }
    }

    pub fn run_nucleus<F>(
        &self,
        steps: &[Step],
        p: f64,
        mode: SamplingMode,
        cancel: &CancelToken,
        mut sink: F,
    ) -> Result<RunOutcome>
    where
        F: FnMut(&StepTrace),
    {
        let Some(_guard) = self.try_begin(Algorithm::Nucleus) else {
            return Ok(RunOutcome::Ignored);
        };
        let mut run = NucleusRun::new(steps, p, mode)?;
        loop {
            if cancel.is_cancelled() {
                return Ok(RunOutcome::Cancelled);
            }
            match run.next() {
                Some(record) => sink(&record?),
                None => return Ok(RunOutcome::Completed),
            }
        }
    }

    pub fn run_top_k<F>(
        &self,
        steps: &[Step],
        k: usize,
        mode: SamplingMode,
        cancel: &CancelToken,
        mut sink: F,
    ) -> Result<RunOutcome>
    where
        F: FnMut(&StepTrace),
    {
        let Some(_guard) = self.try_begin(Algorithm::TopK) else {
            return Ok(RunOutcome::Ignored);
        };
        let mut run = TopKRun::new(steps, k, mode)?;
        loop {
            if cancel.is_cancelled() {
                return Ok(RunOutcome::Cancelled);
            }
            match run.next() {
                Some(record) => sink(&record?),
                None => return Ok(RunOutcome::Completed),
            }
        }
    }

    /// Flip an algorithm to `Running`, or return `None` if it already is.
    /// The guard flips it back to `Idle` when dropped.
    fn try_begin(&self, algorithm: Algorithm) -> Option<StateGuard<'_>> {
        let cell = &self.states[algorithm.index()];
        if cell.get() == RunState::Running {
            return None;
        }
        cell.set(RunState::Running);
        Some(StateGuard(cell))
    }
}

struct StateGuard<'a>(&'a Cell<RunState>);

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.0.set(RunState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_fixture::demo::{beam_fixture, sample_steps};

    #[test]
    fn test_greedy_run_completes_and_emits_all_steps() {
        let session = Session::new();
        let mut words = Vec::new();
        let outcome = session
            .run_greedy(&sample_steps(), &CancelToken::new(), |record| {
                words.push(record.chosen.word.clone());
            })
            .unwrap();
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(words, ["mat", "watched", "birds", "peacefully"]);
        assert_eq!(session.state(Algorithm::Greedy), RunState::Idle);
    }

    #[test]
    fn test_second_start_while_running_is_ignored() {
        let session = Session::new();
        let steps = sample_steps();
        let cancel = CancelToken::new();
        let mut inner_outcomes = Vec::new();
        session
            .run_greedy(&steps, &cancel, |_| {
                assert_eq!(session.state(Algorithm::Greedy), RunState::Running);
                let inner = session.run_greedy(&steps, &cancel, |_| {}).unwrap();
                inner_outcomes.push(inner);
            })
            .unwrap();
        assert_eq!(inner_outcomes, vec![RunOutcome::Ignored; 4]);
    }

    #[test]
    fn test_algorithms_do_not_share_state() {
        let session = Session::new();
        let steps = sample_steps();
        let cancel = CancelToken::new();
        // Starting top-k from inside a running greedy works: the guards
        // are per algorithm.
        let mut top_k_ran = false;
        session
            .run_greedy(&steps, &cancel, |_| {
                if !top_k_ran {
                    top_k_ran = true;
                    let outcome = session
                        .run_top_k(&steps, 3, SamplingMode::Fixed, &cancel, |_| {})
                        .unwrap();
                    assert_eq!(outcome, RunOutcome::Completed);
                }
            })
            .unwrap();
        assert!(top_k_ran);
    }

    #[test]
    fn test_cancel_stops_between_records() {
        let session = Session::new();
        let cancel = CancelToken::new();
        let mut seen = 0;
        let outcome = session
            .run_greedy(&sample_steps(), &cancel, |_| {
                seen += 1;
                cancel.cancel();
            })
            .unwrap();
        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(seen, 1);
        assert_eq!(session.state(Algorithm::Greedy), RunState::Idle);
    }

    #[test]
    fn test_pre_cancelled_token_emits_nothing() {
        let session = Session::new();
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut seen = 0;
        let outcome = session
            .run_beam(&beam_fixture(), 3, &cancel, |_| seen += 1)
            .unwrap();
        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(seen, 0);
    }

    #[test]
    fn test_state_resets_after_error() {
        let session = Session::new();
        let cancel = CancelToken::new();
        // k = 0 is rejected before any record is emitted.
        let err = session.run_top_k(&sample_steps(), 0, SamplingMode::Fixed, &cancel, |_| {});
        assert!(err.is_err());
        assert_eq!(session.state(Algorithm::TopK), RunState::Idle);

        // The algorithm is usable again afterwards.
        let outcome = session
            .run_top_k(&sample_steps(), 3, SamplingMode::Fixed, &cancel, |_| {})
            .unwrap();
        assert_eq!(outcome, RunOutcome::Completed);
    }

    #[test]
    fn test_beam_run_reaches_final_beam_set() {
        let session = Session::new();
        let mut last_best = String::new();
        session
            .run_beam(&beam_fixture(), 3, &CancelToken::new(), |record| {
                last_best = record.beam_set()[0].text();
            })
            .unwrap();
        assert_eq!(last_best, "I am happy");
    }

    #[test]
    fn test_nucleus_run_through_session() {
        let session = Session::new();
        let mut words = Vec::new();
        let outcome = session
            .run_nucleus(
                &sample_steps(),
                0.9,
                SamplingMode::Fixed,
                &CancelToken::new(),
                |record| words.push(record.chosen.word.clone()),
            )
            .unwrap();
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(words, ["windowsill", "watched", "birds", "contentedly"]);
    }
}
