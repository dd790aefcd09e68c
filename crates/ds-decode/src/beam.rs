use ds_fixture::BeamFixture;

use crate::error::{DecodeError, Result};
use crate::rank::rank_by;
use crate::trace::{BeamTrace, Candidate};

/// Beam search over a [`BeamFixture`], scored in the log domain.
///
/// Step 0 ranks the initial distribution and keeps the top `width` tokens
/// as one-token candidates. Every later step expands each retained beam
/// with the expansion table keyed by its slot, adds the child
/// log-probability to the parent's cumulative score, ranks all candidates
/// across beams, and prunes back to `width`. Ranking is stable, so
/// first-generated candidates win score ties.
///
/// The run yields one [`BeamTrace`] per step. A step that generates zero
/// candidates yields [`DecodeError::EmptyCandidateSet`] and ends the run;
/// a step that generates fewer than `width` simply shrinks the beam set.
pub struct BeamRun {
    fixture: BeamFixture,
    width: usize,
    beams: Vec<Candidate>,
    next_step: usize,
    done: bool,
}

impl BeamRun {
    pub fn new(fixture: &BeamFixture, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(DecodeError::InvalidParameter {
                name: "width",
                value: width as f64,
            });
        }
        if fixture.initial.is_empty() {
            return Err(DecodeError::InvalidInput(
                "beam fixture has no initial distribution".into(),
            ));
        }
        Ok(BeamRun {
            fixture: fixture.clone(),
            width,
            beams: Vec::new(),
            next_step: 0,
            done: false,
        })
    }

    /// The beam set after the most recent step, best-first.
    pub fn beams(&self) -> &[Candidate] {
        &self.beams
    }

    fn initial_step(&mut self) -> Result<BeamTrace> {
        let ranked = rank_by(&self.fixture.initial, |t| t.log_prob)?;
        let candidates: Vec<Candidate> = ranked
            .iter()
            .enumerate()
            .map(|(slot, token)| Candidate {
                words: vec![token.word.clone()],
                origins: vec![slot],
                cumulative_score: token.log_prob,
                origin_beam: slot,
                last_log_prob: token.log_prob,
            })
            .collect();

        let retained = candidates.len().min(self.width);
        self.beams = candidates[..retained].to_vec();
        Ok(BeamTrace {
            step_index: 0,
            candidates,
            retained,
        })
    }

    fn expand_step(&mut self, step_index: usize) -> Result<BeamTrace> {
        let table = &self.fixture.expansions[step_index - 1];

        let mut candidates = Vec::new();
        for (slot, beam) in self.beams.iter().enumerate() {
            // A beam slot with no expansion entry contributes nothing;
            // only a step with zero candidates overall is fatal.
            let Some(tokens) = table.get(slot) else {
                continue;
            };
            for token in tokens {
                let mut words = beam.words.clone();
                words.push(token.word.clone());
                let mut origins = beam.origins.clone();
                origins.push(slot);
                candidates.push(Candidate {
                    words,
                    origins,
                    cumulative_score: beam.cumulative_score + token.log_prob,
                    origin_beam: slot,
                    last_log_prob: token.log_prob,
                });
            }
        }

        if candidates.is_empty() {
            return Err(DecodeError::EmptyCandidateSet { step: step_index });
        }

        let ranked = rank_by(&candidates, |c| c.cumulative_score)?;
        let retained = ranked.len().min(self.width);
        self.beams = ranked[..retained].to_vec();
        Ok(BeamTrace {
            step_index,
            candidates: ranked,
            retained,
        })
    }
}

impl Iterator for BeamRun {
    type Item = Result<BeamTrace>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.next_step >= self.fixture.num_steps() {
            return None;
        }
        let index = self.next_step;
        self.next_step += 1;

        let result = if index == 0 {
            self.initial_step()
        } else {
            self.expand_step(index)
        };
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}
