use ds_fixture::{Step, Token};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DecodeError, Result};

/// How nucleus and top-k runs pick a token from the kept set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Draw from the renormalized kept set with a seeded RNG, so a run is
    /// reproducible for a given seed.
    Random { seed: u64 },
    /// Use the step's pre-selected token. The demo fixtures carry one per
    /// step so an animated run reads as a coherent sentence.
    Fixed,
}

/// Draw one token from a candidate subset, proportional to renormalized
/// probability.
///
/// The subset's raw probabilities are rescaled to sum to 1, a uniform `r`
/// is drawn in `[0, 1)`, and the subset is walked in its given order until
/// the running total reaches `r`. If floating-point rounding keeps the
/// total below 1.0 through the whole walk, the last member is returned.
pub fn weighted_choice<R: Rng + ?Sized>(rng: &mut R, tokens: &[Token]) -> Result<Token> {
    if tokens.is_empty() {
        return Err(DecodeError::InvalidInput(
            "cannot sample from an empty candidate set".into(),
        ));
    }

    let total: f64 = tokens.iter().map(|t| t.probability).sum();
    if total <= 0.0 {
        return Err(DecodeError::InvalidInput(
            "candidate probabilities sum to zero".into(),
        ));
    }

    let r: f64 = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for token in tokens {
        cumulative += token.probability / total;
        if cumulative >= r {
            return Ok(token.clone());
        }
    }

    // Rounding left the running total just under 1.0.
    Ok(tokens[tokens.len() - 1].clone())
}

/// Per-run selection state built from a [`SamplingMode`].
#[derive(Debug)]
pub(crate) enum Selector {
    Rng(StdRng),
    Fixed,
}

impl Selector {
    pub(crate) fn new(mode: SamplingMode) -> Self {
        match mode {
            SamplingMode::Random { seed } => Selector::Rng(StdRng::seed_from_u64(seed)),
            SamplingMode::Fixed => Selector::Fixed,
        }
    }

    /// Pick a token from the kept subset of `step`.
    pub(crate) fn choose(&mut self, step: &Step, kept: &[Token]) -> Result<Token> {
        match self {
            Selector::Rng(rng) => weighted_choice(rng, kept),
            Selector::Fixed => {
                let word = step.selected.as_deref().ok_or_else(|| {
                    DecodeError::InvalidInput(format!(
                        "step {:?} has no pre-selected token for fixed sampling",
                        step.context
                    ))
                })?;
                kept.iter().find(|t| t.word == word).cloned().ok_or_else(|| {
                    DecodeError::InvalidInput(format!(
                        "pre-selected token {:?} is not in the kept set",
                        word
                    ))
                })
            }
        }
    }
}
