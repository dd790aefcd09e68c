use crate::step::Step;
use crate::token::BeamToken;

/// Input data for one beam-search run.
///
/// `initial` is the distribution expanded at step 0. For every later step,
/// `expansions[step - 1][slot]` is the next-token distribution for the beam
/// that occupied `slot` in the beam set after the previous pruning pass.
/// Keying expansions by beam slot models context-dependent distributions
/// per retained sequence; it is intentionally not a shared vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamFixture {
    pub initial: Vec<BeamToken>,
    pub expansions: Vec<Vec<Vec<BeamToken>>>,
}

impl BeamFixture {
    pub fn new(initial: Vec<BeamToken>, expansions: Vec<Vec<Vec<BeamToken>>>) -> Self {
        BeamFixture {
            initial,
            expansions,
        }
    }

    /// Total number of decoding steps (the initial expansion plus one per
    /// expansion table).
    pub fn num_steps(&self) -> usize {
        1 + self.expansions.len()
    }

    /// Build a fixture from per-step shared distributions, for the general
    /// form of the demo where every beam expands over the same tokens.
    ///
    /// Probabilities are mapped into the log domain with `ln`. Each
    /// expansion table repeats the step's token list once per beam slot, so
    /// any beam set up to `width` wide finds its entry.
    pub fn from_steps(steps: &[Step], width: usize) -> Self {
        let to_log = |step: &Step| -> Vec<BeamToken> {
            step.tokens
                .iter()
                .map(|t| BeamToken::new(t.word.clone(), t.probability.ln()))
                .collect()
        };

        let initial = steps.first().map(&to_log).unwrap_or_default();
        let expansions = steps
            .iter()
            .skip(1)
            .map(|step| vec![to_log(step); width])
            .collect();

        BeamFixture {
            initial,
            expansions,
        }
    }
}
