//! Trace records handed to the rendering layer.
//!
//! Each record carries everything a renderer needs to reproduce one step of
//! an animation without re-deriving algorithmic state: the full ranked
//! list, the kept/excluded partition, cumulative probabilities where the
//! strategy computes them, the chosen token or sequences, and per-word
//! origin indices for beam coloring.

use ds_fixture::Token;

/// One token as it appears in a ranked list, with its selection status.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedToken {
    pub word: String,
    pub probability: f64,
    /// Whether the token survived the strategy's restriction (nucleus,
    /// top-k, or top-1 for greedy).
    pub kept: bool,
    /// Running probability total at this rank, present for nucleus members.
    pub cumulative: Option<f64>,
}

/// Per-step output of greedy, nucleus, and top-k runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StepTrace {
    pub step_index: usize,
    pub context: String,
    /// All of the step's tokens, probability-descending.
    pub ranked: Vec<RankedToken>,
    pub chosen: Token,
    /// The chosen token's raw (unrenormalized) probability.
    pub score: f64,
}

impl StepTrace {
    /// The tokens that survived the restriction, in rank order.
    pub fn kept(&self) -> impl Iterator<Item = &RankedToken> {
        self.ranked.iter().filter(|t| t.kept)
    }

    /// The tokens excluded by the restriction, in rank order.
    pub fn excluded(&self) -> impl Iterator<Item = &RankedToken> {
        self.ranked.iter().filter(|t| !t.kept)
    }
}

/// One candidate sequence during beam search.
///
/// `origins[i]` is the beam slot that produced `words[i]`, so a renderer
/// can color every word by the beam it came from. Candidates are built
/// fresh at each expansion and replaced, never mutated, by pruning.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub words: Vec<String>,
    pub origins: Vec<usize>,
    /// Sum of the sequence's log-probabilities.
    pub cumulative_score: f64,
    /// Beam slot of the parent this candidate extended (its own rank at
    /// step 0).
    pub origin_beam: usize,
    /// Log-probability of the newest word alone.
    pub last_log_prob: f64,
}

impl Candidate {
    /// The sequence as a space-joined string.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Per-step output of a beam-search run.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamTrace {
    pub step_index: usize,
    /// Every candidate generated this step, score-descending.
    pub candidates: Vec<Candidate>,
    /// Length of the prefix of `candidates` retained as the new beam set.
    pub retained: usize,
}

impl BeamTrace {
    /// The beam set after pruning, best-first.
    pub fn beam_set(&self) -> &[Candidate] {
        &self.candidates[..self.retained]
    }

    /// The candidates pruned away this step, score-descending.
    pub fn pruned(&self) -> &[Candidate] {
        &self.candidates[self.retained..]
    }
}
