/// A vocabulary word paired with its probability at one decoding position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub word: String,
    /// Raw probability in [0, 1] as given by the fixture.
    pub probability: f64,
}

impl Token {
    pub fn new(word: impl Into<String>, probability: f64) -> Self {
        Token {
            word: word.into(),
            probability,
        }
    }
}

/// A vocabulary word scored in the log domain, as beam search consumes it.
///
/// Log-probabilities add across steps, avoiding the underflow that
/// multiplying raw probabilities would produce.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamToken {
    pub word: String,
    pub log_prob: f64,
}

impl BeamToken {
    pub fn new(word: impl Into<String>, log_prob: f64) -> Self {
        BeamToken {
            word: word.into(),
            log_prob,
        }
    }
}
