use crate::token::Token;

/// One decoding position: a context label plus the next-token distribution.
///
/// Steps are created fully formed at fixture definition time and never
/// mutated. Their order in a fixture is the generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Human-readable context shown alongside this position.
    pub context: String,
    /// Next-token candidates, in fixture order.
    pub tokens: Vec<Token>,
    /// Pre-chosen demo token, used by fixed sampling mode so that an
    /// animated run produces a coherent sentence.
    pub selected: Option<String>,
}

impl Step {
    pub fn new(context: impl Into<String>, tokens: Vec<Token>) -> Self {
        Step {
            context: context.into(),
            tokens,
            selected: None,
        }
    }

    /// Attach the pre-selected token for fixed sampling mode.
    pub fn with_selected(mut self, word: impl Into<String>) -> Self {
        self.selected = Some(word.into());
        self
    }
}
