use ds_fixture::Step;

use crate::error::{DecodeError, Result};

/// Check a step fixture before a run starts: the step list and every
/// per-step token list must be non-empty, and probabilities must be finite
/// values in [0, 1].
pub(crate) fn validate_steps(steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return Err(DecodeError::InvalidInput("empty step list".into()));
    }
    for (i, step) in steps.iter().enumerate() {
        if step.tokens.is_empty() {
            return Err(DecodeError::InvalidInput(format!(
                "step {} ({:?}) has no tokens",
                i, step.context
            )));
        }
        for token in &step.tokens {
            if !token.probability.is_finite() || !(0.0..=1.0).contains(&token.probability) {
                return Err(DecodeError::InvalidInput(format!(
                    "step {} token {:?} has probability {} outside [0, 1]",
                    i, token.word, token.probability
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_fixture::Token;

    #[test]
    fn test_empty_step_list_rejected() {
        assert!(validate_steps(&[]).is_err());
    }

    #[test]
    fn test_empty_token_list_rejected() {
        let steps = vec![Step::new("the", vec![])];
        assert!(validate_steps(&steps).is_err());
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        let steps = vec![Step::new("the", vec![Token::new("mat", 1.5)])];
        assert!(validate_steps(&steps).is_err());
    }

    #[test]
    fn test_valid_steps_accepted() {
        let steps = vec![Step::new("the", vec![Token::new("mat", 0.9)])];
        assert!(validate_steps(&steps).is_ok());
    }
}
