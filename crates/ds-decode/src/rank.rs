use crate::error::{DecodeError, Result};

/// Sort a slice descending by an f64 key, returning a new vector.
///
/// The sort is stable, so items with equal keys keep their original input
/// order; that is the tie-break rule for every strategy in this crate.
/// Incomparable keys (NaN) compare as equal rather than panicking.
///
/// Returns `InvalidInput` for an empty slice: every caller expects at least
/// one ranked item to select from.
pub fn rank_by<T, F>(items: &[T], key: F) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(DecodeError::InvalidInput(
            "cannot rank an empty token set".into(),
        ));
    }

    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_fixture::Token;

    #[test]
    fn test_rank_descending() {
        let tokens = vec![
            Token::new("table", 0.08),
            Token::new("mat", 0.45),
            Token::new("floor", 0.25),
        ];
        let ranked = rank_by(&tokens, |t| t.probability).unwrap();
        let words: Vec<&str> = ranked.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, ["mat", "floor", "table"]);
    }

    #[test]
    fn test_rank_is_permutation() {
        let tokens = vec![
            Token::new("a", 0.2),
            Token::new("b", 0.5),
            Token::new("c", 0.3),
        ];
        let ranked = rank_by(&tokens, |t| t.probability).unwrap();
        assert_eq!(ranked.len(), tokens.len());
        for token in &tokens {
            assert!(ranked.contains(token));
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let tokens = vec![
            Token::new("first", 0.3),
            Token::new("second", 0.3),
            Token::new("third", 0.4),
        ];
        let ranked = rank_by(&tokens, |t| t.probability).unwrap();
        let words: Vec<&str> = ranked.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, ["third", "first", "second"]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let tokens: Vec<Token> = vec![];
        assert!(rank_by(&tokens, |t| t.probability).is_err());
    }
}
