//! The bundled demo datasets: a four-position sampling fixture continuing
//! "The cat sat on the", and a small log-probability fixture for beam
//! search starting from `<BOS>`.

use crate::beam::BeamFixture;
use crate::step::Step;
use crate::token::{BeamToken, Token};

/// Prompt shown before any generated token.
pub const PROMPT: &str = "The cat sat on the";

/// The four-step sampling fixture. Each step carries a pre-selected token
/// so fixed sampling mode yields a coherent sentence
/// ("windowsill and watched the birds outside contentedly").
pub fn sample_steps() -> Vec<Step> {
    vec![
        Step::new(
            "The cat sat on the",
            vec![
                Token::new("mat", 0.45),
                Token::new("windowsill", 0.25),
                Token::new("chair", 0.15),
                Token::new("table", 0.08),
                Token::new("bed", 0.04),
                Token::new("couch", 0.02),
                Token::new("rug", 0.01),
            ],
        )
        .with_selected("windowsill"),
        Step::new(
            "and",
            vec![
                Token::new("watched", 0.38),
                Token::new("observed", 0.22),
                Token::new("stared", 0.18),
                Token::new("gazed", 0.12),
                Token::new("looked", 0.06),
                Token::new("saw", 0.03),
                Token::new("noticed", 0.01),
            ],
        )
        .with_selected("watched"),
        Step::new(
            "the",
            vec![
                Token::new("birds", 0.42),
                Token::new("squirrels", 0.28),
                Token::new("clouds", 0.15),
                Token::new("trees", 0.08),
                Token::new("people", 0.04),
                Token::new("cars", 0.02),
                Token::new("children", 0.01),
            ],
        )
        .with_selected("birds"),
        Step::new(
            "outside",
            vec![
                Token::new("peacefully", 0.35),
                Token::new("quietly", 0.30),
                Token::new("contentedly", 0.20),
                Token::new("calmly", 0.10),
                Token::new("lazily", 0.03),
                Token::new("serenely", 0.01),
                Token::new("silently", 0.01),
            ],
        )
        .with_selected("contentedly"),
    ]
}

/// The beam-search fixture: an initial distribution from `<BOS>` and two
/// rounds of expansions keyed by beam slot. Scores are log-probabilities.
pub fn beam_fixture() -> BeamFixture {
    BeamFixture::new(
        vec![
            BeamToken::new("I", -0.1),
            BeamToken::new("You", -0.4),
            BeamToken::new("We", -0.6),
            BeamToken::new("They", -1.2),
            BeamToken::new("She", -1.5),
        ],
        vec![
            vec![
                // from "I" (-0.1)
                vec![
                    BeamToken::new("am", -0.2),
                    BeamToken::new("like", -0.5),
                    BeamToken::new("will", -0.7),
                ],
                // from "You" (-0.4)
                vec![
                    BeamToken::new("are", -0.1),
                    BeamToken::new("can", -0.3),
                    BeamToken::new("will", -0.6),
                ],
                // from "We" (-0.6)
                vec![
                    BeamToken::new("are", -0.2),
                    BeamToken::new("can", -0.1),
                    BeamToken::new("will", -0.4),
                ],
            ],
            vec![
                // from "I am" (-0.3)
                vec![
                    BeamToken::new("happy", -0.2),
                    BeamToken::new("done", -0.4),
                    BeamToken::new("here", -0.6),
                ],
                // from "You are" (-0.5)
                vec![
                    BeamToken::new("right", -0.1),
                    BeamToken::new("here", -0.3),
                    BeamToken::new("done", -0.5),
                ],
                // from "I like" (-0.6)
                vec![
                    BeamToken::new("it", -0.1),
                    BeamToken::new("this", -0.2),
                    BeamToken::new("apples", -0.4),
                ],
            ],
        ],
    )
}
