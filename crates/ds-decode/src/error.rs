use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("beam search produced no candidates at step {step}")]
    EmptyCandidateSet { step: usize },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
