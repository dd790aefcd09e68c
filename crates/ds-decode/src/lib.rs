pub mod beam;
pub mod error;
pub mod greedy;
pub mod nucleus;
pub mod rank;
pub mod sample;
pub mod top_k;
pub mod trace;

mod validate;

pub use beam::BeamRun;
pub use error::{DecodeError, Result};
pub use greedy::GreedyRun;
pub use nucleus::NucleusRun;
pub use rank::rank_by;
pub use sample::{weighted_choice, SamplingMode};
pub use top_k::TopKRun;
pub use trace::{BeamTrace, Candidate, RankedToken, StepTrace};
