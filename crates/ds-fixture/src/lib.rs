pub mod beam;
pub mod demo;
pub mod step;
pub mod token;

pub use beam::BeamFixture;
pub use step::Step;
pub use token::{BeamToken, Token};
