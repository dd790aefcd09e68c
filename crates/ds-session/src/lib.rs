pub mod cancel;
pub mod session;
pub mod state;

pub use cancel::CancelToken;
pub use session::{RunOutcome, Session};
pub use state::{Algorithm, RunState};
