/// The four decoding strategies a session can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Greedy,
    Beam,
    Nucleus,
    TopK,
}

pub(crate) const ALGORITHM_COUNT: usize = 4;

impl Algorithm {
    pub(crate) fn index(self) -> usize {
        match self {
            Algorithm::Greedy => 0,
            Algorithm::Beam => 1,
            Algorithm::Nucleus => 2,
            Algorithm::TopK => 3,
        }
    }
}

/// Per-algorithm run state owned by a [`crate::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}
