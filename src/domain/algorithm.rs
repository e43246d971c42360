//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants read the same immutable snapshot and must agree
//! cell-for-cell; they differ only in how the work is scheduled.

/// Available generation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread (reference behavior)
    #[default]
    Sequential,
    /// Per-cell work spread over the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sequential, Algorithm::Parallel]
    }

    /// Display name for the HUD
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sequential => "Sequential",
            Algorithm::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sequential => "One cell at a time, single thread",
            Algorithm::Parallel => "Cells split across rayon workers",
        }
    }

    /// The other strategy (used by the viewer's toggle key)
    pub fn next(self) -> Self {
        match self {
            Algorithm::Sequential => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Sequential,
        }
    }
}
