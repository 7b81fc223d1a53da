use std::fmt;

/// Invalid-parameter conditions for trials and sweeps. These abort the
/// computation immediately; a malformed input cannot succeed on retry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// Candidate pool size was zero.
    EmptyPool,
    /// Skip count exceeds the pool size.
    SkipOutOfRange { skip: usize, n: usize },
    /// Iteration count was zero.
    ZeroIterations,
    /// The sweep was given no fractions to evaluate.
    EmptyFractions,
    /// A rejection fraction fell outside `[0, 1]`.
    FractionOutOfRange(f64),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "candidate pool size must be positive"),
            Self::SkipOutOfRange { skip, n } => {
                write!(f, "skip count {skip} is outside [0, {n}]")
            }
            Self::ZeroIterations => write!(f, "iteration count must be positive"),
            Self::EmptyFractions => write!(f, "at least one rejection fraction is required"),
            Self::FractionOutOfRange(fraction) => {
                write!(f, "rejection fraction {fraction} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for SimError {}
