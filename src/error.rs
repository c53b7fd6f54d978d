use thiserror::Error;

/// The shape an input failed to have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("input `{input}` is not sorted ascending: element {index} is smaller than its predecessor")]
    NotSorted { input: &'static str, index: usize },

    #[error("input is not partitioned: element {index} satisfies the predicate after one that does not")]
    NotPartitioned { index: usize },

    #[error("destination holds {available} elements but {required} are required")]
    DestinationTooSmall { required: usize, available: usize },

    #[error("cannot generate {count} elements into a sequence of length {len}")]
    CountExceedsLength { count: usize, len: usize },

    #[error("range {start}..{end} is not within a sequence of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

/// Errors returned by the checked algorithms.
///
/// Every failure is a programmer error: the caller handed over input that
/// does not meet the operation's precondition. Nothing is written before the
/// check, so buffers are untouched when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgorithmError {
    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] Violation),
}

impl AlgorithmError {
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, AlgorithmError::PreconditionViolation(_))
    }

    pub fn violation(&self) -> &Violation {
        match self {
            AlgorithmError::PreconditionViolation(v) => v,
        }
    }
}

pub type Result<T, E = AlgorithmError> = std::result::Result<T, E>;
