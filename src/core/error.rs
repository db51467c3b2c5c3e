use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("degenerate step-up ratio: {reason}")]
    DegenerateRatio { reason: String },
    #[error("bucket allocations must sum to 100% (got {:.4}%)", .sum * 100.0)]
    InvalidAllocation { sum: f64 },
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PlanError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        PlanError::DegenerateRatio {
            reason: reason.into(),
        }
    }
}
