use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown disorder: {0}")]
    UnknownDisorder(String),

    #[error("unknown anion gap status: {0}")]
    UnknownAnionGapStatus(String),

    #[error("unknown chronicity: {0}")]
    UnknownChronicity(String),
}
