//! Error type shared by catalog construction, the simulation run, and report export.

/// Errors raised by the simulator.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("configuration has no lanes")]
    EmptyConfig,
    #[error("lane {lane} is outside {min}..={max}", min = crate::constants::MIN_LANE, max = crate::constants::MAX_LANE)]
    LaneOutOfRange { lane: u8 },
    #[error("lane {lane} listed more than once")]
    DuplicateLane { lane: u8 },
    #[error("configuration {config} matches every roll, so a trial never ends")]
    NeverMisses { config: String },
    #[error("catalog has no configurations")]
    EmptyCatalog,
    #[error("trial count must be positive")]
    NoTrials,
    #[error("worker for configuration {config} panicked: {message}")]
    WorkerPanicked { config: String, message: String },
    #[error("simulation cancelled")]
    Cancelled,
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
