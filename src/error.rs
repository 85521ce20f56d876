use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    /// Rejected eagerly at construction, before any frame is processed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Detector capability failed; the run is aborted, not retried.
    #[error("detector failure: {0}")]
    Detector(#[source] BoxedError),

    /// Short-term tracker capability failed; the run is aborted.
    #[error("short-term tracker failure: {0}")]
    ShortTermTracker(#[source] BoxedError),
}

impl Error {
    pub fn detector(err: impl Into<BoxedError>) -> Self {
        Error::Detector(err.into())
    }

    pub fn short_term_tracker(err: impl Into<BoxedError>) -> Self {
        Error::ShortTermTracker(err.into())
    }
}
