use thiserror::Error;

/// Failures at the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,

    #[error("reading reviews failed: {0}")]
    Read(String),

    #[error("stored reviews could not be parsed: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("reviews could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("writing reviews failed: {0}")]
    Write(String),
}

/// A form that cannot become a review yet. Messages are shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please write a short review.")]
    MissingComment,

    #[error("Please choose a rating.")]
    MissingRating,
}

/// Why `submit` did not start a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("a review is already being posted")]
    AlreadyPending,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
