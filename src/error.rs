use thiserror::Error;

/// Failure modes surfaced by the summarization core.
///
/// `EmptyResult` from the design notes has no variant here: an input that
/// filters down to zero non-empty transactions is not an error, it is a
/// valid `Summary` with an all-zero salience vector (see
/// [`crate::matrix::build_incidence_matrix`]).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidInput(String),

    #[error("singular value decomposition failed to converge: {0}")]
    NumericFailure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
