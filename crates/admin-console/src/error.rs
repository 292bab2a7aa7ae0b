//! Console error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Connection failure, or a reply body that is not the expected JSON
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid gateway URL: {0}")]
    InvalidUrl(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
