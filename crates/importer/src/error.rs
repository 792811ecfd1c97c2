use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("HTTP error {status}: {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid swimmer locator: {0}")]
    InvalidLocator(String),
}

impl ImporterError {
    /// True for failures reaching or reading from the results site.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ImporterError::RequestError(_) | ImporterError::HttpStatus { .. }
        )
    }
}
