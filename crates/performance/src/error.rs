use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerformanceError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid course type: {0}")]
    InvalidCourseType(String),
}

pub type Result<T> = std::result::Result<T, PerformanceError>;

impl PerformanceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PerformanceError::NotFound)
    }
}
