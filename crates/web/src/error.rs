use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use importer::ImporterError;
use performance::PerformanceError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Performance(PerformanceError),
    Importer(ImporterError),
    Validation(ValidationErrors),
    BadRequest(String),
    /// The page was fetched but yielded nothing to analyze
    NoData(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Performance(e) => write!(f, "Performance error: {}", e),
            Self::Importer(e) => write!(f, "Importer error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NoData(msg) => write!(f, "No data: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Performance(PerformanceError::NotFound) => StatusCode::NOT_FOUND,
            Self::Performance(PerformanceError::InvalidCourseType(_)) => StatusCode::BAD_REQUEST,
            Self::Importer(ImporterError::InvalidLocator(_)) => StatusCode::BAD_REQUEST,
            Self::Importer(e) if e.is_transport() => StatusCode::BAD_GATEWAY,
            Self::Importer(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NoData(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = match &self {
            Self::Performance(PerformanceError::NotFound) => {
                json!({
                    "error": "No data found for user"
                })
            }
            Self::Performance(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Importer(ImporterError::InvalidLocator(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Importer(e) if e.is_transport() => {
                tracing::warn!("Failed to fetch results page: {}", e);
                json!({
                    "error": "Failed to fetch USMS results"
                })
            }
            Self::Importer(e) => {
                tracing::error!("Importer error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) | Self::NoData(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<PerformanceError> for WebError {
    fn from(error: PerformanceError) -> Self {
        Self::Performance(error)
    }
}

impl From<ImporterError> for WebError {
    fn from(error: ImporterError) -> Self {
        Self::Importer(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
