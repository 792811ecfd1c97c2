use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use importer::SwimmerLocator;
use performance::dto::session::{AnalyzeRequest, AnalyzeResponse};
use validator::Validate;

use crate::{
    error::WebError,
    middleware::session::{SESSION_HEADER, SessionId},
    state::AppState,
};

use super::services;

#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    params(
        ("x-user-id" = Option<String>, Header, description = "Session id; a new one is issued when absent")
    ),
    responses(
        (status = 200, description = "Swimmer analyzed and stored in the session", body = AnalyzeResponse),
        (status = 400, description = "Missing or invalid USMS link"),
        (status = 422, description = "The page held no results"),
        (status = 502, description = "USMS could not be reached")
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let locator = SwimmerLocator::parse(&req.usms_link)?;
    let user_id = session_id.unwrap_or_else(|| state.sessions.create_session());

    let response =
        services::analyze_swimmer(&state.importer, &state.sessions, &user_id, &locator).await?;

    Ok(([(SESSION_HEADER, user_id)], Json(response)).into_response())
}
