use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use performance::dto::{
    report::AnalysisReport,
    session::{ActiveUsersResponse, ClearSessionResponse, SessionResponse},
};

use crate::{
    error::WebError,
    middleware::session::{SESSION_HEADER, SessionId},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/session",
    params(
        ("x-user-id" = Option<String>, Header, description = "Session id; a new one is issued when absent")
    ),
    responses(
        (status = 200, description = "Session state", body = SessionResponse)
    ),
    tag = "sessions"
)]
pub async fn get_session(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Response, WebError> {
    let response = match session_id {
        Some(user_id) => state
            .sessions
            .session_info(&user_id)
            .map(SessionResponse::from)
            .unwrap_or_else(|_| SessionResponse::empty(user_id, false)),
        None => SessionResponse::empty(state.sessions.create_session(), true),
    };

    Ok(([(SESSION_HEADER, response.user_id.clone())], Json(response)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/session",
    responses(
        (status = 201, description = "New session issued", body = SessionResponse)
    ),
    tag = "sessions"
)]
pub async fn create_session(State(state): State<AppState>) -> Result<Response, WebError> {
    let user_id = state.sessions.create_session();
    tracing::debug!("Issued session {}", user_id);

    Ok((
        StatusCode::CREATED,
        [(SESSION_HEADER, user_id.clone())],
        Json(SessionResponse::empty(user_id, true)),
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/session",
    params(
        ("x-user-id" = Option<String>, Header, description = "Session to clear")
    ),
    responses(
        (status = 200, description = "Stored report dropped", body = ClearSessionResponse)
    ),
    tag = "sessions"
)]
pub async fn clear_session(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Response, WebError> {
    let response = match session_id {
        Some(user_id) => ClearSessionResponse {
            message: "Session cleared successfully".to_string(),
            cleared: state.sessions.clear(&user_id),
        },
        None => ClearSessionResponse {
            message: "No session to clear".to_string(),
            cleared: false,
        },
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/data",
    params(
        ("x-user-id" = String, Header, description = "Session holding the report")
    ),
    responses(
        (status = 200, description = "Report stored for the session", body = AnalysisReport),
        (status = 400, description = "No session id sent"),
        (status = 404, description = "No report stored for the session")
    ),
    tag = "sessions"
)]
pub async fn get_data(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Response, WebError> {
    let user_id =
        session_id.ok_or_else(|| WebError::BadRequest("No user ID provided".to_string()))?;

    let report = state.sessions.get_report(&user_id)?;

    Ok(Json(report.as_ref()).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/active",
    responses(
        (status = 200, description = "Session counts", body = ActiveUsersResponse)
    ),
    tag = "sessions"
)]
pub async fn active_users(State(state): State<AppState>) -> Result<Response, WebError> {
    Ok(Json(ActiveUsersResponse {
        active_users: state.sessions.active_sessions(),
        total_sessions: state.sessions.total_sessions(),
    })
    .into_response())
}
