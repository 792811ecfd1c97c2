use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::report::AnalysisReport;

/// Session attached to an analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: String,
    pub swimmer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub user_id: String,
    pub has_data: bool,
    pub swimmer_name: String,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUsersResponse {
    pub active_users: usize,
    pub total_sessions: u64,
}

/// Request payload for analyzing a swimmer
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Full results URL or a swimmer id such as "MZ99C"
    #[validate(length(min = 1, message = "USMS link is required"))]
    pub usms_link: String,
}

/// Current state of the caller's session.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
    pub has_data: bool,
    pub swimmer_name: Option<String>,
    pub stored_at: Option<DateTime<Utc>>,
    /// The id was issued by this request
    pub new_session: bool,
}

impl SessionResponse {
    pub fn empty(user_id: String, new_session: bool) -> Self {
        Self {
            user_id,
            has_data: false,
            swimmer_name: None,
            stored_at: None,
            new_session,
        }
    }
}

impl From<SessionInfo> for SessionResponse {
    fn from(info: SessionInfo) -> Self {
        Self {
            user_id: info.user_id,
            has_data: info.has_data,
            swimmer_name: Some(info.swimmer_name),
            stored_at: Some(info.stored_at),
            new_session: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearSessionResponse {
    pub message: String,
    pub cleared: bool,
}

/// Analysis report plus the session it was stored under.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: Arc<AnalysisReport>,
    pub user_session: UserSession,
}
