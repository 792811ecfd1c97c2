use axum::{Router, routing::get};

use super::handlers::{active_users, clear_session, create_session, get_data, get_session};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/session",
            get(get_session).post(create_session).delete(clear_session),
        )
        .route("/data", get(get_data))
        .route("/users/active", get(active_users))
}
