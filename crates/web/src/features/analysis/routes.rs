use axum::{Router, routing::post};

use super::handlers::analyze;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}
