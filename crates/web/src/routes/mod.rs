use axum::{Router, http::HeaderName};
use tower_http::cors::{Any, CorsLayer};

use crate::{features, middleware::session::SESSION_HEADER, state::AppState};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(SESSION_HEADER)]);

    let api = Router::new()
        .merge(features::analysis::routes::routes())
        .merge(features::sessions::routes::routes())
        .merge(features::health::routes::routes());

    Router::new()
        .nest("/api", api)
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use importer::{ImporterError, PageExtractor, ResultsSource, SwimmerImporter};
    use performance::SessionRepository;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    const RESULTS_PAGE: &str = r#"<html><body>
        <h3>USMS Individual Meet Results for Jennifer Tran (3 swims)</h3>
        <h4>Short Course Yards Results</h4>
        <table>
            <tr><th>Name</th><th>Date</th><th>Age</th><th>Club</th>
                <th>Event</th><th>Heat/Lane</th><th>Time</th><th>Place</th></tr>
            <tr><td>Jennifer Tran</td><td>2024-01-15</td><td>27</td><td>SDSM</td>
                <td>50 Free</td><td>1/4</td><td>25.10</td><td>3</td></tr>
            <tr><td>Jennifer Tran</td><td>2024-01-15</td><td>27</td><td>SDSM</td>
                <td>100 Free</td><td>2/4</td><td>55.20</td><td>5</td></tr>
            <tr><td>Jennifer Tran</td><td>2024-03-02</td><td>27</td><td>SDSM</td>
                <td>50 Free</td><td>1/3</td><td>24.90</td><td>1</td></tr>
        </table>
    </body></html>"#;

    enum Stub {
        Page(&'static str),
        Down,
    }

    #[async_trait::async_trait]
    impl ResultsSource for Stub {
        async fn fetch_page(&self, url: &str) -> importer::Result<String> {
            match self {
                Stub::Page(html) => Ok(html.to_string()),
                Stub::Down => Err(ImporterError::HttpStatus {
                    status: axum::http::StatusCode::SERVICE_UNAVAILABLE,
                    url: url.to_string(),
                }),
            }
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn app(source: Stub) -> (Router, SessionRepository) {
        let sessions = SessionRepository::new();
        let importer = SwimmerImporter::new(Arc::new(source), PageExtractor::default());
        let state = AppState::new(sessions.clone(), importer);
        (router(state), sessions)
    }

    fn request(method: Method, uri: &str, session: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(session) = session {
            builder = builder.header(SESSION_HEADER, session);
        }
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn session_header(response: &Response) -> String {
        response.headers()[SESSION_HEADER].to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app(Stub::Down);
        let response = app
            .oneshot(request(Method::GET, "/api/health", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_analyze_stores_report_in_new_session() {
        let (app, sessions) = app(Stub::Page(RESULTS_PAGE));
        let response = app
            .oneshot(request(
                Method::POST,
                "/api/analyze",
                None,
                Some(json!({ "usmsLink": "MZ99C" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let user_id = session_header(&response);
        let body = json_body(response).await;

        assert_eq!(body["userSession"]["userId"], user_id);
        assert_eq!(body["userSession"]["swimmerName"], "Jennifer Tran");
        assert_eq!(body["swimmer"]["totalEvents"], 3);
        assert_eq!(body["swimmer"]["totalMeets"], 2);
        assert_eq!(body["meetBreakdown"]["currentMeet"]["date"], "2024-03-02");
        assert!(sessions.has_report(&user_id));
        assert_eq!(sessions.total_sessions(), 1);
    }

    #[tokio::test]
    async fn test_analyze_reuses_session_header() {
        let (app, sessions) = app(Stub::Page(RESULTS_PAGE));
        let response = app
            .oneshot(request(
                Method::POST,
                "/api/analyze",
                Some("existing-session"),
                Some(json!({ "usmsLink": "https://www.usms.org/comp/meets/indresults.php?SwimmerID=MZ99C" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(session_header(&response), "existing-session");
        assert!(sessions.has_report("existing-session"));
        assert_eq!(sessions.total_sessions(), 0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_bad_links() {
        let (app, _) = app(Stub::Page(RESULTS_PAGE));

        let response = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/analyze",
                None,
                Some(json!({ "usmsLink": "" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Validation failed");

        let response = app
            .oneshot(request(
                Method::POST,
                "/api/analyze",
                None,
                Some(json!({ "usmsLink": "not a swimmer" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_empty_page_is_unprocessable() {
        let (app, sessions) = app(Stub::Page("<html><body><h3>Nothing</h3></body></html>"));
        let response = app
            .oneshot(request(
                Method::POST,
                "/api/analyze",
                Some("s1"),
                Some(json!({ "usmsLink": "MZ99C" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json_body(response).await["error"],
            "Failed to scrape USMS results"
        );
        assert!(!sessions.has_report("s1"));
    }

    #[tokio::test]
    async fn test_analyze_upstream_failure_is_bad_gateway() {
        let (app, _) = app(Stub::Down);
        let response = app
            .oneshot(request(
                Method::POST,
                "/api/analyze",
                None,
                Some(json!({ "usmsLink": "MZ99C" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let (app, _) = app(Stub::Page(RESULTS_PAGE));

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/api/session", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let user_id = session_header(&response);
        let body = json_body(response).await;
        assert_eq!(body["newSession"], true);
        assert_eq!(body["hasData"], false);

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/api/data", Some(user_id.as_str()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/analyze",
                Some(user_id.as_str()),
                Some(json!({ "usmsLink": "MZ99C" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/api/session", Some(user_id.as_str()), None))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["hasData"], true);
        assert_eq!(body["newSession"], false);
        assert_eq!(body["swimmerName"], "Jennifer Tran");

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/api/data", Some(user_id.as_str()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["swimmer"]["name"], "Jennifer Tran");

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/api/users/active", None, None))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["activeUsers"], 1);
        assert_eq!(body["totalSessions"], 1);

        let response = app
            .clone()
            .oneshot(request(Method::DELETE, "/api/session", Some(user_id.as_str()), None))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["cleared"], true);

        let response = app
            .oneshot(request(Method::GET, "/api/data", Some(user_id.as_str()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_data_requires_session_header() {
        let (app, _) = app(Stub::Down);
        let response = app
            .oneshot(request(Method::GET, "/api/data", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "No user ID provided");
    }

    #[tokio::test]
    async fn test_create_and_clear_without_session() {
        let (app, sessions) = app(Stub::Down);

        let response = app
            .clone()
            .oneshot(request(Method::POST, "/api/session", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(!session_header(&response).is_empty());
        assert_eq!(sessions.total_sessions(), 1);

        let response = app
            .oneshot(request(Method::DELETE, "/api/session", None, None))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["message"], "No session to clear");
        assert_eq!(body["cleared"], false);
    }
}
