use anyhow::Context;
use importer::{PageExtractor, SwimmerImporter, UsmsClient};
use performance::SessionRepository;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::analysis::handlers::analyze,
        features::sessions::handlers::get_session,
        features::sessions::handlers::create_session,
        features::sessions::handlers::clear_session,
        features::sessions::handlers::get_data,
        features::sessions::handlers::active_users,
        features::health::handlers::health,
    ),
    components(
        schemas(
            performance::dto::session::AnalyzeRequest,
            performance::dto::session::AnalyzeResponse,
            performance::dto::session::UserSession,
            performance::dto::session::SessionResponse,
            performance::dto::session::ClearSessionResponse,
            performance::dto::session::ActiveUsersResponse,
            performance::dto::report::AnalysisReport,
            performance::dto::report::SwimmerPerformance,
            performance::dto::report::PerformanceData,
            performance::dto::report::BestTime,
            performance::dto::report::PerformanceTrend,
            performance::dto::report::MeetBreakdown,
            performance::dto::report::MeetData,
            performance::dto::report::MeetResult,
            performance::dto::report::Improvement,
            performance::dto::report::AgeGroupImprovement,
            performance::dto::report::PersonalBests,
            performance::dto::report::ClubInfo,
            performance::dto::report::PerformanceSummary,
            performance::dto::report::PerformanceInsights,
            performance::models::CourseType,
            features::health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "analysis", description = "Swimmer analysis endpoints"),
        (name = "sessions", description = "Session and stored report endpoints"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting swim performance API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let client = UsmsClient::with_options(&config.user_agent, config.request_timeout)
        .context("Failed to build USMS client")?;
    let importer = SwimmerImporter::new(Arc::new(client), PageExtractor::new(config.time_bounds));
    let state = AppState::new(SessionRepository::new(), importer);

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app).await?;

    Ok(())
}
