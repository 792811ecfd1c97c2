use importer::{SwimmerImporter, SwimmerLocator};
use performance::{
    SessionRepository, analyze_performance,
    dto::session::{AnalyzeResponse, UserSession},
};

use crate::error::{WebError, WebResult};

/// Scrape, analyze and store the report under `user_id`.
pub async fn analyze_swimmer(
    importer: &SwimmerImporter,
    sessions: &SessionRepository,
    user_id: &str,
    locator: &SwimmerLocator,
) -> WebResult<AnalyzeResponse> {
    let data = importer
        .scrape(locator)
        .await?
        .ok_or_else(|| WebError::NoData("Failed to scrape USMS results".to_string()))?;

    let report = analyze_performance(&data)
        .ok_or_else(|| WebError::NoData("Failed to analyze performance data".to_string()))?;

    let report = sessions.store_report(user_id, report);
    tracing::info!(
        "Stored report for {} ({} events) in session {}",
        report.swimmer.name,
        report.summary.total_events,
        user_id
    );

    Ok(AnalyzeResponse {
        user_session: UserSession {
            user_id: user_id.to_string(),
            swimmer_name: report.swimmer.name.clone(),
        },
        report,
    })
}
