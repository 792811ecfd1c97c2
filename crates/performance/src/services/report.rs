use crate::dto::report::{AnalysisReport, PerformanceData, SwimmerPerformance};
use crate::models::ScrapedData;
use crate::services::analyzer;

/// Builds the full report for a scraped page.
///
/// Returns `None` when the page produced no results; every sub-computation
/// below can then assume a non-empty slice.
pub fn analyze_performance(data: &ScrapedData) -> Option<AnalysisReport> {
    let results = data.results.as_slice();
    if results.is_empty() {
        return None;
    }

    let best_times = analyzer::find_best_times(results);
    let summary = analyzer::summarize(results);

    Some(AnalysisReport {
        swimmer: SwimmerPerformance {
            name: data.swimmer.name.clone(),
            age: data.swimmer.age,
            total_meets: analyzer::count_unique_meets(results),
            total_events: summary.total_events,
        },
        performance: PerformanceData {
            best_times,
            recent_times: analyzer::create_performance_trends(results),
        },
        meet_breakdown: analyzer::generate_meet_breakdown(results),
        personal_bests: analyzer::generate_personal_bests(results),
        clubs: analyzer::generate_clubs_data(results),
        summary,
        insights: analyzer::generate_insights(results),
        event_distribution: analyzer::calculate_event_distribution(results),
    })
}
